//! Flyweight: thousands of trees share a handful of `TreeType`s that hold
//! the heavy intrinsic state; each tree keeps only its coordinates.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow,
    Black,
    Green,
    Red,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Yellow => "yellow",
            Color::Black => "black",
            Color::Green => "green",
            Color::Red => "red",
        };
        f.write_str(name)
    }
}

/// Shared intrinsic state.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TreeType {
    pub name: String,
    pub color: Color,
    pub texture: String,
}

impl TreeType {
    pub fn draw(&self, console: &Console, x: i32, y: i32) {
        console.say(format!(
            "Drawing {} {} {} at ({x}, {y})",
            self.name, self.texture, self.color
        ));
    }
}

/// Context: extrinsic state plus a handle to the flyweight.
#[derive(Debug, Clone)]
pub struct Tree {
    x: i32,
    y: i32,
    kind: Rc<TreeType>,
}

impl Tree {
    pub fn draw(&self, console: &Console) {
        self.kind.draw(console, self.x, self.y);
    }

    pub fn kind(&self) -> &Rc<TreeType> {
        &self.kind
    }
}

type TreeKey = (String, Color, String);

/// Hands out an existing flyweight when all intrinsic fields match.
#[derive(Debug, Default)]
pub struct TreeFactory {
    types: HashMap<TreeKey, Rc<TreeType>>,
}

impl TreeFactory {
    pub fn tree_type(&mut self, name: &str, color: Color, texture: &str) -> Rc<TreeType> {
        let key = (name.to_string(), color, texture.to_string());
        let shared = self.types.entry(key).or_insert_with(|| {
            debug!(name, %color, texture, "creating tree type");
            Rc::new(TreeType {
                name: name.to_string(),
                color,
                texture: texture.to_string(),
            })
        });
        Rc::clone(shared)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Forest {
    trees: Vec<Tree>,
    factory: TreeFactory,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plant_tree(&mut self, x: i32, y: i32, name: &str, color: Color, texture: &str) {
        let kind = self.factory.tree_type(name, color, texture);
        self.trees.push(Tree { x, y, kind });
    }

    pub fn paint(&self, console: &Console) {
        for tree in &self.trees {
            tree.draw(console);
        }
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn tree_type_count(&self) -> usize {
        self.factory.len()
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let mut forest = Forest::new();
    forest.plant_tree(3, 4, "Haworthia", Color::Yellow, "Cymbiformis");
    forest.plant_tree(6, 7, "Echeveria", Color::Black, "Black Prince");
    forest.plant_tree(10, 11, "Portulaca", Color::Green, "Molokiniensis");
    forest.plant_tree(12, 2, "Haworthia", Color::Yellow, "Cymbiformis");

    forest.paint(console);
    console.say(format!(
        "{} trees share {} tree types",
        forest.tree_count(),
        forest.tree_type_count()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_intrinsic_state_is_shared() {
        let mut factory = TreeFactory::default();
        let a = factory.tree_type("Oak", Color::Green, "rough");
        let b = factory.tree_type("Oak", Color::Green, "rough");

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_any_differing_field_creates_new_type() {
        let mut factory = TreeFactory::default();
        let base = factory.tree_type("Oak", Color::Green, "rough");
        let other_color = factory.tree_type("Oak", Color::Red, "rough");
        let other_texture = factory.tree_type("Oak", Color::Green, "smooth");
        let other_name = factory.tree_type("Elm", Color::Green, "rough");

        assert!(!Rc::ptr_eq(&base, &other_color));
        assert!(!Rc::ptr_eq(&base, &other_texture));
        assert!(!Rc::ptr_eq(&base, &other_name));
        assert_eq!(factory.len(), 4);
    }

    #[test]
    fn test_many_trees_few_types() {
        let mut forest = Forest::new();
        for i in 0..1000 {
            let (name, color) = if i % 2 == 0 {
                ("Pine", Color::Green)
            } else {
                ("Birch", Color::Yellow)
            };
            forest.plant_tree(i, i, name, color, "bark");
        }

        assert_eq!(forest.tree_count(), 1000);
        assert_eq!(forest.tree_type_count(), 2);
        // Factory plus 500 trees hold each type.
        assert_eq!(Rc::strong_count(forest.trees()[0].kind()), 501);
    }

    #[test]
    fn test_paint_draws_in_planting_order() {
        let console = Console::recording();
        let mut forest = Forest::new();
        forest.plant_tree(1, 2, "Fir", Color::Green, "needles");
        forest.plant_tree(3, 4, "Fir", Color::Green, "needles");
        forest.paint(&console);

        assert_eq!(
            console.lines(),
            vec![
                "Drawing Fir needles green at (1, 2)",
                "Drawing Fir needles green at (3, 4)",
            ]
        );
    }

    #[test]
    fn test_demo_output() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        assert_eq!(console.lines()[0], "Drawing Haworthia Cymbiformis yellow at (3, 4)");
        assert_eq!(console.last().as_deref(), Some("4 trees share 3 tree types"));
    }
}
