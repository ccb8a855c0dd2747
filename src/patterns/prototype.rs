//! Prototype: load the expensive catalog once, then clone the shop instead
//! of loading again. Clones own their books outright.

use std::fmt;

use itertools::Itertools;

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

pub const NUM_BOOKS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: usize,
    pub name: String,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookShop {
    pub name: String,
    pub books: Vec<Book>,
    loads: usize,
}

impl BookShop {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
            loads: 0,
        }
    }

    /// Stands in for a slow database fetch.
    pub fn load_books(&mut self) {
        self.books = (0..NUM_BOOKS)
            .map(|id| Book {
                id,
                name: format!("Book {id}"),
            })
            .collect();
        self.loads += 1;
    }

    /// How many times this shop hit the "database".
    pub fn loads(&self) -> usize {
        self.loads
    }
}

impl fmt::Display for BookShop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.books.iter().join(", "))
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let mut shop1 = BookShop::new("Book Depot");
    shop1.load_books();
    console.say(format!("BookShop1: {shop1}"));

    let mut shop2 = shop1.clone();
    console.say(format!("BookShop2: {shop2}"));

    shop2.books.remove(0);
    console.say("After removing first book from BookShop2");
    console.say(format!("BookShop1: {shop1}"));
    console.say(format!("BookShop2: {shop2}"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_books() {
        let mut shop = BookShop::new("Corner");
        shop.load_books();
        assert_eq!(shop.books.len(), NUM_BOOKS);
        assert_eq!(
            shop.books[3],
            Book {
                id: 3,
                name: "Book 3".to_string()
            }
        );
    }

    #[test]
    fn test_clone_does_not_reload() {
        let mut shop = BookShop::new("Corner");
        shop.load_books();
        let copy = shop.clone();
        assert_eq!(copy, shop);
        assert_eq!(copy.loads(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = BookShop::new("Corner");
        original.load_books();
        let mut copy = original.clone();

        copy.books.remove(0);
        copy.books[0].name = "Renamed".to_string();

        assert_eq!(original.books.len(), NUM_BOOKS);
        assert_eq!(original.books[1].name, "Book 1");
        assert_eq!(copy.books.len(), NUM_BOOKS - 1);
    }

    #[test]
    fn test_demo_output() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        let lines = console.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[3].starts_with("BookShop1: Book Depot [#0 Book 0"));
        assert!(lines[4].starts_with("BookShop2: Book Depot [#1 Book 1"));
    }
}
