//! Visitor: new operations over a stable hierarchy go into visitor types,
//! and `accept` performs the second dispatch.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// Adding an operation means editing the trait and every implementor.
pub mod problem {
    use crate::console::Console;

    pub trait Animal {
        fn make_sound(&self, console: &Console);
    }

    pub struct Dog;

    impl Animal for Dog {
        fn make_sound(&self, console: &Console) {
            console.say("Woof");
        }
    }

    pub struct Cat;

    impl Animal for Cat {
        fn make_sound(&self, console: &Console) {
            console.say("Meow");
        }
    }
}

// =============================================================================
// Animals and operations
// =============================================================================

pub trait Operation {
    fn visit_dog(&mut self, dog: &Dog);
    fn visit_cat(&mut self, cat: &Cat);
}

/// The one extension point the hierarchy needs.
pub trait Animal {
    fn accept(&self, operation: &mut dyn Operation);
}

pub struct Dog {
    pub name: String,
}

impl Animal for Dog {
    fn accept(&self, operation: &mut dyn Operation) {
        operation.visit_dog(self);
    }
}

pub struct Cat {
    pub name: String,
}

impl Animal for Cat {
    fn accept(&self, operation: &mut dyn Operation) {
        operation.visit_cat(self);
    }
}

pub struct SoundOperation {
    console: Console,
}

impl SoundOperation {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Operation for SoundOperation {
    fn visit_dog(&mut self, _dog: &Dog) {
        self.console.say("Woof");
    }

    fn visit_cat(&mut self, _cat: &Cat) {
        self.console.say("Meow");
    }
}

/// Added without touching `Dog` or `Cat`; accumulates state across visits.
#[derive(Debug, Default)]
pub struct FeedOperation {
    pub grams: u32,
    pub fed: Vec<String>,
}

impl Operation for FeedOperation {
    fn visit_dog(&mut self, dog: &Dog) {
        self.grams += 300;
        self.fed.push(dog.name.clone());
    }

    fn visit_cat(&mut self, cat: &Cat) {
        self.grams += 80;
        self.fed.push(cat.name.clone());
    }
}

// =============================================================================
// Double dispatch over graphics
// =============================================================================

/// Each graphic calls the exporter method matching its own concrete type,
/// even when it is only known as `&dyn Graphic`.
pub trait Graphic {
    fn accept(&self, exporter: &mut dyn Exporter);
}

pub struct Shape {
    pub id: u32,
}

pub struct Dot {
    pub id: u32,
}

pub struct Circle {
    pub id: u32,
    pub radius: f32,
}

pub struct Rectangle {
    pub id: u32,
}

pub struct CompoundGraphic {
    pub children: Vec<Box<dyn Graphic>>,
}

pub trait Exporter {
    fn export_shape(&mut self, shape: &Shape);
    fn export_dot(&mut self, dot: &Dot);
    fn export_circle(&mut self, circle: &Circle);
    fn export_rectangle(&mut self, rectangle: &Rectangle);
    fn export_compound(&mut self, compound: &CompoundGraphic);
}

impl Graphic for Shape {
    fn accept(&self, exporter: &mut dyn Exporter) {
        exporter.export_shape(self);
    }
}

impl Graphic for Dot {
    fn accept(&self, exporter: &mut dyn Exporter) {
        exporter.export_dot(self);
    }
}

impl Graphic for Circle {
    fn accept(&self, exporter: &mut dyn Exporter) {
        exporter.export_circle(self);
    }
}

impl Graphic for Rectangle {
    fn accept(&self, exporter: &mut dyn Exporter) {
        exporter.export_rectangle(self);
    }
}

impl Graphic for CompoundGraphic {
    fn accept(&self, exporter: &mut dyn Exporter) {
        exporter.export_compound(self);
    }
}

pub struct ConsoleExporter {
    console: Console,
}

impl ConsoleExporter {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Exporter for ConsoleExporter {
    fn export_shape(&mut self, _shape: &Shape) {
        self.console.say("Exporting Shape");
    }

    fn export_dot(&mut self, _dot: &Dot) {
        self.console.say("Exporting Dot");
    }

    fn export_circle(&mut self, _circle: &Circle) {
        self.console.say("Exporting Circle");
    }

    fn export_rectangle(&mut self, _rectangle: &Rectangle) {
        self.console.say("Exporting Rectangle");
    }

    fn export_compound(&mut self, compound: &CompoundGraphic) {
        self.console.say("Exporting Compound Graphic");
        for child in &compound.children {
            child.accept(self);
        }
    }
}

pub fn export(graphic: &dyn Graphic, exporter: &mut dyn Exporter) {
    graphic.accept(exporter);
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    use problem::Animal as _;

    problem::Cat.make_sound(console);
    problem::Dog.make_sound(console);

    let cat = Cat {
        name: "Tom".to_string(),
    };
    let mut sound = SoundOperation::new(console);
    cat.accept(&mut sound);

    let mut exporter = ConsoleExporter::new(console);
    let circle: Box<dyn Graphic> = Box::new(Circle { id: 1, radius: 2.0 });
    export(circle.as_ref(), &mut exporter);

    Ok(())
}
