//! Decorator: toppings wrap a pizza and add to its price at run time,
//! instead of one subclass per combination.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

pub trait Pizza {
    fn price(&self) -> u32;
    fn description(&self) -> String;
}

pub struct GreekPizza {
    price: u32,
}

impl Default for GreekPizza {
    fn default() -> Self {
        Self { price: 6 }
    }
}

impl Pizza for GreekPizza {
    fn price(&self) -> u32 {
        self.price
    }

    fn description(&self) -> String {
        "GreekPizza".to_string()
    }
}

pub struct ChicagoPizza {
    price: u32,
}

impl Default for ChicagoPizza {
    fn default() -> Self {
        Self { price: 7 }
    }
}

impl Pizza for ChicagoPizza {
    fn price(&self) -> u32 {
        self.price
    }

    fn description(&self) -> String {
        "ChicagoPizza".to_string()
    }
}

/// Shared wrapping logic: the inner pizza plus a surcharge.
pub struct Topping<'a> {
    pizza: &'a dyn Pizza,
    name: &'static str,
    surcharge: u32,
}

impl Pizza for Topping<'_> {
    fn price(&self) -> u32 {
        self.pizza.price() + self.surcharge
    }

    fn description(&self) -> String {
        format!("{} with {}", self.pizza.description(), self.name)
    }
}

pub fn with_cheese(pizza: &dyn Pizza) -> Topping<'_> {
    Topping {
        pizza,
        name: "Cheese",
        surcharge: 1,
    }
}

pub fn with_mushroom(pizza: &dyn Pizza) -> Topping<'_> {
    Topping {
        pizza,
        name: "Mushroom",
        surcharge: 2,
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let greek = GreekPizza::default();
    console.say(format!("GreekPizza Basic: {}", greek.price()));

    let cheese = with_cheese(&greek);
    console.say(format!("GreekPizza With Cheese: {}", cheese.price()));

    let mushroom = with_mushroom(&greek);
    console.say(format!("GreekPizza With Mushroom: {}", mushroom.price()));

    let chicago = ChicagoPizza::default();
    let cheese = with_cheese(&chicago);
    let loaded = with_mushroom(&cheese);
    console.say(format!("{}: {}", loaded.description(), loaded.price()));

    Ok(())
}
