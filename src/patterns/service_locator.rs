//! Service Locator: the coffee store asks a locator for the right machine
//! instead of having it built and passed in by every caller.

use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoffeeChoice {
    Americano,
    Cappuccino,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coffee {
    Americano,
    Cappuccino,
}

impl fmt::Display for Coffee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coffee::Americano => f.write_str("Americano"),
            Coffee::Cappuccino => f.write_str("Cappuccino"),
        }
    }
}

pub trait CoffeeMachine {
    fn make_coffee(&self, choice: CoffeeChoice) -> Coffee;
}

pub struct AmericanoMachine {
    console: Console,
}

impl AmericanoMachine {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl CoffeeMachine for AmericanoMachine {
    fn make_coffee(&self, _choice: CoffeeChoice) -> Coffee {
        self.console.say("Preparing Americano...");
        Coffee::Americano
    }
}

pub struct CappuccinoMachine {
    console: Console,
}

impl CappuccinoMachine {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl CoffeeMachine for CappuccinoMachine {
    fn make_coffee(&self, _choice: CoffeeChoice) -> Coffee {
        self.console.say("Preparing Cappuccino...");
        Coffee::Cappuccino
    }
}

/// Every caller must construct the machine (and its dependencies) first.
pub mod problem {
    use super::{Coffee, CoffeeChoice, CoffeeMachine};

    pub struct CoffeeStore<M: CoffeeMachine> {
        machine: M,
    }

    impl<M: CoffeeMachine> CoffeeStore<M> {
        pub fn new(machine: M) -> Self {
            Self { machine }
        }

        pub fn order_coffee(&self, choice: CoffeeChoice) -> Coffee {
            self.machine.make_coffee(choice)
        }
    }
}

// =============================================================================
// Locator
// =============================================================================

/// Builds each machine on first request and reuses it afterwards.
pub struct CoffeeMachineLocator {
    machines: HashMap<CoffeeChoice, Box<dyn CoffeeMachine>>,
    console: Console,
    built: usize,
}

impl CoffeeMachineLocator {
    pub fn new(console: &Console) -> Self {
        Self {
            machines: HashMap::new(),
            console: console.clone(),
            built: 0,
        }
    }

    pub fn machine(&mut self, choice: CoffeeChoice) -> &dyn CoffeeMachine {
        let console = &self.console;
        let built = &mut self.built;
        let machine = self.machines.entry(choice).or_insert_with(|| {
            debug!(?choice, "building coffee machine");
            *built += 1;
            let machine: Box<dyn CoffeeMachine> = match choice {
                CoffeeChoice::Americano => Box::new(AmericanoMachine::new(console)),
                CoffeeChoice::Cappuccino => Box::new(CappuccinoMachine::new(console)),
            };
            machine
        });
        &**machine
    }

    /// Number of machines constructed so far.
    pub fn built(&self) -> usize {
        self.built
    }
}

pub struct CoffeeStore {
    locator: CoffeeMachineLocator,
}

impl CoffeeStore {
    pub fn new(locator: CoffeeMachineLocator) -> Self {
        Self { locator }
    }

    pub fn order_coffee(&mut self, choice: CoffeeChoice) -> Coffee {
        self.locator.machine(choice).make_coffee(choice)
    }

    pub fn locator(&self) -> &CoffeeMachineLocator {
        &self.locator
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    problem::CoffeeStore::new(AmericanoMachine::new(console))
        .order_coffee(CoffeeChoice::Americano);
    problem::CoffeeStore::new(CappuccinoMachine::new(console))
        .order_coffee(CoffeeChoice::Cappuccino);

    let mut store = CoffeeStore::new(CoffeeMachineLocator::new(console));
    let americano = store.order_coffee(CoffeeChoice::Americano);
    console.say(americano.to_string());
    let cappuccino = store.order_coffee(CoffeeChoice::Cappuccino);
    console.say(cappuccino.to_string());

    Ok(())
}
