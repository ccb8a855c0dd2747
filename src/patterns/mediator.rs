//! Mediator: the switch and the fan stop knowing about each other and about
//! the power supply; they only talk to the mediator.
//!
//! The mediator owns the fan and the power supply. Components hold a
//! `Weak` back-reference, so there is no reference cycle.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// Every component is hard-wired to the next one.
pub mod problem {
    use crate::console::Console;

    pub struct PowerSupply;

    impl PowerSupply {
        pub fn turn_on(&self) {}
        pub fn turn_off(&self) {}
    }

    pub struct Fan {
        is_on: bool,
        power_supply: PowerSupply,
        console: Console,
    }

    impl Fan {
        pub fn new(console: &Console) -> Self {
            Self {
                is_on: false,
                power_supply: PowerSupply,
                console: console.clone(),
            }
        }

        pub fn is_on(&self) -> bool {
            self.is_on
        }

        pub fn turn_on(&mut self) {
            self.power_supply.turn_on();
            self.is_on = true;
            self.console.say("Fan turned on");
        }

        pub fn turn_off(&mut self) {
            self.is_on = false;
            self.power_supply.turn_off();
            self.console.say("Fan turned off");
        }
    }

    pub struct Switch {
        fan: Fan,
    }

    impl Switch {
        pub fn new(console: &Console) -> Self {
            Self {
                fan: Fan::new(console),
            }
        }

        pub fn press(&mut self) {
            if self.fan.is_on() {
                self.fan.turn_off();
            } else {
                self.fan.turn_on();
            }
        }
    }
}

// =============================================================================
// Components
// =============================================================================

pub struct PowerSupply {
    console: Console,
}

impl PowerSupply {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }

    pub fn turn_on(&self) {
        self.console.say("Power supply turned on");
    }

    pub fn turn_off(&self) {
        self.console.say("Power supply turned off");
    }
}

/// Knows neither the switch nor the power supply.
pub struct Fan {
    mediator: Weak<Mediator>,
    is_on: Cell<bool>,
    console: Console,
}

impl Fan {
    fn new(mediator: Weak<Mediator>, console: &Console) -> Self {
        Self {
            mediator,
            is_on: Cell::new(false),
            console: console.clone(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.is_on.get()
    }

    pub fn turn_on(&self) {
        if let Some(mediator) = self.mediator.upgrade() {
            mediator.turn_on_power_supply();
        }
        self.is_on.set(true);
        self.console.say("Fan turned on");
    }

    pub fn turn_off(&self) {
        self.is_on.set(false);
        self.console.say("Fan turned off");
        if let Some(mediator) = self.mediator.upgrade() {
            mediator.turn_off_power_supply();
        }
    }
}

/// Knows nothing about the fan.
pub struct Switch {
    mediator: Weak<Mediator>,
}

impl Switch {
    pub fn new(mediator: &Rc<Mediator>) -> Self {
        Self {
            mediator: Rc::downgrade(mediator),
        }
    }

    /// Returns false once the mediator is gone.
    pub fn press(&self) -> bool {
        match self.mediator.upgrade() {
            Some(mediator) => {
                mediator.handle_switch_press();
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Mediator
// =============================================================================

pub struct Mediator {
    fan: Fan,
    power_supply: PowerSupply,
}

impl Mediator {
    pub fn new(power_supply: PowerSupply, console: &Console) -> Rc<Self> {
        Rc::new_cyclic(|weak| Mediator {
            fan: Fan::new(weak.clone(), console),
            power_supply,
        })
    }

    pub fn fan(&self) -> &Fan {
        &self.fan
    }

    pub fn handle_switch_press(&self) {
        if self.fan.is_on() {
            self.fan.turn_off();
        } else {
            self.fan.turn_on();
        }
    }

    pub fn turn_on_power_supply(&self) {
        self.power_supply.turn_on();
    }

    pub fn turn_off_power_supply(&self) {
        self.power_supply.turn_off();
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let mut switch = problem::Switch::new(console);
    switch.press();
    switch.press();

    let mediator = Mediator::new(PowerSupply::new(console), console);
    let switch = Switch::new(&mediator);
    switch.press();
    switch.press();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_toggles_fan_through_mediator() {
        let console = Console::recording();
        let mediator = Mediator::new(PowerSupply::new(&console), &console);
        let switch = Switch::new(&mediator);

        assert!(switch.press());
        assert!(mediator.fan().is_on());
        assert!(switch.press());
        assert!(!mediator.fan().is_on());
    }

    #[test]
    fn test_power_follows_fan() {
        let console = Console::recording();
        let mediator = Mediator::new(PowerSupply::new(&console), &console);
        let switch = Switch::new(&mediator);
        switch.press();
        switch.press();

        assert_eq!(
            console.lines(),
            vec![
                "Power supply turned on",
                "Fan turned on",
                "Fan turned off",
                "Power supply turned off",
            ]
        );
    }

    #[test]
    fn test_no_reference_cycle() {
        let console = Console::recording();
        let mediator = Mediator::new(PowerSupply::new(&console), &console);
        let switch = Switch::new(&mediator);

        assert_eq!(Rc::strong_count(&mediator), 1);
        drop(mediator);
        assert!(!switch.press());
    }

    #[test]
    fn test_problem_switch_toggles() {
        let console = Console::recording();
        let mut switch = problem::Switch::new(&console);
        switch.press();
        switch.press();
        switch.press();
        assert_eq!(
            console.lines(),
            vec!["Fan turned on", "Fan turned off", "Fan turned on"]
        );
    }

    #[test]
    fn test_demo_output() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        assert_eq!(console.len(), 6);
        assert_eq!(console.lines()[2], "Power supply turned on");
    }
}
