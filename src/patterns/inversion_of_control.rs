//! Inversion of Control: the garage (framework) decides *when* a vehicle is
//! serviced; the vehicle (user callback) decides *what* servicing means.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// The only thing the framework knows about user code.
pub trait Vehicle {
    fn service(&self, console: &Console);
}

pub struct Bike;

impl Vehicle for Bike {
    fn service(&self, console: &Console) {
        console.say("Bike servicing strategy performed.");
    }
}

pub struct Garage {
    console: Console,
    serviced: usize,
}

impl Garage {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
            serviced: 0,
        }
    }

    pub fn service(&mut self, vehicle: &dyn Vehicle) {
        vehicle.service(&self.console);
        self.serviced += 1;
    }

    /// Closures plug in just as well as trait objects.
    pub fn service_with(&mut self, callback: impl FnOnce(&Console)) {
        callback(&self.console);
        self.serviced += 1;
    }

    pub fn serviced(&self) -> usize {
        self.serviced
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let mut garage = Garage::new(console);
    garage.service(&Bike);
    garage.service_with(|console| console.say("Scooter servicing strategy performed."));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Skateboard;

    impl Vehicle for Skateboard {
        fn service(&self, console: &Console) {
            console.say("Wheels greased.");
        }
    }

    #[test]
    fn test_garage_calls_user_code() {
        let console = Console::recording();
        let mut garage = Garage::new(&console);
        garage.service(&Skateboard);
        garage.service(&Bike);

        assert_eq!(garage.serviced(), 2);
        assert_eq!(
            console.lines(),
            vec!["Wheels greased.", "Bike servicing strategy performed."]
        );
    }

    #[test]
    fn test_demo_output() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        assert_eq!(
            console.lines(),
            vec![
                "Bike servicing strategy performed.",
                "Scooter servicing strategy performed.",
            ]
        );
    }
}
