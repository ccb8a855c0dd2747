//! Open-Closed Principle: the garage is closed for modification but open for
//! extension through the `Vehicle` trait.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// One method per vehicle type: every new vehicle edits the garage.
pub mod problem {
    use crate::console::Console;

    pub struct Bike;

    impl Bike {
        pub fn service(&self, console: &Console) {
            console.say("Bike servicing strategy performed.");
        }
    }

    pub struct Car;

    impl Car {
        pub fn service(&self, console: &Console) {
            console.say("Car servicing strategy performed.");
        }
    }

    pub struct Garage;

    impl Garage {
        pub fn service_bike(&self, console: &Console, bike: &Bike) {
            bike.service(console);
        }

        pub fn service_car(&self, console: &Console, car: &Car) {
            car.service(console);
        }
    }
}

pub trait Vehicle {
    fn name(&self) -> &'static str;

    fn service(&self, console: &Console) {
        console.say(format!("{} servicing strategy performed.", self.name()));
    }
}

pub struct Bike;

impl Vehicle for Bike {
    fn name(&self) -> &'static str {
        "Bike"
    }
}

pub struct Car;

impl Vehicle for Car {
    fn name(&self) -> &'static str {
        "Car"
    }
}

/// Added later without touching [`Garage`].
pub struct Truck;

impl Vehicle for Truck {
    fn name(&self) -> &'static str {
        "Truck"
    }
}

pub struct Garage;

impl Garage {
    pub fn service(&self, console: &Console, vehicle: &dyn Vehicle) {
        vehicle.service(console);
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let garage = problem::Garage;
    garage.service_bike(console, &problem::Bike);
    garage.service_car(console, &problem::Car);

    let garage = Garage;
    let vehicles: [&dyn Vehicle; 3] = [&Bike, &Car, &Truck];
    for vehicle in vehicles {
        garage.service(console, vehicle);
    }

    Ok(())
}
