//! Facade: one `book_my_trip` call in front of several booking subsystems.

use std::fmt;

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub from_location: String,
    pub to_location: String,
    pub person_name: String,
}

impl BookingDetails {
    pub fn new(from: impl Into<String>, to: impl Into<String>, person: impl Into<String>) -> Self {
        Self {
            from_location: from.into(),
            to_location: to.into(),
            person_name: person.into(),
        }
    }
}

impl fmt::Display for BookingDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} to {}",
            self.person_name, self.from_location, self.to_location
        )
    }
}

// =============================================================================
// Subsystems
// =============================================================================

pub struct FlightBooking {
    details: BookingDetails,
}

impl FlightBooking {
    pub fn book_flight(&self, console: &Console) {
        console.say(format!("The flight has been booked: {}", self.details));
    }
}

pub struct TrainBooking {
    details: BookingDetails,
}

impl TrainBooking {
    pub fn book_train(&self, console: &Console) {
        console.say(format!("The train has been booked: {}", self.details));
    }
}

pub struct HotelBooking {
    details: BookingDetails,
}

impl HotelBooking {
    pub fn book_hotel(&self, console: &Console) {
        console.say(format!("The hotel has been booked: {}", self.details));
    }
}

pub enum Booking {
    Flight(FlightBooking),
    Train(TrainBooking),
    Hotel(HotelBooking),
}

impl Booking {
    pub fn flight(details: BookingDetails) -> Self {
        Booking::Flight(FlightBooking { details })
    }

    pub fn train(details: BookingDetails) -> Self {
        Booking::Train(TrainBooking { details })
    }

    pub fn hotel(details: BookingDetails) -> Self {
        Booking::Hotel(HotelBooking { details })
    }
}

/// The facade: clients never touch the individual subsystems.
pub fn book_my_trip(console: &Console, booking: &Booking) {
    match booking {
        Booking::Flight(flight) => flight.book_flight(console),
        Booking::Train(train) => train.book_train(console),
        Booking::Hotel(hotel) => hotel.book_hotel(console),
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let details = BookingDetails::new("New York", "London", "John");
    book_my_trip(console, &Booking::hotel(details.clone()));
    book_my_trip(console, &Booking::flight(details));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_subsystem_is_reached() {
        let console = Console::recording();
        let details = BookingDetails::new("Paris", "Berlin", "Ana");

        book_my_trip(&console, &Booking::flight(details.clone()));
        book_my_trip(&console, &Booking::train(details.clone()));
        book_my_trip(&console, &Booking::hotel(details));

        assert_eq!(
            console.lines(),
            vec![
                "The flight has been booked: Ana from Paris to Berlin",
                "The train has been booked: Ana from Paris to Berlin",
                "The hotel has been booked: Ana from Paris to Berlin",
            ]
        );
    }

    #[test]
    fn test_demo_output() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        assert_eq!(
            console.lines(),
            vec![
                "The hotel has been booked: John from New York to London",
                "The flight has been booked: John from New York to London",
            ]
        );
    }
}
