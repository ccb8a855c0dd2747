//! Strategy: a robot's movement is a pluggable behaviour, so new behaviour
//! never means editing `Robot`.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

pub trait Behaviour {
    /// Movement command sent to the robot's motors.
    fn move_command(&self) -> i32;
    fn description(&self) -> &'static str;
}

pub struct AggressiveBehaviour;

impl Behaviour for AggressiveBehaviour {
    fn move_command(&self) -> i32 {
        1
    }

    fn description(&self) -> &'static str {
        "attacking any robot it finds"
    }
}

pub struct DefensiveBehaviour;

impl Behaviour for DefensiveBehaviour {
    fn move_command(&self) -> i32 {
        -1
    }

    fn description(&self) -> &'static str {
        "running from any robot it finds"
    }
}

pub struct NormalBehaviour;

impl Behaviour for NormalBehaviour {
    fn move_command(&self) -> i32 {
        0
    }

    fn description(&self) -> &'static str {
        "ignoring other robots"
    }
}

pub struct Robot {
    name: String,
    behaviour: Box<dyn Behaviour>,
}

impl Robot {
    pub fn new(name: impl Into<String>, behaviour: Box<dyn Behaviour>) -> Self {
        Self {
            name: name.into(),
            behaviour,
        }
    }

    pub fn set_behaviour(&mut self, behaviour: Box<dyn Behaviour>) {
        self.behaviour = behaviour;
    }

    pub fn step(&self, console: &Console) -> i32 {
        console.say(format!("{} is {}", self.name, self.behaviour.description()));
        self.behaviour.move_command()
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let mut aggro = Robot::new("Aggro", Box::new(AggressiveBehaviour));
    aggro.step(console);

    let defensive = Robot::new("Def", Box::new(DefensiveBehaviour));
    defensive.step(console);

    aggro.set_behaviour(Box::new(NormalBehaviour));
    aggro.step(console);

    Ok(())
}
