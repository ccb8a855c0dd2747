//! Bridge: remotes (abstraction) and devices (implementation) vary
//! independently; any remote drives any device.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

/// Implementation side.
pub trait Device {
    fn turn_on(&self);
    fn turn_off(&self);
}

pub struct Tv {
    console: Console,
}

impl Tv {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Device for Tv {
    fn turn_on(&self) {
        self.console.say("TV turned on");
    }

    fn turn_off(&self) {
        self.console.say("TV turned off");
    }
}

pub struct Radio {
    console: Console,
}

impl Radio {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Device for Radio {
    fn turn_on(&self) {
        self.console.say("Radio turned on");
    }

    fn turn_off(&self) {
        self.console.say("Radio turned off");
    }
}

/// Abstraction side. Holds a device, never a concrete one.
pub trait Remote {
    fn power_on(&self);
    fn power_off(&self);
}

pub struct BasicRemote {
    device: Box<dyn Device>,
}

impl BasicRemote {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }
}

impl Remote for BasicRemote {
    fn power_on(&self) {
        self.device.turn_on();
    }

    fn power_off(&self) {
        self.device.turn_off();
    }
}

pub struct TouchScreenRemote {
    device: Box<dyn Device>,
    console: Console,
}

impl TouchScreenRemote {
    pub fn new(device: Box<dyn Device>, console: &Console) -> Self {
        Self {
            device,
            console: console.clone(),
        }
    }
}

impl Remote for TouchScreenRemote {
    fn power_on(&self) {
        self.console.say("Powered on with touch screen");
        self.device.turn_on();
    }

    fn power_off(&self) {
        self.console.say("Powered off with touch screen");
        self.device.turn_off();
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let remote = BasicRemote::new(Box::new(Tv::new(console)));
    remote.power_on();

    let touch = TouchScreenRemote::new(Box::new(Radio::new(console)), console);
    touch.power_on();
    touch.power_off();

    Ok(())
}
