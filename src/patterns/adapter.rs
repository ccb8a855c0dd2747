//! Adapter: make an existing type usable where a different interface is
//! expected, without touching either side.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

// =============================================================================
// Sockets and plugs
// =============================================================================

pub trait EuroPlug {
    fn plug_in(&self);
}

pub trait UsPlug {
    fn plug_in(&self);
}

pub struct EuroSocket;

impl EuroSocket {
    pub fn supply_current(&self, plug: &dyn EuroPlug) {
        plug.plug_in();
    }
}

pub struct UsSocket;

impl UsSocket {
    pub fn supply_current(&self, plug: &dyn UsPlug) {
        plug.plug_in();
    }
}

/// Lets a European plug go into a US socket.
pub struct EuroToUsPlugAdapter<P: EuroPlug> {
    euro_plug: P,
}

impl<P: EuroPlug> EuroToUsPlugAdapter<P> {
    pub fn new(euro_plug: P) -> Self {
        Self { euro_plug }
    }
}

impl<P: EuroPlug> UsPlug for EuroToUsPlugAdapter<P> {
    fn plug_in(&self) {
        self.euro_plug.plug_in();
    }
}

pub struct TravelPlug {
    console: Console,
}

impl TravelPlug {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl EuroPlug for TravelPlug {
    fn plug_in(&self) {
        self.console.say("Euro plug adapted for US Socket");
    }
}

// =============================================================================
// USB audio into a bluetooth speaker
// =============================================================================

pub trait UsbAudio {
    fn supply_audio(&self);
}

pub trait BluetoothAudio {
    fn broadcast_audio(&self);
}

pub struct BluetoothSpeaker;

impl BluetoothSpeaker {
    pub fn connect(&self, bluetooth: &dyn BluetoothAudio) {
        bluetooth.broadcast_audio();
    }
}

pub struct UsbToBluetoothAudioAdapter<U: UsbAudio> {
    usb: U,
}

impl<U: UsbAudio> UsbToBluetoothAudioAdapter<U> {
    pub fn new(usb: U) -> Self {
        Self { usb }
    }
}

impl<U: UsbAudio> BluetoothAudio for UsbToBluetoothAudioAdapter<U> {
    fn broadcast_audio(&self) {
        self.usb.supply_audio();
    }
}

pub struct UsbStick {
    console: Console,
}

impl UsbStick {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl UsbAudio for UsbStick {
    fn supply_audio(&self) {
        self.console.say("Supplying audio to USB");
    }
}

// =============================================================================
// People with differently named fields
// =============================================================================

pub trait Person {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

pub struct EnglishPerson {
    name: String,
}

impl EnglishPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Person for EnglishPerson {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Knows nothing about [`Person`]; its field is called `nom`.
#[derive(Debug)]
pub struct FrenchPerson {
    pub nom: String,
}

impl FrenchPerson {
    pub fn new(nom: impl Into<String>) -> Self {
        Self { nom: nom.into() }
    }
}

/// Borrows the French person mutably so renames flow back to `nom`.
pub struct FrenchPersonAdapter<'a> {
    french_person: &'a mut FrenchPerson,
}

impl<'a> FrenchPersonAdapter<'a> {
    pub fn new(french_person: &'a mut FrenchPerson) -> Self {
        Self { french_person }
    }
}

impl Person for FrenchPersonAdapter<'_> {
    fn name(&self) -> &str {
        &self.french_person.nom
    }

    fn set_name(&mut self, name: String) {
        self.french_person.nom = name;
    }
}

/// Service that only understands [`Person`].
pub fn print_name(console: &Console, person: &dyn Person) {
    console.say(person.name());
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let us_socket = UsSocket;
    let adapter = EuroToUsPlugAdapter::new(TravelPlug::new(console));
    us_socket.supply_current(&adapter);

    let speaker = BluetoothSpeaker;
    speaker.connect(&UsbToBluetoothAudioAdapter::new(UsbStick::new(console)));

    let person = EnglishPerson::new("John");
    let mut french_person = FrenchPerson::new("Jean");
    print_name(console, &person);
    print_name(console, &FrenchPersonAdapter::new(&mut french_person));

    Ok(())
}
