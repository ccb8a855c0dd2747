//! Command: requests become objects, so the invoker can store, queue and
//! trigger them without knowing what they do.

use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

pub trait Command {
    fn execute(&self);
}

/// Any closure is a command.
impl<F: Fn()> Command for F {
    fn execute(&self) {
        self()
    }
}

// =============================================================================
// Lamp: receiver, concrete commands, invoker
// =============================================================================

/// Receiver with the actual behavior.
pub struct Light {
    console: Console,
}

impl Light {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }

    pub fn turn_on(&self) {
        self.console.say("The light is on");
    }

    pub fn turn_off(&self) {
        self.console.say("The light is off");
    }
}

pub struct SwitchOnCommand {
    light: Rc<Light>,
}

impl SwitchOnCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for SwitchOnCommand {
    fn execute(&self) {
        self.light.turn_on();
    }
}

pub struct SwitchOffCommand {
    light: Rc<Light>,
}

impl SwitchOffCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for SwitchOffCommand {
    fn execute(&self) {
        self.light.turn_off();
    }
}

/// Invoker. Knows commands only by name.
#[derive(Default)]
pub struct Switch {
    commands: HashMap<String, Box<dyn Command>>,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering under an existing name replaces the previous command.
    pub fn register(&mut self, name: impl Into<String>, command: Box<dyn Command>) {
        let name = name.into();
        debug!(command = %name, "registering command");
        self.commands.insert(name, command);
    }

    pub fn execute(&self, name: &str) -> Result<(), PatternError> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| PatternError::unregistered_command(name))?;
        command.execute();
        Ok(())
    }
}

// =============================================================================
// Order queue
// =============================================================================

pub trait OrderCommand {
    fn execute(&self);
}

pub struct OrderAddCommand {
    id: u64,
    console: Console,
}

impl OrderAddCommand {
    pub fn new(id: u64, console: &Console) -> Self {
        Self {
            id,
            console: console.clone(),
        }
    }
}

impl OrderCommand for OrderAddCommand {
    fn execute(&self) {
        self.console.say(format!("Adding order with id: {}", self.id));
    }
}

pub struct OrderPayCommand {
    id: u64,
    console: Console,
}

impl OrderPayCommand {
    pub fn new(id: u64, console: &Console) -> Self {
        Self {
            id,
            console: console.clone(),
        }
    }
}

impl OrderCommand for OrderPayCommand {
    fn execute(&self) {
        self.console.say(format!("Paying for order with id: {}", self.id));
    }
}

#[derive(Default)]
pub struct CommandProcessor {
    queue: Vec<Box<dyn OrderCommand>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_queue(&mut self, command: impl OrderCommand + 'static) -> &mut Self {
        self.queue.push(Box::new(command));
        self
    }

    /// Runs queued commands in FIFO order and empties the queue.
    pub fn process_commands(&mut self) -> &mut Self {
        for command in self.queue.drain(..) {
            command.execute();
        }
        self
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let lamp = Rc::new(Light::new(console));
    let mut switch = Switch::new();
    switch.register("on", Box::new(SwitchOnCommand::new(Rc::clone(&lamp))));
    switch.register("off", Box::new(SwitchOffCommand::new(Rc::clone(&lamp))));
    switch.execute("on")?;
    switch.execute("off")?;

    CommandProcessor::new()
        .add_to_queue(OrderAddCommand::new(1, console))
        .add_to_queue(OrderAddCommand::new(2, console))
        .add_to_queue(OrderPayCommand::new(2, console))
        .add_to_queue(OrderPayCommand::new(1, console))
        .process_commands();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_runs_registered_commands() {
        let console = Console::recording();
        let lamp = Rc::new(Light::new(&console));
        let mut switch = Switch::new();
        switch.register("off", Box::new(SwitchOffCommand::new(lamp)));

        switch.execute("off").unwrap();
        assert_eq!(console.lines(), vec!["The light is off"]);
    }

    #[test]
    fn test_unregistered_command_is_error() {
        let switch = Switch::new();
        let result = switch.execute("dim");
        assert!(matches!(
            result,
            Err(PatternError::UnregisteredCommand { ref name }) if name == "dim"
        ));
    }

    #[test]
    fn test_closure_as_command() {
        let console = Console::recording();
        let captured = console.clone();
        let mut switch = Switch::new();
        switch.register("blink", Box::new(move || captured.say("blink")));

        switch.execute("blink").unwrap();
        switch.execute("blink").unwrap();
        assert_eq!(console.lines(), vec!["blink", "blink"]);
    }

    #[test]
    fn test_register_replaces() {
        let console = Console::recording();
        let lamp = Rc::new(Light::new(&console));
        let mut switch = Switch::new();
        switch.register("toggle", Box::new(SwitchOnCommand::new(Rc::clone(&lamp))));
        switch.register("toggle", Box::new(SwitchOffCommand::new(lamp)));

        switch.execute("toggle").unwrap();
        assert_eq!(console.lines(), vec!["The light is off"]);
    }

    #[test]
    fn test_processor_runs_fifo_and_clears() {
        let console = Console::recording();
        let mut processor = CommandProcessor::new();
        processor
            .add_to_queue(OrderPayCommand::new(7, &console))
            .add_to_queue(OrderAddCommand::new(8, &console));
        assert_eq!(processor.pending(), 2);

        processor.process_commands();
        assert_eq!(processor.pending(), 0);
        assert_eq!(
            console.lines(),
            vec!["Paying for order with id: 7", "Adding order with id: 8"]
        );

        processor.process_commands();
        assert_eq!(console.len(), 2);
    }

    #[test]
    fn test_demo_output() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        assert_eq!(
            console.lines(),
            vec![
                "The light is on",
                "The light is off",
                "Adding order with id: 1",
                "Adding order with id: 2",
                "Paying for order with id: 2",
                "Paying for order with id: 1",
            ]
        );
    }
}
