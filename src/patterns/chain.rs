//! Chain of Responsibility: a message is offered to every logger in the
//! chain, and each one decides on its own whether to write it.
//!
//! Two flavors are shown. [`Logger`] composes closures into an immutable
//! chain; [`LinkedLogger`] keeps an explicit `next` link like a classic
//! handler hierarchy. In both, no handler can stop propagation.

use std::collections::HashSet;
use std::fmt;

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Debug,
    Warning,
    Error,
    FunctionalMessage,
    FunctionalError,
}

impl LogLevel {
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::FunctionalMessage,
            LogLevel::FunctionalError,
        ]
    }
}

// =============================================================================
// Sinks shared by both flavors
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Console,
    Email,
    File,
}

impl LogSink {
    pub fn render(self, message: &str) -> String {
        match self {
            LogSink::Console => format!("Writing to console: {message}"),
            LogSink::Email => format!("Sending via email: {message}"),
            LogSink::File => format!("Writing to Log File: {message}"),
        }
    }
}

// =============================================================================
// Flavor 1: chain of closures
// =============================================================================

type Handler = Box<dyn Fn(&str, LogLevel)>;

pub struct Logger {
    handler: Handler,
}

impl Logger {
    pub fn new(handler: impl Fn(&str, LogLevel) + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    pub fn message(&self, message: &str, severity: LogLevel) {
        (self.handler)(message, severity);
    }

    /// Returns a logger that runs `self` first and then `next`.
    pub fn append_next(self, next: Logger) -> Logger {
        Logger::new(move |message, severity| {
            self.message(message, severity);
            next.message(message, severity);
        })
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// A logger that only reacts to the given levels.
pub fn write_logger(levels: &[LogLevel], write: impl Fn(&str) + 'static) -> Logger {
    let accepted: HashSet<LogLevel> = levels.iter().copied().collect();
    Logger::new(move |message, severity| {
        if accepted.contains(&severity) {
            write(message);
        }
    })
}

fn sink_logger(console: &Console, sink: LogSink, levels: &[LogLevel]) -> Logger {
    let console = console.clone();
    write_logger(levels, move |message| console.warn(sink.render(message)))
}

pub fn console_logger(console: &Console, levels: &[LogLevel]) -> Logger {
    sink_logger(console, LogSink::Console, levels)
}

pub fn email_logger(console: &Console, levels: &[LogLevel]) -> Logger {
    sink_logger(console, LogSink::Email, levels)
}

pub fn file_logger(console: &Console, levels: &[LogLevel]) -> Logger {
    sink_logger(console, LogSink::File, levels)
}

// =============================================================================
// Flavor 2: explicit next links
// =============================================================================

#[derive(Debug)]
pub struct LinkedLogger {
    sink: LogSink,
    accepted: HashSet<LogLevel>,
    console: Console,
    next: Option<Box<LinkedLogger>>,
}

impl LinkedLogger {
    pub fn new(console: &Console, sink: LogSink, levels: &[LogLevel]) -> Self {
        Self {
            sink,
            accepted: levels.iter().copied().collect(),
            console: console.clone(),
            next: None,
        }
    }

    /// Attaches `next` at the end of the chain.
    pub fn append_next(&mut self, next: LinkedLogger) -> &mut Self {
        match self.next {
            Some(ref mut tail) => {
                tail.append_next(next);
            }
            None => self.next = Some(Box::new(next)),
        }
        self
    }

    pub fn message(&self, message: &str, severity: LogLevel) {
        if self.accepted.contains(&severity) {
            self.log(message);
        }
        if let Some(next) = &self.next {
            next.message(message, severity);
        }
    }

    fn log(&self, message: &str) {
        self.console.warn(self.sink.render(message));
    }

    pub fn chain_len(&self) -> usize {
        1 + self.next.as_ref().map_or(0, |next| next.chain_len())
    }
}

// =============================================================================
// Narrative
// =============================================================================

const NARRATIVE: &[(&str, LogLevel)] = &[
    ("Entering function ProcessOrder().", LogLevel::Debug),
    ("Order record retrieved.", LogLevel::Info),
    (
        "Unable to Process Order ORD1 Dated D1 For Customer C1.",
        LogLevel::FunctionalError,
    ),
    ("Order Dispatched.", LogLevel::FunctionalMessage),
    (
        "Customer Address details missing in Branch DataBase.",
        LogLevel::Warning,
    ),
    (
        "Customer Address details missing in Organization DataBase.",
        LogLevel::Error,
    ),
];

pub fn build_chain(console: &Console) -> Logger {
    console_logger(console, LogLevel::all())
        .append_next(email_logger(
            console,
            &[LogLevel::FunctionalMessage, LogLevel::FunctionalError],
        ))
        .append_next(file_logger(console, &[LogLevel::Warning, LogLevel::Error]))
}

pub fn build_linked_chain(console: &Console) -> LinkedLogger {
    let mut logger = LinkedLogger::new(console, LogSink::Console, LogLevel::all());
    logger
        .append_next(LinkedLogger::new(
            console,
            LogSink::Email,
            &[LogLevel::FunctionalMessage, LogLevel::FunctionalError],
        ))
        .append_next(LinkedLogger::new(
            console,
            LogSink::File,
            &[LogLevel::Warning, LogLevel::Error],
        ));
    logger
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let logger = build_chain(console);
    for (message, severity) in NARRATIVE {
        logger.message(message, *severity);
    }

    console.say("-- same chain with explicit links --");
    let linked = build_linked_chain(console);
    for (message, severity) in NARRATIVE {
        linked.message(message, *severity);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Stream;

    #[test]
    fn test_write_logger_filters_by_level() {
        let console = Console::recording();
        let logger = file_logger(&console, &[LogLevel::Error]);

        logger.message("ignored", LogLevel::Info);
        logger.message("kept", LogLevel::Error);

        assert_eq!(console.lines(), vec!["Writing to Log File: kept"]);
    }

    #[test]
    fn test_functional_error_reaches_console_and_email() {
        let console = Console::recording();
        build_chain(&console).message("boom", LogLevel::FunctionalError);

        assert_eq!(
            console.lines(),
            vec!["Writing to console: boom", "Sending via email: boom"]
        );
    }

    #[test]
    fn test_warning_reaches_console_and_file() {
        let console = Console::recording();
        build_chain(&console).message("careful", LogLevel::Warning);

        assert_eq!(
            console.lines(),
            vec!["Writing to console: careful", "Writing to Log File: careful"]
        );
    }

    #[test]
    fn test_debug_only_reaches_console() {
        let console = Console::recording();
        build_chain(&console).message("trace", LogLevel::Debug);
        assert_eq!(console.lines(), vec!["Writing to console: trace"]);
    }

    #[test]
    fn test_handlers_never_stop_propagation() {
        let console = Console::recording();
        let chain = file_logger(&console, LogLevel::all())
            .append_next(file_logger(&console, LogLevel::all()))
            .append_next(file_logger(&console, LogLevel::all()));

        chain.message("x", LogLevel::Info);
        assert_eq!(console.len(), 3);
    }

    #[test]
    fn test_linked_append_goes_to_tail() {
        let console = Console::recording();
        let linked = build_linked_chain(&console);
        assert_eq!(linked.chain_len(), 3);

        linked.message("order", LogLevel::FunctionalMessage);
        assert_eq!(
            console.lines(),
            vec!["Writing to console: order", "Sending via email: order"]
        );
    }

    #[test]
    fn test_both_flavors_agree() {
        let functional = Console::recording();
        let linked = Console::recording();
        let chain = build_chain(&functional);
        let links = build_linked_chain(&linked);

        for (message, severity) in NARRATIVE {
            chain.message(message, *severity);
            links.message(message, *severity);
        }

        assert_eq!(functional.lines(), linked.lines());
        assert_eq!(functional.len(), 10);
    }

    #[test]
    fn test_demo_writes_to_stderr_stream() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();

        assert_eq!(console.lines_on(Stream::Err).len(), 20);
        assert_eq!(
            console.lines_on(Stream::Out),
            vec!["-- same chain with explicit links --"]
        );
    }
}
