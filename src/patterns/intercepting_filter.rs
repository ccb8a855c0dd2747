//! Intercepting Filter: requests pass through a chain of pre-processing
//! filters before reaching the target. New work means a new filter, not a
//! change to the chain.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

pub trait Filter {
    fn execute(&self, request: &str);
}

pub struct AuthenticationFilter {
    console: Console,
}

impl AuthenticationFilter {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Filter for AuthenticationFilter {
    fn execute(&self, request: &str) {
        self.console.say(format!("Authenticating request: {request}"));
    }
}

pub struct LoggingFilter {
    console: Console,
}

impl LoggingFilter {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Filter for LoggingFilter {
    fn execute(&self, request: &str) {
        self.console.say(format!("Logging request: {request}"));
    }
}

/// The resource the client actually wants.
pub struct Target {
    console: Console,
}

impl Target {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }

    pub fn execute(&self, request: &str) {
        self.console
            .say(format!("Invoking the target object for: {request}"));
    }
}

pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
    target: Target,
}

impl FilterChain {
    pub fn new(target: Target) -> Self {
        Self {
            filters: Vec::new(),
            target,
        }
    }

    pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Filters in insertion order, then the target.
    pub fn execute(&self, request: &str) {
        for filter in &self.filters {
            filter.execute(request);
        }
        self.target.execute(request);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Facade over the chain; the only thing clients see.
pub struct FilterManager {
    chain: FilterChain,
}

impl FilterManager {
    pub fn new(target: Target) -> Self {
        Self {
            chain: FilterChain::new(target),
        }
    }

    pub fn set_filter(&mut self, filter: Box<dyn Filter>) {
        self.chain.add_filter(filter);
    }

    pub fn filter_request(&self, request: &str) {
        self.chain.execute(request);
    }
}

pub struct Client<'a> {
    manager: &'a FilterManager,
}

impl<'a> Client<'a> {
    pub fn new(manager: &'a FilterManager) -> Self {
        Self { manager }
    }

    pub fn send_request(&self, request: &str) {
        self.manager.filter_request(request);
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let mut manager = FilterManager::new(Target::new(console));
    manager.set_filter(Box::new(AuthenticationFilter::new(console)));
    manager.set_filter(Box::new(LoggingFilter::new(console)));

    Client::new(&manager).send_request("Get Products");
    Ok(())
}
