//! Proxy: same interface as the real connection, but blocked sites never
//! reach it.

use std::collections::HashSet;
use tracing::warn;

use crate::config::{ProxySettings, Settings};
use crate::console::Console;
use crate::error::PatternError;

pub trait Internet {
    fn connect(&self, address: &str) -> Result<(), PatternError>;
}

pub struct RealInternet {
    console: Console,
}

impl RealInternet {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Internet for RealInternet {
    fn connect(&self, address: &str) -> Result<(), PatternError> {
        self.console.say(format!("Connecting to {address}"));
        Ok(())
    }
}

pub struct ProxyInternet<I: Internet> {
    real: I,
    blocked_sites: HashSet<String>,
}

impl<I: Internet> ProxyInternet<I> {
    pub fn new(real: I, settings: &ProxySettings) -> Self {
        Self {
            real,
            blocked_sites: settings
                .blocked_sites
                .iter()
                .map(|site| site.trim().to_lowercase())
                .collect(),
        }
    }

    pub fn is_blocked(&self, address: &str) -> bool {
        self.blocked_sites.contains(&address.to_lowercase())
    }
}

impl<I: Internet> Internet for ProxyInternet<I> {
    fn connect(&self, address: &str) -> Result<(), PatternError> {
        if self.is_blocked(address) {
            warn!(address, "blocked by proxy");
            return Err(PatternError::access_denied(address));
        }
        self.real.connect(address)
    }
}

pub fn demo(console: &Console, settings: &Settings) -> Result<(), PatternError> {
    let internet = ProxyInternet::new(RealInternet::new(console), &settings.proxy);

    internet.connect("geeksforgeeks.org")?;
    if let Err(err) = internet.connect("PlayGame.com") {
        console.say(err.to_string());
    }

    Ok(())
}
