//! State: the presenter forwards `log_in` / `log_out` to whatever state it
//! currently holds, and each state decides the next one. No conditionals
//! on "am I logged in" live in the presenter.

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

pub const UNKNOWN_USER: &str = "Unknown";

pub trait AuthenticationState {
    fn is_authenticated(&self) -> bool;
    fn user_name(&self) -> &str;

    /// Consumes the current state and returns the next one.
    fn log_in(self: Box<Self>, user_name: &str, console: &Console) -> Box<dyn AuthenticationState>;
    fn log_out(self: Box<Self>, console: &Console) -> Box<dyn AuthenticationState>;
}

pub struct Authenticated {
    user_name: String,
}

impl AuthenticationState for Authenticated {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn user_name(&self) -> &str {
        &self.user_name
    }

    fn log_in(
        self: Box<Self>,
        _user_name: &str,
        console: &Console,
    ) -> Box<dyn AuthenticationState> {
        console.say(format!("{} already logged in", self.user_name));
        self
    }

    fn log_out(self: Box<Self>, console: &Console) -> Box<dyn AuthenticationState> {
        console.say(format!("{} successfully logged out", self.user_name));
        Box::new(Unauthenticated::default())
    }
}

pub struct Unauthenticated {
    user_name: String,
}

impl Default for Unauthenticated {
    fn default() -> Self {
        Self {
            user_name: UNKNOWN_USER.to_string(),
        }
    }
}

impl AuthenticationState for Unauthenticated {
    fn is_authenticated(&self) -> bool {
        false
    }

    fn user_name(&self) -> &str {
        &self.user_name
    }

    fn log_in(self: Box<Self>, user_name: &str, console: &Console) -> Box<dyn AuthenticationState> {
        console.say(format!("{user_name} successfully logged in"));
        Box::new(Authenticated {
            user_name: user_name.to_string(),
        })
    }

    fn log_out(self: Box<Self>, console: &Console) -> Box<dyn AuthenticationState> {
        console.say("Not logged in yet");
        self
    }
}

/// Context. Always holds a state between calls.
pub struct AuthenticationPresenter {
    state: Option<Box<dyn AuthenticationState>>,
    console: Console,
}

impl AuthenticationPresenter {
    pub fn new(console: &Console) -> Self {
        Self {
            state: Some(Box::new(Unauthenticated::default())),
            console: console.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.is_authenticated())
    }

    pub fn user_name(&self) -> &str {
        self.state
            .as_ref()
            .map_or(UNKNOWN_USER, |state| state.user_name())
    }

    pub fn log_in(&mut self, user_name: &str) {
        if let Some(state) = self.state.take() {
            self.state = Some(state.log_in(user_name, &self.console));
        }
    }

    pub fn log_out(&mut self) {
        if let Some(state) = self.state.take() {
            self.state = Some(state.log_out(&self.console));
        }
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    let mut presenter = AuthenticationPresenter::new(console);
    presenter.log_in("John");
    presenter.log_in("Jane");
    presenter.log_out();
    presenter.log_out();
    Ok(())
}
