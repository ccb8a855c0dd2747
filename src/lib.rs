//! Runnable examples of classic object-oriented design patterns.
//!
//! Every example lives in its own module under [`patterns`] and exposes a
//! `demo` function that replays its narrative through a [`Console`]. The
//! [`catalog`] ties the examples to names, and [`commands`] runs them for
//! the `patterns` binary.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod patterns;

pub use catalog::{Example, EXAMPLES};
pub use config::Settings;
pub use console::Console;
pub use error::{ConfigError, PatternError};
