use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Example failures
// =============================================================================

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("no command registered for {name}")]
    UnregisteredCommand { name: String },

    #[error("Access is denied to {address}")]
    AccessDenied { address: String },

    #[error("Unknown example '{name}'{}", did_you_mean(.suggestion))]
    UnknownExample {
        name: String,
        suggestion: Option<&'static str>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    suggestion
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

impl PatternError {
    /// The reader of our output went away, e.g. `patterns all | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(err) if err.kind() == std::io::ErrorKind::BrokenPipe)
    }

    pub fn unregistered_command(name: impl Into<String>) -> Self {
        Self::UnregisteredCommand { name: name.into() }
    }

    pub fn access_denied(address: impl Into<String>) -> Self {
        Self::AccessDenied {
            address: address.into(),
        }
    }
}

// =============================================================================
// Settings failures
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid range for '{field}': min {min} must be below max {max}")]
    InvalidRange { field: String, min: i64, max: i64 },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
