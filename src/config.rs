use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::ConfigError;

/// Range the simulated thermometer draws from, lower bound inclusive.
pub const SENSOR_RANGE: std::ops::Range<i32> = 17..30;

// =============================================================================
// Settings sections
// =============================================================================

/// Knobs for the temperature regulation examples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegulatorSettings {
    pub min_temp: i32,
    pub max_temp: i32,
    pub poll_interval_ms: u64,
    pub max_readings: usize,
    pub seed: Option<u64>,
}

impl Default for RegulatorSettings {
    fn default() -> Self {
        Self {
            min_temp: 25,
            max_temp: 28,
            poll_interval_ms: 0,
            max_readings: 20,
            seed: None,
        }
    }
}

impl RegulatorSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub blocked_sites: Vec<String>,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            blocked_sites: vec![
                "playgame.com".to_string(),
                "onlinegames.com".to_string(),
                "gamingzone.com".to_string(),
            ],
        }
    }
}

// =============================================================================
// Top-level settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub regulator: RegulatorSettings,
    pub proxy: ProxySettings,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "loading settings");
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no settings file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let regulator = &self.regulator;
        if regulator.min_temp >= regulator.max_temp {
            return Err(ConfigError::InvalidRange {
                field: "regulator.min_temp/max_temp".to_string(),
                min: regulator.min_temp.into(),
                max: regulator.max_temp.into(),
            });
        }
        if regulator.max_readings == 0 {
            return Err(ConfigError::invalid_value(
                "regulator.max_readings",
                "must be at least 1",
            ));
        }
        // The heater only switches if the sensor can report values on both sides of the band.
        if regulator.min_temp < SENSOR_RANGE.start || regulator.max_temp >= SENSOR_RANGE.end {
            return Err(ConfigError::invalid_value(
                "regulator",
                format!(
                    "band {}..{} must lie within the sensor range {}..{}",
                    regulator.min_temp, regulator.max_temp, SENSOR_RANGE.start, SENSOR_RANGE.end
                ),
            ));
        }
        if self.proxy.blocked_sites.iter().any(|site| site.trim().is_empty()) {
            return Err(ConfigError::invalid_value(
                "proxy.blocked_sites",
                "entries must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.regulator.min_temp, 25);
        assert_eq!(settings.regulator.max_temp, 28);
        assert_eq!(settings.proxy.blocked_sites.len(), 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("[regulator]\nmax_readings = 5\n").unwrap();
        assert_eq!(settings.regulator.max_readings, 5);
        assert_eq!(settings.regulator.min_temp, 25);
        assert_eq!(settings.proxy, ProxySettings::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_inverted_band_rejected() {
        let result = Settings::from_toml("[regulator]\nmin_temp = 28\nmax_temp = 25\n");
        assert!(matches!(result, Err(ConfigError::InvalidRange { min: 28, max: 25, .. })));
    }

    #[test]
    fn test_zero_readings_rejected() {
        let result = Settings::from_toml("[regulator]\nmax_readings = 0\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_band_outside_sensor_rejected() {
        let result = Settings::from_toml("[regulator]\nmin_temp = 10\nmax_temp = 12\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_band_reaching_sensor_maximum_rejected() {
        let result = Settings::from_toml("[regulator]\nmax_temp = 30\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "regulator"
        ));
    }

    #[test]
    fn test_band_just_below_sensor_maximum_accepted() {
        let settings = Settings::from_toml("[regulator]\nmax_temp = 29\n").unwrap();
        assert_eq!(settings.regulator.max_temp, 29);

        let settings = Settings::from_toml("[regulator]\nmin_temp = 17\nmax_temp = 18\n").unwrap();
        assert_eq!(settings.regulator.min_temp, SENSOR_RANGE.start);
    }

    #[test]
    fn test_blank_blocked_site_rejected() {
        let result = Settings::from_toml("[proxy]\nblocked_sites = [\"  \"]\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let result = Settings::from_toml("[regulator\nmin_temp = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[proxy]\nblocked_sites = [\"social.example\"]").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.proxy.blocked_sites, vec!["social.example"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_poll_interval() {
        let settings = RegulatorSettings {
            poll_interval_ms: 250,
            ..RegulatorSettings::default()
        };
        assert_eq!(settings.poll_interval(), Duration::from_millis(250));
    }
}
