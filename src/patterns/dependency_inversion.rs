//! Dependency Inversion: the temperature regulator owns the `Thermometer`
//! and `Heater` abstractions, and the IO channels implement them.
//!
//! Regulation polls the thermometer: wait while it is warmer than `min`,
//! start the heater, wait while it is colder than `max`, stop the heater,
//! repeat. The loop is bounded by a reading budget so that it terminates.

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{RegulatorSettings, Settings, SENSOR_RANGE};
use crate::console::Console;
use crate::error::PatternError;

/// What a bounded regulation run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegulationReport {
    pub readings: usize,
    pub starts: usize,
    pub stops: usize,
}

fn sensor_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn pause(interval: Duration) {
    if !interval.is_zero() {
        thread::sleep(interval);
    }
}

/// The regulator talks straight to the concrete channels, so it cannot be
/// reused with any other sensor or heater.
pub mod problem {
    use super::*;

    pub struct ThermometerIoChannel {
        rng: StdRng,
        console: Console,
    }

    impl ThermometerIoChannel {
        pub fn new(console: &Console, seed: Option<u64>) -> Self {
            Self {
                rng: sensor_rng(seed),
                console: console.clone(),
            }
        }

        pub fn temperature(&mut self) -> i32 {
            let current = self.rng.gen_range(SENSOR_RANGE);
            self.console.say(format!("Current Temperature: {current}"));
            current
        }
    }

    pub struct HeaterIoChannel {
        console: Console,
    }

    impl HeaterIoChannel {
        pub fn new(console: &Console) -> Self {
            Self {
                console: console.clone(),
            }
        }

        pub fn start(&self) {
            self.console.say("Heater started");
        }

        pub fn disengage(&self) {
            self.console.say("Heater stopped");
        }
    }

    pub struct TemperatureRegulator {
        thermometer: ThermometerIoChannel,
        heater: HeaterIoChannel,
    }

    impl TemperatureRegulator {
        pub fn new(thermometer: ThermometerIoChannel, heater: HeaterIoChannel) -> Self {
            Self {
                thermometer,
                heater,
            }
        }

        pub fn regulate(
            &mut self,
            min_temp: i32,
            max_temp: i32,
            settings: &RegulatorSettings,
        ) -> RegulationReport {
            let mut report = RegulationReport::default();
            let mut heating = false;
            while report.readings < settings.max_readings {
                let current = self.thermometer.temperature();
                report.readings += 1;
                if !heating && current <= min_temp {
                    self.heater.start();
                    report.starts += 1;
                    heating = true;
                } else if heating && current >= max_temp {
                    self.heater.disengage();
                    report.stops += 1;
                    heating = false;
                } else {
                    pause(settings.poll_interval());
                }
            }
            report
        }
    }
}

// =============================================================================
// Abstractions owned by the high-level module
// =============================================================================

pub trait Thermometer {
    fn temperature(&mut self) -> i32;
}

pub trait Heater {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Simulated sensor reading uniformly from [`SENSOR_RANGE`].
pub struct ThermometerIoChannel {
    rng: StdRng,
    console: Console,
}

impl ThermometerIoChannel {
    pub fn new(console: &Console, seed: Option<u64>) -> Self {
        Self {
            rng: sensor_rng(seed),
            console: console.clone(),
        }
    }
}

impl Thermometer for ThermometerIoChannel {
    fn temperature(&mut self) -> i32 {
        let current = self.rng.gen_range(SENSOR_RANGE);
        self.console.say(format!("Current Temperature: {current}"));
        current
    }
}

pub struct HeaterIoChannel {
    console: Console,
}

impl HeaterIoChannel {
    pub fn new(console: &Console) -> Self {
        Self {
            console: console.clone(),
        }
    }
}

impl Heater for HeaterIoChannel {
    fn start(&mut self) {
        self.console.say("Heater started");
    }

    fn stop(&mut self) {
        self.console.say("Heater stopped");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    WaitingToHeat,
    Heating,
}

pub struct TemperatureRegulator<T: Thermometer, H: Heater> {
    thermometer: T,
    heater: H,
    poll_interval: Duration,
    max_readings: usize,
}

impl<T: Thermometer, H: Heater> TemperatureRegulator<T, H> {
    pub fn new(thermometer: T, heater: H, settings: &RegulatorSettings) -> Self {
        Self {
            thermometer,
            heater,
            poll_interval: settings.poll_interval(),
            max_readings: settings.max_readings,
        }
    }

    pub fn regulate(&mut self, min_temp: i32, max_temp: i32) -> RegulationReport {
        info!(min_temp, max_temp, budget = self.max_readings, "regulating");
        let mut report = RegulationReport::default();
        let mut phase = Phase::WaitingToHeat;

        while report.readings < self.max_readings {
            let current = self.thermometer.temperature();
            report.readings += 1;

            phase = match phase {
                Phase::WaitingToHeat if current <= min_temp => {
                    self.heater.start();
                    report.starts += 1;
                    Phase::Heating
                }
                Phase::Heating if current >= max_temp => {
                    self.heater.stop();
                    report.stops += 1;
                    Phase::WaitingToHeat
                }
                unchanged => {
                    debug!(current, ?unchanged, "polling again");
                    pause(self.poll_interval);
                    unchanged
                }
            };
        }

        report
    }

    pub fn into_parts(self) -> (T, H) {
        (self.thermometer, self.heater)
    }
}

pub fn demo(console: &Console, settings: &Settings) -> Result<(), PatternError> {
    settings.validate()?;
    let regulator_settings = &settings.regulator;
    let min_temp = regulator_settings.min_temp;
    let max_temp = regulator_settings.max_temp;

    let mut regulator = problem::TemperatureRegulator::new(
        problem::ThermometerIoChannel::new(console, regulator_settings.seed),
        problem::HeaterIoChannel::new(console),
    );
    let report = regulator.regulate(min_temp, max_temp, regulator_settings);
    console.say(format!(
        "Concrete regulator: {} readings, {} starts, {} stops",
        report.readings, report.starts, report.stops
    ));

    let mut regulator = TemperatureRegulator::new(
        ThermometerIoChannel::new(console, regulator_settings.seed),
        HeaterIoChannel::new(console),
        regulator_settings,
    );
    let report = regulator.regulate(min_temp, max_temp);
    console.say(format!(
        "Inverted regulator: {} readings, {} starts, {} stops",
        report.readings, report.starts, report.stops
    ));

    Ok(())
}
