//! Controller configuration parameters.
//!
//! All tunable parameters for the grow light controller.  The device has no
//! configuration channel and no persistent storage, so these are compiled in
//! through [`ControllerConfig::default`].

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Schedule ---
    /// Hour (0-23) at which the light turns on in AUTO mode, inclusive.
    pub light_on_hour: u8,
    /// Hour (0-23) at which the light turns off in AUTO mode, exclusive.
    pub light_off_hour: u8,

    // --- Timing ---
    /// Real time per internal clock minute (milliseconds)
    pub tick_interval_ms: u32,

    // --- Serial ---
    /// Host link baud rate
    pub baud_rate: u32,
    /// The host link shares its UART with the IDF console.  The host reads
    /// one line per `D`, so any log record on that UART would be taken as a
    /// status reply; logging is silenced while this is set.
    pub host_link_on_console: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Schedule: 06:00 through 19:59
            light_on_hour: 6,
            light_off_hour: 20,

            // Timing
            tick_interval_ms: 60_000,

            // Serial
            baud_rate: 9600,
            host_link_on_console: true,
        }
    }
}

impl ControllerConfig {
    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.light_on_hour > 23 {
            return Err(Error::Config("light_on_hour must be 0-23"));
        }
        if self.light_off_hour > 23 {
            return Err(Error::Config("light_off_hour must be 0-23"));
        }
        if self.light_on_hour == self.light_off_hour {
            return Err(Error::Config("light window is empty"));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be non-zero"));
        }
        if self.baud_rate == 0 {
            return Err(Error::Config("baud_rate must be non-zero"));
        }
        Ok(())
    }

    /// Maximum log level the firmware may emit on the console.
    pub fn console_log_level(&self) -> LevelFilter {
        if self.host_link_on_console {
            LevelFilter::Off
        } else {
            LevelFilter::Info
        }
    }
}
