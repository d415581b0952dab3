//! Light relay driver.
//!
//! The relay module input is active-low (see [`pins::RELAY_ACTIVE_LOW`]),
//! so the driver translates logical on/off into the physical level.  The
//! output is driven OFF as soon as the driver is constructed, before the
//! controller gets a chance to run.
//!
//! Generic over any embedded-hal 1.0 [`OutputPin`]: a `PinDriver` on
//! ESP-IDF, a recording mock on host.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::error::ActuatorError;
use crate::pins;

pub struct RelayDriver<P: OutputPin> {
    pin: P,
    on: bool,
    write_failures: u32,
}

impl<P: OutputPin> RelayDriver<P> {
    /// Take ownership of `pin` and force the relay off.
    ///
    /// A failed initial write is counted and logged, not returned; the pin
    /// is retried on every later write.
    pub fn new(pin: P) -> Self {
        let mut relay = Self {
            pin,
            on: false,
            write_failures: 0,
        };
        if let Err(e) = relay.set(false) {
            warn!("Relay could not be forced off at start: {}", e);
        }
        relay
    }

    /// Drive the relay.  The logical state is updated even if the pin
    /// write fails, so it always reflects the last command.
    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.on = on;
        let high = on != pins::RELAY_ACTIVE_LOW;
        let res = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|_| {
            self.write_failures = self.write_failures.saturating_add(1);
            ActuatorError::GpioWriteFailed
        })
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Pin writes that returned an error since construction.
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }

    pub fn release(self) -> P {
        self.pin
    }
}
