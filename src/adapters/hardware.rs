//! Hardware adapter. Bridges real peripherals to domain port traits.
//!
//! Owns the [`RelayDriver`] and the [`Dht11`] sensor, exposing them
//! through [`RelayPort`] and [`ClimatePort`].  Driver errors stop here:
//! a failed sensor read becomes a NaN reading and a failed relay write is
//! logged, so the control loop never halts on a hardware fault.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::{debug, warn};

use crate::app::ports::{ClimatePort, RelayPort};
use crate::app::status::ClimateReading;
use crate::drivers::dht11::Dht11;
use crate::drivers::relay::RelayDriver;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<R, P, D>
where
    R: OutputPin,
    P: InputPin + OutputPin,
    D: DelayNs,
{
    relay: RelayDriver<R>,
    dht: Dht11<P, D>,
    sensor_failures: u32,
}

impl<R, P, D> HardwareAdapter<R, P, D>
where
    R: OutputPin,
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(relay: RelayDriver<R>, dht: Dht11<P, D>) -> Self {
        Self {
            relay,
            dht,
            sensor_failures: 0,
        }
    }

    pub fn relay(&self) -> &RelayDriver<R> {
        &self.relay
    }

    /// Sensor reads that failed since construction.
    pub fn sensor_failures(&self) -> u32 {
        self.sensor_failures
    }
}

// ── ClimatePort implementation ────────────────────────────────

impl<R, P, D> ClimatePort for HardwareAdapter<R, P, D>
where
    R: OutputPin,
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn read_climate(&mut self) -> ClimateReading {
        match self.dht.read() {
            Ok(r) => ClimateReading::new(r.temperature_c, r.humidity_pct),
            Err(e) => {
                self.sensor_failures = self.sensor_failures.saturating_add(1);
                debug!("DHT11 read failed: {}", e);
                ClimateReading::UNAVAILABLE
            }
        }
    }
}

// ── RelayPort implementation ──────────────────────────────────

impl<R, P, D> RelayPort for HardwareAdapter<R, P, D>
where
    R: OutputPin,
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn set_light(&mut self, on: bool) {
        if let Err(e) = self.relay.set(on) {
            warn!("Relay write failed (on={}): {}", on, e);
        }
    }
}
