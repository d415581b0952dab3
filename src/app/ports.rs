//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControllerService (domain)
//! ```
//!
//! Driven adapters (relay, climate sensor, serial link, clock, event sinks)
//! implement these traits.  The [`ControllerService`](super::service::ControllerService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::error::CommsError;
use crate::link::codec::Line;

use super::events::AppEvent;
use super::status::ClimateReading;

// ───────────────────────────────────────────────────────────────
// Climate port (driven adapter: sensor → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the temperature/humidity sensor.
pub trait ClimatePort {
    /// Read the sensor once, synchronously.  A failed read is reported as
    /// NaN in the affected field(s), never as an error.
    fn read_climate(&mut self) -> ClimateReading;
}

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the light relay.
pub trait RelayPort {
    /// Drive the light on or off.  Idempotent; safe to repeat with an
    /// unchanged value.  Polarity is the adapter's concern.
    fn set_light(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Line port (driven adapter: domain ↔ host serial link)
// ───────────────────────────────────────────────────────────────

/// Newline-delimited text link to the host.
pub trait LinePort {
    /// Return the next complete, trimmed line if one has arrived.
    /// Never blocks; `None` means nothing to do this iteration.
    fn read_line(&mut self) -> Option<Line>;

    /// Write `line` followed by a newline as one uninterrupted unit.
    fn write_line(&mut self, line: &str) -> Result<(), CommsError>;
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: monotonic clock → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic milliseconds since boot.
pub trait TimePort {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
