//! The controller's single shared state record.
//!
//! `ControllerState` is created once at boot and threaded by reference
//! through the clock, mode controller, interpreter and status reporter.
//! Nothing is persisted; a reset starts again from [`ControllerState::new`].

use super::clock::{ClockState, TimeOfDay};
use super::mode::Mode;

/// Clock, mode and logical light state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    /// Time of day and the last consumed minute boundary.
    pub clock: ClockState,
    /// AUTO derives the light from the schedule; MANUAL holds the last
    /// explicit ON/OFF.
    pub mode: Mode,
    /// Last commanded or derived relay state.  Kept equal to what was last
    /// written to the physical output.
    pub light_on: bool,
}

impl ControllerState {
    /// Boot state: 00:00, AUTO, light off.
    pub fn new(now_ms: u64) -> Self {
        Self {
            clock: ClockState::new(now_ms),
            mode: Mode::Auto,
            light_on: false,
        }
    }

    pub fn time(&self) -> TimeOfDay {
        self.clock.time()
    }

    pub fn is_manual(&self) -> bool {
        self.mode == Mode::Manual
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new(0)
    }
}
