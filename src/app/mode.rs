//! AUTO / MANUAL mode controller.
//!
//! ```text
//!            ON | OFF                 AUTO
//!   ┌──────┐ ───────▶ ┌────────┐ ───────────▶ ┌──────┐
//!   │ AUTO │          │ MANUAL │              │ AUTO │
//!   └──────┘ ◀─────── └────────┘              └──────┘
//!      ▲ tick: apply_schedule     ▲ tick: no-op
//! ```
//!
//! In AUTO the relay follows [`LightSchedule`]; in MANUAL it holds the last
//! explicit ON/OFF until AUTO is received.  Every decision writes the relay,
//! even when the value is unchanged.

use log::info;

use crate::config::ControllerConfig;

use super::ports::RelayPort;
use super::state::ControllerState;

/// Operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Auto,
    Manual,
}

// ───────────────────────────────────────────────────────────────
// Schedule window
// ───────────────────────────────────────────────────────────────

/// Daily on-window, half-open `[on_hour, off_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSchedule {
    /// First lit hour (0-23).
    pub on_hour: u8,
    /// First dark hour (0-23).
    pub off_hour: u8,
}

impl LightSchedule {
    pub const HOUR_ON: u8 = 6;
    pub const HOUR_OFF: u8 = 20;

    pub const fn new(on_hour: u8, off_hour: u8) -> Self {
        Self { on_hour, off_hour }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(config.light_on_hour, config.light_off_hour)
    }

    /// Check if the light should be on during `hour`.
    pub fn is_lit(&self, hour: u8) -> bool {
        if self.on_hour <= self.off_hour {
            // e.g. 6..20 (daytime)
            hour >= self.on_hour && hour < self.off_hour
        } else {
            // e.g. 22..4 (wraps around midnight)
            hour >= self.on_hour || hour < self.off_hour
        }
    }
}

impl Default for LightSchedule {
    fn default() -> Self {
        Self::new(Self::HOUR_ON, Self::HOUR_OFF)
    }
}

// ───────────────────────────────────────────────────────────────
// Mode controller
// ───────────────────────────────────────────────────────────────

/// Owns the decision rule; the mode flag and light state live in
/// [`ControllerState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeController {
    schedule: LightSchedule,
}

impl ModeController {
    pub fn new(schedule: LightSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> LightSchedule {
        self.schedule
    }

    /// Derive the light from the current hour and drive the relay.
    pub fn apply_schedule(&self, state: &mut ControllerState, relay: &mut impl RelayPort) {
        state.light_on = self.schedule.is_lit(state.clock.hour());
        relay.set_light(state.light_on);
    }

    /// Enter MANUAL and force the light to `on`.
    pub fn set_manual(&self, on: bool, state: &mut ControllerState, relay: &mut impl RelayPort) {
        if state.mode != Mode::Manual {
            info!("Mode: AUTO -> MANUAL");
        }
        state.mode = Mode::Manual;
        state.light_on = on;
        relay.set_light(on);
    }

    /// Return to AUTO and re-evaluate immediately rather than waiting for
    /// the next tick.
    pub fn set_auto(&self, state: &mut ControllerState, relay: &mut impl RelayPort) {
        if state.mode != Mode::Auto {
            info!("Mode: MANUAL -> AUTO");
        }
        state.mode = Mode::Auto;
        self.apply_schedule(state, relay);
    }
}
