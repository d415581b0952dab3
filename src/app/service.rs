//! Controller service, the hexagonal core.
//!
//! [`ControllerService`] owns the shared [`ControllerState`] and the mode
//! controller.  It exposes one entry point per loop iteration, [`poll`],
//! plus the individual steps for tests.  All I/O flows through port traits
//! injected at call sites.
//!
//! ```text
//!   LinePort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                │    ControllerService     │
//!  ClimatePort ─▶│ Interpreter · Clock ·    │
//!                │ ModeController · Status  │──▶ RelayPort
//!                └──────────────────────────┘
//! ```
//!
//! Each iteration handles at most one command line, then checks the minute
//! tick.  Both run every iteration, commands first.
//!
//! [`poll`]: ControllerService::poll

use log::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::error::{Error, Result};

use super::clock::TimeOfDay;
use super::commands::Command;
use super::events::AppEvent;
use super::mode::{LightSchedule, Mode, ModeController};
use super::ports::{ClimatePort, EventSink, LinePort, RelayPort};
use super::state::ControllerState;
use super::status::StatusLine;

// ───────────────────────────────────────────────────────────────
// ControllerService
// ───────────────────────────────────────────────────────────────

/// Orchestrates the clock, mode controller, interpreter and reporter.
pub struct ControllerService {
    state: ControllerState,
    modes: ModeController,
    /// Real time per clock minute.
    tick_interval_ms: u32,
    iterations: u64,
}

impl ControllerService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch the relay; call [`start`](Self::start) next.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            state: ControllerState::default(),
            modes: ModeController::new(LightSchedule::from_config(&config)),
            tick_interval_ms: config.tick_interval_ms,
            iterations: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Reset to the boot state and force the relay off before any command
    /// or tick can run.
    pub fn start(&mut self, now_ms: u64, relay: &mut impl RelayPort, sink: &mut impl EventSink) {
        self.state = ControllerState::new(now_ms);
        relay.set_light(false);
        sink.emit(&AppEvent::Started);
        info!(
            "ControllerService started at {} (window {:02}:00-{:02}:00)",
            self.state.time(),
            self.modes.schedule().on_hour,
            self.modes.schedule().off_hour
        );
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one loop iteration: dispatch at most one pending line, then
    /// advance the clock if a minute has elapsed.
    ///
    /// The `hw` parameter satisfies **both** [`ClimatePort`] and
    /// [`RelayPort`], so one mutable borrow covers both.
    pub fn poll(
        &mut self,
        now_ms: u64,
        hw: &mut (impl ClimatePort + RelayPort),
        link: &mut impl LinePort,
        sink: &mut impl EventSink,
    ) {
        self.iterations += 1;

        if let Some(line) = link.read_line() {
            self.handle_line(&line, now_ms, hw, link, sink);
        }

        self.tick(now_ms, hw, sink);
    }

    /// Advance the clock by one minute if the tick interval has elapsed,
    /// and re-evaluate the relay when in AUTO.  Returns whether a tick ran.
    ///
    /// At most one minute is consumed per call; a late call does not catch
    /// up on missed minutes.
    pub fn tick(&mut self, now_ms: u64, relay: &mut impl RelayPort, sink: &mut impl EventSink) -> bool {
        if !self.state.clock.is_tick_due(now_ms, self.tick_interval_ms) {
            return false;
        }

        let before = self.state;
        self.state.clock.advance_one_minute();
        self.state.clock.mark_ticked(now_ms);
        sink.emit(&AppEvent::MinuteTick(self.state.time()));

        if self.state.mode == Mode::Auto {
            self.modes.apply_schedule(&mut self.state, relay);
        }

        self.emit_transitions(&before, sink);
        true
    }

    // ── Command handling ──────────────────────────────────────

    /// Interpret one line.  Returns `false` when the line is not a command;
    /// such lines get no reply and change nothing.
    pub fn handle_line(
        &mut self,
        line: &str,
        now_ms: u64,
        hw: &mut (impl ClimatePort + RelayPort),
        link: &mut impl LinePort,
        sink: &mut impl EventSink,
    ) -> bool {
        match Command::parse(line) {
            Some(cmd) => {
                self.handle_command(cmd, now_ms, hw, link, sink);
                true
            }
            None => {
                debug!("Ignored line {:?}", line);
                false
            }
        }
    }

    /// Apply exactly one command.
    pub fn handle_command(
        &mut self,
        cmd: Command,
        now_ms: u64,
        hw: &mut (impl ClimatePort + RelayPort),
        link: &mut impl LinePort,
        sink: &mut impl EventSink,
    ) {
        let before = self.state;

        match cmd {
            Command::Manual(on) => self.modes.set_manual(on, &mut self.state, hw),
            Command::Auto => self.modes.set_auto(&mut self.state, hw),
            Command::SetTime { hour, minute } => match TimeOfDay::from_raw(hour, minute) {
                Ok(time) => {
                    self.state.clock.set_time(time, now_ms);
                    info!("Clock set to {}", time);
                    sink.emit(&AppEvent::ClockSet(time));
                    // The light tracks the new time at once in AUTO; the
                    // host reads it back with the next `D`.
                    if self.state.mode == Mode::Auto {
                        self.modes.apply_schedule(&mut self.state, hw);
                    }
                }
                Err(e) => {
                    warn!("Time-set rejected: {}", e);
                    sink.emit(&AppEvent::CommandRejected(e));
                }
            },
            Command::ReportStatus => {
                if let Err(e) = self.report(hw, link, sink) {
                    warn!("Status report failed: {}", e);
                }
            }
        }

        self.emit_transitions(&before, sink);
    }

    /// Read the sensor once and write one status line to the host.
    pub fn report(
        &self,
        sensor: &mut impl ClimatePort,
        link: &mut impl LinePort,
        sink: &mut impl EventSink,
    ) -> Result<StatusLine> {
        let reading = sensor.read_climate();
        if !reading.is_valid() {
            debug!("Climate read failed, reporting zeros");
        }

        let status = StatusLine::capture(&self.state, reading);
        let rendered = status.render()?;

        if let Err(e) = link.write_line(&rendered) {
            sink.emit(&AppEvent::LinkError(e));
            return Err(Error::Comms(e));
        }

        sink.emit(&AppEvent::StatusReported(status));
        Ok(status)
    }

    // ── Queries ───────────────────────────────────────────────

    /// The shared state record.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn time(&self) -> TimeOfDay {
        self.state.time()
    }

    pub fn is_light_on(&self) -> bool {
        self.state.light_on
    }

    pub fn schedule(&self) -> LightSchedule {
        self.modes.schedule()
    }

    /// Loop iterations executed since construction.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    // ── Internal ──────────────────────────────────────────────

    fn emit_transitions(&self, before: &ControllerState, sink: &mut impl EventSink) {
        if before.mode != self.state.mode {
            sink.emit(&AppEvent::ModeChanged {
                from: before.mode,
                to: self.state.mode,
            });
        }
        if before.light_on != self.state.light_on {
            sink.emit(&AppEvent::LightChanged {
                on: self.state.light_on,
                mode: self.state.mode,
            });
        }
    }
}
