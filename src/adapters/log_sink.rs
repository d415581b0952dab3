//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (the ESP-IDF logger on device).  While the console
//! shares UART0 with the host link, `main` sets the maximum level to `Off`
//! (see [`ControllerConfig::console_log_level`]) and these records are
//! dropped before they reach the wire.
//!
//! [`ControllerConfig::console_log_level`]: crate::config::ControllerConfig::console_log_level

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | relay forced off, clock 00:00, mode=Auto");
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {:?}", from, to);
            }
            AppEvent::LightChanged { on, mode } => {
                info!("LIGHT | {} ({:?})", if *on { "ON" } else { "OFF" }, mode);
            }
            AppEvent::ClockSet(t) => {
                info!("CLOCK | set to {}", t);
            }
            AppEvent::MinuteTick(t) => {
                debug!("TICK | {}", t);
            }
            AppEvent::CommandRejected(e) => {
                warn!("CLOCK | time-set rejected: {}", e);
            }
            AppEvent::StatusReported(s) => {
                debug!("STATUS | {}", s);
            }
            AppEvent::LinkError(e) => {
                warn!("LINK | {}", e);
            }
        }
    }
}
