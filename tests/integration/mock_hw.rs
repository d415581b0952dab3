//! Mock adapters for integration tests.
//!
//! Records every relay write and every emitted event so tests can assert
//! on the full history without touching real GPIO or UART registers.

use std::collections::VecDeque;

use growlight::app::events::AppEvent;
use growlight::app::ports::{ClimatePort, EventSink, LinePort, RelayPort};
use growlight::app::status::ClimateReading;
use growlight::error::CommsError;
use growlight::link::codec::Line;

// ── MockHardware ──────────────────────────────────────────────

/// Relay + climate sensor.  Readings are served from a script; once it
/// runs dry the last reading repeats.
pub struct MockHardware {
    pub relay_writes: Vec<bool>,
    pub readings: VecDeque<ClimateReading>,
    pub last_reading: ClimateReading,
    pub sensor_reads: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            relay_writes: Vec::new(),
            readings: VecDeque::new(),
            last_reading: ClimateReading::new(22.0, 50.0),
            sensor_reads: 0,
        }
    }

    pub fn with_reading(reading: ClimateReading) -> Self {
        let mut hw = Self::new();
        hw.last_reading = reading;
        hw
    }

    /// Physical relay state as last written.
    pub fn relay_on(&self) -> bool {
        self.relay_writes.last().copied().unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayPort for MockHardware {
    fn set_light(&mut self, on: bool) {
        self.relay_writes.push(on);
    }
}

impl ClimatePort for MockHardware {
    fn read_climate(&mut self) -> ClimateReading {
        self.sensor_reads += 1;
        if let Some(next) = self.readings.pop_front() {
            self.last_reading = next;
        }
        self.last_reading
    }
}

// ── ScriptedLink ──────────────────────────────────────────────

/// Host link fed with whole lines; captures every reply.
#[derive(Default)]
pub struct ScriptedLink {
    pub inbound: VecDeque<Line>,
    pub replies: Vec<String>,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl ScriptedLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&mut self, line: &str) {
        let line = Line::try_from(line).expect("test line fits");
        self.inbound.push_back(line);
    }

    pub fn last_reply(&self) -> Option<&str> {
        self.replies.last().map(String::as_str)
    }
}

impl LinePort for ScriptedLink {
    fn read_line(&mut self) -> Option<Line> {
        self.inbound.pop_front()
    }

    fn write_line(&mut self, line: &str) -> Result<(), CommsError> {
        if self.fail_writes {
            return Err(CommsError::WriteFailed);
        }
        self.replies.push(line.to_string());
        Ok(())
    }
}

// ── LogSink ───────────────────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
