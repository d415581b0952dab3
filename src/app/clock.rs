//! Free-running minute clock.
//!
//! The board has no RTC.  Time of day is kept as an hour/minute pair that
//! the control loop advances once per elapsed tick interval, and the host
//! re-synchronises it periodically with a time-set command.  Power loss
//! resets it to 00:00.

use core::fmt;

use crate::error::ProtocolError;

// ---------------------------------------------------------------------------
// Time of day
// ---------------------------------------------------------------------------

/// A validated wall-clock time with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// `None` unless `hour <= 23` and `minute <= 59`.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Validate raw integers parsed off the wire.
    pub fn from_raw(hour: i64, minute: i64) -> Result<Self, ProtocolError> {
        if !(0..24).contains(&hour) {
            return Err(ProtocolError::HourOutOfRange(hour));
        }
        if !(0..60).contains(&minute) {
            return Err(ProtocolError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since 00:00 (0..1440).
    pub fn minute_of_day(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// ---------------------------------------------------------------------------
// Clock state
// ---------------------------------------------------------------------------

/// The clock fields of the controller state record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockState {
    hour: u8,
    minute: u8,
    /// Monotonic timestamp (ms) of the last consumed minute boundary.
    last_tick_ms: u64,
}

impl ClockState {
    /// Boot state: 00:00, boundary at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            hour: 0,
            minute: 0,
            last_tick_ms: now_ms,
        }
    }

    pub fn time(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hour,
            minute: self.minute,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    /// Advance by one minute, rolling over 59 → 0 and 23:59 → 00:00.
    pub fn advance_one_minute(&mut self) {
        self.minute += 1;
        if self.minute >= 60 {
            self.minute = 0;
            self.hour += 1;
            if self.hour >= 24 {
                self.hour = 0;
            }
        }
    }

    /// Overwrite the time and restart the tick interval from `now_ms`, so
    /// the next automatic advance is a full interval away.
    pub fn set_time(&mut self, time: TimeOfDay, now_ms: u64) {
        self.hour = time.hour;
        self.minute = time.minute;
        self.last_tick_ms = now_ms;
    }

    /// Whether at least `interval_ms` has elapsed since the last boundary.
    pub fn is_tick_due(&self, now_ms: u64, interval_ms: u32) -> bool {
        now_ms.saturating_sub(self.last_tick_ms) >= interval_ms as u64
    }

    /// Consume a minute boundary at `now_ms`.
    pub fn mark_ticked(&mut self, now_ms: u64) {
        self.last_tick_ms = now_ms;
    }
}
