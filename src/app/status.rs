//! Status line reporting.
//!
//! Wire format (one line, comma-separated, newline-terminated by the link):
//!
//! ```text
//! <tempC .1>,<humidity% .0>,<light 0|1>,<HH>:<MM>,<manual 0|1>
//! 23.4,41,1,18:00,0
//! ```
//!
//! The host widget splits on `,` and reads fields positionally, so the
//! field order and the 0/1 tokens are fixed.  Numbers are printed the way
//! the Arduino float printer does: the sign comes from the unrounded value
//! and the magnitude is rounded half up, so `-0.04` prints as `-0.0`.

use core::fmt::{self, Write as _};
use core::str::FromStr;

use heapless::String;

use crate::error::{CommsError, Result};

use super::clock::TimeOfDay;
use super::state::ControllerState;

/// Capacity of a rendered status line.  Enough for two `f32::MAX`
/// renderings plus the fixed fields.
pub const STATUS_LINE_CAP: usize = 96;

// ───────────────────────────────────────────────────────────────
// Climate reading
// ───────────────────────────────────────────────────────────────

/// One temperature/humidity sample.  Either field may be NaN when the
/// sensor read failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

impl ClimateReading {
    /// What a failed sensor read looks like.
    pub const UNAVAILABLE: Self = Self {
        temperature_c: f32::NAN,
        humidity_pct: f32::NAN,
    };

    pub const fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.temperature_c.is_nan() && !self.humidity_pct.is_nan()
    }

    /// A NaN in either field zeroes both; a partial read is reported as
    /// no read at all.
    pub fn sanitized(self) -> Self {
        if self.is_valid() {
            self
        } else {
            Self::new(0.0, 0.0)
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Status line
// ───────────────────────────────────────────────────────────────

/// Everything one status line carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusLine {
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub light_on: bool,
    pub time: TimeOfDay,
    pub manual: bool,
}

impl StatusLine {
    /// Snapshot the controller state together with a (sanitised) reading.
    pub fn capture(state: &ControllerState, reading: ClimateReading) -> Self {
        let reading = reading.sanitized();
        Self {
            temperature_c: reading.temperature_c,
            humidity_pct: reading.humidity_pct,
            light_on: state.light_on,
            time: state.time(),
            manual: state.is_manual(),
        }
    }

    /// Render into a fixed-capacity buffer, without the trailing newline.
    pub fn render(&self) -> Result<String<STATUS_LINE_CAP>> {
        let mut out = String::new();
        write!(out, "{self}").map_err(|_| CommsError::LineTooLong)?;
        Ok(out)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1},{:.0},{},{},{}",
            round_half_away(self.temperature_c, 1),
            round_half_away(self.humidity_pct, 0),
            u8::from(self.light_on),
            self.time,
            u8::from(self.manual),
        )
    }
}

/// Why a host-side parse of a status line failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusParseError {
    /// Fewer or more than five comma-separated fields.
    FieldCount,
    /// Temperature or humidity is not a number.
    Number,
    /// A flag field is neither `0` nor `1`.
    Flag,
    /// The time field is not a valid `HH:MM`.
    Time,
}

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount => write!(f, "expected 5 fields"),
            Self::Number => write!(f, "bad number"),
            Self::Flag => write!(f, "bad 0/1 flag"),
            Self::Time => write!(f, "bad HH:MM time"),
        }
    }
}

impl FromStr for StatusLine {
    type Err = StatusParseError;

    /// Parse a status line the way the host does.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let mut fields = s.trim().split(',');
        let mut next = || fields.next().ok_or(StatusParseError::FieldCount);

        let temperature_c: f32 = next()?.parse().map_err(|_| StatusParseError::Number)?;
        let humidity_pct: f32 = next()?.parse().map_err(|_| StatusParseError::Number)?;
        let light_on = parse_flag(next()?)?;
        let time = parse_time(next()?)?;
        let manual = parse_flag(next()?)?;
        if fields.next().is_some() {
            return Err(StatusParseError::FieldCount);
        }

        Ok(Self {
            temperature_c,
            humidity_pct,
            light_on,
            time,
            manual,
        })
    }
}

fn parse_flag(field: &str) -> core::result::Result<bool, StatusParseError> {
    match field {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(StatusParseError::Flag),
    }
}

fn parse_time(field: &str) -> core::result::Result<TimeOfDay, StatusParseError> {
    let (h, m) = field.split_once(':').ok_or(StatusParseError::Time)?;
    let hour: u8 = h.parse().map_err(|_| StatusParseError::Time)?;
    let minute: u8 = m.parse().map_err(|_| StatusParseError::Time)?;
    TimeOfDay::new(hour, minute).ok_or(StatusParseError::Time)
}

/// Round to `decimals` places, ties away from zero.
///
/// A negative value that rounds to zero stays `-0.0` and prints with its
/// sign; an exact zero of either sign prints unsigned.
fn round_half_away(value: f32, decimals: i32) -> f32 {
    if value == 0.0 {
        return 0.0;
    }
    let scale = 10f32.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}
