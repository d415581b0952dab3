//! Unified error types for the growlight firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! control loop's error handling uniform.  All variants are `Copy` so they
//! can be passed through events and logs without allocation.
//!
//! None of these are fatal: the control loop logs them and carries on.
//! Driver errors ([`SensorError`], [`ActuatorError`]) are handled inside the
//! hardware adapter and never reach [`Error`].

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The serial link failed.
    Comms(CommsError),
    /// A line was understood but its arguments were rejected.
    Protocol(ProtocolError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comms(e) => write!(f, "comms: {e}"),
            Self::Protocol(e) => write!(f, "protocol: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor did not answer within the protocol's timing window.
    Timeout,
    /// The data frame arrived but its checksum did not match.
    Checksum,
    /// The data pin could not be read or driven.
    Pin,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "sensor timed out"),
            Self::Checksum => write!(f, "checksum mismatch"),
            Self::Pin => write!(f, "data pin error"),
        }
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Communications errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommsError {
    /// The transport reported a read failure.
    ReadFailed,
    /// The transport reported a write failure.
    WriteFailed,
    /// The transport accepted zero bytes of a pending write.
    WriteStalled,
    /// The outgoing line does not fit the line buffer.
    LineTooLong,
}

impl fmt::Display for CommsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "serial read failed"),
            Self::WriteFailed => write!(f, "serial write failed"),
            Self::WriteStalled => write!(f, "serial write stalled"),
            Self::LineTooLong => write!(f, "line too long"),
        }
    }
}

impl From<CommsError> for Error {
    fn from(e: CommsError) -> Self {
        Self::Comms(e)
    }
}

// ---------------------------------------------------------------------------
// Protocol errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Time-set hour outside 0..=23.
    HourOutOfRange(i64),
    /// Time-set minute outside 0..=59.
    MinuteOutOfRange(i64),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HourOutOfRange(h) => write!(f, "hour {h} out of range"),
            Self::MinuteOutOfRange(m) => write!(f, "minute {m} out of range"),
        }
    }
}

impl From<ProtocolError> for Error {
    fn from(e: ProtocolError) -> Self {
        Self::Protocol(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
