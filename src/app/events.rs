//! Outbound application events.
//!
//! The [`ControllerService`](super::service::ControllerService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  They are for
//! observation only (logs, tests); nothing on the host link depends on them.

use crate::error::{CommsError, ProtocolError};

use super::clock::TimeOfDay;
use super::mode::Mode;
use super::status::StatusLine;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started; the relay has been forced off.
    Started,

    /// AUTO ↔ MANUAL transition.
    ModeChanged { from: Mode, to: Mode },

    /// The logical light state changed.
    LightChanged { on: bool, mode: Mode },

    /// The host set the clock.
    ClockSet(TimeOfDay),

    /// The internal clock advanced one minute.
    MinuteTick(TimeOfDay),

    /// A time-set command was understood but its values were rejected.
    CommandRejected(ProtocolError),

    /// A status line was written to the host.
    StatusReported(StatusLine),

    /// The host link failed while writing.
    LinkError(CommsError),
}
