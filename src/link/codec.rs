//! Newline line codec.
//!
//! Wire format:
//! ```text
//! ┌──────────────────────────────┬────┐
//! │ ASCII text (≤ MAX_LINE_LEN)  │ \n │
//! └──────────────────────────────┴────┘
//! ```
//!
//! The decoder accumulates incoming bytes and yields one trimmed line per
//! `\n`.  A trailing `\r` is removed by the trim.  Over-long lines are
//! dropped in full: everything up to the next `\n` is discarded so the
//! tail of a long line is never mistaken for a command.

use heapless::{String, Vec};
use log::{debug, warn};

/// Longest line the decoder will hold, terminator excluded.
pub const MAX_LINE_LEN: usize = 64;

/// One decoded, trimmed line.
pub type Line = String<MAX_LINE_LEN>;

/// Decoder state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    /// Collecting bytes of the current line.
    Collecting,
    /// The current line overflowed; skip until the next newline.
    Discarding,
}

/// Streaming line decoder.
pub struct LineDecoder {
    state: DecoderState,
    buf: Vec<u8, MAX_LINE_LEN>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Collecting,
            buf: Vec::new(),
        }
    }

    /// Feed one byte.
    ///
    /// Returns `Some(line)` when `byte` completes a line.  Blank lines and
    /// lines that are not valid UTF-8 yield nothing.
    pub fn push(&mut self, byte: u8) -> Option<Line> {
        match self.state {
            DecoderState::Discarding => {
                if byte == b'\n' {
                    self.state = DecoderState::Collecting;
                }
                None
            }
            DecoderState::Collecting => {
                if byte == b'\n' {
                    return self.finish();
                }
                if self.buf.push(byte).is_err() {
                    warn!("Line exceeds {} bytes, discarding", MAX_LINE_LEN);
                    self.buf.clear();
                    self.state = DecoderState::Discarding;
                }
                None
            }
        }
    }

    /// Whether a partial line is buffered.
    pub fn is_pending(&self) -> bool {
        !self.buf.is_empty() || self.state == DecoderState::Discarding
    }

    /// Reset decoder state (e.g. after a transport error).
    pub fn reset(&mut self) {
        self.buf.clear();
        self.state = DecoderState::Collecting;
    }

    fn finish(&mut self) -> Option<Line> {
        let raw = core::mem::take(&mut self.buf);
        let Ok(text) = core::str::from_utf8(&raw) else {
            debug!("Dropped non-UTF-8 line ({} bytes)", raw.len());
            return None;
        };
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Line::try_from(text).ok()
    }
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}
