//! Inbound commands from the host serial link.
//!
//! One trimmed line maps to at most one [`Command`].  Matching is
//! case-sensitive: `ON`, `OFF` and `AUTO` must match exactly, time-set and
//! status requests match on their first character.  Anything else is not a
//! command and is dropped without a reply.
//!
//! | Line              | Command                    |
//! |-------------------|----------------------------|
//! | `ON`              | `Manual(true)`             |
//! | `OFF`             | `Manual(false)`            |
//! | `AUTO`            | `Auto`                     |
//! | `H<any>:<h>:<m>`  | `SetTime { hour, minute }` |
//! | `D<any>`          | `ReportStatus`             |

/// Commands the host can send to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Force the light on or off and enter MANUAL.
    Manual(bool),
    /// Return to schedule-driven mode.
    Auto,
    /// Overwrite the wall clock.  Values are as parsed; range checking is
    /// the clock's job.
    SetTime { hour: i64, minute: i64 },
    /// Emit one status line.
    ReportStatus,
}

impl Command {
    /// Parse one line.  `None` means the line is ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line {
            "ON" => Some(Self::Manual(true)),
            "OFF" => Some(Self::Manual(false)),
            "AUTO" => Some(Self::Auto),
            _ if line.starts_with('H') => parse_set_time(line),
            _ if line.starts_with('D') => Some(Self::ReportStatus),
            _ => None,
        }
    }
}

/// `H<any>:<hour>:<minute>`. The hour is the text strictly between the
/// first and last colon, the minute everything after the last colon.
fn parse_set_time(line: &str) -> Option<Command> {
    let first = line.find(':')?;
    let last = line.rfind(':')?;
    // Position 0 is the `H` itself, so a colon there cannot occur; a single
    // colon leaves no hour field.
    if first == 0 || first == last {
        return None;
    }
    Some(Command::SetTime {
        hour: parse_leading_int(&line[first + 1..last]),
        minute: parse_leading_int(&line[last + 1..]),
    })
}

/// Lenient integer parse: leading whitespace, optional sign, then leading
/// digits.  Trailing text is ignored and no digits yields 0, so `"14x"` is
/// 14 and `"xx"` is 0.  Saturates instead of overflowing.
pub fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as i64)
        });

    if negative { -magnitude } else { magnitude }
}
