//! Fuzz target: `LineDecoder::push` → `Command::parse`
//!
//! Drives arbitrary byte sequences through the line decoder and parses
//! every completed line as a host command.  Neither stage may panic, and
//! every yielded line must fit the decoder cap.
//!
//! cargo fuzz run fuzz_line_decoder

#![no_main]

use growlight::app::clock::TimeOfDay;
use growlight::app::commands::Command;
use growlight::link::codec::{LineDecoder, MAX_LINE_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = LineDecoder::new();

    for &byte in data {
        if let Some(line) = decoder.push(byte) {
            assert!(line.len() <= MAX_LINE_LEN, "line exceeds MAX_LINE_LEN");
            assert!(!line.is_empty(), "decoder must not yield blank lines");

            if let Some(Command::SetTime { hour, minute }) = Command::parse(&line) {
                // Range checking must reject, never panic.
                let _ = TimeOfDay::from_raw(hour, minute);
            }
        }
    }

    // After a reset the decoder must accept bytes cleanly again.
    decoder.reset();
    assert!(!decoder.is_pending());
});
