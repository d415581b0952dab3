//! DHT11 temperature/humidity sensor, bit-banged over one open-drain pin.
//!
//! ```text
//!  host  ▔▔▔╲____18ms____╱▔▔▔
//!  dht              ╲_80µs_╱▔80µs▔╲_50µs_╱▔26µs▔╲_50µs_╱▔▔70µs▔▔╲ ...
//!                   └── response ──┘└──── bit 0 ───┘└──── bit 1 ───┘
//! ```
//!
//! 40 bits, MSB first: humidity integral, humidity decimal, temperature
//! integral, temperature decimal (bit 7 = sign), checksum.  A bit is 1 when
//! its high pulse is longer than [`BIT_THRESHOLD_US`].
//!
//! Pulse widths are measured by polling with 1 µs delays, so the counts run
//! slightly short of real time; the threshold sits well between the 26 µs
//! and 70 µs nominal widths.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::error::SensorError;

/// Host start pulse.  The datasheet minimum is 18 ms.
const START_LOW_MS: u32 = 20;
/// Longest any single level may last before the read is abandoned.
const LEVEL_TIMEOUT_US: u32 = 100;
/// High pulses longer than this are 1 bits.
pub const BIT_THRESHOLD_US: u32 = 40;

/// One successful sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dht11Reading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

/// Decode a raw 5-byte frame, verifying the checksum.
pub fn decode_frame(frame: [u8; 5]) -> Result<Dht11Reading, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    let humidity_pct = frame[0] as f32 + frame[1] as f32 / 10.0;
    let magnitude = frame[2] as f32 + (frame[3] & 0x7F) as f32 / 10.0;
    let temperature_c = if frame[3] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok(Dht11Reading {
        temperature_c,
        humidity_pct,
    })
}

pub struct Dht11<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Dht11<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// `pin` must be open-drain with a pull-up; it is released (high) here.
    ///
    /// A failed release is logged; the next [`read`](Self::read) drives the
    /// pin again and reports [`SensorError::Pin`] if it is still broken.
    pub fn new(mut pin: P, delay: D) -> Self {
        if let Err(e) = pin.set_high() {
            warn!("DHT11 pin release failed: {:?}", e);
        }
        Self { pin, delay }
    }

    /// Run one full transaction.  Blocks for roughly 25 ms.
    pub fn read(&mut self) -> Result<Dht11Reading, SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high().map_err(|_| SensorError::Pin)?;

        // Response: sensor pulls low ~80 µs, then high ~80 µs.
        self.wait_while(true)?;
        self.wait_while(false)?;
        self.wait_while(true)?;

        let mut frame = [0u8; 5];
        for byte in frame.iter_mut() {
            for _ in 0..8 {
                self.wait_while(false)?;
                let width = self.wait_while(true)?;
                *byte = (*byte << 1) | u8::from(width > BIT_THRESHOLD_US);
            }
        }

        decode_frame(frame)
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Wait for the line to leave `high`; returns the elapsed µs.
    fn wait_while(&mut self, high: bool) -> Result<u32, SensorError> {
        let mut elapsed = 0;
        while self.pin.is_high().map_err(|_| SensorError::Pin)? == high {
            if elapsed >= LEVEL_TIMEOUT_US {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            elapsed += 1;
        }
        Ok(elapsed)
    }
}
