//! Transport abstraction: any byte-oriented channel.
//!
//! On the device the only implementation is UART0 at the configured baud
//! rate (ESP32-C3 USB-serial bridge).  Tests supply in-memory pipes.
//!
//! [`SerialLink`](super::serial::SerialLink) is generic over `Transport`,
//! so swapping the physical channel requires zero changes to framing.

/// Byte-oriented transport channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns the number of bytes actually read.
    /// Returns 0 if no data is available (non-blocking).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write `data` to the transport.
    /// Returns the number of bytes actually written.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Block until buffered output has left the device.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

#[cfg(target_os = "espidf")]
mod uart {
    use esp_idf_hal::delay::BLOCK;
    use esp_idf_hal::uart::UartDriver;
    use esp_idf_sys::EspError;

    use super::Transport;

    impl Transport for UartDriver<'_> {
        type Error = EspError;

        fn read(&mut self, buf: &mut [u8]) -> Result<usize, EspError> {
            // Zero ticks: return whatever is already in the RX ring.
            UartDriver::read(self, buf, 0)
        }

        fn write(&mut self, data: &[u8]) -> Result<usize, EspError> {
            UartDriver::write(self, data)
        }

        fn flush(&mut self) -> Result<(), EspError> {
            self.wait_tx_done(BLOCK)
        }
    }
}
