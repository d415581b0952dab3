//! [`LinePort`] over any byte [`Transport`].

use log::warn;

use crate::app::ports::LinePort;
use crate::error::CommsError;

use super::codec::{Line, LineDecoder};
use super::transport::Transport;

/// Zero-length writes tolerated in a row before a write is abandoned.
const MAX_STALLED_WRITES: u8 = 8;

/// Line-oriented host link.
pub struct SerialLink<T: Transport> {
    transport: T,
    decoder: LineDecoder,
}

impl<T: Transport> SerialLink<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            decoder: LineDecoder::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    fn write_all(&mut self, mut data: &[u8]) -> Result<(), CommsError> {
        let mut stalled = 0u8;
        while !data.is_empty() {
            match self.transport.write(data) {
                Ok(0) => {
                    stalled += 1;
                    if stalled >= MAX_STALLED_WRITES {
                        return Err(CommsError::WriteStalled);
                    }
                }
                Ok(n) => {
                    stalled = 0;
                    data = &data[n.min(data.len())..];
                }
                Err(e) => {
                    warn!("Serial write failed: {:?}", e);
                    return Err(CommsError::WriteFailed);
                }
            }
        }
        Ok(())
    }
}

impl<T: Transport> LinePort for SerialLink<T> {
    /// Pull bytes one at a time until a line completes or the transport
    /// runs dry.  Bytes after the first complete line stay queued in the
    /// transport for the next call.
    fn read_line(&mut self) -> Option<Line> {
        let mut byte = [0u8; 1];
        loop {
            match self.transport.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(line) = self.decoder.push(byte[0]) {
                        return Some(line);
                    }
                }
                Err(e) => {
                    warn!("Serial read failed: {:?}", e);
                    self.decoder.reset();
                    return None;
                }
            }
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), CommsError> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")?;
        self.transport.flush().map_err(|e| {
            warn!("Serial flush failed: {:?}", e);
            CommsError::WriteFailed
        })
    }
}
