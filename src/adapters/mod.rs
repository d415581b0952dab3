//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                 |
//! |------------|--------------|-----------------------------|
//! | `hardware` | ClimatePort  | DHT11 on GPIO 2             |
//! |            | RelayPort    | Relay module on GPIO 8      |
//! | `log_sink` | EventSink    | Serial log output           |
//! | `time`     | TimePort     | ESP32 high-resolution timer |
//!
//! The host link's [`LinePort`](crate::app::ports::LinePort) adapter lives
//! in [`link::serial`](crate::link::serial).

pub mod hardware;
pub mod log_sink;
pub mod time;
