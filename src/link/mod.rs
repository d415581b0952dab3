//! Host serial link.
//!
//! Newline-delimited text over a byte transport.
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌──────────────────────┐
//! │ Transport  │──▶│ LineDecoder │──▶│ SerialLink: LinePort │──▶ ControllerService
//! │ (trait)    │   │ (framing)   │   └──────────────────────┘
//! └────────────┘   └─────────────┘              │
//!       ▲                                        │ write_line
//!       └────────────────────────────────────────┘
//! ```

pub mod codec;
pub mod serial;
pub mod transport;
