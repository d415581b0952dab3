//! Peripheral drivers over embedded-hal 1.0 traits.

pub mod dht11;
pub mod relay;
