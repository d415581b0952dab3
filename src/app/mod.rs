//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the grow-light rules: the wall clock, the AUTO /
//! MANUAL mode controller, the host command interpreter and the status
//! reporter.  All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod clock;
pub mod commands;
pub mod events;
pub mod mode;
pub mod ports;
pub mod service;
pub mod state;
pub mod status;
