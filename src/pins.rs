//! GPIO / peripheral pin assignments for the controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  `main` maps these onto the HAL pin types.

// ---------------------------------------------------------------------------
// Light relay (optocoupled relay module)
// ---------------------------------------------------------------------------

/// Digital output driving the relay module input.
pub const RELAY_GPIO: i32 = 8;
/// The relay module energises on a LOW input, so "light on" is the low
/// physical level.  Fixed by the wiring, not configurable at runtime.
pub const RELAY_ACTIVE_LOW: bool = true;

// ---------------------------------------------------------------------------
// Climate sensor (DHT11, single-wire, open drain with pull-up)
// ---------------------------------------------------------------------------

pub const DHT11_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Host link (UART0, USB bridge)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 21;
pub const UART_RX_GPIO: i32 = 20;
