//! GPIO pin assignments for the reference board.
//!
//! Single source of truth for the firmware binary; library users pass
//! their own pins to [`KeySwitch`](crate::KeySwitch).

/// Momentary switch to ground (active low, internal pull-up).
pub const KEY_GPIO: i32 = 9;

/// Main loop poll interval.  Must stay well below the debounce window.
pub const POLL_INTERVAL_MS: u64 = 5;
