//! Port traits: the boundary between the gesture detector and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ KeySwitch (domain)
//! ```
//!
//! The detector consumes three capabilities:
//!
//! - a raw level read, via [`embedded_hal::digital::InputPin`],
//! - a monotonic millisecond clock, via [`Clock`],
//! - one-time pin mode setup, via [`InputSetup`].
//!
//! Adapters in [`crate::adapters`] implement these for the host and for
//! ESP-IDF; tests implement them with scripted mocks.

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter.
///
/// The value may wrap after `u32::MAX` ms (~49.7 days).  The detector only
/// ever computes `now.wrapping_sub(then)`, which stays correct across a
/// single wrap.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<F> Clock for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}

// ───────────────────────────────────────────────────────────────
// Input setup port
// ───────────────────────────────────────────────────────────────

/// One-time input pin configuration.
///
/// Called once by [`KeySwitch::initialize`](crate::KeySwitch::initialize).
/// `pull_up` is `true` for active-low switches, which need the internal
/// pull-up to idle high.  The platform call is assumed not to fail
/// observably; implementations log rather than return errors.
pub trait InputSetup {
    fn configure_input(&mut self, pull_up: bool);
}
