//! Momentary key switch gesture detection.
//!
//! Classifies the level of one polled digital input into presses, double
//! presses, long presses and auto-repeat ticks, rejecting contact bounce.
//!
//! ```text
//!   GpioInput ─┐                       ┌─▶ Option<Gesture>
//!              ├─▶ KeySwitch::sample ──┤
//!   Clock ─────┘     └─ Fsm::step      └─ KeySwitchConfig
//! ```
//!
//! The state machine in [`fsm`] is pure; [`KeySwitch`] binds it to an
//! `embedded_hal` input pin and a millisecond [`Clock`].  All ESP-IDF
//! specific code is guarded by `#[cfg(target_os = "espidf")]` within
//! each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod drivers;
pub mod fsm;
pub mod gesture;
pub mod pins;
pub mod ports;

mod error;

pub use config::{Features, KeySwitchConfig, Timing};
pub use drivers::keyswitch::{ActiveLevel, KeySwitch};
pub use error::{Error, Result};
pub use fsm::StateId;
pub use gesture::Gesture;
pub use ports::{Clock, InputSetup};
