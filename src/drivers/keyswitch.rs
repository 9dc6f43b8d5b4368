//! Polled key switch driver with press, double press, long press and
//! auto-repeat detection.
//!
//! ## Hardware
//!
//! One momentary switch on one GPIO.  Active-low switches (to ground)
//! get the internal pull-up from [`KeySwitch::initialize`]; active-high
//! switches are expected to have an external pull-down.
//!
//! ## Usage
//!
//! Call [`KeySwitch::sample`] from the main loop at an interval well below
//! the debounce window.  Each call reads the pin once and the clock once,
//! advances the state machine one step, and returns at most one gesture.
//!
//! ## Gesture detection (defaults)
//!
//! | Gesture      | Condition                                   |
//! |-------------|----------------------------------------------|
//! | Press        | Release < 450ms, no second press < 250ms    |
//! | Double press | Second press within 250ms of the release    |
//! | Long press   | Hold >= 450ms, released before first repeat |
//! | Repeat       | Every 650ms while held past the long press  |

use embedded_hal::digital::InputPin;
use log::{info, warn};

use crate::config::KeySwitchConfig;
use crate::fsm::{Fsm, StateId};
use crate::gesture::Gesture;
use crate::ports::{Clock, InputSetup};

/// Raw level that counts as "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    /// Switch pulls the line to ground; needs a pull-up.
    Low,
    /// Switch drives the line high.
    High,
}

impl ActiveLevel {
    /// Whether the input needs the internal pull-up for this polarity.
    pub const fn needs_pull_up(self) -> bool {
        matches!(self, Self::Low)
    }

    const fn is_active(self, high: bool) -> bool {
        match self {
            Self::Low => !high,
            Self::High => high,
        }
    }
}

/// Gesture detector for one switch input.
pub struct KeySwitch<P, C> {
    pin: P,
    clock: C,
    active_level: ActiveLevel,
    config: KeySwitchConfig,
    fsm: Fsm,
}

impl<P, C> KeySwitch<P, C>
where
    P: InputPin,
    C: Clock,
{
    /// Detector with the default thresholds and features.  No I/O.
    pub fn new(pin: P, clock: C, active_level: ActiveLevel) -> Self {
        Self::with_config(pin, clock, active_level, KeySwitchConfig::default())
    }

    pub fn with_config(pin: P, clock: C, active_level: ActiveLevel, config: KeySwitchConfig) -> Self {
        Self {
            pin,
            clock,
            active_level,
            config,
            fsm: Fsm::new(),
        }
    }

    /// Poll the switch.  Returns a classified gesture, if one completed.
    pub fn sample(&mut self) -> Option<Gesture> {
        let active = self.is_active();
        let now_ms = self.clock.now_ms();
        self.fsm.step(active, now_ms, &self.config)
    }

    fn is_active(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => self.active_level.is_active(high),
            Err(e) => {
                // A released switch can only lead back toward Idle.
                warn!("keyswitch: pin read failed ({:?}), treating as released", e);
                false
            }
        }
    }

    // ── Configuration ─────────────────────────────────────────

    /// Set the debounce window.  Does not change any feature flag.
    pub fn set_debounce_time(&mut self, ms: u32) {
        self.config.timing.debounce_ms = ms;
    }

    /// Set the double-press window and enable double-press detection.
    pub fn set_double_press_time(&mut self, ms: u32) {
        self.config.timing.double_press_ms = ms;
        self.enable_double_press(true);
    }

    /// Set the long-press window and enable long-press detection.
    pub fn set_long_press_time(&mut self, ms: u32) {
        self.config.timing.long_press_ms = ms;
        self.enable_long_press(true);
    }

    /// Set the auto-repeat interval and enable auto-repeat.
    pub fn set_repeat_time(&mut self, ms: u32) {
        self.config.timing.repeat_ms = ms;
        self.enable_repeat(true);
    }

    pub fn enable_double_press(&mut self, enable: bool) {
        self.config.features.double_press = enable;
    }

    pub fn enable_long_press(&mut self, enable: bool) {
        self.config.features.long_press = enable;
    }

    pub fn enable_repeat(&mut self, enable: bool) {
        self.config.features.repeat = enable;
    }

    /// Report auto-repeat ticks as [`Gesture::RepeatPress`] instead of
    /// [`Gesture::Press`].
    pub fn enable_repeat_result(&mut self, enable: bool) {
        self.config.features.repeat_result = enable;
    }

    pub fn config(&self) -> &KeySwitchConfig {
        &self.config
    }

    /// Replace the whole configuration.  Takes effect on the next sample;
    /// a gesture in progress continues under the new thresholds.
    pub fn set_config(&mut self, config: KeySwitchConfig) {
        debug_assert!(config.validate().is_ok(), "keyswitch: {:?}", config.validate());
        self.config = config;
    }

    // ── Introspection ─────────────────────────────────────────

    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// Current state machine state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Abandon any gesture in progress.
    pub fn reset(&mut self) {
        self.fsm.reset();
    }

    /// Tear down the detector and return the pin and clock.
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }
}

impl<P, C> KeySwitch<P, C>
where
    P: InputPin + InputSetup,
    C: Clock,
{
    /// One-time pin setup: pull-up input for active-low switches, plain
    /// input otherwise.
    pub fn initialize(&mut self) {
        let pull_up = self.active_level.needs_pull_up();
        self.pin.configure_input(pull_up);
        info!(
            "keyswitch: input configured (active {:?}, pull-up {})",
            self.active_level, pull_up
        );
    }
}
