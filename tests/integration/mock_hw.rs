//! Mock hardware for integration tests.
//!
//! A scripted pin and a manual clock that share state with the test body,
//! so a test can move time and flip the level between samples.

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin};
use keyswitch::{ActiveLevel, Clock, Gesture, InputSetup, KeySwitch, KeySwitchConfig};

// ── MockPin ───────────────────────────────────────────────────

/// Raw level source.  Counts reads so tests can check one read per sample.
pub struct MockPin {
    high: Rc<Cell<bool>>,
    reads: Rc<Cell<u32>>,
    pub pull_up: Option<bool>,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.reads.set(self.reads.get() + 1);
        Ok(!self.high.get())
    }
}

impl InputSetup for MockPin {
    fn configure_input(&mut self, pull_up: bool) {
        self.pull_up = Some(pull_up);
    }
}

// ── MockClock ─────────────────────────────────────────────────

pub struct MockClock {
    now: Rc<Cell<u32>>,
    reads: Rc<Cell<u32>>,
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.reads.set(self.reads.get() + 1);
        self.now.get()
    }
}

// ── Bench ─────────────────────────────────────────────────────

/// A detector wired to mocks, driven in terms of "pressed"/"released"
/// regardless of polarity.
pub struct Bench {
    pub key: KeySwitch<MockPin, MockClock>,
    level: ActiveLevel,
    high: Rc<Cell<bool>>,
    now: Rc<Cell<u32>>,
    pub pin_reads: Rc<Cell<u32>>,
    pub clock_reads: Rc<Cell<u32>>,
}

#[allow(dead_code)]
impl Bench {
    pub fn new(level: ActiveLevel, config: KeySwitchConfig) -> Self {
        let high = Rc::new(Cell::new(level == ActiveLevel::Low));
        let now = Rc::new(Cell::new(0));
        let pin_reads = Rc::new(Cell::new(0));
        let clock_reads = Rc::new(Cell::new(0));

        let pin = MockPin {
            high: Rc::clone(&high),
            reads: Rc::clone(&pin_reads),
            pull_up: None,
        };
        let clock = MockClock {
            now: Rc::clone(&now),
            reads: Rc::clone(&clock_reads),
        };
        let mut key = KeySwitch::with_config(pin, clock, level, config);
        key.initialize();

        Self {
            key,
            level,
            high,
            now,
            pin_reads,
            clock_reads,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ActiveLevel::Low, KeySwitchConfig::default())
    }

    /// Set the switch position and the time, then take one sample.
    pub fn sample_at(&mut self, t: u32, pressed: bool) -> Option<Gesture> {
        let high = match self.level {
            ActiveLevel::Low => !pressed,
            ActiveLevel::High => pressed,
        };
        self.high.set(high);
        self.now.set(t);
        self.key.sample()
    }

    /// Sample every `step` ms over `[from, to)` with a fixed position,
    /// returning `(time, gesture)` for each non-None result.
    pub fn hold(&mut self, from: u32, to: u32, step: u32, pressed: bool) -> Vec<(u32, Gesture)> {
        let mut out = Vec::new();
        let mut t = from;
        while t < to {
            if let Some(g) = self.sample_at(t, pressed) {
                out.push((t, g));
            }
            t += step;
        }
        out
    }
}
