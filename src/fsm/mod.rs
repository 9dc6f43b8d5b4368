//! Gesture-detection finite state machine.
//!
//! A tagged-union state plus one pure transition function per state:
//!
//! ```text
//!  IDLE ──[active]──▶ DEBOUNCE1
//!  DEBOUNCE1 ──[≥ debounce, active]──────▶ PRESS
//!  DEBOUNCE1 ──[≥ debounce, released]────▶ IDLE  (bounce)
//!
//!  PRESS ──[released, double press off]──▶ IDLE  (Press)
//!  PRESS ──[released, double press on]───▶ DOUBLE_PRESS_WAIT
//!  PRESS ──[≥ long press, long/repeat on]─▶ LONG_PRESS
//!  PRESS ──[≥ long press, both off]──────▶ WAIT  (Press)
//!
//!  LONG_PRESS ──[released or repeat off]─▶ WAIT  (LongPress)
//!  LONG_PRESS ──[≥ repeat]───────────────▶ REPEAT (Press / RepeatPress)
//!  REPEAT ─────[≥ repeat]───────────────▶ REPEAT (Press / RepeatPress)
//!  REPEAT ─────[released]───────────────▶ IDLE
//!
//!  DOUBLE_PRESS_WAIT ──[≥ window]────────▶ IDLE  (Press)
//!  DOUBLE_PRESS_WAIT ──[active]──────────▶ DEBOUNCE2
//!  DEBOUNCE2 ──[≥ debounce]──────────────▶ WAIT  (DoublePress / Press)
//!
//!  WAIT ──[released]──▶ IDLE
//! ```
//!
//! Each call to [`Fsm::step`] advances exactly one step and yields at most
//! one gesture.  Timing windows are measured with `wrapping_sub`, so a
//! clock wrap between two samples is harmless.
//!
//! The per-state handlers live in [`states`]; where two states share a
//! transition (debounce expiry into the press check, long press into the
//! repeat check) the handler calls the shared function explicitly.

pub mod states;

use log::{debug, trace};

use crate::config::KeySwitchConfig;
use crate::gesture::Gesture;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Data-free identity of a [`KeyState`], for diagnostics and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Idle = 0,
    Debounce1 = 1,
    Debounce2 = 2,
    Press = 3,
    DoublePressWait = 4,
    LongPress = 5,
    Repeat = 6,
    Wait = 7,
}

impl StateId {
    /// Total number of states.
    pub const COUNT: usize = 8;

    /// Convert an index back to `StateId`.  Unknown indices map to `Wait`,
    /// which can only be left by observing a release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Idle,
            1 => Self::Debounce1,
            2 => Self::Debounce2,
            3 => Self::Press,
            4 => Self::DoublePressWait,
            5 => Self::LongPress,
            6 => Self::Repeat,
            _ => Self::Wait,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Debounce1 => "Debounce1",
            Self::Debounce2 => "Debounce2",
            Self::Press => "Press",
            Self::DoublePressWait => "DoublePressWait",
            Self::LongPress => "LongPress",
            Self::Repeat => "Repeat",
            Self::Wait => "Wait",
        }
    }
}

// ---------------------------------------------------------------------------
// State with timing data
// ---------------------------------------------------------------------------

/// FSM state.  Timed states carry the clock reading at which their
/// current window began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Waiting for the first active level.
    Idle,
    /// Settling after the first edge.  `since_ms` is the activation time.
    Debounce1 { since_ms: u32 },
    /// Settled; deciding between press, long press and double-press
    /// candidate.  `since_ms` is still the original activation time.
    Press { since_ms: u32 },
    /// Long-press window elapsed; deciding between long press and repeat.
    LongPress { since_ms: u32 },
    /// Auto-repeat running.  `since_ms` is the last repeat tick.
    Repeat { since_ms: u32 },
    /// Released once; waiting for a possible second press.
    DoublePressWait { since_ms: u32 },
    /// Settling after the second edge.
    Debounce2 { since_ms: u32 },
    /// Gesture resolved while held; blocks re-triggering until release.
    Wait,
}

impl KeyState {
    pub const fn id(&self) -> StateId {
        match self {
            Self::Idle => StateId::Idle,
            Self::Debounce1 { .. } => StateId::Debounce1,
            Self::Press { .. } => StateId::Press,
            Self::LongPress { .. } => StateId::LongPress,
            Self::Repeat { .. } => StateId::Repeat,
            Self::DoublePressWait { .. } => StateId::DoublePressWait,
            Self::Debounce2 { .. } => StateId::Debounce2,
            Self::Wait => StateId::Wait,
        }
    }

    /// Start of the current timing window, if this state has one.
    pub const fn since_ms(&self) -> Option<u32> {
        match *self {
            Self::Debounce1 { since_ms }
            | Self::Press { since_ms }
            | Self::LongPress { since_ms }
            | Self::Repeat { since_ms }
            | Self::DoublePressWait { since_ms }
            | Self::Debounce2 { since_ms } => Some(since_ms),
            Self::Idle | Self::Wait => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Step result
// ---------------------------------------------------------------------------

/// Outcome of one transition: the next state and an optional gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: KeyState,
    pub gesture: Option<Gesture>,
}

impl Step {
    /// Move to (or stay in) `next` without a result.
    pub const fn to(next: KeyState) -> Self {
        Self {
            next,
            gesture: None,
        }
    }

    /// Move to `next` and report `gesture`.
    pub const fn emit(next: KeyState, gesture: Gesture) -> Self {
        Self {
            next,
            gesture: Some(gesture),
        }
    }
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The gesture state machine.  Pure: the caller supplies the level and
/// the time, so it can be driven from any pin/clock or from a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fsm {
    state: KeyState,
}

impl Default for Fsm {
    fn default() -> Self {
        Self::new()
    }
}

impl Fsm {
    pub const fn new() -> Self {
        Self {
            state: KeyState::Idle,
        }
    }

    pub fn state(&self) -> KeyState {
        self.state
    }

    pub fn current_state(&self) -> StateId {
        self.state.id()
    }

    /// Drop any gesture in progress and go back to `Idle`.
    pub fn reset(&mut self) {
        self.state = KeyState::Idle;
    }

    /// Advance one step.
    ///
    /// `active` is the polarity-corrected level ("switch is pressed"),
    /// `now_ms` the current clock reading.
    pub fn step(&mut self, active: bool, now_ms: u32, config: &KeySwitchConfig) -> Option<Gesture> {
        let step = states::advance(self.state, active, now_ms, config);

        if step.next.id() != self.state.id() {
            trace!(
                "keyswitch: {} -> {} at {} ms",
                self.state.id().name(),
                step.next.id().name(),
                now_ms
            );
        }
        if let Some(g) = step.gesture {
            debug!("keyswitch: {} at {} ms", g, now_ms);
        }

        self.state = step.next;
        step.gesture
    }
}
