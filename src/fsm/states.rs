//! Per-state transition handlers.
//!
//! Every handler is a plain function of `(window start, level, now, config)`
//! returning a [`Step`].  No handler touches hardware or the clock.
//! Release is always checked before any timeout, so a release and a window
//! expiry observed in the same sample resolve in favour of the release.

use super::{KeyState, Step};
use crate::config::KeySwitchConfig;
use crate::gesture::Gesture;

/// Dispatch to the handler for `state`.
pub fn advance(state: KeyState, active: bool, now_ms: u32, cfg: &KeySwitchConfig) -> Step {
    match state {
        KeyState::Idle => idle_update(active, now_ms),
        KeyState::Debounce1 { since_ms } => debounce1_update(since_ms, active, now_ms, cfg),
        KeyState::Press { since_ms } => press_update(since_ms, active, now_ms, cfg),
        KeyState::LongPress { since_ms } => long_press_update(since_ms, active, now_ms, cfg),
        KeyState::Repeat { since_ms } => repeat_update(since_ms, active, now_ms, cfg),
        KeyState::DoublePressWait { since_ms } => {
            double_press_wait_update(since_ms, active, now_ms, cfg)
        }
        KeyState::Debounce2 { since_ms } => debounce2_update(since_ms, active, now_ms, cfg),
        KeyState::Wait => wait_update(active),
    }
}

#[inline]
fn elapsed(now_ms: u32, since_ms: u32) -> u32 {
    now_ms.wrapping_sub(since_ms)
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE
// ═══════════════════════════════════════════════════════════════════════════

fn idle_update(active: bool, now_ms: u32) -> Step {
    if active {
        Step::to(KeyState::Debounce1 { since_ms: now_ms })
    } else {
        Step::to(KeyState::Idle)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  DEBOUNCE1: level is ignored until the window closes
// ═══════════════════════════════════════════════════════════════════════════

fn debounce1_update(since_ms: u32, active: bool, now_ms: u32, cfg: &KeySwitchConfig) -> Step {
    if elapsed(now_ms, since_ms) < cfg.timing.debounce_ms {
        return Step::to(KeyState::Debounce1 { since_ms });
    }

    if active {
        // Press windows keep counting from the original edge.
        press_update(since_ms, active, now_ms, cfg)
    } else {
        Step::to(KeyState::Idle)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  PRESS: released (press / double-press candidate) or held (long press)
// ═══════════════════════════════════════════════════════════════════════════

fn press_update(since_ms: u32, active: bool, now_ms: u32, cfg: &KeySwitchConfig) -> Step {
    let features = &cfg.features;

    if !active {
        return if features.double_press {
            Step::to(KeyState::DoublePressWait { since_ms: now_ms })
        } else {
            Step::emit(KeyState::Idle, Gesture::Press)
        };
    }

    if elapsed(now_ms, since_ms) < cfg.timing.long_press_ms {
        return Step::to(KeyState::Press { since_ms });
    }

    if features.long_press || features.repeat {
        Step::to(KeyState::LongPress { since_ms: now_ms })
    } else {
        Step::emit(KeyState::Wait, Gesture::Press)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  LONG PRESS: resolves as long press unless the first repeat tick fires
// ═══════════════════════════════════════════════════════════════════════════

fn long_press_update(since_ms: u32, active: bool, now_ms: u32, cfg: &KeySwitchConfig) -> Step {
    let features = &cfg.features;

    if !active || !features.repeat {
        let gesture = if features.long_press {
            Gesture::LongPress
        } else {
            Gesture::Press
        };
        return Step::emit(KeyState::Wait, gesture);
    }

    repeat_tick(since_ms, now_ms, cfg, KeyState::LongPress { since_ms })
}

// ═══════════════════════════════════════════════════════════════════════════
//  REPEAT
// ═══════════════════════════════════════════════════════════════════════════

fn repeat_update(since_ms: u32, active: bool, now_ms: u32, cfg: &KeySwitchConfig) -> Step {
    if !active {
        return Step::to(KeyState::Idle);
    }

    repeat_tick(since_ms, now_ms, cfg, KeyState::Repeat { since_ms })
}

/// Shared by LONG PRESS and REPEAT while the switch is held: stay in
/// `pending` until the interval elapses, then report one repeat.
fn repeat_tick(since_ms: u32, now_ms: u32, cfg: &KeySwitchConfig, pending: KeyState) -> Step {
    if elapsed(now_ms, since_ms) < cfg.timing.repeat_ms {
        return Step::to(pending);
    }

    let gesture = if cfg.features.repeat_result {
        Gesture::RepeatPress
    } else {
        Gesture::Press
    };
    let next = if cfg.features.repeat {
        KeyState::Repeat { since_ms: now_ms }
    } else {
        KeyState::Wait
    };
    Step::emit(next, gesture)
}

// ═══════════════════════════════════════════════════════════════════════════
//  DOUBLE PRESS WAIT
// ═══════════════════════════════════════════════════════════════════════════

// Expiry is only noticed on the first sample after the window closes.
fn double_press_wait_update(since_ms: u32, active: bool, now_ms: u32, cfg: &KeySwitchConfig) -> Step {
    if active {
        return Step::to(KeyState::Debounce2 { since_ms: now_ms });
    }

    if elapsed(now_ms, since_ms) >= cfg.timing.double_press_ms {
        Step::emit(KeyState::Idle, Gesture::Press)
    } else {
        Step::to(KeyState::DoublePressWait { since_ms })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  DEBOUNCE2
// ═══════════════════════════════════════════════════════════════════════════

fn debounce2_update(since_ms: u32, active: bool, now_ms: u32, cfg: &KeySwitchConfig) -> Step {
    if elapsed(now_ms, since_ms) < cfg.timing.debounce_ms {
        return Step::to(KeyState::Debounce2 { since_ms });
    }

    let gesture = if active {
        Gesture::DoublePress
    } else {
        Gesture::Press
    };
    Step::emit(KeyState::Wait, gesture)
}

// ═══════════════════════════════════════════════════════════════════════════
//  WAIT
// ═══════════════════════════════════════════════════════════════════════════

fn wait_update(active: bool) -> Step {
    if active {
        Step::to(KeyState::Wait)
    } else {
        Step::to(KeyState::Idle)
    }
}
