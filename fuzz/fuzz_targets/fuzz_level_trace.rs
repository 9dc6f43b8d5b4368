//! Fuzz target: `Fsm::step`
//!
//! Each input byte is one sample: bit 7 is the level, bits 0..6 the time
//! advance in ms (scaled by 16 when bit 6 is set, to reach the long-press
//! and repeat windows).  The state machine must never panic, and after
//! the trace a few released samples past every window must bring it back
//! to Idle.
//!
//! cargo fuzz run fuzz_level_trace

#![no_main]

use keyswitch::fsm::Fsm;
use keyswitch::{KeySwitchConfig, StateId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, trace)) = data.split_first() else {
        return;
    };

    let mut cfg = KeySwitchConfig::default();
    cfg.features.double_press = flags & 0x01 != 0;
    cfg.features.long_press = flags & 0x02 != 0;
    cfg.features.repeat = flags & 0x04 != 0;
    cfg.features.repeat_result = flags & 0x08 != 0;

    let mut fsm = Fsm::new();
    let mut now = u32::MAX - 1000;
    for &b in trace {
        let step = u32::from(b & 0x3f);
        let dt = if b & 0x40 != 0 { step * 16 } else { step };
        now = now.wrapping_add(dt);
        let _ = fsm.step(b & 0x80 != 0, now, &cfg);
    }

    for _ in 0..3 {
        now = now.wrapping_add(10_000);
        let _ = fsm.step(false, now, &cfg);
    }
    assert_eq!(fsm.current_state(), StateId::Idle);
});
