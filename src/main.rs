//! KeySwitch firmware: main entry point.
//!
//! Polls one key switch and logs every classified gesture.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  GpioInput (InputPin + InputSetup)           │
//! │  SystemClock (Clock)                         │
//! │  ─────────── port trait boundary ─────────── │
//! │  KeySwitch ── Fsm ── KeySwitchConfig         │
//! └──────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use keyswitch::adapters::gpio::GpioInput;
use keyswitch::adapters::time::SystemClock;
use keyswitch::pins::{KEY_GPIO, POLL_INTERVAL_MS};
use keyswitch::{ActiveLevel, Gesture, KeySwitch, KeySwitchConfig};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("KeySwitch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config ─────────────────────────────────────────────
    let config = KeySwitchConfig::default();
    if let Err(e) = config.validate() {
        warn!("Key timing out of order ({}), gestures may misfire", e);
    }

    // ── 3. Detector ───────────────────────────────────────────
    let mut key = KeySwitch::with_config(
        GpioInput::new(KEY_GPIO),
        SystemClock::new(),
        ActiveLevel::Low,
        config,
    );
    key.initialize();
    key.enable_repeat_result(true);

    // ── 4. Poll loop ──────────────────────────────────────────
    loop {
        if let Some(gesture) = key.sample() {
            match gesture {
                Gesture::Press => info!("Key: press"),
                Gesture::DoublePress => info!("Key: double press"),
                Gesture::LongPress => info!("Key: long press"),
                Gesture::RepeatPress => info!("Key: repeat"),
            }
        }
        std::thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
    }
}
