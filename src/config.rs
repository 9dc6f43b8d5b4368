//! Key switch configuration parameters
//!
//! Timing thresholds and feature switches for one detector.
//! All timed windows are in milliseconds.  The state machine relies on
//! `debounce < long_press < repeat` and `debounce < double_press`, but
//! does not check it while sampling; use [`KeySwitchConfig::validate`]
//! before accepting a configuration from storage or a remote channel.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default debounce window.
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;
/// Default double-press window.
pub const DEFAULT_DOUBLE_PRESS_MS: u32 = 250;
/// Default long-press window.
pub const DEFAULT_LONG_PRESS_MS: u32 = 450;
/// Default auto-repeat interval.
pub const DEFAULT_REPEAT_MS: u32 = 650;

/// Threshold durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Settling time after an edge before the level is trusted.
    pub debounce_ms: u32,
    /// Gap after a release within which a second press still joins.
    pub double_press_ms: u32,
    /// Hold time before a press becomes a long press or repeat candidate.
    pub long_press_ms: u32,
    /// Spacing between auto-repeat results.
    pub repeat_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            double_press_ms: DEFAULT_DOUBLE_PRESS_MS,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            repeat_ms: DEFAULT_REPEAT_MS,
        }
    }
}

/// Independently toggled detector capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub double_press: bool,
    pub long_press: bool,
    pub repeat: bool,
    /// Report auto-repeat ticks as `RepeatPress` instead of `Press`.
    pub repeat_result: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            double_press: true,
            long_press: true,
            repeat: true,
            repeat_result: false,
        }
    }
}

impl Features {
    /// Everything off: the detector only reports debounced presses.
    pub const fn press_only() -> Self {
        Self {
            double_press: false,
            long_press: false,
            repeat: false,
            repeat_result: false,
        }
    }
}

/// Complete detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeySwitchConfig {
    pub timing: Timing,
    pub features: Features,
}

impl KeySwitchConfig {
    /// Check the threshold ordering the state machine assumes.
    pub fn validate(&self) -> Result<()> {
        let t = &self.timing;
        if t.debounce_ms == 0 {
            return Err(Error::InvalidTiming("debounce_ms must be non-zero"));
        }
        if t.debounce_ms >= t.long_press_ms {
            return Err(Error::InvalidTiming(
                "debounce_ms must be below long_press_ms",
            ));
        }
        if t.long_press_ms >= t.repeat_ms {
            return Err(Error::InvalidTiming(
                "long_press_ms must be below repeat_ms",
            ));
        }
        if t.debounce_ms >= t.double_press_ms {
            return Err(Error::InvalidTiming(
                "debounce_ms must be below double_press_ms",
            ));
        }
        Ok(())
    }

    /// Encode as a compact postcard blob (e.g. for an NVS key).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }

    /// Decode a blob written by [`to_bytes`](Self::to_bytes).
    /// The decoded config is validated before it is returned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let cfg: Self = postcard::from_bytes(bytes)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
