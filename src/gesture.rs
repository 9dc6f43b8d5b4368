//! Gesture results produced by [`KeySwitch::sample`](crate::KeySwitch::sample).
//!
//! | Gesture       | Condition                                         |
//! |---------------|---------------------------------------------------|
//! | `Press`       | Released before long press, no second press       |
//! | `DoublePress` | Second press inside the double-press window       |
//! | `LongPress`   | Held past the long-press window, repeat disabled  |
//! | `RepeatPress` | Auto-repeat tick, only with `repeat_result` set   |
//!
//! "No gesture this sample" is `None` on the `Option<Gesture>` returned by
//! the detector.

use serde::{Deserialize, Serialize};

/// A classified, completed user interaction with the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Gesture {
    /// Simple press, or an auto-repeat tick when repeat results are not
    /// reported separately.
    Press = 1,
    DoublePress = 2,
    LongPress = 3,
    /// Auto-repeat tick (only when `Features::repeat_result` is enabled).
    RepeatPress = 4,
}

impl Gesture {
    /// Stable numeric code for dispatch tables and compact logs.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Numeric code of a sample result, `0` for no gesture.
    pub fn code_of(result: Option<Self>) -> u8 {
        result.map_or(0, Self::code)
    }

    /// Inverse of [`code`](Self::code).  `0` and unknown codes give `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Press),
            2 => Some(Self::DoublePress),
            3 => Some(Self::LongPress),
            4 => Some(Self::RepeatPress),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::DoublePress => "double press",
            Self::LongPress => "long press",
            Self::RepeatPress => "repeat press",
        }
    }
}

impl core::fmt::Display for Gesture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
