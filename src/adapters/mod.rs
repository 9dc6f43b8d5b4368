//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter | Implements            | Connects to                   |
//! |---------|-----------------------|-------------------------------|
//! | `gpio`  | InputPin, InputSetup  | ESP32 GPIO / simulated level  |
//! | `time`  | Clock                 | ESP32 system timer / Instant  |

pub mod gpio;
pub mod time;
