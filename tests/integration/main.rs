//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the detector against
//! mock adapters.  All tests run on the host with no real hardware.

mod gesture_scenarios;
mod mock_hw;
