//! Input drivers.

pub mod keyswitch;
