//! GPIO input adapter for the key switch.
//!
//! - **`target_os = "espidf"`**: raw ESP-IDF `gpio_config` /
//!   `gpio_get_level` calls on a numbered pin.
//! - **`not(target_os = "espidf")`**: simulated level held in memory,
//!   driven by [`GpioInput::set_sim_level`].
//!
//! Implements `embedded_hal::digital::InputPin` for the raw read and
//! [`InputSetup`] for the one-time pull-up configuration.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use log::{info, warn};

use crate::ports::InputSetup;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// A single GPIO used as a digital input.
pub struct GpioInput {
    gpio: i32,
    #[cfg(not(target_os = "espidf"))]
    sim_high: bool,
}

impl GpioInput {
    pub fn new(gpio: i32) -> Self {
        Self {
            gpio,
            // Idle level of an active-low switch with pull-up.
            #[cfg(not(target_os = "espidf"))]
            sim_high: true,
        }
    }

    /// GPIO number this input reads.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Drive the simulated raw level.
    #[cfg(not(target_os = "espidf"))]
    pub fn set_sim_level(&mut self, high: bool) {
        self.sim_high = high;
    }

    #[cfg(target_os = "espidf")]
    fn read_raw(&self) -> bool {
        // SAFETY: gpio_get_level is a read-only register access on an
        // already-configured input pin.
        (unsafe { gpio_get_level(self.gpio) }) != 0
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&self) -> bool {
        self.sim_high
    }
}

impl ErrorType for GpioInput {
    type Error = Infallible;
}

impl InputPin for GpioInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.read_raw())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.read_raw())
    }
}

impl InputSetup for GpioInput {
    #[cfg(target_os = "espidf")]
    fn configure_input(&mut self, pull_up: bool) {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << self.gpio,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: if pull_up {
                gpio_pullup_t_GPIO_PULLUP_ENABLE
            } else {
                gpio_pullup_t_GPIO_PULLUP_DISABLE
            },
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
            ..Default::default()
        };
        // SAFETY: called once from the init path before polling starts.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            warn!("gpio: config of GPIO{} failed (rc={})", self.gpio, ret);
            return;
        }
        info!("gpio: GPIO{} input (pull-up {})", self.gpio, pull_up);
    }

    #[cfg(not(target_os = "espidf"))]
    fn configure_input(&mut self, pull_up: bool) {
        if self.gpio < 0 {
            warn!("gpio(sim): GPIO{} is not a valid pin", self.gpio);
        }
        // A pull-up holds an open switch high; without one the line is
        // assumed pulled down externally.
        self.sim_high = pull_up;
        info!("gpio(sim): GPIO{} input (pull-up {})", self.gpio, pull_up);
    }
}
