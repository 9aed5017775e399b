//! LEDC channel exposed as an `embedded-hal` PWM output.
//!
//! The timer and channel are configured once by
//! [`hw_init::init_servo_pwm`](super::hw_init::init_servo_pwm); this type
//! only updates the duty register.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the LEDC duty register via hw_init.
//! On host/test: tracks the last duty in-memory only.

use embedded_hal::pwm::{ErrorKind, ErrorType, SetDutyCycle};
use log::warn;

use crate::drivers::hw_init;

pub struct LedcChannel {
    channel: u32,
    max_duty: u16,
    duty: u16,
}

impl LedcChannel {
    pub fn new(channel: u32, resolution_bits: u32) -> Self {
        Self {
            channel,
            max_duty: ((1u32 << resolution_bits) - 1) as u16,
            duty: 0,
        }
    }

    /// Last duty successfully written.
    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl ErrorType for LedcChannel {
    type Error = ErrorKind;
}

impl SetDutyCycle for LedcChannel {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        let duty = duty.min(self.max_duty);
        hw_init::set_ledc_duty(self.channel, duty).map_err(|e| {
            warn!("LEDC ch{}: {}", self.channel, e);
            ErrorKind::Other
        })?;
        self.duty = duty;
        Ok(())
    }
}
