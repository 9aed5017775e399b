//! Hobby-servo driver over any `embedded-hal` PWM channel.
//!
//! Positions are expressed as pulse widths inside a 50 Hz frame. A raw
//! command below [`MICROSECONDS_THRESHOLD`] is an angle (clamped to
//! 0–180°); anything at or above it is a pulse width in microseconds.
//!
//! ## Dual-target design
//!
//! The driver is hardware-agnostic: on ESP-IDF it wraps a
//! [`LedcChannel`](super::ledc::LedcChannel), in tests any `SetDutyCycle`
//! mock.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::ServoError;
use crate::pins;

/// Shortest pulse the driver will emit (0°).
pub const MIN_PULSE_US: u16 = 544;
/// Longest pulse the driver will emit (180°).
pub const MAX_PULSE_US: u16 = 2400;
/// Raw commands at or above this are pulse widths, not angles.
pub const MICROSECONDS_THRESHOLD: i32 = MIN_PULSE_US as i32;
/// Pulse commanded on attach (mid travel).
pub const DEFAULT_PULSE_US: u16 = 1500;
pub const MAX_ANGLE: u8 = 180;

pub struct ServoDriver<P> {
    pwm: P,
    min_us: u16,
    max_us: u16,
    pulse_us: u16,
    attached: bool,
}

impl<P: SetDutyCycle> ServoDriver<P> {
    /// `min_us` and `max_us` are put in order if given swapped.
    pub fn new(pwm: P, min_us: u16, max_us: u16) -> Self {
        let (min_us, max_us) = (min_us.min(max_us), min_us.max(max_us));
        Self {
            pwm,
            min_us,
            max_us,
            pulse_us: DEFAULT_PULSE_US.clamp(min_us, max_us),
            attached: false,
        }
    }

    /// Start emitting pulses, parked at [`DEFAULT_PULSE_US`].
    pub fn attach(&mut self) -> Result<(), ServoError> {
        self.attached = true;
        self.write_microseconds(DEFAULT_PULSE_US).map(|_| ())
    }

    /// Apply a raw command. Returns the pulse width actually emitted.
    pub fn write(&mut self, value: i32) -> Result<u16, ServoError> {
        let us = if value < MICROSECONDS_THRESHOLD {
            let angle = value.clamp(0, i32::from(MAX_ANGLE)) as u8;
            self.angle_to_pulse(angle)
        } else {
            value.clamp(i32::from(self.min_us), i32::from(self.max_us)) as u16
        };
        self.write_microseconds(us)
    }

    /// Emit a pulse width, clamped to the configured travel.
    pub fn write_microseconds(&mut self, us: u16) -> Result<u16, ServoError> {
        if !self.attached {
            return Err(ServoError::NotAttached);
        }
        let us = us.clamp(self.min_us, self.max_us);
        let duty = self.duty_for(us);
        self.pwm
            .set_duty_cycle(duty)
            .map_err(|_| ServoError::PwmWriteFailed)?;
        self.pulse_us = us;
        Ok(us)
    }

    /// Current position in degrees, derived from the last pulse.
    pub fn read(&self) -> u8 {
        // +1 compensates for truncation in angle_to_pulse so write(a); read() == a.
        let span = i32::from(self.max_us - self.min_us);
        if span == 0 {
            return 0;
        }
        let offset = i32::from(self.pulse_us) + 1 - i32::from(self.min_us);
        (offset * i32::from(MAX_ANGLE) / span).clamp(0, i32::from(MAX_ANGLE)) as u8
    }

    pub fn pulse_us(&self) -> u16 {
        self.pulse_us
    }

    fn angle_to_pulse(&self, angle: u8) -> u16 {
        let span = u32::from(self.max_us - self.min_us);
        (u32::from(angle) * span / u32::from(MAX_ANGLE)) as u16 + self.min_us
    }

    fn duty_for(&self, us: u16) -> u16 {
        let max = u32::from(self.pwm.max_duty_cycle());
        (u32::from(us) * max / pins::SERVO_PERIOD_US) as u16
    }
}
