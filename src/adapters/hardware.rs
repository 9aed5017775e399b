//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the servo driver and the command UART, exposing them through
//! [`ServoPort`] and [`SerialPort`]. Driver failures are logged here and
//! never reach the domain: a missed PWM update is retried by the next write.

use log::warn;

use crate::app::ports::{SerialPort, ServoPort};
use crate::drivers::ledc::LedcChannel;
use crate::drivers::servo::ServoDriver;
use crate::drivers::uart::CommandUart;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    servo: ServoDriver<LedcChannel>,
    uart: CommandUart,
}

impl HardwareAdapter {
    pub fn new(servo: ServoDriver<LedcChannel>, uart: CommandUart) -> Self {
        Self { servo, uart }
    }

    /// Direct UART access for host-side simulation.
    #[cfg(not(target_os = "espidf"))]
    pub fn uart_mut(&mut self) -> &mut CommandUart {
        &mut self.uart
    }
}

// ── ServoPort implementation ──────────────────────────────────

impl ServoPort for HardwareAdapter {
    fn attach(&mut self) {
        if let Err(e) = self.servo.attach() {
            warn!("Servo attach: {}", e);
        }
    }

    fn write(&mut self, value: i32) {
        if let Err(e) = self.servo.write(value) {
            warn!("Servo write {}: {}", value, e);
        }
    }

    fn read(&self) -> u8 {
        self.servo.read()
    }

    fn pulse_us(&self) -> u16 {
        self.servo.pulse_us()
    }
}

// ── SerialPort implementation ─────────────────────────────────

impl SerialPort for HardwareAdapter {
    fn available(&self) -> usize {
        self.uart.available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.uart.read_byte()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if let Err(e) = self.uart.write(bytes) {
            warn!("UART{} echo: {}", self.uart.port(), e);
        }
    }
}
