//! Servo, UART and button drivers, hardware initialisation, and the task
//! watchdog.

pub mod button;
pub mod hw_init;
pub mod ledc;
pub mod servo;
pub mod uart;
pub mod watchdog;
