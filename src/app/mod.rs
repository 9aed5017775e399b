//! Application core: pure domain logic, zero I/O.
//!
//! Program selection and one-iteration-at-a-time execution of the servo
//! programs. All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
