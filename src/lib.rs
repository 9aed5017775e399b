//! Servo end-effector firmware library.
//!
//! Exposes the pure-logic modules for integration testing. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module, with in-memory stand-ins on the host.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod parse;
pub mod pins;
pub mod program;

pub mod adapters;
pub mod drivers;
