//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (the boot
//! button on the device) that the [`AppService`](super::service::AppService)
//! acts upon between loop iterations.

use crate::config::Program;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Replace the running program. Its state starts fresh.
    SwitchProgram(Program),

    /// Write the configured initial angle. The running program may move
    /// the servo again on its next iteration.
    Park,
}
