//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them; on the device they go to the console log.

use crate::config::Program;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service attached the servo and began running `Program`.
    Started(Program),

    /// The active program was replaced.
    ProgramChanged { from: Program, to: Program },

    /// A raw command reached the servo; `angle` is the resulting position.
    AngleWritten { value: i32, angle: u8 },

    /// Received text was echoed back (`len` bytes, before the line ending).
    Echoed { len: usize, value: i32 },

    /// Bytes were dropped because a command line exceeded its buffer.
    LineOverflow(usize),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryData {
    pub program: Program,
    pub last_value: i32,
    pub angle: u8,
    pub pulse_us: u16,
    pub writes: u64,
    pub lines: u64,
}
