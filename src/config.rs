//! System configuration parameters
//!
//! All tunable parameters for the servo end effector. Defaults reproduce the
//! classic hobby-servo bench behaviour; a JSON override can be baked in at
//! build time (see `main.rs`).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::drivers::servo::{MAX_PULSE_US, MIN_PULSE_US};
use crate::error::Error;

/// Which loop body drives the servo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    /// Ramp back and forth between the sweep bounds.
    Sweep,
    /// Write each newline-terminated serial integer.
    Direct,
    /// Accumulate, echo and hold the last serial integer.
    Echo,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sweep => write!(f, "sweep"),
            Self::Direct => write!(f, "direct"),
            Self::Echo => write!(f, "echo"),
        }
    }
}

impl Program {
    /// Next program in the boot-button rotation.
    pub fn next(self) -> Self {
        match self {
            Self::Sweep => Self::Direct,
            Self::Direct => Self::Echo,
            Self::Echo => Self::Sweep,
        }
    }
}

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sweep" => Ok(Self::Sweep),
            "direct" => Ok(Self::Direct),
            "echo" => Ok(Self::Echo),
            _ => Err(Error::Config("program must be sweep, direct or echo")),
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServoConfig {
    /// Program started at boot.
    pub program: Program,

    // --- Sweep ---
    /// Lower sweep bound (degrees)
    pub sweep_min_deg: u8,
    /// Upper sweep bound (degrees)
    pub sweep_max_deg: u8,
    /// Pause after each one-degree step (milliseconds)
    pub sweep_step_delay_ms: u32,

    // --- Serial commands ---
    /// Command UART baud rate
    pub baud_rate: u32,
    /// Pause after each byte read by the echo program (milliseconds)
    pub echo_inter_byte_delay_ms: u32,
    /// Idle time after which a partial line is taken as complete (milliseconds)
    pub line_timeout_ms: u32,
    /// Position held before any command arrives, and the `Park` target (degrees)
    pub initial_angle: u8,

    // --- Servo pulse ---
    /// Pulse width for 0° (microseconds)
    pub min_pulse_us: u16,
    /// Pulse width for 180° (microseconds)
    pub max_pulse_us: u16,

    // --- Housekeeping ---
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,
    /// Telemetry report interval (seconds, 0 disables)
    pub telemetry_interval_secs: u32,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            program: Program::Sweep,

            // Sweep
            sweep_min_deg: 20,
            sweep_max_deg: 160,
            sweep_step_delay_ms: 15,

            // Serial
            baud_rate: 9600,
            echo_inter_byte_delay_ms: 2,
            line_timeout_ms: 1000,
            initial_angle: 90,

            // Pulse
            min_pulse_us: MIN_PULSE_US,
            max_pulse_us: MAX_PULSE_US,

            // Housekeeping
            watchdog_timeout_ms: 10_000,
            telemetry_interval_secs: 60,
        }
    }
}

impl ServoConfig {
    /// Range-check every field.
    pub fn validate(&self) -> Result<(), Error> {
        if self.sweep_max_deg > 180 {
            return Err(Error::Config("sweep_max_deg must be 0–180"));
        }
        if self.sweep_min_deg >= self.sweep_max_deg {
            return Err(Error::Config("sweep_min_deg must be below sweep_max_deg"));
        }
        if self.sweep_step_delay_ms == 0 {
            return Err(Error::Config("sweep_step_delay_ms must be non-zero"));
        }
        if !(300..=115_200).contains(&self.baud_rate) {
            return Err(Error::Config("baud_rate must be 300–115200"));
        }
        if self.line_timeout_ms == 0 {
            return Err(Error::Config("line_timeout_ms must be non-zero"));
        }
        if self.initial_angle > 180 {
            return Err(Error::Config("initial_angle must be 0–180"));
        }
        if self.min_pulse_us < MIN_PULSE_US || self.max_pulse_us > MAX_PULSE_US {
            return Err(Error::Config("pulse limits must lie within 544–2400 us"));
        }
        if self.min_pulse_us >= self.max_pulse_us {
            return Err(Error::Config("min_pulse_us must be below max_pulse_us"));
        }
        if self.watchdog_timeout_ms < 1000 {
            return Err(Error::Config("watchdog_timeout_ms must be at least 1000"));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON override"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
