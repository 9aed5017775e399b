//! Servo programs: the three loop bodies.
//!
//! | Program  | Input              | Servo writes                        |
//! |----------|--------------------|-------------------------------------|
//! | `sweep`  | none               | one ramp step per iteration         |
//! | `direct` | newline-terminated | one per completed line              |
//! | `echo`   | raw byte bursts    | held value, every iteration         |
//!
//! Programs only hold state and make decisions; the
//! [`AppService`](crate::app::service::AppService) performs the I/O.

pub mod direct;
pub mod echo;
pub mod sweep;

use crate::config::{Program, ServoConfig};

pub use direct::DirectCommand;
pub use echo::EchoCommand;
pub use sweep::Sweep;

/// The running program and its state.
#[derive(Debug)]
pub enum Routine {
    Sweep(Sweep),
    Direct(DirectCommand),
    Echo(EchoCommand),
}

impl Routine {
    /// Build `program` with fresh state from `config`.
    pub fn new(program: Program, config: &ServoConfig) -> Self {
        match program {
            Program::Sweep => Self::Sweep(Sweep::new(
                config.sweep_min_deg,
                config.sweep_max_deg,
                config.sweep_step_delay_ms,
            )),
            Program::Direct => Self::Direct(DirectCommand::new(config.line_timeout_ms)),
            Program::Echo => Self::Echo(EchoCommand::new(
                i32::from(config.initial_angle),
                config.echo_inter_byte_delay_ms,
            )),
        }
    }

    pub fn program(&self) -> Program {
        match self {
            Self::Sweep(_) => Program::Sweep,
            Self::Direct(_) => Program::Direct,
            Self::Echo(_) => Program::Echo,
        }
    }
}
