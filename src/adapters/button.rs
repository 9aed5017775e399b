//! Button adapter: turns boot-button gestures into application commands.
//!
//! | Gesture     | Command                                   |
//! |-------------|-------------------------------------------|
//! | Short press | `SwitchProgram` to the next program       |
//! | Long press  | `Park` at the configured initial angle    |

use log::info;

use crate::app::commands::AppCommand;
use crate::config::Program;
use crate::drivers::button::{ButtonDriver, ButtonEvent};

pub struct ButtonInput {
    driver: ButtonDriver,
}

impl ButtonInput {
    pub fn new(driver: ButtonDriver) -> Self {
        Self { driver }
    }

    /// Sample the button; `active` is the program currently running.
    pub fn poll(&mut self, now_ms: u64, active: Program) -> Option<AppCommand> {
        let cmd = match self.driver.tick(now_ms)? {
            ButtonEvent::ShortPress => AppCommand::SwitchProgram(active.next()),
            ButtonEvent::LongPress => AppCommand::Park,
        };
        info!("Button GPIO{}: {:?}", self.driver.gpio(), cmd);
        Some(cmd)
    }

    /// Direct driver access for host-side simulation.
    #[cfg(not(target_os = "espidf"))]
    pub fn driver_mut(&mut self) -> &mut ButtonDriver {
        &mut self.driver
    }
}
