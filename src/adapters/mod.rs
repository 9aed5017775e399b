//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to               |
//! |------------|--------------|---------------------------|
//! | `button`   | -            | Boot button → AppCommand  |
//! | `hardware` | ServoPort    | LEDC PWM (servo signal)   |
//! |            | SerialPort   | Command UART              |
//! | `log_sink` | EventSink    | Serial console log        |
//! | `time`     | -            | ESP32 system timer        |

pub mod button;
pub mod hardware;
pub mod log_sink;
pub mod time;
