//! GPIO / peripheral pin assignments for the servo end-effector board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Servo signal (LEDC PWM)
// ---------------------------------------------------------------------------

/// PWM-capable output wired to the servo signal line.
pub const SERVO_PWM_GPIO: i32 = 3;

/// LEDC timer driving the servo frame.
pub const SERVO_LEDC_TIMER: u32 = 0;
/// LEDC channel bound to [`SERVO_PWM_GPIO`].
pub const SERVO_LEDC_CHANNEL: u32 = 0;

/// Standard hobby-servo frame rate (20 ms period).
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
/// Frame period in microseconds, derived from [`SERVO_PWM_FREQ_HZ`].
pub const SERVO_PERIOD_US: u32 = 1_000_000 / SERVO_PWM_FREQ_HZ;
/// LEDC timer resolution (bits). 14 bits gives ~1.2 µs per duty step at 50 Hz.
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 14;

// ---------------------------------------------------------------------------
// Command UART
// ---------------------------------------------------------------------------

/// UART peripheral carrying angle commands. UART0 stays with the console.
pub const COMMAND_UART_NUM: i32 = 1;
pub const COMMAND_UART_TX_GPIO: i32 = 17;
pub const COMMAND_UART_RX_GPIO: i32 = 18;
/// Driver-side receive ring size in bytes.
pub const COMMAND_UART_RX_BUF: i32 = 256;

// ---------------------------------------------------------------------------
// Boot button
// ---------------------------------------------------------------------------

/// On-board BOOT button (active low, internal pull-up). Safe to read after
/// boot strapping has completed.
pub const BOOT_BUTTON_GPIO: i32 = 0;
