//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (servo output, serial link, event sink) implement these
//! traits. The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly. Pacing
//! goes through `embedded_hal::delay::DelayNs`.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Servo port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the single servo.
///
/// Values are raw commands: below 544 an angle in degrees (clamped to
/// 0–180), otherwise a pulse width in microseconds (clamped to the
/// servo's travel). Implementations never reject a value.
pub trait ServoPort {
    /// Start driving the servo, parked mid travel.
    fn attach(&mut self);

    /// Apply a raw command.
    fn write(&mut self, value: i32);

    /// Current position in degrees (0–180).
    fn read(&self) -> u8;

    /// Pulse width currently emitted, in microseconds.
    fn pulse_us(&self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Serial port (driven adapter: command link)
// ───────────────────────────────────────────────────────────────

/// Non-blocking byte access to the command link.
pub trait SerialPort {
    /// Bytes that can be read right now without waiting.
    fn available(&self) -> usize;

    /// Pop one byte; `None` when nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Send bytes back to the host.
    fn write_bytes(&mut self, bytes: &[u8]);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
