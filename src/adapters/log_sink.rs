//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (console UART / USB-CDC in production).

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(program) => {
                info!("START | program={}", program);
            }
            AppEvent::ProgramChanged { from, to } => {
                info!("PROGRAM | {} -> {}", from, to);
            }
            // One per sweep step; too chatty for info.
            AppEvent::AngleWritten { value, angle } => {
                debug!("SERVO | value={} angle={}\u{00b0}", value, angle);
            }
            AppEvent::Echoed { len, value } => {
                info!("ECHO | {} bytes -> {}", len, value);
            }
            AppEvent::LineOverflow(dropped) => {
                warn!("SERIAL | line too long, {} bytes dropped", dropped);
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | program={} | last={} angle={}\u{00b0} pulse={}us | \
                     writes={} lines={}",
                    t.program, t.last_value, t.angle, t.pulse_us, t.writes, t.lines,
                );
            }
        }
    }
}
