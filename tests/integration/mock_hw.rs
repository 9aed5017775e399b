//! Mock hardware adapter for integration tests.
//!
//! Records every servo write and every byte sent back over serial so tests
//! can assert on the full history without touching real PWM or UART.

use embedded_hal::delay::DelayNs;
use servoarm::app::events::AppEvent;
use servoarm::app::ports::{EventSink, SerialPort, ServoPort};
use std::collections::VecDeque;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub attached: bool,
    pub writes: Vec<i32>,
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            attached: false,
            writes: Vec::new(),
            rx: VecDeque::new(),
            tx: Vec::new(),
        }
    }

    pub fn send(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }

    pub fn last_write(&self) -> Option<i32> {
        self.writes.last().copied()
    }

    pub fn tx_str(&self) -> String {
        String::from_utf8_lossy(&self.tx).into_owned()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoPort for MockHardware {
    fn attach(&mut self) {
        self.attached = true;
    }

    fn write(&mut self, value: i32) {
        self.writes.push(value);
    }

    fn read(&self) -> u8 {
        self.last_write().unwrap_or(90).clamp(0, 180) as u8
    }

    fn pulse_us(&self) -> u16 {
        1500
    }
}

impl SerialPort for MockHardware {
    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.tx.extend_from_slice(bytes);
    }
}

// ── RecordingDelay ───────────────────────────────────────────

/// Records every millisecond pause instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    pub ms_calls: Vec<u32>,
}

#[allow(dead_code)]
impl RecordingDelay {
    pub fn total_ms(&self) -> u32 {
        self.ms_calls.iter().sum()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.ms_calls.push(ms);
    }
}

// ── RecordingSink ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
