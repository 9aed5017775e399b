//! Buffered command with echo.
//!
//! Each iteration collects whatever bytes are available into a fresh
//! buffer, re-parsing the whole buffer after every byte. The last parsed
//! value is held across iterations and written every time, so the servo
//! is refreshed even when the link is silent.

use heapless::Vec;

use crate::parse::{LINE_CAPACITY, to_int};

#[derive(Debug)]
pub struct EchoCommand {
    buf: Vec<u8, LINE_CAPACITY>,
    held: i32,
    inter_byte_delay_ms: u32,
    dropped: usize,
}

impl EchoCommand {
    /// `initial` is held until the first byte arrives.
    pub fn new(initial: i32, inter_byte_delay_ms: u32) -> Self {
        Self {
            buf: Vec::new(),
            held: initial,
            inter_byte_delay_ms,
            dropped: 0,
        }
    }

    /// Start a new iteration with an empty buffer.
    pub fn begin(&mut self) {
        self.buf.clear();
    }

    /// Append one byte and re-parse the buffer.
    pub fn feed(&mut self, byte: u8) {
        if self.buf.push(byte).is_err() {
            self.dropped += 1;
            return;
        }
        self.held = to_int(&self.buf);
    }

    /// Text collected this iteration; empty when nothing arrived.
    pub fn received(&self) -> &[u8] {
        &self.buf
    }

    /// Value written to the servo every iteration.
    pub fn held(&self) -> i32 {
        self.held
    }

    pub fn inter_byte_delay_ms(&self) -> u32 {
        self.inter_byte_delay_ms
    }

    /// Bytes dropped so far because a burst exceeded the buffer.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
