//! Direct command: one integer per serial line.
//!
//! Bytes are assembled into lines; every newline yields a raw command.
//! A partial line that sits idle for `line_timeout_ms` is taken as
//! complete, the way a blocking read-until-newline with a stream timeout
//! would return it.

use crate::parse::LineBuffer;

#[derive(Debug)]
pub struct DirectCommand {
    line: LineBuffer,
    last_byte_ms: u64,
    timeout_ms: u32,
}

impl DirectCommand {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            line: LineBuffer::new(),
            last_byte_ms: 0,
            timeout_ms,
        }
    }

    /// Feed one received byte. Returns a command when it completes a line.
    pub fn feed(&mut self, byte: u8, now_ms: u64) -> Option<i32> {
        self.last_byte_ms = now_ms;
        self.line.push(byte)
    }

    /// Flush a stale partial line.
    pub fn poll_timeout(&mut self, now_ms: u64) -> Option<i32> {
        if self.line.is_empty() {
            return None;
        }
        if now_ms.saturating_sub(self.last_byte_ms) < u64::from(self.timeout_ms) {
            return None;
        }
        self.line.flush()
    }

    /// Bytes dropped so far because a line exceeded the buffer.
    pub fn overflowed(&self) -> usize {
        self.line.overflowed()
    }
}
