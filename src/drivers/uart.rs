//! Command UART driver.
//!
//! Byte-at-a-time, non-blocking access to the UART installed by
//! [`hw_init`](super::hw_init). Reads never wait: a zero tick timeout means
//! "whatever the driver ring already holds".
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads and writes the driver ring buffers.
//! On host/test: an in-memory loopback; tests inject RX bytes and inspect TX.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(not(target_os = "espidf"))]
use std::collections::VecDeque;

use crate::error::SerialError;

pub struct CommandUart {
    port: i32,
    #[cfg(not(target_os = "espidf"))]
    rx: VecDeque<u8>,
    #[cfg(not(target_os = "espidf"))]
    tx: Vec<u8>,
}

impl CommandUart {
    pub fn new(port: i32) -> Self {
        Self {
            port,
            #[cfg(not(target_os = "espidf"))]
            rx: VecDeque::new(),
            #[cfg(not(target_os = "espidf"))]
            tx: Vec::new(),
        }
    }

    pub fn port(&self) -> i32 {
        self.port
    }

    /// Bytes waiting in the receive ring.
    #[cfg(target_os = "espidf")]
    pub fn available(&self) -> usize {
        let mut len: usize = 0;
        // SAFETY: the driver was installed by hw_init before the loop starts.
        let ret = unsafe { uart_get_buffered_data_len(self.port, &mut len) };
        if ret != ESP_OK as esp_err_t {
            return 0;
        }
        len
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn available(&self) -> usize {
        self.rx.len()
    }

    /// Pop one received byte, if any.
    #[cfg(target_os = "espidf")]
    pub fn read_byte(&mut self) -> Option<u8> {
        let mut byte = 0u8;
        // SAFETY: one-byte destination, zero timeout; main-loop only.
        let n = unsafe {
            uart_read_bytes(self.port, (&raw mut byte).cast::<core::ffi::c_void>(), 1, 0)
        };
        (n == 1).then_some(byte)
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    /// Queue bytes for transmission.
    #[cfg(target_os = "espidf")]
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        // SAFETY: the slice outlives the call; uart_write_bytes copies into
        // the driver's TX FIFO before returning.
        let n = unsafe {
            uart_write_bytes(self.port, bytes.as_ptr().cast::<core::ffi::c_void>(), bytes.len())
        };
        if n < 0 || n as usize != bytes.len() {
            return Err(SerialError::WriteFailed);
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        self.tx.extend_from_slice(bytes);
        Ok(())
    }

    /// Simulate bytes arriving on RX.
    #[cfg(not(target_os = "espidf"))]
    pub fn inject(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }

    /// Drain everything written so far.
    #[cfg(not(target_os = "espidf"))]
    pub fn take_tx(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.tx)
    }
}
