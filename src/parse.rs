//! Serial text → integer conversion.
//!
//! Commands arrive as bare ASCII integers. Conversion is deliberately
//! lenient and never fails: it follows C `atol` rules, so garbage yields
//! `0` and trailing junk is ignored (`"42abc"` → 42).

use heapless::Vec;

/// Capacity of a single command line in bytes.
pub const LINE_CAPACITY: usize = 64;

/// Parse an integer prefix with `atol` semantics.
///
/// Leading ASCII whitespace is skipped, one optional sign is accepted,
/// then decimal digits are consumed until the first non-digit. No digits
/// gives `0`. Values beyond `i32` saturate.
pub fn to_int(bytes: &[u8]) -> i32 {
    let mut rest = bytes;
    while let [b, tail @ ..] = rest {
        if !is_c_space(*b) {
            break;
        }
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    // Accumulate towards the sign so i32::MIN is reachable.
    let mut value: i32 = 0;
    for &b in rest.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i32::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}

/// `isspace` in the C locale; includes vertical tab, unlike `u8::is_ascii_whitespace`.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

// ---------------------------------------------------------------------------
// Line assembly
// ---------------------------------------------------------------------------

/// Fixed-capacity accumulator for newline-terminated commands.
#[derive(Debug, Default)]
pub struct LineBuffer<const N: usize = LINE_CAPACITY> {
    buf: Vec<u8, N>,
    overflowed: usize,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            overflowed: 0,
        }
    }

    /// Feed one byte. Returns the parsed value when `byte` ends a line.
    ///
    /// The newline itself is not part of the parsed text. Bytes that do not
    /// fit are dropped; the line still ends at the next newline.
    pub fn push(&mut self, byte: u8) -> Option<i32> {
        if byte == b'\n' {
            let value = to_int(&self.buf);
            self.clear();
            return Some(value);
        }
        if self.buf.push(byte).is_err() {
            self.overflowed += 1;
        }
        None
    }

    /// Parse and clear a partial line. `None` when nothing is buffered.
    pub fn flush(&mut self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        let value = to_int(&self.buf);
        self.clear();
        Some(value)
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Total bytes dropped for lack of space since construction.
    pub fn overflowed(&self) -> usize {
        self.overflowed
    }
}
