//! Fuzz target: `to_int` and `LineBuffer`
//!
//! Streams arbitrary bytes through a line buffer exactly as the direct
//! program does and checks:
//! - No panics under any byte sequence
//! - Every completed line parses to the same value as `to_int` on its text
//! - Bytes beyond capacity are counted, never stored
//!
//! cargo fuzz run fuzz_line_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use servoarm::parse::{LINE_CAPACITY, LineBuffer, to_int};

fuzz_target!(|data: &[u8]| {
    let mut buf: LineBuffer = LineBuffer::new();
    let mut shadow: Vec<u8> = Vec::new();
    let mut dropped = 0usize;

    for &byte in data {
        let expected = (byte == b'\n').then(|| to_int(&shadow));
        if byte == b'\n' {
            shadow.clear();
        } else if shadow.len() < LINE_CAPACITY {
            shadow.push(byte);
        } else {
            dropped += 1;
        }

        assert_eq!(buf.push(byte), expected);
        assert_eq!(buf.as_bytes(), shadow.as_slice());
        assert!(buf.as_bytes().len() <= LINE_CAPACITY);
    }

    assert_eq!(buf.overflowed(), dropped);
    assert_eq!(buf.flush(), (!shadow.is_empty()).then(|| to_int(&shadow)));
});
