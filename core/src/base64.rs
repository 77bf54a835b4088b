//! Base64 codec kernel
//!
//! RFC 4648 standard alphabet (`+`/`/`, `=` padding). Unlike the other
//! kernels the codec itself is the benchmarked algorithm, so both directions
//! are implemented here rather than delegated. Decoding is strict: malformed
//! input is rejected, never silently decoded to garbage.

use std::fmt;

use crate::harness::VerificationError;

/// Source buffer length for the timed workload.
pub const STR_SIZE: usize = 131072;
/// Repetitions per timed phase (encode-only, then decode-only).
pub const TRIES: usize = 8192;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const DECODE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
};

const FIXTURES: [(&str, &str); 2] = [("hello", "aGVsbG8="), ("world", "d29ybGQ=")];

/// Malformed Base64 input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte outside the standard alphabet (or a misplaced `=`).
    InvalidByte { byte: u8, index: usize },
    /// Total length is not a multiple of 4.
    InvalidLength(usize),
    /// More than two trailing `=` characters.
    InvalidPadding,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidByte { byte, index } => {
                write!(f, "invalid base64 byte 0x{byte:02x} at offset {index}")
            }
            DecodeError::InvalidLength(len) => {
                write!(f, "base64 length {len} is not a multiple of 4")
            }
            DecodeError::InvalidPadding => write!(f, "invalid base64 padding"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encodes `input`, padding the output to a multiple of 4 characters.
pub fn encode(input: &[u8]) -> String {
    // ALPHABET and `=` are ASCII, so pushing them as chars is byte appends.
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    let mut chunks = input.chunks_exact(3);
    for chunk in &mut chunks {
        let group = (chunk[0] as u32) << 16 | (chunk[1] as u32) << 8 | chunk[2] as u32;
        out.push(ALPHABET[(group >> 18) as usize & 0x3f] as char);
        out.push(ALPHABET[(group >> 12) as usize & 0x3f] as char);
        out.push(ALPHABET[(group >> 6) as usize & 0x3f] as char);
        out.push(ALPHABET[group as usize & 0x3f] as char);
    }
    match chunks.remainder() {
        [a] => {
            let group = (*a as u32) << 16;
            out.push(ALPHABET[(group >> 18) as usize & 0x3f] as char);
            out.push(ALPHABET[(group >> 12) as usize & 0x3f] as char);
            out.push('=');
            out.push('=');
        }
        [a, b] => {
            let group = (*a as u32) << 16 | (*b as u32) << 8;
            out.push(ALPHABET[(group >> 18) as usize & 0x3f] as char);
            out.push(ALPHABET[(group >> 12) as usize & 0x3f] as char);
            out.push(ALPHABET[(group >> 6) as usize & 0x3f] as char);
            out.push('=');
        }
        _ => {}
    }
    out
}

/// Decodes strict standard-alphabet Base64.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength(input.len()));
    }
    let pad = input.iter().rev().take_while(|&&b| b == b'=').count();
    if pad > 2 {
        return Err(DecodeError::InvalidPadding);
    }
    let data = &input[..input.len() - pad];

    let mut out = Vec::with_capacity(input.len() / 4 * 3);
    let mut group: u32 = 0;
    let mut bits: u32 = 0;
    for (index, &byte) in data.iter().enumerate() {
        let value = DECODE[byte as usize];
        if value < 0 {
            // Catches misplaced `=` too: padding may only trail.
            return Err(DecodeError::InvalidByte { byte, index });
        }
        group = group << 6 | value as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((group >> bits) as u8);
        }
    }
    Ok(out)
}

/// Checks both directions of the codec against the literal fixtures.
pub fn verify() -> Result<(), VerificationError> {
    for (src, dst) in FIXTURES {
        let encoded = encode(src.as_bytes());
        if encoded != dst {
            return Err(VerificationError::new(&encoded, dst));
        }
        let decoded = match decode(dst.as_bytes()) {
            Ok(bytes) => bytes,
            Err(err) => return Err(VerificationError::new(err, src)),
        };
        if decoded != src.as_bytes() {
            return Err(VerificationError::new(String::from_utf8_lossy(&decoded), src));
        }
    }
    tracing::debug!(str_size = STR_SIZE, tries = TRIES, "base64 fixtures verified");
    Ok(())
}
