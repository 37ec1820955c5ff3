//! UTF-8 sequence length and validity decoding (RFC 3629).
//!
//! The character classes in [`super::chars`] admit a multi-byte sequence by
//! its lead byte alone, so every scan that steps over one must come through
//! [`advance`], which validates the full sequence: continuation bytes in
//! `0x80..=0xBF` plus the second-byte restrictions that reject overlong
//! forms, UTF-16 surrogates and code points above U+10FFFF.

use super::error::{ParseError, ParseErrorKind, ParseResult};

/// Encoded sequence length by the lead byte's top five bits.
///
/// `0` marks an invalid lead: continuation bytes (`0b10xxx`) and `0b11111`
/// (`0xF8..=0xFF`).
const SEQUENCE_LENGTH: [u8; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 0b00000..=0b01111: ASCII
    0, 0, 0, 0, 0, 0, 0, 0, // 0b10000..=0b10111: continuation bytes
    2, 2, 2, 2, // 0b11000..=0b11011: 0xC0..=0xDF
    3, 3, // 0b11100..=0b11101: 0xE0..=0xEF
    4, // 0b11110: 0xF0..=0xF7
    0, // 0b11111: invalid
];

/// Returns the encoded sequence length for a lead byte, or `None` if the
/// byte cannot start a UTF-8 sequence.
#[must_use]
pub fn sequence_length(lead: u8) -> Option<usize> {
    match SEQUENCE_LENGTH[usize::from(lead >> 3)] {
        0 => None,
        n => Some(usize::from(n)),
    }
}

/// Advances past one complete UTF-8 sequence starting at `pos`.
///
/// Returns the offset just past the sequence.
///
/// ## Errors
/// Returns [`ParseErrorKind::InvalidUtf8`] at `pos` if the lead byte is
/// invalid, the sequence is truncated, a continuation byte is out of range,
/// or the encoding is overlong / a surrogate / above U+10FFFF.
pub fn advance(bytes: &[u8], pos: usize) -> ParseResult<usize> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidUtf8, pos);

    let lead = *bytes.get(pos).ok_or_else(invalid)?;
    let len = sequence_length(lead).ok_or_else(invalid)?;
    if len == 1 {
        return Ok(pos + 1);
    }
    let tail = bytes.get(pos + 1..pos + len).ok_or_else(invalid)?;

    // Second-byte restrictions (RFC 3629 §4 syntax).
    let second_ok = match lead {
        0xC2..=0xDF => matches!(tail[0], 0x80..=0xBF),
        0xE0 => matches!(tail[0], 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => matches!(tail[0], 0x80..=0xBF),
        0xED => matches!(tail[0], 0x80..=0x9F),
        0xF0 => matches!(tail[0], 0x90..=0xBF),
        0xF1..=0xF3 => matches!(tail[0], 0x80..=0xBF),
        0xF4 => matches!(tail[0], 0x80..=0x8F),
        // 0xC0/0xC1 overlong, 0xF5..=0xF7 above U+10FFFF
        _ => false,
    };
    if !second_ok {
        return Err(invalid());
    }
    if !tail[1..].iter().all(|&b| matches!(b, 0x80..=0xBF)) {
        return Err(invalid());
    }

    Ok(pos + len)
}
