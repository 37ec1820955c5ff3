//! ABNF character classes for content lines (RFC 5545 §3.1).
//!
//! Every predicate is total over all 256 byte values and inspects a single
//! byte. Multi-byte UTF-8 sequences are admitted through their lead byte;
//! tail validation is the decoder's job (see [`super::utf8`]).

/// ASCII letter.
#[must_use]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_uppercase()
}

/// ASCII digit.
#[must_use]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// ASCII letter or digit.
#[must_use]
pub const fn is_alphanum(b: u8) -> bool {
    is_alpha(b) || is_digit(b)
}

/// `iana-char = ALPHA / DIGIT / "-"`, the property/parameter name alphabet.
#[must_use]
pub const fn is_iana_char(b: u8) -> bool {
    is_alphanum(b) || b == b'-'
}

/// SPACE or HTAB.
#[must_use]
pub const fn is_wsp(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Lead byte of a well-formed multi-byte UTF-8 sequence (RFC 3629).
///
/// `0xC0`/`0xC1` (overlong 2-byte forms) and `0xF5..=0xFF` (code points above
/// U+10FFFF) are excluded. Continuation bytes are not leads.
#[must_use]
pub const fn is_non_us_ascii_lead(b: u8) -> bool {
    matches!(b, 0xC2..=0xF4)
}

/// `SAFE-CHAR`: unquoted parameter text (RFC 5545 §3.1).
///
/// Excludes CTLs, DQUOTE, `;`, `:` and `,`.
#[must_use]
pub const fn is_safe_char(b: u8) -> bool {
    is_wsp(b)
        || b == 0x21
        || matches!(b, 0x23..=0x2B)
        || matches!(b, 0x2D..=0x39)
        || matches!(b, 0x3C..=0x7E)
        || is_non_us_ascii_lead(b)
}

/// `QSAFE-CHAR`: text inside a quoted string (RFC 5545 §3.1).
///
/// Excludes CTLs and DQUOTE; `"` terminates the string contextually.
#[must_use]
pub const fn is_qsafe_char(b: u8) -> bool {
    is_wsp(b) || b == 0x21 || matches!(b, 0x23..=0x7E) || is_non_us_ascii_lead(b)
}

/// `VALUE-CHAR`: the property value alphabet (RFC 5545 §3.1).
#[must_use]
pub const fn is_value_char(b: u8) -> bool {
    is_wsp(b) || matches!(b, 0x21..=0x7E) || is_non_us_ascii_lead(b)
}
