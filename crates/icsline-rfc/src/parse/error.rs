//! Content-line parse error types.

use std::fmt;

/// Result type for content-line parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of bytes of trailing context captured with an error.
pub const CONTEXT_WINDOW: usize = 64;

/// An error that occurred while parsing content lines.
///
/// Carries the byte offset into the unfolded buffer where parsing failed and
/// a bounded window of the bytes leading up to that offset. The window is a
/// reporting aid only; it has no parse-continuation semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Byte offset into the unfolded buffer (0-based).
    pub offset: usize,
    /// Up to [`CONTEXT_WINDOW`] bytes ending at `offset`, rendered lossily.
    pub context: String,
}

impl ParseError {
    /// Creates a new parse error at the given offset.
    #[must_use]
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset,
            context: String::new(),
        }
    }

    /// Attaches the trailing context window taken from `bytes`.
    ///
    /// The window ends at the error offset and is clamped to the buffer
    /// start; it never exceeds [`CONTEXT_WINDOW`] bytes.
    #[must_use]
    pub fn with_context(mut self, bytes: &[u8]) -> Self {
        let end = self.offset.min(bytes.len());
        let start = end.saturating_sub(CONTEXT_WINDOW);
        self.context = String::from_utf8_lossy(&bytes[start..end]).into_owned();
        self
    }

    /// Creates an unexpected-character error.
    #[must_use]
    pub fn unexpected(expected: char, found: u8, offset: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedChar {
                expected,
                found: found as char,
            },
            offset,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}: {}", self.offset, self.kind)?;
        if !self.context.is_empty() {
            write!(f, " (after {:?})", self.context)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A specific character was expected and something else was found.
    UnexpectedChar {
        /// The character the grammar required.
        expected: char,
        /// The byte actually present, as a character.
        found: char,
    },
    /// A malformed UTF-8 sequence (bad lead, bad tail, overlong, surrogate,
    /// out of range, or truncated).
    InvalidUtf8,
    /// A quoted string was opened and never closed on the same line.
    UnterminatedQuotedString,
    /// The buffer ended mid-derivation.
    UnexpectedEndOfInput,
    /// A property name was empty or started with an invalid character.
    InvalidPropertyName,
    /// A parameter name was empty or started with an invalid character.
    InvalidParameterName,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar { expected, found } => {
                write!(f, "expected {expected:?}, found {found:?}")
            }
            Self::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
            Self::UnterminatedQuotedString => write!(f, "unterminated quoted string"),
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::InvalidParameterName => write!(f, "invalid parameter name"),
        }
    }
}
