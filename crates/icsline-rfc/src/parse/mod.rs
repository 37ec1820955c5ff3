//! Content-line parsing (RFC 5545 §3.1).
//!
//! Two phases, strictly ordered: [`unfold`] removes every folding sequence
//! at byte level, then [`parse`] (or the streaming [`Parser`]) runs the
//! content-line grammar over the unfolded bytes. Parsed lines borrow from
//! the unfolded buffer.
//!
//! ```
//! use icsline_rfc::{parse, unfold};
//!
//! let unfolded = unfold(b"SUMMARY:Long text th\r\n at continues\r\n");
//! let lines = parse(&unfolded)?;
//! assert_eq!(lines[0].name, "SUMMARY");
//! assert_eq!(lines[0].value, "Long text that continues");
//! # Ok::<(), icsline_rfc::ParseError>(())
//! ```

mod chars;
mod error;
mod lexer;
mod unfold;
mod utf8;
pub(crate) mod values;

pub use error::{CONTEXT_WINDOW, ParseError, ParseErrorKind, ParseResult};
pub use unfold::{Unfolded, unfold};
pub use values::unescape_text;

use crate::core::ContentLine;
use lexer::Cursor;

/// Parses every content line in an unfolded buffer.
///
/// The input must already be unfolded (see [`unfold`]); folding sequences in
/// the input would be rejected by the grammar, since a line break followed
/// by whitespace is not a valid line start. The returned lines borrow from
/// `unfolded` and preserve document order.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered; nothing parsed before it is
/// kept, and no resynchronization at the next line break is attempted.
#[tracing::instrument(skip(unfolded), fields(input_len = unfolded.len()))]
pub fn parse(unfolded: &[u8]) -> ParseResult<Vec<ContentLine<'_>>> {
    let mut lines = Vec::new();
    for line in Parser::new(unfolded) {
        lines.push(line?);
    }
    tracing::debug!(count = lines.len(), "Parsed content lines");
    Ok(lines)
}

/// A streaming content-line parser over an unfolded buffer.
///
/// Yields one `Result` per content line, in document order. The first error
/// is terminal: after yielding it, the iterator is fused and yields nothing
/// further. [`Parser::offset`] reports the exact number of unfolded bytes
/// consumed so far.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser over an unfolded buffer.
    #[must_use]
    pub fn new(unfolded: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(unfolded),
            failed: false,
        }
    }

    /// Byte offset into the unfolded buffer consumed so far.
    ///
    /// After a fully successful iteration this equals the buffer length;
    /// after an error it is the offset the failing line started parsing at
    /// plus whatever that derivation consumed before failing.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = ParseResult<ContentLine<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.at_end() {
            return None;
        }
        match lexer::content_line(&mut self.cursor) {
            Ok(line) => {
                tracing::trace!(name = line.name, params = line.params.len(), "content line");
                Some(Ok(line))
            }
            Err(e) => {
                self.failed = true;
                tracing::debug!(offset = e.offset, kind = ?e.kind, "parse failed");
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Parser<'_> {}
