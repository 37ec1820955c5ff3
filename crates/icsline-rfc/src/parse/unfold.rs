//! Line unfolding (RFC 5545 §3.1).
//!
//! Folding splits one logical line across physical lines by inserting a line
//! break followed by a single SPACE or HTAB. Unfolding removes the break and
//! the whitespace character, at byte level, before any grammar parsing;
//! content-line boundaries are only well-defined afterwards. Folding may
//! split a multi-byte UTF-8 sequence, which is another reason this pass runs
//! on bytes rather than decoded characters.

use std::ops::Deref;

/// An unfolded document buffer.
///
/// Owns the post-unfolding bytes; parsed [`ContentLine`]s borrow from it and
/// must not outlive it.
///
/// [`ContentLine`]: crate::core::ContentLine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unfolded {
    bytes: Vec<u8>,
}

impl Unfolded {
    /// The unfolded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes. Never longer than the input that produced it.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Deref for Unfolded {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

/// Removes every folding sequence from `raw` in a single left-to-right pass.
///
/// A folding sequence is a line break immediately followed by one SPACE or
/// HTAB; both the break and the whitespace character are removed:
/// - `CR LF WSP` removes 3 bytes
/// - `LF WSP` removes 2 bytes (lenient bare-LF break)
/// - `CR WSP` removes 2 bytes (lenient bare-CR break)
///
/// Non-folding line breaks are copied through untouched.
///
/// Folds are matched against the tail of the output rather than by input
/// lookahead: a whitespace byte whose already-written predecessor is a line
/// break erases that break and is itself dropped. Removing a fold can
/// juxtapose an earlier break with a later whitespace byte; matching on the
/// output tail folds such chains in the same pass, so no folding sequence
/// ever remains and the pass is idempotent.
#[must_use]
pub fn unfold(raw: &[u8]) -> Unfolded {
    let mut out: Vec<u8> = Vec::with_capacity(raw.len());

    for &b in raw {
        if is_fold_wsp(b) {
            if out.ends_with(b"\r\n") {
                out.truncate(out.len() - 2);
                continue;
            }
            if out.ends_with(b"\n") || out.ends_with(b"\r") {
                out.truncate(out.len() - 1);
                continue;
            }
        }
        out.push(b);
    }

    Unfolded { bytes: out }
}

const fn is_fold_wsp(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
