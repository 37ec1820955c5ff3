//! Byte-exact parsing of iCalendar content lines (RFC 5545 §3.1).
//!
//! This crate turns the raw bytes of an `.ics` document into a structured
//! sequence of content lines (name, parameters, value) in two strictly
//! ordered phases:
//!
//! 1. [`unfold`] removes RFC 5545 line-folding sequences at byte level,
//!    producing an [`Unfolded`] buffer (folding may split UTF-8 sequences,
//!    so this must happen before any decoding).
//! 2. [`parse`] (or the streaming [`Parser`]) runs a recursive-descent
//!    content-line grammar over the unfolded bytes, validating embedded
//!    UTF-8 per RFC 3629 as it scans.
//!
//! Parsed [`ContentLine`]s are borrowed views into the unfolded buffer; no
//! text is copied. The parser is a strict validator: the first malformed
//! byte aborts the parse with a [`ParseError`] carrying the offset and a
//! bounded context window.
//!
//! Semantic interpretation (components, recurrence rules, value typing) is a
//! downstream concern and out of scope here.

pub mod core;
pub mod error;
pub mod parse;

pub use crate::core::{ContentLine, Param, ParamValue};
pub use error::{RfcError, RfcResult};
pub use parse::{
    CONTEXT_WINDOW, ParseError, ParseErrorKind, ParseResult, Parser, Unfolded, parse,
    unescape_text, unfold,
};

#[cfg(test)]
mod tests;
