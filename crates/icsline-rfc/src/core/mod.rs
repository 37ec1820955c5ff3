//! Content-line core models (RFC 5545 §3.1).
//!
//! These types are borrowed views into an unfolded document buffer: every
//! string slice points at the buffer the parser was given and none of them
//! owns or copies text. They are cheap to produce, immutable once
//! constructed, and must not outlive the buffer.

mod line;
mod parameter;

pub use line::ContentLine;
pub use parameter::{Param, ParamValue};
