//! Property parameter types (RFC 5545 §3.2).

use serde::Serialize;

/// A property parameter: a name and one or more comma-separated values.
///
/// Values keep their document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param<'a> {
    /// Parameter name as written (case is preserved; compare with
    /// [`Param::is`]).
    pub name: &'a str,
    /// Parameter values in order of appearance.
    pub values: Vec<ParamValue<'a>>,
}

impl<'a> Param<'a> {
    /// Compares the parameter name case-insensitively, per RFC 5545 §3.2.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The first value, if this parameter has exactly one.
    #[must_use]
    pub fn value(&self) -> Option<&'a str> {
        match self.values.as_slice() {
            [v] => Some(v.text()),
            _ => None,
        }
    }
}

/// One parameter value, distinguishing quoted from unquoted form.
///
/// The quote characters themselves are excluded from the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamValue<'a> {
    /// A `quoted-string` value; the surrounding DQUOTEs are not included.
    Quoted(&'a str),
    /// A bare `paramtext` value (possibly empty).
    Unquoted(&'a str),
}

impl<'a> ParamValue<'a> {
    /// The value text, regardless of quoting.
    #[must_use]
    pub fn text(&self) -> &'a str {
        match self {
            Self::Quoted(s) | Self::Unquoted(s) => s,
        }
    }

    /// Whether this value was written in quoted form.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        matches!(self, Self::Quoted(_))
    }
}
