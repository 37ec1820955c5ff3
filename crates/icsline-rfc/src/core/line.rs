//! The content line type (RFC 5545 §3.1).

use serde::Serialize;

use super::Param;
use crate::parse::values::unescape_text;

/// One parsed content line: `name *(";" param) ":" value`.
///
/// All slices borrow from the unfolded buffer the line was parsed out of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentLine<'a> {
    /// Property name as written (case is preserved; compare with
    /// [`ContentLine::is`]).
    pub name: &'a str,
    /// Parameters in order of appearance.
    pub params: Vec<Param<'a>>,
    /// Raw property value (after unfolding, before unescaping).
    pub value: &'a str,
}

impl<'a> ContentLine<'a> {
    /// Compares the property name case-insensitively, per RFC 5545 §3.1.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Whether this is a vendor extension property (`X-` prefix).
    #[must_use]
    pub fn is_x_name(&self) -> bool {
        let bytes = self.name.as_bytes();
        matches!(bytes, [b'X' | b'x', b'-', ..])
    }

    /// Returns the parameter with the given name (case-insensitive).
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Param<'a>> {
        self.params.iter().find(|p| p.is(name))
    }

    /// Returns the single value of a parameter, if present.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&'a str> {
        self.get_param(name)?.value()
    }

    /// Whether a parameter with the given name is present.
    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.get_param(name).is_some()
    }

    /// The value with RFC 5545 §3.3.11 TEXT escapes resolved.
    ///
    /// Allocates only when the raw value contains a backslash.
    #[must_use]
    pub fn unescaped_value(&self) -> std::borrow::Cow<'a, str> {
        unescape_text(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParamValue;

    fn line<'a>() -> ContentLine<'a> {
        ContentLine {
            name: "DTSTART",
            params: vec![Param {
                name: "TZID",
                values: vec![ParamValue::Unquoted("America/New_York")],
            }],
            value: "20240101T090000",
        }
    }

    #[test]
    fn param_lookup_is_case_insensitive() {
        let cl = line();
        assert_eq!(cl.get_param_value("tzid"), Some("America/New_York"));
        assert!(cl.has_param("TZID"));
        assert!(!cl.has_param("VALUE"));
    }

    #[test]
    fn x_name_detection() {
        let cl = line();
        assert!(!cl.is_x_name());
        let x = ContentLine {
            name: "X-ABC-RELCALID",
            params: Vec::new(),
            value: "1234",
        };
        assert!(x.is_x_name());
    }
}
