//! Content-line grammar (RFC 5545 §3.1).
//!
//! Recursive descent over the unfolded byte buffer, one function per
//! production:
//!
//! ```text
//! contentline   = name *(";" param) ":" value CRLF
//! name          = iana-token / x-name
//! iana-token    = 1*iana-char
//! x-name        = "X-" [vendor-id "-"] 1*iana-char
//! vendor-id     = 3*alphanum
//! param         = param-name "=" param-value *("," param-value)
//! param-value   = paramtext / quoted-string
//! paramtext     = *safe-char
//! quoted-string = DQUOTE *qsafe-char DQUOTE
//! value         = *value-char
//! CRLF          = CR LF / LF          ; lenient bare-LF terminator
//! ```
//!
//! The grammar is LL(1): every decision is made on the current byte, except
//! the vendor-id sniff (four bytes, inspect-only) and UTF-8 stepping (up to
//! four bytes, validated by [`super::utf8`]). Nothing consumed is ever
//! rewound.

use super::chars;
use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::utf8;
use crate::core::{ContentLine, Param, ParamValue};

/// Shared parse context: the unfolded buffer and a non-decreasing offset.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset into the buffer.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Lookahead without consuming; `k` is relative to the current offset.
    fn peek_at(&self, k: usize) -> Option<u8> {
        self.buf.get(self.pos + k).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Builds an error at the current offset with the trailing context window.
    fn fail(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pos).with_context(self.buf)
    }

    /// Builds an error at an earlier offset with the trailing context window.
    fn fail_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, offset).with_context(self.buf)
    }

    /// Consumes one byte if it equals `expected`.
    fn expect_char(&mut self, expected: u8) -> ParseResult<()> {
        match self.peek() {
            Some(b) if b == expected => {
                self.bump();
                Ok(())
            }
            Some(b) => Err(self
                .fail(ParseErrorKind::UnexpectedChar {
                    expected: expected as char,
                    found: b as char,
                })),
            None => Err(self.fail(ParseErrorKind::UnexpectedEndOfInput)),
        }
    }

    /// Steps over one complete UTF-8 sequence, validating its tail.
    fn advance_utf8(&mut self) -> ParseResult<()> {
        self.pos = utf8::advance(self.buf, self.pos).map_err(|e| e.with_context(self.buf))?;
        Ok(())
    }

    /// The buffer slice `start..end` as `&str`. The scans that produced the
    /// bounds have already validated every multi-byte sequence inside them.
    fn slice(&self, start: usize, end: usize) -> ParseResult<&'a str> {
        std::str::from_utf8(&self.buf[start..end]).map_err(|e| {
            self.fail_at(ParseErrorKind::InvalidUtf8, start + e.valid_up_to())
        })
    }

    /// Consumes bytes while they satisfy `class`, stepping over multi-byte
    /// UTF-8 sequences whole. Only for classes that admit non-US-ASCII
    /// leads; a high byte that is not a valid lead is invalid UTF-8, not a
    /// token boundary.
    fn scan_class(&mut self, class: fn(u8) -> bool) -> ParseResult<(usize, usize)> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b) if class(b) => {
                    if b.is_ascii() {
                        self.bump();
                    } else {
                        self.advance_utf8()?;
                    }
                }
                Some(b) if !b.is_ascii() => {
                    return Err(self.fail(ParseErrorKind::InvalidUtf8));
                }
                _ => break,
            }
        }
        Ok((start, self.pos))
    }

    /// Consumes bytes while they are `iana-char`s (ASCII only).
    fn scan_iana(&mut self) -> (usize, usize) {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if chars::is_iana_char(b)) {
            self.bump();
        }
        (start, self.pos)
    }
}

/// `contentline = name *(";" param) ":" value CRLF`
pub(crate) fn content_line<'a>(cur: &mut Cursor<'a>) -> ParseResult<ContentLine<'a>> {
    let name = name(cur, ParseErrorKind::InvalidPropertyName)?;

    let mut params = Vec::new();
    while cur.peek() == Some(b';') {
        cur.bump();
        params.push(param(cur)?);
    }

    cur.expect_char(b':')?;
    let value = value(cur)?;
    line_break(cur)?;

    Ok(ContentLine { name, params, value })
}

/// `name = iana-token / x-name`
///
/// `empty_kind` is the error reported when no name character is present;
/// property names and parameter names fail differently.
fn name<'a>(cur: &mut Cursor<'a>, empty_kind: ParseErrorKind) -> ParseResult<&'a str> {
    let start = cur.pos();

    // x-name = "X-" [vendor-id "-"] 1*iana-char
    if matches!(cur.peek(), Some(b'X' | b'x')) && cur.peek_at(1) == Some(b'-') {
        cur.bump();
        cur.bump();

        // vendor-id sniff: exactly three alphanumerics then "-". Inspect
        // only; consume all four bytes or none of them. A longer vendor id
        // is swallowed by the iana-char scan below.
        let sniffed = (0..3).all(|k| cur.peek_at(k).is_some_and(chars::is_alphanum))
            && cur.peek_at(3) == Some(b'-');
        if sniffed {
            for _ in 0..4 {
                cur.bump();
            }
        }
    }

    // 1*iana-char: at least one, whether or not an "X-" prefix was consumed.
    let token_start = cur.pos();
    let (_, end) = cur.scan_iana();
    if end == token_start {
        return Err(cur.fail(empty_kind));
    }

    cur.slice(start, end)
}

/// `param = param-name "=" param-value *("," param-value)`
fn param<'a>(cur: &mut Cursor<'a>) -> ParseResult<Param<'a>> {
    let name = name(cur, ParseErrorKind::InvalidParameterName)?;
    cur.expect_char(b'=')?;

    let mut values = vec![param_value(cur)?];
    while cur.peek() == Some(b',') {
        cur.bump();
        values.push(param_value(cur)?);
    }

    Ok(Param { name, values })
}

/// `param-value = paramtext / quoted-string`
fn param_value<'a>(cur: &mut Cursor<'a>) -> ParseResult<ParamValue<'a>> {
    if cur.peek() == Some(b'"') {
        quoted_string(cur)
    } else {
        // paramtext = *safe-char (may be empty)
        let (start, end) = cur.scan_class(chars::is_safe_char)?;
        Ok(ParamValue::Unquoted(cur.slice(start, end)?))
    }
}

/// `quoted-string = DQUOTE *qsafe-char DQUOTE`
///
/// The returned range excludes both quote characters. An unterminated string
/// is reported at the opening quote's offset.
fn quoted_string<'a>(cur: &mut Cursor<'a>) -> ParseResult<ParamValue<'a>> {
    let open = cur.pos();
    cur.bump(); // opening DQUOTE

    let (start, end) = cur.scan_class(chars::is_qsafe_char)?;
    match cur.peek() {
        Some(b'"') => {
            cur.bump();
            Ok(ParamValue::Quoted(cur.slice(start, end)?))
        }
        // A control byte other than CR/LF inside the quotes.
        Some(b) if b != b'\r' && b != b'\n' => Err(cur.fail(ParseErrorKind::UnexpectedChar {
            expected: '"',
            found: b as char,
        })),
        _ => Err(cur.fail_at(ParseErrorKind::UnterminatedQuotedString, open)),
    }
}

/// `value = *value-char`
fn value<'a>(cur: &mut Cursor<'a>) -> ParseResult<&'a str> {
    let (start, end) = cur.scan_class(chars::is_value_char)?;
    cur.slice(start, end)
}

/// `CRLF = CR LF / LF`, with bare LF accepted as a lenient terminator.
fn line_break(cur: &mut Cursor<'_>) -> ParseResult<()> {
    match cur.peek() {
        Some(b'\r') => {
            cur.bump();
            cur.expect_char(b'\n')
        }
        Some(b'\n') => {
            cur.bump();
            Ok(())
        }
        Some(b) => Err(cur.fail(ParseErrorKind::UnexpectedChar {
            expected: '\r',
            found: b as char,
        })),
        None => Err(cur.fail(ParseErrorKind::UnexpectedEndOfInput)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(input: &[u8]) -> ParseResult<ContentLine<'_>> {
        let mut cur = Cursor::new(input);
        let line = content_line(&mut cur)?;
        assert!(cur.at_end(), "trailing bytes after {}", cur.pos());
        Ok(line)
    }

    #[test]
    fn simple_line() {
        let line = parse_one(b"SUMMARY:Meeting\r\n").unwrap();
        assert_eq!(line.name, "SUMMARY");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "Meeting");
    }

    #[test]
    fn empty_value() {
        let line = parse_one(b"LOCATION:\r\n").unwrap();
        assert_eq!(line.value, "");
    }

    #[test]
    fn bare_lf_terminator() {
        let line = parse_one(b"SUMMARY:Meeting\n").unwrap();
        assert_eq!(line.value, "Meeting");
    }

    #[test]
    fn unquoted_parameter() {
        let line = parse_one(b"DTSTART;TZID=America/New_York:20240101T090000\r\n").unwrap();
        assert_eq!(line.name, "DTSTART");
        assert_eq!(line.params.len(), 1);
        assert_eq!(line.params[0].name, "TZID");
        assert_eq!(
            line.params[0].values,
            vec![ParamValue::Unquoted("America/New_York")]
        );
        assert_eq!(line.value, "20240101T090000");
    }

    #[test]
    fn quoted_parameter_excludes_quotes() {
        let line = parse_one(b"ATTENDEE;CN=\"John Doe\":mailto:john@example.com\r\n").unwrap();
        assert_eq!(line.params[0].name, "CN");
        assert_eq!(line.params[0].values, vec![ParamValue::Quoted("John Doe")]);
        assert_eq!(line.value, "mailto:john@example.com");
    }

    #[test]
    fn multi_valued_parameter() {
        let line =
            parse_one(b"ATTENDEE;MEMBER=\"mailto:a@x.com\",\"mailto:b@x.com\":mailto:c@x.com\r\n")
                .unwrap();
        assert_eq!(
            line.params[0].values,
            vec![
                ParamValue::Quoted("mailto:a@x.com"),
                ParamValue::Quoted("mailto:b@x.com"),
            ]
        );
    }

    #[test]
    fn multiple_parameters_preserve_order() {
        let line = parse_one(b"X-PROP;A=1;B=2;C=3:v\r\n").unwrap();
        let names: Vec<_> = line.params.iter().map(|p| p.name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn empty_paramtext() {
        let line = parse_one(b"SUMMARY;LANGUAGE=:ok\r\n").unwrap();
        assert_eq!(line.params[0].values, vec![ParamValue::Unquoted("")]);
    }

    #[test]
    fn x_name_with_vendor_id() {
        let line = parse_one(b"X-ABC-RELCALID:1234\r\n").unwrap();
        assert_eq!(line.name, "X-ABC-RELCALID");
    }

    #[test]
    fn x_name_without_vendor_id() {
        let line = parse_one(b"X-FOO:bar\r\n").unwrap();
        assert_eq!(line.name, "X-FOO");
    }

    #[test]
    fn x_name_with_long_vendor_id() {
        // 3*alphanum is open-ended; a longer vendor id falls through the
        // four-byte sniff to the plain iana-char scan.
        let line = parse_one(b"X-ABCDE-FOO:bar\r\n").unwrap();
        assert_eq!(line.name, "X-ABCDE-FOO");
    }

    #[test]
    fn lowercase_x_prefix() {
        let line = parse_one(b"x-foo:bar\r\n").unwrap();
        assert_eq!(line.name, "x-foo");
    }

    #[test]
    fn missing_colon() {
        let err = parse_one(b"SUMMARY Meeting\r\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedChar {
                expected: ':',
                found: ' ',
            }
        );
        assert_eq!(err.offset, 7);
        assert_eq!(err.context, "SUMMARY");
    }

    #[test]
    fn empty_name() {
        let err = parse_one(b":value\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn x_prefix_with_nothing_after() {
        let err = parse_one(b"X-:value\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
    }

    #[test]
    fn empty_parameter_name() {
        let err = parse_one(b"SUMMARY;=x:v\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidParameterName);
    }

    #[test]
    fn parameter_missing_equals() {
        let err = parse_one(b"SUMMARY;TZID:v\r\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedChar {
                expected: '=',
                found: ':',
            }
        );
    }

    #[test]
    fn unterminated_quoted_string() {
        let err = parse_one(b"ATTENDEE;CN=\"Unclosed:mailto:x@x.com\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedQuotedString);
        // Reported at the opening quote.
        assert_eq!(err.offset, 12);
    }

    #[test]
    fn missing_line_terminator() {
        let err = parse_one(b"SUMMARY:Meeting").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.offset, 15);
    }

    #[test]
    fn bare_cr_is_not_a_terminator() {
        let err = parse_one(b"SUMMARY:Meeting\rX:1\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedChar {
                expected: '\n',
                found: 'X',
            }
        );
    }

    #[test]
    fn multibyte_value() {
        let line = parse_one("SUMMARY:Réunion à Genève\r\n".as_bytes()).unwrap();
        assert_eq!(line.value, "Réunion à Genève");
    }

    #[test]
    fn four_byte_sequence_in_value() {
        let line = parse_one("SUMMARY:party 🎉 time\r\n".as_bytes()).unwrap();
        assert_eq!(line.value, "party 🎉 time");
    }

    #[test]
    fn multibyte_in_quoted_param() {
        let line = parse_one("ORGANIZER;CN=\"José\":mailto:j@x.com\r\n".as_bytes()).unwrap();
        assert_eq!(line.params[0].values, vec![ParamValue::Quoted("José")]);
    }

    #[test]
    fn bare_continuation_byte_in_value() {
        let err = parse_one(b"SUMMARY:a\x80b\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidUtf8);
        assert_eq!(err.offset, 9);
    }

    #[test]
    fn truncated_sequence_in_value() {
        let err = parse_one(b"SUMMARY:caf\xC3\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidUtf8);
        assert_eq!(err.offset, 11);
    }

    #[test]
    fn overlong_sequence_in_value() {
        let err = parse_one(b"SUMMARY:a\xC0\xAFb\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidUtf8);
    }

    #[test]
    fn surrogate_in_quoted_param() {
        let err = parse_one(b"ATTENDEE;CN=\"a\xED\xA0\x80b\":v\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidUtf8);
    }
}
