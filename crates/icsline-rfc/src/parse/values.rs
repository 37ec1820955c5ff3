//! TEXT value unescaping (RFC 5545 §3.3.11).

use std::borrow::Cow;

/// Resolves backslash escapes in a TEXT value.
///
/// `\n`/`\N` become a newline; `\,`, `\;` and `\\` drop the backslash. An
/// unrecognized escape is preserved as written, and a trailing lone
/// backslash is kept. Borrows the input unchanged when it contains no
/// backslash at all.
#[must_use]
pub fn unescape_text(s: &str) -> Cow<'_, str> {
    if !s.contains('\\') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(',') => result.push(','),
                Some(';') => result.push(';'),
                Some('\\') | None => result.push('\\'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    Cow::Owned(result)
}
