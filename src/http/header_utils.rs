//! String primitives for CORS header values and header field names.
//!
//! All functions here are pure: they take borrowed input, allocate only what
//! they return and never touch shared mutable state.

use crate::http::error::HeaderNameError;
use crate::http::token::find_invalid_token_char;

/// Strips leading and trailing space and control characters (U+0000..=U+0020).
pub(crate) fn trim_header(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// ASCII whitespace separating the items of a multi-valued header.
fn is_separator_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Joins the items of a set into a single header value.
///
/// Items are written in the iteration order of `set`, with `sep` placed
/// between consecutive items only. An empty set gives an empty string.
///
/// ```
/// use indexmap::IndexSet;
/// use corsvalve::http::header_utils::serialize;
///
/// let methods: IndexSet<&str> = ["GET", "POST"].into_iter().collect();
/// assert_eq!(serialize(&methods, ", "), "GET, POST");
/// ```
pub fn serialize<I>(set: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    let mut it = set.into_iter().peekable();
    while let Some(item) = it.next() {
        out.push_str(item.as_ref());
        if it.peek().is_some() {
            out.push_str(sep);
        }
    }
    out
}

/// Parses a header value made of zero or more space, comma, or
/// space + comma separated items. The value is trimmed of space and control
/// characters before splitting; only ASCII whitespace separates items.
///
/// `None` (header not present) and blank values both give an empty vector.
/// Empty items between two commas are kept; trailing empty items are not.
///
/// ```
/// use corsvalve::http::header_utils::parse_multiple_values;
///
/// assert_eq!(parse_multiple_values(Some(" a, b ,c ")), ["a", "b", "c"]);
/// assert_eq!(parse_multiple_values(Some("a b  c")), ["a", "b", "c"]);
/// assert!(parse_multiple_values(None).is_empty());
/// ```
pub fn parse_multiple_values(header_value: Option<&str>) -> Vec<&str> {
    let Some(header_value) = header_value else {
        return Vec::new();
    };

    let trimmed = trim_header(header_value);
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut values = Vec::new();
    let mut rest = trimmed;
    loop {
        match rest.find(|c: char| c == ',' || is_separator_space(c)) {
            Some(start) => {
                values.push(&rest[..start]);

                // Separator is either `\s*,\s*` or `\s+`, comma form first
                let after_ws = rest[start..].trim_start_matches(is_separator_space);
                rest = match after_ws.strip_prefix(',') {
                    Some(after_comma) => after_comma.trim_start_matches(is_separator_space),
                    None => after_ws,
                };
            }
            None => {
                values.push(rest);
                break;
            }
        }
    }

    while values.last().is_some_and(|v| v.is_empty()) {
        values.pop();
    }
    values
}

/// Applies the `Aaa-Bbb-Ccc` format to a header field name.
///
/// The name is trimmed of space and control characters, checked against the
/// RFC 2616 `token` grammar, lower cased, and the first letter of every hyphen
/// separated segment is upper cased. Empty segments (`-foo`, `foo--bar`, `foo-`) are kept as they are.
///
/// ```
/// use corsvalve::http::header_utils::format_canonical;
///
/// assert_eq!(format_canonical("content-type").unwrap(), "Content-Type");
/// assert_eq!(format_canonical("X-CUSTOM-header").unwrap(), "X-Custom-Header");
/// assert!(format_canonical("Invalid:Header").is_err());
/// ```
pub fn format_canonical(name: &str) -> Result<String, HeaderNameError> {
    let trimmed = trim_header(name);
    if trimmed.is_empty() {
        return Err(HeaderNameError::Empty);
    }

    if let Some(invalid) = find_invalid_token_char(trimmed) {
        return Err(HeaderNameError::InvalidSyntax {
            name: trimmed.to_string(),
            invalid,
        });
    }

    // Token chars are ASCII, so byte and char positions coincide
    let mut out = String::with_capacity(trimmed.len());
    for (i, segment) in trimmed.split('-').enumerate() {
        if i > 0 {
            out.push('-');
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    Ok(out)
}
