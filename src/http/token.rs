//! RFC 2616 `token` character class.
//!
//! ```text
//! token      = 1*<any CHAR except CTLs or separators>
//! separators = "(" | ")" | "<" | ">" | "@"
//!            | "," | ";" | ":" | "\" | <">
//!            | "/" | "[" | "]" | "?" | "="
//!            | "{" | "}" | SP | HT
//! ```
//!
//! The class is held in a lookup table over US-ASCII, built on first use and
//! shared read-only afterwards.

use once_cell::sync::Lazy;

/// Separator characters of RFC 2616 §2.2, SP and HT excluded
/// (both already fall outside the printable range).
pub const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={}";

static TOKEN_CHARS: Lazy<[bool; 128]> = Lazy::new(|| {
    let mut table = [false; 128];
    for b in 0x21u8..=0x7e {
        table[b as usize] = !SEPARATORS.contains(&b);
    }
    table
});

/// Whether `c` may appear in a header field name.
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii() && TOKEN_CHARS[c as usize]
}

/// Whether `s` is a non-empty RFC 2616 token.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Return the first character of `s` outside the token class, or `None` if
/// every character is valid.
pub fn find_invalid_token_char(s: &str) -> Option<char> {
    s.chars().find(|&c| !is_token_char(c))
}
