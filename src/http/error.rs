use thiserror::Error;

/// A header field name rejected by [`format_canonical`](crate::http::header_utils::format_canonical).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderNameError {
    #[error("the header field name must not be an empty string")]
    Empty,

    #[error("invalid header field name syntax (see RFC 2616): {invalid:?} in {name:?}")]
    InvalidSyntax { name: String, invalid: char },
}
