pub mod error;
pub mod header_utils;
pub mod headers;
pub mod token;

pub use error::HeaderNameError;
pub use header_utils::{format_canonical, parse_multiple_values, serialize};
pub use headers::HttpHeaders;

/// Names of the CORS headers read and written through [`HttpHeaders`],
/// in canonical form.
pub mod names {
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
}
