//! Header string primitives for a CORS filter.
//!
//! - [`http::header_utils`]: set serialization, multi-value header parsing
//!   and header name canonicalization
//! - [`http::token`]: the RFC 2616 `token` character class
//! - [`http::headers`]: an ordered header map keyed by canonical name
//! - [`config`]: TOML-loaded CORS header settings

pub mod config;
pub mod http;

pub use config::{ConfigError, CorsConfig};
pub use http::{HeaderNameError, HttpHeaders, format_canonical, parse_multiple_values, serialize};
