//! Header-related CORS settings.
//!
//! The TOML file is deserialized into [`CorsFile`] as written by the user,
//! then normalized into a [`CorsConfig`]: methods are upper cased and every
//! header name is put in canonical form, so lookups and rendered header
//! values never depend on how the file spelled them.
//!
//! ```toml
//! supported_methods = "GET, POST, OPTIONS"
//! supported_headers = ["content-type", "X-REQUESTED-WITH"]
//! exposed_headers = []
//! supports_credentials = true
//! max_age = 3600
//! ```

use indexmap::IndexSet;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

use crate::http::header_utils::{format_canonical, parse_multiple_values, serialize, trim_header};
use crate::http::headers::HttpHeaders;
use crate::http::names;
use crate::http::token::is_token;
use crate::http::HeaderNameError;

static CONFIG: OnceLock<CorsConfig> = OnceLock::new();

/// Separator used when rendering a set as a header value.
pub const LIST_SEPARATOR: &str = ", ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid header name in `{field}`: {source}")]
    InvalidHeaderName {
        field: &'static str,
        #[source]
        source: HeaderNameError,
    },

    #[error("invalid method in `{field}`: {method:?} is not an RFC 2616 token")]
    InvalidMethod { field: &'static str, method: String },

    #[error("config already set")]
    AlreadySet,
}

/// A list given either as a TOML array or as one multi-valued string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueList {
    List(Vec<String>),
    Joined(String),
}

impl ValueList {
    /// Non-empty items, array elements themselves split as header values.
    fn items(&self) -> Vec<&str> {
        let items: Vec<&str> = match self {
            ValueList::List(items) => items
                .iter()
                .flat_map(|item| parse_multiple_values(Some(item.as_str())))
                .collect(),
            ValueList::Joined(value) => parse_multiple_values(Some(value.as_str())),
        };
        items.into_iter().filter(|item| !item.is_empty()).collect()
    }
}

impl Default for ValueList {
    fn default() -> Self {
        ValueList::List(Vec::new())
    }
}

/// On-disk form of the settings, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsFile {
    pub supported_methods: Option<ValueList>,
    pub supported_headers: ValueList,
    pub exposed_headers: ValueList,
    pub supports_credentials: Option<bool>,
    pub max_age: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub supported_methods: IndexSet<String>,
    pub supported_headers: IndexSet<String>,
    pub exposed_headers: IndexSet<String>,
    pub supports_credentials: bool,
    pub max_age: Option<u64>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            supported_methods: ["GET", "POST", "HEAD", "OPTIONS"]
                .into_iter()
                .map(String::from)
                .collect(),
            supported_headers: IndexSet::new(),
            exposed_headers: IndexSet::new(),
            supports_credentials: true,
            max_age: None,
        }
    }
}

impl TryFrom<CorsFile> for CorsConfig {
    type Error = ConfigError;

    fn try_from(file: CorsFile) -> Result<Self, Self::Error> {
        let defaults = CorsConfig::default();

        let supported_methods = match &file.supported_methods {
            Some(methods) => method_set("supported_methods", methods)?,
            None => defaults.supported_methods,
        };

        Ok(Self {
            supported_methods,
            supported_headers: canonical_set("supported_headers", &file.supported_headers)?,
            exposed_headers: canonical_set("exposed_headers", &file.exposed_headers)?,
            supports_credentials: file
                .supports_credentials
                .unwrap_or(defaults.supports_credentials),
            max_age: file.max_age,
        })
    }
}

impl FromStr for CorsConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let file: CorsFile = toml::from_str(content)?;
        CorsConfig::try_from(file)
    }
}

impl CorsConfig {
    /// Loads and normalizes the config at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        content.parse()
    }

    /// Like [`CorsConfig::load`], but falls back to the default config on
    /// any error.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(cfg) => {
                tracing::info!(
                    path = %path.display(),
                    methods = cfg.supported_methods.len(),
                    headers = cfg.supported_headers.len(),
                    "Loaded CORS config"
                );
                cfg
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Fall back to default CORS config");
                CorsConfig::default()
            }
        }
    }

    pub fn allow_methods_value(&self) -> String {
        serialize(&self.supported_methods, LIST_SEPARATOR)
    }

    pub fn allow_headers_value(&self) -> String {
        serialize(&self.supported_headers, LIST_SEPARATOR)
    }

    pub fn expose_headers_value(&self) -> String {
        serialize(&self.exposed_headers, LIST_SEPARATOR)
    }

    /// Whether `name` is a supported request header, in any capitalization.
    pub fn supports_header(&self, name: &str) -> bool {
        format_canonical(name).is_ok_and(|name| self.supported_headers.contains(&name))
    }

    pub fn supports_method(&self, method: &str) -> bool {
        self.supported_methods
            .contains(&trim_header(method).to_ascii_uppercase())
    }

    /// Renders the request-independent CORS response headers.
    ///
    /// Empty sets and an unset max age produce no header.
    pub fn response_headers(&self) -> HttpHeaders {
        let mut headers = HttpHeaders::new();
        let mut put = |name: &str, value: String| {
            if !value.is_empty() {
                headers.set_canonical(name, value);
            }
        };

        put(names::ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods_value());
        put(names::ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers_value());
        put(names::ACCESS_CONTROL_EXPOSE_HEADERS, self.expose_headers_value());
        if self.supports_credentials {
            put(names::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
        }
        if let Some(max_age) = self.max_age {
            put(names::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }

        headers
    }
}

fn method_set(field: &'static str, list: &ValueList) -> Result<IndexSet<String>, ConfigError> {
    list.items()
        .into_iter()
        .map(|method| {
            if is_token(method) {
                Ok(method.to_ascii_uppercase())
            } else {
                Err(ConfigError::InvalidMethod {
                    field,
                    method: method.to_string(),
                })
            }
        })
        .collect()
}

fn canonical_set(field: &'static str, list: &ValueList) -> Result<IndexSet<String>, ConfigError> {
    list.items()
        .into_iter()
        .map(|name| {
            format_canonical(name).map_err(|source| ConfigError::InvalidHeaderName { field, source })
        })
        .collect()
}

/// Installs the process-wide config. Only the first call succeeds.
pub fn set_config(cfg: CorsConfig) -> Result<(), ConfigError> {
    CONFIG.set(cfg).map_err(|_| ConfigError::AlreadySet)
}

pub fn config() -> Option<&'static CorsConfig> {
    CONFIG.get()
}
