//! Ordered HTTP header collection keyed by canonical field name.
//!
//! Names go through [`format_canonical`] on every access, so `content-type`,
//! `Content-Type` and `CONTENT-TYPE` all address the same entry, and names
//! that are not RFC 2616 tokens can never be stored.
//!
//! Headers are stored in an ordered map to preserve insertion order.
//! Values are stored as raw strings; multi-valued headers can be written from
//! a set with [`HttpHeaders::set_values`] and read back with
//! [`HttpHeaders::get_values`].

use indexmap::IndexMap;

use crate::http::error::HeaderNameError;
use crate::http::header_utils::{format_canonical, parse_multiple_values, serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    headers: IndexMap<String, String>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    /// Sets `name` to `value`, replacing any previous value in place.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), HeaderNameError> {
        let name = format_canonical(name).inspect_err(|err| {
            tracing::debug!(name = %name, error = %err, "Rejected header name");
        })?;
        self.headers.insert(name, value.to_string());
        Ok(())
    }

    /// Inserts under a name already in canonical form, such as the
    /// [`names`](crate::http::names) constants.
    pub(crate) fn set_canonical(&mut self, name: &str, value: String) {
        debug_assert_eq!(format_canonical(name).as_deref(), Ok(name));
        self.headers.insert(name.to_string(), value);
    }

    /// Sets `name` to the items of `values` joined by `sep`.
    pub fn set_values<I>(&mut self, name: &str, values: I, sep: &str) -> Result<(), HeaderNameError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.set(name, &serialize(values, sep))
    }

    /// Looks up `name` in any capitalization. Invalid names are never present.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = format_canonical(name).ok()?;
        self.headers.get(&name).map(String::as_str)
    }

    /// Splits the value of `name` into its comma / space separated items.
    pub fn get_values(&self, name: &str) -> Vec<&str> {
        parse_multiple_values(self.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let name = format_canonical(name).ok()?;
        self.headers.shift_remove(&name)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in &self.headers {
            result.push_str(&format!("{}: {}\r\n", name, value));
        }
        result
    }
}
