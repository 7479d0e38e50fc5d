//! Inbound HTTP request representation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A parsed inbound HTTP request.
///
/// Wire-level parsing, routing, and form decoding happen in the embedding
/// server before a request reaches a controller; this type carries the
/// already-split pieces. Maps are ordered so that the logged parameter
/// representation is stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: String,

    /// Request path (e.g., "/articles/42")
    pub path: String,

    /// Query parameters
    #[serde(default)]
    pub query: BTreeMap<String, String>,

    /// HTTP headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Request body, if any
    #[serde(default)]
    pub body: Option<String>,

    /// Request parameters (route and form parameters merged by the caller)
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl Request {
    /// Get a request parameter as a string reference.
    pub fn param(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a request parameter parsed as a specific type.
    /// Returns None if the parameter doesn't exist or can't be parsed.
    ///
    /// # Example
    /// ```ignore
    /// let id: u64 = req.param_as("id").unwrap_or(0);
    /// ```
    pub fn param_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.params.get(key).and_then(|v| v.parse().ok())
    }

    /// Get a query parameter as a string reference.
    pub fn query_param(&self, key: &str) -> Option<&String> {
        self.query.get(key)
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Check if the request method matches (case-insensitive).
    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            query: BTreeMap::new(),
            headers: BTreeMap::new(),
            body: None,
            params: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut req = Request::default();
        req.headers
            .insert("Content-Type".to_string(), "text/html".to_string());

        assert_eq!(req.header("content-type"), Some(&"text/html".to_string()));
        assert_eq!(req.header("CONTENT-TYPE"), Some(&"text/html".to_string()));
        assert_eq!(req.header("Accept"), None);
    }

    #[test]
    fn test_param_as_parses() {
        let mut req = Request::default();
        req.params.insert("id".to_string(), "42".to_string());
        req.params.insert("tag".to_string(), "rust".to_string());

        assert_eq!(req.param_as::<u64>("id"), Some(42));
        assert_eq!(req.param_as::<u64>("tag"), None);
        assert_eq!(req.param_as::<u64>("missing"), None);
    }

    #[test]
    fn test_is_method() {
        let req = Request {
            method: "POST".to_string(),
            ..Request::default()
        };
        assert!(req.is_method("post"));
        assert!(!req.is_method("GET"));
    }
}
