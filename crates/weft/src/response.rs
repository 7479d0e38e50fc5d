//! Outbound HTTP response representation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents an outgoing HTTP response: the status, header, and body triple
/// the embedding server writes to the wire.
///
/// A fresh response starts at status 200 with no headers and an empty body.
/// The controller pipeline fills it in; actions normally never touch it
/// directly and express themselves through render directives instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Response body
    #[serde(default)]
    pub body: String,
}

impl Response {
    /// Create a new empty response with the default status.
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }

    /// Set the status code.
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Set a header, replacing any previous value.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers.get(key)
    }

    /// The Content-Type header value, if one has been set.
    pub fn content_type(&self) -> Option<&String> {
        self.header("Content-Type")
    }

    /// Append a chunk to the response body.
    pub fn write(&mut self, chunk: &str) {
        self.body.push_str(chunk);
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response_defaults() {
        let response = Response::new();
        assert_eq!(response.status, 200);
        assert!(response.headers.is_empty());
        assert!(response.body.is_empty());
    }

    #[test]
    fn test_write_appends() {
        let mut response = Response::new();
        response.write("hello");
        response.write(", world");
        assert_eq!(response.body, "hello, world");
    }

    #[test]
    fn test_set_header_replaces() {
        let mut response = Response::new();
        response.set_header("Content-Type", "text/html");
        response.set_header("Content-Type", "text/plain");
        assert_eq!(response.content_type(), Some(&"text/plain".to_string()));
    }
}
