//! Render directives: an action's choice of response body source

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body format of a structured response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    Json,
    Xml,
    Plain,
}

impl BodyFormat {
    /// Lowercase tag, as it appears in response logs.
    pub fn tag(&self) -> &'static str {
        match self {
            BodyFormat::Json => "json",
            BodyFormat::Xml => "xml",
            BodyFormat::Plain => "plain",
        }
    }

    /// Content-Type header value for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            BodyFormat::Json => "text/json",
            BodyFormat::Xml => "text/xml",
            BodyFormat::Plain => "text/plain",
        }
    }
}

impl fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An action's explicit choice of response body source.
///
/// Actions that produce a pre-serialized payload pass a `Structured`
/// directive to [`Exchange::render`](crate::exchange::Exchange::render);
/// actions that say nothing fall back to the controller's file template for
/// the current action.
///
/// # Example
/// ```ignore
/// exchange.render(RenderDirective::plain("hello"));
/// exchange.render(RenderDirective::json(payload).with_status(201));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDirective {
    /// Render the file template `<controller>/<action>.<extension>`.
    Template,

    /// Use `body` verbatim. The payload is already serialized by the action;
    /// no encoding happens downstream. `status` overrides the response
    /// status when present.
    Structured {
        format: BodyFormat,
        body: String,
        status: Option<u16>,
    },
}

impl RenderDirective {
    /// A structured directive carrying a pre-serialized JSON payload.
    pub fn json(body: impl Into<String>) -> Self {
        Self::structured(BodyFormat::Json, body)
    }

    /// A structured directive carrying a pre-serialized XML payload.
    pub fn xml(body: impl Into<String>) -> Self {
        Self::structured(BodyFormat::Xml, body)
    }

    /// A structured directive carrying a plain text payload.
    pub fn plain(body: impl Into<String>) -> Self {
        Self::structured(BodyFormat::Plain, body)
    }

    fn structured(format: BodyFormat, body: impl Into<String>) -> Self {
        RenderDirective::Structured {
            format,
            body: body.into(),
            status: None,
        }
    }

    /// Override the response status. Has no effect on `Template`, which
    /// leaves the response on its default status.
    pub fn with_status(self, status: u16) -> Self {
        match self {
            RenderDirective::Structured { format, body, .. } => RenderDirective::Structured {
                format,
                body,
                status: Some(status),
            },
            RenderDirective::Template => RenderDirective::Template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_content_types() {
        assert_eq!(BodyFormat::Json.content_type(), "text/json");
        assert_eq!(BodyFormat::Xml.content_type(), "text/xml");
        assert_eq!(BodyFormat::Plain.content_type(), "text/plain");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            RenderDirective::plain("hello"),
            RenderDirective::Structured {
                format: BodyFormat::Plain,
                body: "hello".to_string(),
                status: None,
            }
        );
    }

    #[test]
    fn test_with_status() {
        let directive = RenderDirective::json("{}").with_status(201);
        assert_eq!(
            directive,
            RenderDirective::Structured {
                format: BodyFormat::Json,
                body: "{}".to_string(),
                status: Some(201),
            }
        );

        // Template rendering has no status override.
        assert_eq!(
            RenderDirective::Template.with_status(500),
            RenderDirective::Template
        );
    }
}
