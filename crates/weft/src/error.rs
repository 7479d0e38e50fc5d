//! Error types for the controller layer

use thiserror::Error;

/// Errors raised while registering a controller or handling a request
#[derive(Error, Debug)]
pub enum Error {
    #[error("controller type `{type_name}` does not end with `{suffix}`")]
    NameMismatch { type_name: String, suffix: String },

    #[error("no action `{action}` registered on {controller}")]
    UnknownAction { controller: String, action: String },

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template rendering failed: {0}")]
    Render(String),

    #[error("action failed: {0}")]
    Action(String),
}

impl Error {
    /// Convert the error to an HTTP status code
    ///
    /// The pipeline itself never answers requests; the embedding dispatch
    /// layer uses this mapping when it turns a propagated error into a
    /// response.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::UnknownAction { .. } => 404,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = Error::UnknownAction {
            controller: "ArticlesController".into(),
            action: "destroy".into(),
        };
        assert_eq!(err.status_code(), 404);

        assert_eq!(Error::TemplateNotFound("a/b.html.tpl".into()).status_code(), 500);
        assert_eq!(
            Error::NameMismatch {
                type_name: "Widget".into(),
                suffix: "Controller".into()
            }
            .status_code(),
            500
        );
    }
}
