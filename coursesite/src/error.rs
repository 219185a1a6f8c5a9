//! Error types and HTTP response conversion

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent to the client whenever a page cannot be rendered.
///
/// The underlying error is logged server-side and never exposed.
pub const RENDER_FAILURE_BODY: &str = "There was an error executing the template.";

/// Body sent by the router fallback for unmatched requests.
pub const NOT_FOUND_BODY: &str = "Page not found";

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the site
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A template was requested without naming any fragment
    #[error("cannot compose a template from zero fragments")]
    EmptyComposition,

    /// A fragment name did not resolve within its source
    #[error("template fragment not found: {0}")]
    FragmentNotFound(String),

    /// A fragment was found but its contents are not usable markup
    #[error("template fragment {name} is not valid UTF-8")]
    InvalidFragment {
        /// Fragment name as requested
        name: String,
    },

    /// Malformed template syntax, detected while composing
    #[error("failed to parse template fragment {name}: {source}")]
    Parse {
        /// Fragment whose markup failed to parse
        name: String,
        /// Parser diagnostic
        #[source]
        source: Box<minijinja::Error>,
    },

    /// Template execution failed while writing output
    #[error("failed to execute template {name}: {source}")]
    Render {
        /// Entry fragment of the template being executed
        name: String,
        /// Execution diagnostic
        #[source]
        source: Box<minijinja::Error>,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Render { name, source } => {
                tracing::error!(template = %name, error = %source, "Template execution failed");
            }
            other => {
                tracing::error!(error = %other, "Request failed");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            RENDER_FAILURE_BODY,
        )
            .into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_error_hides_details() {
        let err = Error::Render {
            name: "faq".to_string(),
            source: Box::new(minijinja::Error::new(
                minijinja::ErrorKind::UndefinedError,
                "secret internal detail",
            )),
        };

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, RENDER_FAILURE_BODY.as_bytes());
    }

    #[test]
    fn test_fragment_not_found_message() {
        let err = Error::FragmentNotFound("missing.html".to_string());
        assert_eq!(err.to_string(), "template fragment not found: missing.html");
    }
}
