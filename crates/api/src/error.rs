use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use mangashelf_core::error::CoreError;
use mangashelf_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Most failures never get here: handlers turn them into redirects or form
/// re-renders. What remains is rendered as a bare HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mangashelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from `mangashelf_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p><a href=\"/\">Home</a></body></html>",
            status.as_u16(),
            minijinja::HtmlEscape(&message),
        );
        (status, Html(body)).into_response()
    }
}
