use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Failures that are not the user's fault. Rendered as a generic error page.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Something went wrong | Elevate Fitness</title></head>
<body><main class="error-page"><h1>Something went wrong</h1><p>Please try again in a moment.</p><a href="/">Back to start</a></main></body>
</html>"#;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
    }
}
