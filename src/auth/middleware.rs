use axum::{
    extract::{Request, State},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::auth::AuthService;
use crate::error::AppError;

/// Session guard for protected pages.
///
/// Anonymous requests are redirected to the entry page; otherwise the
/// resolved [`crate::models::PublicUser`] is stored in request extensions.
pub async fn require_auth(
    State(auth_service): State<AuthService>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let result = auth_service.verify_auth(&jar).await?;

    let Some(user) = result.user else {
        tracing::debug!(path = %request.uri().path(), "No valid session, redirecting to entry page");
        return Ok(Redirect::to("/").into_response());
    };

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Security headers middleware
pub fn security_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    )
}
