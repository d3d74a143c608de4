use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{AuthService, Credentials, ModeQuery};
use crate::error::AppError;
use crate::views::{render, AuthPage};

/// Entry page with the login or signup form
pub async fn auth_page(Query(query): Query<ModeQuery>) -> Result<Response, AppError> {
    Ok(render(&AuthPage::new(query.mode()))?.into_response())
}

/// Login/signup form submission
#[tracing::instrument(skip(auth_service, jar, credentials), fields(mode = %query.mode()))]
pub async fn submit_auth(
    State(auth_service): State<AuthService>,
    Query(query): Query<ModeQuery>,
    jar: CookieJar,
    Form(credentials): Form<Credentials>,
) -> Result<Response, AppError> {
    let mode = query.mode();
    let submitted_email = credentials.email.trim().to_string();

    match auth_service.authenticate(mode, credentials).await {
        Ok((_user, session)) => {
            let jar = jar.add(auth_service.session_cookie(&session));
            Ok((jar, Redirect::to("/training")).into_response())
        }
        Err(err) => match err.form_errors() {
            Some(errors) => {
                let page = render(&AuthPage::with_errors(mode, submitted_email, errors))?;
                Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
            }
            None => Err(err.into()),
        },
    }
}

/// Sign out: drop the session row and the cookie
#[tracing::instrument(skip_all)]
pub async fn logout(
    State(auth_service): State<AuthService>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    if let Some(cookie) = jar.get(crate::auth::SESSION_COOKIE_NAME) {
        if auth_service.invalidate_session(cookie.value()).await? {
            tracing::info!("User logged out");
        }
    }

    let jar = jar.remove(auth_service.removal_cookie());
    Ok((jar, Redirect::to("/")).into_response())
}
