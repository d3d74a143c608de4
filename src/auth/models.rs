use serde::Deserialize;
use std::fmt;

use crate::models::{PublicUser, Session};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE_NAME: &str = "auth_session";

/// Which flavour of the auth form is being shown or submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }

    /// Unknown or missing values fall back to login.
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode.map(str::trim) {
            Some(m) if m.eq_ignore_ascii_case("signup") => AuthMode::Signup,
            _ => AuthMode::Login,
        }
    }

    pub fn is_signup(&self) -> bool {
        matches!(self, AuthMode::Signup)
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ModeQuery {
    pub mode: Option<String>,
}

impl ModeQuery {
    pub fn mode(&self) -> AuthMode {
        AuthMode::from_query(self.mode.as_deref())
    }
}

/// Submitted auth form.
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Inline error messages rendered next to the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub general: Option<String>,
}

impl FormErrors {
    pub fn email(message: impl Into<String>) -> Self {
        Self {
            email: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self {
            general: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.general.is_none()
    }
}

/// Outcome of checking a request's session cookie.
#[derive(Debug, Clone, Default)]
pub struct AuthResult {
    pub user: Option<PublicUser>,
    pub session: Option<Session>,
}

impl AuthResult {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
