// Server-rendered pages

use askama::Template;
use axum::response::Html;
use chrono::{Datelike, Utc};

use crate::auth::{AuthMode, FormErrors};
use crate::error::AppError;
use crate::models::{PublicUser, Training};

/// Entry page hosting the login/signup form.
#[derive(Template)]
#[template(path = "auth.html")]
pub struct AuthPage {
    pub mode: AuthMode,
    pub errors: FormErrors,
    /// Previously submitted email, echoed back after a failed attempt.
    pub email: String,
}

impl AuthPage {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            errors: FormErrors::default(),
            email: String::new(),
        }
    }

    pub fn with_errors(mode: AuthMode, email: impl Into<String>, errors: FormErrors) -> Self {
        Self {
            mode,
            errors,
            email: email.into(),
        }
    }

    fn other_mode(&self) -> AuthMode {
        match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Protected catalog page, rendered inside the signed-in layout.
#[derive(Template)]
#[template(path = "training.html")]
pub struct TrainingPage {
    pub user: PublicUser,
    pub trainings: Vec<Training>,
    pub year: i32,
}

impl TrainingPage {
    pub fn new(user: PublicUser, trainings: Vec<Training>) -> Self {
        Self {
            user,
            trainings,
            year: Utc::now().year(),
        }
    }
}

pub fn render<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_copy() {
        let html = AuthPage::new(AuthMode::Login).render().unwrap();
        assert!(html.contains("Welcome Back"));
        assert!(html.contains("Sign In"));
        assert!(html.contains("/?mode=signup"));
        assert!(!html.contains("Must be at least 8 characters long"));
    }

    #[test]
    fn test_signup_form_copy() {
        let html = AuthPage::new(AuthMode::Signup).render().unwrap();
        assert!(html.contains("Join Our Community"));
        assert!(html.contains("Create Account"));
        assert!(html.contains("Must be at least 8 characters long"));
        assert!(html.contains(r#"action="/?mode=signup""#));
    }

    #[test]
    fn test_errors_are_rendered_and_escaped() {
        let page = AuthPage::with_errors(
            AuthMode::Login,
            "<script>@x.io",
            FormErrors::general("Could not authenticate user, please check your credentials."),
        );
        let html = page.render().unwrap();
        assert!(html.contains("general-error"));
        assert!(html.contains("Could not authenticate user"));
        assert!(!html.contains("<script>@x.io"));
    }

    #[test]
    fn test_training_page_renders_cards() {
        let user = PublicUser {
            id: 1,
            email: "runner@example.com".to_string(),
        };
        let trainings = vec![Training {
            id: 1,
            title: "Strength & Conditioning".to_string(),
            image: Some("/weightlifting.jpg".to_string()),
            description: Some("Build functional strength.".to_string()),
            category: Some("Strength".to_string()),
            intensity: Some("High".to_string()),
            duration: None,
            group_size: Some("Personal Training".to_string()),
        }];

        let html = TrainingPage::new(user, trainings).render().unwrap();
        assert!(html.contains("runner@example.com"));
        assert!(html.contains("Strength &amp; Conditioning"));
        assert!(html.contains("/trainings/weightlifting.jpg"));
        assert!(html.contains("60 min"));
        assert!(html.contains("Sign Out"));
    }
}
