use thiserror::Error;

use crate::auth::models::FormErrors;
use crate::auth::password::PasswordError;
use crate::error::AppError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid form input")]
    InvalidInput(FormErrors),
    #[error("It seems like an account for the chosen email already exists.")]
    EmailAlreadyExists,
    #[error("Could not authenticate user, please check your credentials.")]
    InvalidCredentials,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing error: {0}")]
    PasswordHashing(#[from] PasswordError),
}

impl AuthError {
    /// Field-scoped messages for errors the user can fix by resubmitting the
    /// form. `None` for infrastructure failures.
    pub fn form_errors(&self) -> Option<FormErrors> {
        match self {
            AuthError::InvalidInput(errors) => Some(errors.clone()),
            AuthError::EmailAlreadyExists => Some(FormErrors::email(self.to_string())),
            AuthError::InvalidCredentials => Some(FormErrors::general(self.to_string())),
            AuthError::Database(_) | AuthError::PasswordHashing(_) => None,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => AppError::Database(e),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_errors_map_to_fields() {
        let errors = AuthError::EmailAlreadyExists.form_errors().unwrap();
        assert!(errors.email.is_some());
        assert!(errors.general.is_none());

        let errors = AuthError::InvalidCredentials.form_errors().unwrap();
        assert_eq!(
            errors.general.as_deref(),
            Some("Could not authenticate user, please check your credentials.")
        );
        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_infrastructure_errors_have_no_form_errors() {
        assert!(AuthError::Database(sqlx::Error::RowNotFound).form_errors().is_none());
        assert!(AuthError::PasswordHashing(PasswordError::HashingFailed)
            .form_errors()
            .is_none());
    }
}
