use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::auth::password::{generate_session_token, hash_password, verify_password, PasswordError};
use crate::auth::{AuthError, AuthMode, AuthResult, Credentials, FormErrors, SESSION_COOKIE_NAME};
use crate::config::AppConfig;
use crate::models::{
    normalize_email, validate_email, validate_new_password, validate_password_present, PublicUser,
    Session,
};
use crate::services::UserService;

#[derive(Debug, Clone)]
pub struct AuthService {
    db: SqlitePool,
    users: UserService,
    session_ttl: Duration,
    bcrypt_cost: u32,
    secure_cookies: bool,
    /// Hash checked against when the email is unknown, built on first use.
    dummy_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(db: SqlitePool, config: &AppConfig) -> Self {
        Self {
            users: UserService::new(db.clone()),
            db,
            session_ttl: Duration::days(config.session_ttl_days),
            bcrypt_cost: config.bcrypt_cost,
            secure_cookies: config.is_production(),
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Run the login or signup flow for a submitted form.
    pub async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: Credentials,
    ) -> Result<(PublicUser, Session), AuthError> {
        match mode {
            AuthMode::Login => self.login(credentials).await,
            AuthMode::Signup => self.signup(credentials).await,
        }
    }

    /// Register a new user and open a session for them
    #[tracing::instrument(skip(self, credentials))]
    pub async fn signup(&self, credentials: Credentials) -> Result<(PublicUser, Session), AuthError> {
        let email = normalize_email(&credentials.email);

        let mut errors = FormErrors::default();
        if let Err(e) = validate_email(&email) {
            errors.email = Some(e.to_string());
        }
        if let Err(e) = validate_new_password(&credentials.password) {
            errors.password = Some(e.to_string());
        }
        if !errors.is_empty() {
            return Err(AuthError::InvalidInput(errors));
        }

        if self.users.get_user_by_email(&email).await?.is_some() {
            tracing::warn!("Signup rejected: email already registered");
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = self.hash(credentials.password).await?;

        // A concurrent signup can still win the race to the unique index.
        let user = match self.users.create_user(&email, &password_hash).await {
            Ok(user) => user,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(AuthError::EmailAlreadyExists);
            }
            Err(e) => return Err(e.into()),
        };

        let session = self.create_session(user.id).await?;
        tracing::info!(user_id = user.id, "Created user account");

        Ok((user.into(), session))
    }

    /// Check credentials and open a session
    #[tracing::instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: Credentials) -> Result<(PublicUser, Session), AuthError> {
        let email = normalize_email(&credentials.email);

        let mut errors = FormErrors::default();
        if let Err(e) = validate_email(&email) {
            errors.email = Some(e.to_string());
        }
        if let Err(e) = validate_password_present(&credentials.password) {
            errors.password = Some(e.to_string());
        }
        if !errors.is_empty() {
            return Err(AuthError::InvalidInput(errors));
        }

        let Some(user) = self.users.get_user_by_email(&email).await? else {
            // Unknown emails pay the same bcrypt cost as a wrong password.
            let dummy = self.dummy_hash().await?;
            self.verify(credentials.password, dummy).await?;
            tracing::warn!("Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.verify(credentials.password, user.password_hash.clone()).await? {
            tracing::warn!(user_id = user.id, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let session = self.create_session(user.id).await?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok((user.into(), session))
    }

    /// Resolve the session cookie on a request to its user. Read-only.
    pub async fn verify_auth(&self, jar: &CookieJar) -> Result<AuthResult, AuthError> {
        match jar.get(SESSION_COOKIE_NAME) {
            Some(cookie) if !cookie.value().is_empty() => self.verify_session(cookie.value()).await,
            _ => Ok(AuthResult::anonymous()),
        }
    }

    /// Look up a session token; missing or expired sessions yield no user.
    pub async fn verify_session(&self, token: &str) -> Result<AuthResult, AuthError> {
        let Some(session) = self.get_session(token).await? else {
            return Ok(AuthResult::anonymous());
        };

        if session.is_expired() {
            tracing::debug!(user_id = session.user_id, "Ignoring expired session");
            return Ok(AuthResult::anonymous());
        }

        let Some(user) = self.users.get_user_by_id(session.user_id).await? else {
            return Ok(AuthResult::anonymous());
        };

        Ok(AuthResult {
            user: Some(user.into()),
            session: Some(session),
        })
    }

    pub async fn create_session(&self, user_id: i64) -> Result<Session, AuthError> {
        let session = Session {
            id: generate_session_token(),
            expires_at: (Utc::now() + self.session_ttl).timestamp(),
            user_id,
        };

        sqlx::query("INSERT INTO sessions (id, expires_at, user_id) VALUES (?, ?, ?)")
            .bind(&session.id)
            .bind(session.expires_at)
            .bind(session.user_id)
            .execute(&self.db)
            .await?;

        Ok(session)
    }

    /// Delete a session row. Returns whether a row existed.
    pub async fn invalidate_session(&self, token: &str) -> Result<bool, AuthError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(token)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Cookie handed to the browser after login or signup.
    pub fn session_cookie(&self, session: &Session) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, session.id.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .max_age(time::Duration::seconds(self.session_ttl.num_seconds()))
            .build()
    }

    /// Cookie matching the session cookie's name and path, for removal.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build()
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    async fn get_session(&self, token: &str) -> Result<Option<Session>, AuthError> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT id, expires_at, user_id FROM sessions WHERE id = ?",
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await?;

        Ok(session)
    }

    // bcrypt is CPU-bound, keep it off the async workers.

    async fn hash(&self, password: String) -> Result<String, PasswordError> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|_| PasswordError::HashingFailed)?
    }

    async fn dummy_hash(&self) -> Result<String, PasswordError> {
        self.dummy_hash
            .get_or_try_init(|| self.hash(generate_session_token()))
            .await
            .cloned()
    }

    async fn verify(&self, password: String, hash: String) -> Result<bool, PasswordError> {
        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|_| PasswordError::VerificationFailed)?
    }
}
