#![allow(dead_code)]

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Method, Request,
    },
    response::Response,
    Router,
};
use elevate_fitness::api::create_routes;
use elevate_fitness::auth::{AuthService, SESSION_COOKIE_NAME};
use elevate_fitness::config::{bootstrap_store, AppConfig, DatabaseConfig};
use sqlx::SqlitePool;
use std::sync::Once;
use tempfile::TempDir;
use tower::ServiceExt;

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Config tuned for tests: cheap bcrypt and a throwaway static dir.
pub fn test_config(static_dir: &std::path::Path) -> AppConfig {
    AppConfig {
        static_dir: static_dir.to_path_buf(),
        bcrypt_cost: 4,
        ..AppConfig::default()
    }
}

/// A bootstrapped database file plus a router on top of it.
pub struct TestApp {
    pub dir: TempDir,
    pub db_config: DatabaseConfig,
    pub config: AppConfig,
    pub pool: SqlitePool,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        init_test_logging();

        let dir = TempDir::new().expect("Failed to create temp dir");
        let static_dir = dir.path().join("public");
        std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");

        let db_config = DatabaseConfig::for_path(dir.path().join("training.db"));
        let config = test_config(&static_dir);
        let pool = bootstrap_store(&db_config)
            .await
            .expect("Failed to bootstrap test database");
        let router = create_routes(pool.clone(), &config);

        Self {
            dir,
            db_config,
            config,
            pool,
            router,
        }
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.pool.clone(), &self.config)
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Submit the auth form in the given mode.
    pub async fn submit(&self, mode: &str, email: &str, password: &str) -> Response {
        let body = credentials_body(email, password);
        self.post_form(&format!("/?mode={}", mode), &body, None)
            .await
    }

    /// Sign up and return the `name=value` pair of the issued session cookie.
    pub async fn signup(&self, email: &str, password: &str) -> String {
        let response = self.submit("signup", email, password).await;
        session_cookie(&response).expect("Signup should set a session cookie")
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

pub fn credentials_body(email: &str, password: &str) -> String {
    serde_urlencoded::to_string([("email", email), ("password", password)])
        .expect("Failed to encode form body")
}

/// The raw Set-Cookie header for the session cookie, if any.
pub fn set_cookie_header(response: &Response) -> Option<String> {
    let prefix = format!("{}=", SESSION_COOKIE_NAME);
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(&prefix))
        .map(str::to_string)
}

/// `auth_session=<token>` from a response, ignoring removal cookies.
pub fn session_cookie(response: &Response) -> Option<String> {
    set_cookie_header(response)
        .and_then(|header| header.split(';').next().map(str::to_string))
        .filter(|pair| pair.len() > SESSION_COOKIE_NAME.len() + 1)
}

/// Token part of a `auth_session=<token>` pair.
pub fn token_of(cookie_pair: &str) -> &str {
    cookie_pair
        .split_once('=')
        .map(|(_, token)| token)
        .unwrap_or_default()
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
