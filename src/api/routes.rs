use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::auth::{auth_page, logout, submit_auth};
use super::health::health_check;
use super::training::training_page;
use crate::auth::{require_auth, security_headers_layer, AuthService};
use crate::config::AppConfig;
use crate::services::TrainingService;

/// Shared handler state. Cheap to clone: every field wraps the same pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub auth: AuthService,
    pub trainings: TrainingService,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &AppConfig) -> Self {
        Self {
            auth: AuthService::new(db.clone(), config),
            trainings: TrainingService::new(db.clone()),
            db,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for TrainingService {
    fn from_ref(state: &AppState) -> Self {
        state.trainings.clone()
    }
}

pub fn create_routes(db: SqlitePool, config: &AppConfig) -> Router {
    let state = AppState::new(db, config);

    let protected = Router::new()
        .route("/training", get(training_page))
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth,
        ));

    Router::new()
        .route("/", get(auth_page).post(submit_auth))
        .route("/logout", post(logout))
        .route("/health", get(health_check))
        .merge(protected)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security_headers_layer()),
        )
        .with_state(state)
}
