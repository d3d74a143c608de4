use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// Liveness plus a round trip to the store.
pub async fn health_check(State(db): State<SqlitePool>) -> Result<Json<Value>, StatusCode> {
    if let Err(e) = sqlx::query("SELECT 1").execute(&db).await {
        tracing::error!("Health check failed: {}", e);
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(json!({
        "status": "healthy",
        "service": "elevate-fitness",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
