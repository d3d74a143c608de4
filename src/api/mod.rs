// HTTP routes and handlers

pub mod auth;
pub mod health;
pub mod routes;
pub mod training;

pub use routes::{create_routes, AppState};
