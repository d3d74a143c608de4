// Elevate Fitness: server-rendered training catalog with session auth

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod views;

pub use error::AppError;
