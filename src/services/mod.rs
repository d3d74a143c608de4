// Data access services

pub mod training_service;
pub mod user_service;

pub use training_service::TrainingService;
pub use user_service::UserService;
