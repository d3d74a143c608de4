// Authentication and session handling

pub mod errors;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;

pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use password::*;
pub use service::*;
