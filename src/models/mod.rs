// Data models

pub mod session;
pub mod training;
pub mod user;
pub mod validation;

pub use session::*;
pub use training::*;
pub use user::*;
pub use validation::*;
