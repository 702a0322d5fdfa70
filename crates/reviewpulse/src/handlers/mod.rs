pub mod error;
pub mod health;
pub mod reviews;

pub use error::AppError;
