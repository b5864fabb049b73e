pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod kafka;
pub mod repositories;

pub use config::Config;
pub use db::{create_pool, DbPool};
pub use error::{AppError, Result};
