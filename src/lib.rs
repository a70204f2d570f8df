// Library root for the home storage API

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod response;
pub mod routes;

// Re-export commonly used types
pub use db::Database;
pub use error::{ApiError, ApiResult};
pub use models::{Expense, Item, ItemTable};
pub use repository::{Repository, SharedRepository};
pub use routes::create_router;
