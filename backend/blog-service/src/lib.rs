/// Blog Service Library
///
/// A small HTTP service exposing CRUD endpoints over an in-memory
/// collection of blog posts. There is no database: the post collection
/// lives for exactly as long as the process does.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and the route table
/// - `models`: The post record type
/// - `store`: The in-memory post collection
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
