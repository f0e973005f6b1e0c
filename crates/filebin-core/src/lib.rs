//! Filebin core library
//!
//! Configuration, error types, and domain models shared by the storage,
//! metadata, and API crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, LogLevel};
pub use models::{FileRecord, UploadResponse, DEFAULT_PRIVACY};
