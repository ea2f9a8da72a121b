//! Path utilities for voxmcp data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Explicit-root variants (`data_root_from`, `database_path_in`) take the
//!   override as an argument instead of reading the environment

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, data_root_from};
