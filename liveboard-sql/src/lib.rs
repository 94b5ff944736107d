//! Liveboard SQL library
//!
//! Resolves a liveboard by name, fetches the SQL generated for each of its
//! visualizations and renders it for the console.

pub mod core;
pub mod error;
pub mod extractor_impl;
pub mod types;

// Re-export main types
pub use error::{LiveboardSqlError, LiveboardSqlResult};
pub use extractor_impl::Extractor;
pub use types::*;
pub use crate::core::{fetch_liveboard_sql, format_sql, print_sql, write_sql};
