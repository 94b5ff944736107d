//! Core liveboard SQL logic
//!
//! - `queries`: fetching the SQL of each visualization
//! - `format`: rendering the SQL for the console

pub mod format;
pub mod queries;

pub use format::{format_sql, print_sql, write_sql};
pub use queries::fetch_liveboard_sql;
