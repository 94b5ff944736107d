//! Core permission lookup and rendering

pub mod access;
pub mod permissions;

pub use access::{show_access, write_access};
pub use permissions::{extract_permissions, fetch_permissions};
