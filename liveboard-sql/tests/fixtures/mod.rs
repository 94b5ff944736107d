//! Test fixtures and utilities

pub mod api_responses;

pub use api_responses::*;
