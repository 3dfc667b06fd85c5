//! Page utilities

pub mod config;
pub mod constants;
