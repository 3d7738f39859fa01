//! Data models

pub mod config;
pub mod error_map;
pub mod record;
