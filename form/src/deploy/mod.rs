//! Deployment target module

pub mod target;
