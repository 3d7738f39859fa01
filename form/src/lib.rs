//! SSH Deployment Form
//!
//! Configuration model for deploying a certificate to a remote host over SSH
//! as PEM, PFX or JKS: field edits, format-driven path normalization and
//! validation against a host-owned record.

pub mod app;
pub mod deploy;
pub mod errors;
pub mod filesys;
pub mod form;
pub mod logs;
pub mod models;
pub mod storage;
pub mod utils;
