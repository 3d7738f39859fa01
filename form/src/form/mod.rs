//! Reactive form model for SSH certificate deployment

pub mod context;
pub mod controller;
pub mod defaults;
pub mod mutate;
pub mod normalize;
pub mod validate;
