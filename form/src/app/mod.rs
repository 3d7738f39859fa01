//! Command line host of the form

pub mod args;
pub mod run;
