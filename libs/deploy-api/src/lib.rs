//! Wire models for stored deployment records

pub mod models;
