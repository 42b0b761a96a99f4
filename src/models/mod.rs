//! Configuration models shared across the dashboard.

pub mod config;
