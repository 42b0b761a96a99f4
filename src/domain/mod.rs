//! Rows and filter values rendered by the dashboard pages.

pub mod token;
pub mod types;
pub mod wallet;
