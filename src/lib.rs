//! Presentation helpers for the HyperEVM explorer dashboard: pagination,
//! display formatting, query validation, view contexts and response shaping.

pub mod domain;
pub mod dto;
pub mod errors;
pub mod formatting;
pub mod models;
pub mod pagination;
pub mod urls;
pub mod validation;

#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod templates;
