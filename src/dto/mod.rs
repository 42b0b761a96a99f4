//! View contexts handed to templates and payloads returned by API endpoints.

use serde::Serialize;

pub mod api;
pub mod base;
pub mod tokens;
pub mod wallets;

/// Flat, serializable data for a single page render.
pub trait ViewContext: Serialize {
    /// Converts the view into a Tera context, one top-level key per field.
    #[cfg(feature = "server")]
    fn to_context(&self) -> tera::Result<tera::Context> {
        tera::Context::from_serialize(self)
    }
}
