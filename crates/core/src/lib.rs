//! rig-advisor-core
//!
//! Core library for budget-constrained PC build selection.
//!
//! This crate defines the part model, catalogs, the build selector, and the
//! advisor configuration. All substantive logic lives here so it is fully
//! testable and reusable from multiple frontends (CLI, web service, etc.).

pub mod catalog;
pub mod config;
pub mod model;
pub mod selector;

pub use catalog::{Catalog, CatalogError};
pub use selector::{select, BuildSelector, Selection};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
