//! # Validation Module
//!
//! Role-based validation engine:
//! - Field validators (not-blank, email format, uniqueness, existence)
//! - Per-entity validation helpers
//! - Per-role action policies and the resolver that picks one
//! - The façade the HTTP handlers call

pub mod facade;
pub mod field;
pub mod helpers;
pub mod lookup;
pub mod models;
pub mod policy;
pub mod resolver;


pub use facade::ValidationFacade;
pub use lookup::{CatalogLookup, SqliteCatalog};
pub use models::*;
pub use resolver::PolicyResolver;
