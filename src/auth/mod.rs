//! # Auth Module
//!
//! Request-scoped caller context. The role header is trusted as sent; no
//! token verification happens here.

pub mod extractors;


pub use extractors::{CallerRole, RequestLocale, ROLE_HEADER};
