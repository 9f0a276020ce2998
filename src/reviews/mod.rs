//! # Reviews Module
//!
//! Course reviews: listing and posting under a course, and CRUD by review id.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::reviews_routes;
