//! # Students Module
//!
//! Student CRUD plus enrollment. Student records carry no field policy;
//! enrollment is gated per role.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::students_routes;
