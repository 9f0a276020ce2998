//! # Instructors Module
//!
//! Instructor CRUD. Every mutation goes through the validation façade with
//! the caller's role before it reaches the database.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::instructors_routes;
