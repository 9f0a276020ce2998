//! # Courses Module
//!
//! This module handles course functionality including:
//! - Course CRUD operations
//! - Optional instructor assignment
//! - Listing students enrolled in a course

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use routes::courses_routes;
