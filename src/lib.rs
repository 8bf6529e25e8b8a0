//! Pawlist - Terminal Pet Adoption Browser Library
//!
//! Browse a fixed catalog of adoptable pets and open a detail screen for
//! each one, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
