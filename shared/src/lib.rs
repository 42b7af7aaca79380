//! Shared types and models for the Inventory Tracker
//!
//! This crate contains the domain types shared between the backend and any
//! other component of the system (tooling, future clients).

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
