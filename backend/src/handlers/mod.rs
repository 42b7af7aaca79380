//! HTTP handlers for the Inventory Tracker API

pub mod auth;
pub mod items;
pub mod purchase;
pub mod reports;
pub mod suppliers;

pub use auth::*;
pub use items::*;
pub use purchase::*;
pub use reports::*;
pub use suppliers::*;
