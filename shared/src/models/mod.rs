//! Domain models for the Inventory Tracker

mod item;
mod purchase;
mod supplier;
mod user;

pub use item::*;
pub use purchase::*;
pub use supplier::*;
pub use user::*;
