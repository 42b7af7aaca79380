//! Business logic services for the Inventory Tracker

pub mod auth;
pub mod item;
pub mod purchase;
pub mod report;
pub mod supplier;

pub use auth::AuthService;
pub use item::ItemService;
pub use purchase::PurchaseService;
pub use report::ReportService;
pub use supplier::SupplierService;
