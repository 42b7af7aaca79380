//! Capability checks
//!
//! One flat `is_authorized(role, action)` function invoked at the
//! transport boundary. The purchase processor itself never checks
//! permissions; by the time it runs, the caller is known to be allowed.

use shared::models::Role;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;

/// Actions a caller may attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ReadItems,
    WriteItems,
    ReadSuppliers,
    WriteSuppliers,
    Purchase,
    ViewReports,
}

/// Whether a role may perform an action. Catalog writes are admin-only;
/// everything else needs only an authenticated caller.
pub fn is_authorized(role: Role, action: Action) -> bool {
    match action {
        Action::WriteItems | Action::WriteSuppliers => role.is_admin(),
        Action::ReadItems | Action::ReadSuppliers | Action::Purchase | Action::ViewReports => true,
    }
}

/// Guard used by handlers; maps a denied check to a 403.
pub fn require(user: &AuthUser, action: Action) -> AppResult<()> {
    if is_authorized(user.role, action) {
        Ok(())
    } else {
        tracing::warn!(user_id = user.user_id, ?action, "Permission denied");
        Err(AppError::InsufficientPermissions)
    }
}
