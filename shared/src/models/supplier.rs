//! Supplier model

use serde::{Deserialize, Serialize};

/// A supplier that items can be restocked from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    /// Contact detail (phone or address). Unique across suppliers.
    pub contact: String,
    /// Contact email. Unique when present.
    pub email: Option<String>,
}
