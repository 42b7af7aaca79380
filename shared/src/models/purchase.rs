//! Purchase batch contract
//!
//! The transient request/response types exchanged with the purchase
//! processor. Nothing here is persisted; purchase history is out of scope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One requested line of a purchase batch.
///
/// The quantity is accepted as-is at the transport boundary; whether it is
/// positive and coverable by stock is the processor's call, not the
/// deserializer's.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseLine {
    pub item_id: i64,
    pub quantity: i64,
}

/// Why a purchase line was rejected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    ItemNotFound,
    InvalidQuantity,
    InsufficientStock,
}

impl RejectReason {
    /// Human-readable reason. These strings are part of the API contract;
    /// callers match on them verbatim.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::ItemNotFound => "Item not found",
            RejectReason::InvalidQuantity => "Quantity must be greater than zero",
            RejectReason::InsufficientStock => "Not enough stock available",
        }
    }
}

/// A rejected line, tagged with the item it came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseLineError {
    pub item_id: i64,
    pub error: String,
}

impl PurchaseLineError {
    pub fn new(item_id: i64, reason: RejectReason) -> Self {
        Self {
            item_id,
            error: reason.message().to_string(),
        }
    }
}

/// Result of processing a whole batch.
///
/// A batch either completes with an aggregate bill or is rejected with one
/// entry per failing line, in input order. A rejection never reports a
/// partial bill even when some lines were applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PurchaseOutcome {
    Completed { amount_to_pay: Decimal },
    Rejected { errors: Vec<PurchaseLineError> },
}

impl PurchaseOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, PurchaseOutcome::Completed { .. })
    }
}
