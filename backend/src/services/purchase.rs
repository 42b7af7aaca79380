//! Purchase batch processing
//!
//! The one piece of real business logic in the system: take an ordered
//! batch of (item, quantity) lines, validate each independently, apply
//! stock and revenue mutations for the valid ones, and report every
//! failing line in one round trip instead of failing fast.

use std::sync::Arc;

use rust_decimal::Decimal;
use shared::models::{Item, PurchaseLine, PurchaseLineError, PurchaseOutcome, RejectReason};
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::store::ItemStore;

/// Outcome of validating a single line
#[derive(Debug)]
enum LineValidation {
    Invalid(RejectReason),
    /// Carries the resolved item so the processor can mutate it without a
    /// second lookup.
    Valid(Item),
}

/// Purchase service over an [`ItemStore`]
#[derive(Clone)]
pub struct PurchaseService<S> {
    store: S,
    /// Serializes batch processing. The validator reads stock and the
    /// processor writes it back in separate store calls; without this
    /// guard two concurrent batches could both pass the stock check and
    /// drive `quantity_in_stock` negative.
    guard: Arc<Mutex<()>>,
}

impl<S: ItemStore> PurchaseService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            guard: Arc::new(Mutex::new(())),
        }
    }

    /// Validate one requested line.
    ///
    /// Check order is fixed and significant: existence first, then
    /// quantity positivity, then stock sufficiency. A line that is both
    /// non-positive and over stock must report the positivity error.
    async fn validate_line(&self, item_id: i64, quantity: i64) -> AppResult<LineValidation> {
        let Some(item) = self.store.get(item_id).await? else {
            return Ok(LineValidation::Invalid(RejectReason::ItemNotFound));
        };

        if quantity <= 0 {
            return Ok(LineValidation::Invalid(RejectReason::InvalidQuantity));
        }

        if item.quantity_in_stock < quantity {
            return Ok(LineValidation::Invalid(RejectReason::InsufficientStock));
        }

        Ok(LineValidation::Valid(item))
    }

    /// Process a batch of purchase lines in input order.
    ///
    /// Each valid line's mutation is persisted before the next line is
    /// evaluated, and is not rolled back if a later line fails; a batch
    /// with any invalid line is rejected with one error entry per failing
    /// line and no partial bill.
    pub async fn process_batch(&self, lines: &[PurchaseLine]) -> AppResult<PurchaseOutcome> {
        let _serialized = self.guard.lock().await;

        let mut bill = Decimal::ZERO;
        let mut errors: Vec<PurchaseLineError> = Vec::new();

        for line in lines {
            match self.validate_line(line.item_id, line.quantity).await? {
                LineValidation::Invalid(reason) => {
                    tracing::error!(item_id = line.item_id, "{}", reason.message());
                    errors.push(PurchaseLineError::new(line.item_id, reason));
                }
                LineValidation::Valid(mut item) => {
                    let line_total = item.apply_sale(line.quantity);
                    self.store.save(&item).await?;
                    bill += line_total;
                }
            }
        }

        if errors.is_empty() {
            tracing::info!(amount_to_pay = %bill, "Purchase successful");
            Ok(PurchaseOutcome::Completed {
                amount_to_pay: bill,
            })
        } else {
            Ok(PurchaseOutcome::Rejected { errors })
        }
    }
}
