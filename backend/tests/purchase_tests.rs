//! Purchase batch processing tests
//!
//! Covers the purchase processor's contract:
//! - per-line validation order (existence, positivity, stock)
//! - aggregate error reporting in input order
//! - immediate per-line persistence with no rollback
//! - bill arithmetic

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared::models::{Item, PurchaseLine, PurchaseOutcome, RejectReason};

use inventory_tracker_backend::services::PurchaseService;
use inventory_tracker_backend::store::MemoryItemStore;

fn item(id: i64, stock: i64, price: Decimal) -> Item {
    Item {
        id,
        name: format!("Item {}", id),
        quantity_in_stock: stock,
        quantity_sold: 0,
        revenue: Decimal::ZERO,
        price,
        supplier_ids: vec![],
    }
}

fn line(item_id: i64, quantity: i64) -> PurchaseLine {
    PurchaseLine { item_id, quantity }
}

async fn run(
    items: Vec<Item>,
    lines: Vec<PurchaseLine>,
) -> (MemoryItemStore, PurchaseOutcome) {
    let store = MemoryItemStore::with_items(items);
    let service = PurchaseService::new(store.clone());
    let outcome = service.process_batch(&lines).await.unwrap();
    (store, outcome)
}

// ============================================================================
// Unit Tests
// ============================================================================

mod unit_tests {
    use super::*;

    /// Two valid lines: stock and revenue move, bill is the sum.
    #[tokio::test]
    async fn test_all_valid_batch() {
        let (store, outcome) = run(
            vec![item(1, 10, dec!(100)), item(2, 20, dec!(150))],
            vec![line(1, 5), line(2, 10)],
        )
        .await;

        assert_eq!(
            outcome,
            PurchaseOutcome::Completed {
                amount_to_pay: dec!(2000),
            }
        );

        let a = store.snapshot(1).await.unwrap();
        assert_eq!(a.quantity_in_stock, 5);
        assert_eq!(a.quantity_sold, 5);
        assert_eq!(a.revenue, dec!(500));

        let b = store.snapshot(2).await.unwrap();
        assert_eq!(b.quantity_in_stock, 10);
        assert_eq!(b.quantity_sold, 10);
        assert_eq!(b.revenue, dec!(1500));
    }

    /// Every invalid line is reported, in input order, and nothing moves.
    #[tokio::test]
    async fn test_all_invalid_batch_reports_every_line() {
        let initial = item(1, 10, dec!(100));
        let (store, outcome) = run(
            vec![initial.clone()],
            vec![line(1, 15), line(999, 5), line(1, -5)],
        )
        .await;

        let PurchaseOutcome::Rejected { errors } = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].item_id, 1);
        assert_eq!(errors[0].error, "Not enough stock available");
        assert_eq!(errors[1].item_id, 999);
        assert_eq!(errors[1].error, "Item not found");
        assert_eq!(errors[2].item_id, 1);
        assert_eq!(errors[2].error, "Quantity must be greater than zero");

        // All three lines were invalid, so the item is untouched.
        assert_eq!(store.snapshot(1).await.unwrap(), initial);
    }

    /// A failed batch leaves the store as it was, so resubmitting it
    /// yields the identical error set.
    #[tokio::test]
    async fn test_failed_batch_is_idempotent() {
        let store = MemoryItemStore::with_items([item(1, 3, dec!(9.99))]);
        let service = PurchaseService::new(store.clone());
        let batch = vec![line(1, 4), line(2, 1)];

        let first = service.process_batch(&batch).await.unwrap();
        let second = service.process_batch(&batch).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.snapshot(1).await.unwrap().quantity_in_stock, 3);
    }

    /// Existence is checked before positivity: a bad quantity against a
    /// missing item reports not-found.
    #[tokio::test]
    async fn test_validation_order_missing_item_wins() {
        let (_, outcome) = run(vec![], vec![line(42, 0)]).await;

        let PurchaseOutcome::Rejected { errors } = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors[0].error, "Item not found");
    }

    /// Positivity is checked before stock: a non-positive quantity against
    /// an existing item reports the quantity error whether or not stock
    /// would cover it.
    #[tokio::test]
    async fn test_validation_order_positivity_beats_stock() {
        for stock in [0, 100] {
            let (_, outcome) = run(vec![item(1, stock, dec!(5))], vec![line(1, -2)]).await;

            let PurchaseOutcome::Rejected { errors } = outcome else {
                panic!("expected rejection");
            };
            assert_eq!(errors[0].error, "Quantity must be greater than zero");
        }
    }

    /// Buying exactly the remaining stock succeeds and empties it.
    #[tokio::test]
    async fn test_quantity_equal_to_stock() {
        let (store, outcome) = run(vec![item(1, 10, dec!(2))], vec![line(1, 10)]).await;

        assert_eq!(
            outcome,
            PurchaseOutcome::Completed {
                amount_to_pay: dec!(20),
            }
        );
        assert_eq!(store.snapshot(1).await.unwrap().quantity_in_stock, 0);
    }

    /// Valid lines are persisted before later lines are evaluated: a
    /// repeated item sees the already-decremented stock.
    #[tokio::test]
    async fn test_save_per_line_affects_later_lines() {
        let (store, outcome) = run(
            vec![item(1, 10, dec!(1))],
            vec![line(1, 6), line(1, 6)],
        )
        .await;

        let PurchaseOutcome::Rejected { errors } = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error, "Not enough stock available");

        // The first line went through and stayed applied.
        let after = store.snapshot(1).await.unwrap();
        assert_eq!(after.quantity_in_stock, 4);
        assert_eq!(after.quantity_sold, 6);
    }

    /// An empty batch is trivially successful with a zero bill.
    #[tokio::test]
    async fn test_empty_batch() {
        let (_, outcome) = run(vec![item(1, 5, dec!(10))], vec![]).await;

        assert_eq!(
            outcome,
            PurchaseOutcome::Completed {
                amount_to_pay: Decimal::ZERO,
            }
        );
    }

    /// Reject reasons render the exact API strings.
    #[test]
    fn test_error_strings_are_exact() {
        assert_eq!(RejectReason::ItemNotFound.message(), "Item not found");
        assert_eq!(
            RejectReason::InvalidQuantity.message(),
            "Quantity must be greater than zero"
        );
        assert_eq!(
            RejectReason::InsufficientStock.message(),
            "Not enough stock available"
        );
    }
}

// ============================================================================
// Response Contract Tests
// ============================================================================

mod contract_tests {
    use super::*;
    use inventory_tracker_backend::handlers::purchase::{PurchaseAccepted, PurchaseRejected};
    use shared::models::PurchaseLineError;

    #[test]
    fn test_success_body_shape() {
        let body = serde_json::to_value(PurchaseAccepted {
            message: "Purchase successful.",
            amount_to_pay: dec!(2000),
        })
        .unwrap();

        assert_eq!(body["message"], "Purchase successful.");
        assert_eq!(body["AmountToPay"], "2000");
    }

    #[test]
    fn test_rejection_body_shape() {
        let body = serde_json::to_value(PurchaseRejected {
            errors: vec![PurchaseLineError::new(7, RejectReason::ItemNotFound)],
        })
        .unwrap();

        assert_eq!(body["errors"][0]["item_id"], 7);
        assert_eq!(body["errors"][0]["error"], "Item not found");
    }

    #[test]
    fn test_request_body_parses() {
        let body = r#"{"purchases": [{"item_id": 1, "quantity": 5}, {"item_id": 2, "quantity": -1}]}"#;
        let request: inventory_tracker_backend::handlers::purchase::PurchaseRequest =
            serde_json::from_str(body).unwrap();
        assert_eq!(request.purchases.len(), 2);
        assert_eq!(request.purchases[1].quantity, -1);
    }

    #[test]
    fn test_request_body_missing_field_is_structural() {
        let body = r#"{"purchases": [{"item_id": 1}]}"#;
        let result: Result<inventory_tracker_backend::handlers::purchase::PurchaseRequest, _> =
            serde_json::from_str(body);
        assert!(result.is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::test_runner::TestCaseError;

    /// Strategy for a valid line quantity
    fn quantity_strategy() -> impl Strategy<Value = i64> {
        1i64..=50
    }

    /// Strategy for a unit price with two decimal places
    fn price_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=100_000).prop_map(|n| Decimal::new(n, 2))
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// All-valid batches: each item loses exactly the sum of the
        /// quantities requested against it, and the bill is the sum of the
        /// line totals.
        #[test]
        fn prop_all_valid_batch_conserves_stock_and_bill(
            quantities in prop::collection::vec(quantity_strategy(), 1..8),
            price in price_strategy()
        ) {
            runtime().block_on(async {
                let total: i64 = quantities.iter().sum();
                let store = MemoryItemStore::with_items([item(1, total, price)]);
                let service = PurchaseService::new(store.clone());

                let lines: Vec<PurchaseLine> =
                    quantities.iter().map(|&q| line(1, q)).collect();
                let outcome = service.process_batch(&lines).await.unwrap();

                let expected_bill = price * Decimal::from(total);
                prop_assert_eq!(
                    outcome,
                    PurchaseOutcome::Completed { amount_to_pay: expected_bill }
                );

                let after = store.snapshot(1).await.unwrap();
                prop_assert_eq!(after.quantity_in_stock, 0);
                prop_assert_eq!(after.quantity_sold, total);
                prop_assert_eq!(after.revenue, expected_bill);
                Ok(())
            })?;
        }

        /// Batches made entirely of invalid lines never mutate the store
        /// and produce one error per line.
        #[test]
        fn prop_invalid_lines_never_mutate(
            bad_quantities in prop::collection::vec(-10i64..=0, 1..8),
            price in price_strategy()
        ) {
            runtime().block_on(async {
                let initial = item(1, 100, price);
                let store = MemoryItemStore::with_items([initial.clone()]);
                let service = PurchaseService::new(store.clone());

                let lines: Vec<PurchaseLine> =
                    bad_quantities.iter().map(|&q| line(1, q)).collect();
                let outcome = service.process_batch(&lines).await.unwrap();

                let PurchaseOutcome::Rejected { errors } = outcome else {
                    return Err(TestCaseError::fail("expected rejection"));
                };
                prop_assert_eq!(errors.len(), bad_quantities.len());
                prop_assert_eq!(store.snapshot(1).await.unwrap(), initial);
                Ok(())
            })?;
        }

        /// Mixed batches report exactly the invalid lines, in input order.
        #[test]
        fn prop_errors_match_invalid_lines_in_order(
            flags in prop::collection::vec(any::<bool>(), 1..10),
            price in price_strategy()
        ) {
            runtime().block_on(async {
                // Plenty of stock, so a line is invalid iff its quantity
                // is non-positive.
                let store = MemoryItemStore::with_items([item(1, 1_000_000, price)]);
                let service = PurchaseService::new(store);

                let lines: Vec<PurchaseLine> = flags
                    .iter()
                    .map(|&valid| line(1, if valid { 1 } else { 0 }))
                    .collect();
                let outcome = service.process_batch(&lines).await.unwrap();

                let invalid_count = flags.iter().filter(|&&v| !v).count();
                match outcome {
                    PurchaseOutcome::Completed { .. } => {
                        prop_assert_eq!(invalid_count, 0);
                    }
                    PurchaseOutcome::Rejected { errors } => {
                        prop_assert_eq!(errors.len(), invalid_count);
                        for err in &errors {
                            prop_assert_eq!(
                                err.error.as_str(),
                                "Quantity must be greater than zero"
                            );
                        }
                    }
                }
                Ok(())
            })?;
        }

        /// The bill never depends on line order for all-valid batches.
        #[test]
        fn prop_bill_is_order_independent(
            quantities in prop::collection::vec(quantity_strategy(), 2..6),
            price in price_strategy()
        ) {
            runtime().block_on(async {
                let total: i64 = quantities.iter().sum();

                let forward = {
                    let store = MemoryItemStore::with_items([item(1, total, price)]);
                    let service = PurchaseService::new(store);
                    let lines: Vec<PurchaseLine> =
                        quantities.iter().map(|&q| line(1, q)).collect();
                    service.process_batch(&lines).await.unwrap()
                };

                let reversed = {
                    let store = MemoryItemStore::with_items([item(1, total, price)]);
                    let service = PurchaseService::new(store);
                    let lines: Vec<PurchaseLine> =
                        quantities.iter().rev().map(|&q| line(1, q)).collect();
                    service.process_batch(&lines).await.unwrap()
                };

                prop_assert_eq!(forward, reversed);
                Ok(())
            })?;
        }
    }
}
