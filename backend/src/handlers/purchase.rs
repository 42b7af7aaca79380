//! HTTP handler for the purchase endpoint
//!
//! A malformed body (missing or wrong-typed fields) is rejected here with
//! a structural 400 and never reaches the processor. Business failures
//! come back from the processor as a rejected outcome and are rendered as
//! the aggregate `errors` body, also with status 400.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{PurchaseLine, PurchaseLineError, PurchaseOutcome};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::permissions::{require, Action};
use crate::AppState;

/// Purchase request body
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    pub purchases: Vec<PurchaseLine>,
}

/// Body returned when every line succeeded
#[derive(Debug, Serialize)]
pub struct PurchaseAccepted {
    pub message: &'static str,
    #[serde(rename = "AmountToPay")]
    pub amount_to_pay: Decimal,
}

/// Body returned when any line failed
#[derive(Debug, Serialize)]
pub struct PurchaseRejected {
    pub errors: Vec<PurchaseLineError>,
}

/// Submit a purchase batch
pub async fn submit_purchase(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> AppResult<Response> {
    require(&user, Action::Purchase)?;

    let Json(request) = payload.map_err(|e| AppError::MalformedRequest(e.body_text()))?;

    tracing::info!(user_id = user.user_id, "User is making a purchase");
    let outcome = state.purchase.process_batch(&request.purchases).await?;

    Ok(match outcome {
        PurchaseOutcome::Completed { amount_to_pay } => (
            StatusCode::OK,
            Json(PurchaseAccepted {
                message: "Purchase successful.",
                amount_to_pay,
            }),
        )
            .into_response(),
        PurchaseOutcome::Rejected { errors } => {
            (StatusCode::BAD_REQUEST, Json(PurchaseRejected { errors })).into_response()
        }
    })
}
