//! HTTP handler for reporting endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::permissions::{require, Action};
use crate::services::report::{ReportService, StockReport};
use crate::AppState;

/// Get the stock report
pub async fn stock_report(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<StockReport>> {
    require(&user, Action::ViewReports)?;
    tracing::info!(user_id = user.user_id, "Generating stock report");
    let service = ReportService::new(state.db, state.config.report.low_stock_threshold);
    let report = service.stock_report().await?;
    Ok(Json(report))
}
