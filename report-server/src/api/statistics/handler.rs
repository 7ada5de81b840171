//! Statistics API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use shared::models::SalesReport;

use crate::core::AppState;
use crate::report::{self, RangeInput};
use crate::utils::AppResult;

/// GET /api/statistics?date_filter=&start_date=&end_date=
#[derive(Debug, Deserialize)]
pub struct StatisticsQuery {
    /// Named range token; anything unrecognized behaves like `30days`
    pub date_filter: Option<String>,
    /// Only honored when `date_filter=custom`
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/statistics — assemble the analytics dashboard report
///
/// Always returns a report: a broken custom range or an unreachable store
/// degrades the affected sections to zeros instead of failing the request.
pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<StatisticsQuery>,
) -> AppResult<Json<SalesReport>> {
    tracing::debug!(
        date_filter = query.date_filter.as_deref().unwrap_or("30days"),
        "Fetching statistics"
    );

    let input = RangeInput {
        filter: query.date_filter,
        start_date: query.start_date,
        end_date: query.end_date,
    };

    let report = report::assemble(
        state.store.as_ref(),
        &input,
        state.config.timezone,
        &state.config.currency,
    )
    .await;

    Ok(Json(report))
}
