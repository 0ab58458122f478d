//! Dashboard API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::DashboardSummary;
use shared::report;

use crate::core::ServerState;
use crate::db::repository::{pengeluaran, penjualan, produksi, retur};
use crate::utils::AppResult;
use crate::utils::time::date_or_today;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub tanggal: Option<String>,
}

/// Production, omzet, expenses and profit of one day (default today)
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<DashboardSummary>> {
    let tanggal = date_or_today(query.tanggal.as_deref())?;

    let (batches, sales, returns, expenses) = tokio::try_join!(
        produksi::find_all(&state.pool),
        penjualan::find_all(&state.pool),
        retur::find_all(&state.pool),
        pengeluaran::find_all(&state.pool),
    )?;

    Ok(Json(report::dashboard_summary(
        tanggal, &batches, &sales, &returns, &expenses,
    )))
}
