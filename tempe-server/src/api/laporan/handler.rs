//! Profit Report Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{LaporanLabaItem, ReportPeriod};
use shared::report;

use crate::core::ServerState;
use crate::db::repository::{pengeluaran, penjualan, retur};
use crate::utils::{AppError, AppResult};

const DEFAULT_LIMIT: usize = 30;
const MAX_LIMIT: usize = 366;

#[derive(Debug, Deserialize)]
pub struct LabaQuery {
    #[serde(default)]
    pub period: ReportPeriod,
    pub limit: Option<usize>,
}

/// Omzet, expenses and profit per day or month, oldest of the window first
pub async fn laba(
    State(state): State<ServerState>,
    Query(query): Query<LabaQuery>,
) -> AppResult<Json<Vec<LaporanLabaItem>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    if limit == 0 || limit > MAX_LIMIT {
        return Err(AppError::validation(format!(
            "limit harus antara 1 dan {MAX_LIMIT}"
        )));
    }

    let (sales, returns, expenses) = tokio::try_join!(
        penjualan::find_all(&state.pool),
        retur::find_all(&state.pool),
        pengeluaran::find_all(&state.pool),
    )?;

    Ok(Json(report::laporan_laba(
        &sales,
        &returns,
        &expenses,
        query.period,
        limit,
    )))
}
