//! Stock API Handlers

use axum::{Json, extract::State};
use shared::ledger;
use shared::models::{BatchStock, DailyStockRow, StokRusak, StokSummary};

use crate::core::ServerState;
use crate::db::repository::stok;
use crate::utils::AppResult;

pub async fn daily(State(state): State<ServerState>) -> AppResult<Json<Vec<DailyStockRow>>> {
    let snapshot = stok::load_all(&state.pool).await?;
    Ok(Json(ledger::daily_rows(&snapshot.movements())))
}

pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<StokSummary>> {
    let snapshot = stok::load_all(&state.pool).await?;
    Ok(Json(ledger::summary(&snapshot.movements())))
}

pub async fn batches(State(state): State<ServerState>) -> AppResult<Json<Vec<BatchStock>>> {
    let snapshot = stok::load_all(&state.pool).await?;
    Ok(Json(ledger::batch_balances(&snapshot.movements())))
}

pub async fn spoilage(State(state): State<ServerState>) -> AppResult<Json<Vec<StokRusak>>> {
    let rows = stok::find_all(&state.pool).await?;
    Ok(Json(rows))
}
