//! Sales API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::guard::StockGuard;
use shared::models::{Penjualan, PenjualanCreate};
use shared::pricing;

use crate::core::ServerState;
use crate::db::repository::{penjualan, produksi, stok};
use crate::utils::time::validate_not_before;
use crate::utils::validation::{MAX_NAME_LEN, validate_quantities, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

const RESOURCE: &str = "penjualan";

async fn load(state: &ServerState, id: i64) -> AppResult<Penjualan> {
    penjualan::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::SaleNotFound, format!("Penjualan {id} tidak ditemukan"))
            .with_detail("id", id)
    })
}

/// All sales, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Penjualan>>> {
    let sales = penjualan::find_all(&state.pool).await?;
    Ok(Json(sales))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Penjualan>> {
    Ok(Json(load(&state, id).await?))
}

/// Record a sale against the batch produced on `tanggal_produksi`
///
/// The batch must exist and not be expired, the sale cannot predate it, and
/// each variant is capped by what the batch still holds. Prices come from
/// the buyer category, never from the request.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PenjualanCreate>,
) -> AppResult<Json<Penjualan>> {
    validate_required_text(&payload.pembeli, "Nama pembeli", MAX_NAME_LEN)?;
    let qty = payload.qty();
    validate_quantities(&qty, "Jumlah penjualan")?;
    if qty.is_empty() {
        return Err(AppError::new(ErrorCode::EmptySale));
    }

    let _guard = state.lock_writes().await;

    let batch = produksi::find_by_tanggal(&state.pool, payload.tanggal_produksi)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ProductionNotFound,
                format!("Produksi tanggal {} tidak ditemukan", payload.tanggal_produksi),
            )
            .with_detail("tanggal_produksi", payload.tanggal_produksi.to_string())
        })?;
    if batch.stat_exp {
        return Err(AppError::with_message(
            ErrorCode::ProductionExpired,
            format!("Produksi tanggal {} sudah kedaluwarsa", batch.tanggal),
        ));
    }
    validate_not_before(payload.tanggal, batch.tanggal, "penjualan", "produksi")?;

    let balance = stok::load_batch(&state.pool, batch.id)
        .await?
        .batch(batch.id)
        .ok_or_else(|| AppError::internal("Batch balance missing"))?;
    StockGuard::for_batch(&balance).check(&qty).map_err(|shortage| {
        AppError::with_message(ErrorCode::InsufficientStock, shortage.to_string())
            .with_detail("variant", shortage.variant.label())
            .with_detail("requested", shortage.requested)
            .with_detail("available", shortage.available)
    })?;

    let subtotal = pricing::subtotals(payload.kategori_pembeli, &qty);
    let total = pricing::checked_total(payload.kategori_pembeli, &qty).ok_or_else(|| {
        AppError::with_message(ErrorCode::ValueOutOfRange, "Total penjualan melebihi batas")
    })?;
    let sale = Penjualan {
        id: shared::util::snowflake_id(),
        tanggal: payload.tanggal,
        produksi_id: batch.id,
        tanggal_produksi: batch.tanggal,
        pembeli: payload.pembeli.trim().to_string(),
        kategori_pembeli: payload.kategori_pembeli,
        tempe_3k_pcs: qty.pcs_3k,
        tempe_5k_pcs: qty.pcs_5k,
        tempe_10k_pcs: qty.pcs_10k,
        subtotal_3k: subtotal.pcs_3k,
        subtotal_5k: subtotal.pcs_5k,
        subtotal_10k: subtotal.pcs_10k,
        total_penjualan: total,
        status_pembayaran: payload.status_pembayaran,
        created_at: shared::util::now_millis(),
    };
    penjualan::insert(&state.pool, &sale).await?;

    tracing::info!(
        resource = RESOURCE,
        penjualan_id = sale.id,
        produksi_id = batch.id,
        total = sale.total_penjualan,
        "Sale recorded"
    );

    Ok(Json(sale))
}

/// Flip Lunas ⇄ Tempo
pub async fn toggle_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Penjualan>> {
    let _guard = state.lock_writes().await;

    let sale = load(&state, id).await?;
    let next = sale.status_pembayaran.toggled();
    penjualan::set_status(&state.pool, id, next).await?;

    tracing::info!(
        resource = RESOURCE,
        penjualan_id = id,
        status = ?next,
        "Payment status toggled"
    );

    Ok(Json(Penjualan {
        status_pembayaran: next,
        ..sale
    }))
}
