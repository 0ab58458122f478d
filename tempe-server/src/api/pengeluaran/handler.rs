//! Expense API Handlers

use axum::{Json, extract::State};
use shared::models::{Pengeluaran, PengeluaranCreate};

use crate::core::ServerState;
use crate::db::repository::pengeluaran;
use crate::utils::validation::{MAX_NOTE_LEN, validate_amount, validate_max_len};
use crate::utils::{AppError, AppResult, ErrorCode};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Pengeluaran>>> {
    let expenses = pengeluaran::find_all(&state.pool).await?;
    Ok(Json(expenses))
}

/// Manual expense; `gaji` is booked only by payroll settlement
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PengeluaranCreate>,
) -> AppResult<Json<Pengeluaran>> {
    if payload.kategori_pengeluaran.is_system() {
        return Err(AppError::new(ErrorCode::ExpenseCategoryReserved)
            .with_detail("kategori_pengeluaran", "gaji"));
    }
    if payload.jumlah <= 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "Jumlah pengeluaran harus lebih dari 0",
        ));
    }
    validate_amount(payload.jumlah, "Jumlah pengeluaran")?;
    validate_max_len(&payload.keterangan, "Keterangan", MAX_NOTE_LEN)?;

    let expense = Pengeluaran {
        id: shared::util::snowflake_id(),
        tanggal: payload.tanggal,
        kategori_pengeluaran: payload.kategori_pengeluaran,
        jumlah: payload.jumlah,
        keterangan: payload.keterangan.trim().to_string(),
        created_at: shared::util::now_millis(),
    };
    pengeluaran::insert(&state.pool, &expense).await?;

    tracing::info!(
        pengeluaran_id = expense.id,
        kategori = ?expense.kategori_pengeluaran,
        jumlah = expense.jumlah,
        "Expense recorded"
    );

    Ok(Json(expense))
}
