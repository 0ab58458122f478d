//! Payroll API Handlers
//!
//! | Step | Endpoint | Effect |
//! |------|----------|--------|
//! | verify | PATCH /api/gaji/{id}/verifikasi | Draft → Verified, nominal = daily wage |
//! | pay | POST /api/gaji/bayar-batch | Verified → Paid, one `gaji` expense |
//!
//! Paid entries never change again.

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    BayarBatchRequest, BayarBatchResponse, ExpenseCategory, Gaji, Pengeluaran,
};
use shared::payroll::{self, PayrollStatus, SettlementError};

use crate::core::ServerState;
use crate::db::repository::{self, gaji, pengeluaran};
use crate::utils::{AppError, AppResult, ErrorCode};

const RESOURCE: &str = "gaji";

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::PayrollNotFound, format!("Data gaji {id} tidak ditemukan"))
        .with_detail("id", id)
}

fn settlement_error(err: SettlementError) -> AppError {
    let code = match &err {
        SettlementError::Empty | SettlementError::NonPositiveTotal => {
            ErrorCode::PayrollNothingToPay
        }
        SettlementError::NotFound(_) => ErrorCode::PayrollNotFound,
        SettlementError::AlreadyPaid(_) => ErrorCode::PayrollAlreadyPaid,
        SettlementError::NotVerified(_) => ErrorCode::PayrollNotVerified,
        SettlementError::WrongEmployee { .. } => ErrorCode::PayrollEmployeeMismatch,
        SettlementError::TotalMismatch { .. } => ErrorCode::PayrollTotalMismatch,
    };
    AppError::with_message(code, err.to_string())
}

/// All entries, newest production date first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Gaji>>> {
    let entries = gaji::find_all(&state.pool).await?;
    Ok(Json(entries))
}

/// Draft → Verified at the employee's current daily wage
pub async fn verify(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Gaji>> {
    let _guard = state.lock_writes().await;

    let entry = gaji::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    match PayrollStatus::of(&entry) {
        PayrollStatus::Paid => return Err(AppError::new(ErrorCode::PayrollAlreadyPaid)),
        PayrollStatus::Verified => return Err(AppError::new(ErrorCode::PayrollAlreadyVerified)),
        PayrollStatus::Draft => {}
    }
    if entry.nominal_standar <= 0 {
        return Err(AppError::with_message(
            ErrorCode::PayrollZeroWage,
            format!("Gaji harian {} belum diisi", entry.nama_karyawan),
        )
        .with_detail("karyawan_id", entry.karyawan_id));
    }

    if !gaji::verify(&state.pool, id, entry.nominal_standar).await? {
        return Err(AppError::new(ErrorCode::PayrollAlreadyVerified));
    }

    tracing::info!(
        resource = RESOURCE,
        gaji_id = id,
        karyawan_id = entry.karyawan_id,
        nominal = entry.nominal_standar,
        "Payroll entry verified"
    );

    Ok(Json(Gaji {
        nominal: entry.nominal_standar,
        ..entry
    }))
}

/// Settle verified entries of one employee in a single transaction
///
/// The payment is logged as one expense of category `gaji`; either every
/// entry is marked paid with it or nothing changes.
pub async fn pay_batch(
    State(state): State<ServerState>,
    Json(req): Json<BayarBatchRequest>,
) -> AppResult<Json<BayarBatchResponse>> {
    let _guard = state.lock_writes().await;

    let entries = gaji::find_by_ids(&state.pool, &req.ids).await?;
    let amount = payroll::validate_settlement(&req, &entries).map_err(settlement_error)?;

    let mut ids = Vec::with_capacity(req.ids.len());
    let mut seen = HashSet::new();
    for id in &req.ids {
        if seen.insert(*id) {
            ids.push(*id);
        }
    }

    let tanggal = req.tanggal.unwrap_or_else(shared::util::today);
    let expense = Pengeluaran {
        id: shared::util::snowflake_id(),
        tanggal,
        kategori_pengeluaran: ExpenseCategory::Gaji,
        jumlah: amount,
        keterangan: format!("Gaji {} ({} hari)", req.nama_karyawan.trim(), ids.len()),
        created_at: shared::util::now_millis(),
    };

    let mut tx = repository::begin(&state.pool).await?;
    pengeluaran::insert(&mut *tx, &expense).await?;
    for id in &ids {
        if !gaji::mark_paid(&mut *tx, *id, tanggal, expense.id).await? {
            // tx is rolled back on drop
            return Err(AppError::new(ErrorCode::PayrollAlreadyPaid).with_detail("id", *id));
        }
    }
    repository::commit(tx).await?;

    tracing::info!(
        resource = RESOURCE,
        nama_karyawan = %req.nama_karyawan,
        entries = ids.len(),
        total = amount,
        pengeluaran_id = expense.id,
        "Payroll batch paid"
    );

    Ok(Json(BayarBatchResponse {
        dibayar: ids.len(),
        total_nominal: amount,
        pengeluaran_id: expense.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_errors_keep_their_message() {
        let err = settlement_error(SettlementError::TotalMismatch {
            requested: 10,
            computed: 20,
        });
        assert_eq!(err.code, ErrorCode::PayrollTotalMismatch);
        assert!(err.message.contains("20"));

        assert_eq!(
            settlement_error(SettlementError::Empty).code,
            ErrorCode::PayrollNothingToPay
        );
        assert_eq!(
            settlement_error(SettlementError::NotVerified(1)).code,
            ErrorCode::PayrollNotVerified
        );
    }
}
