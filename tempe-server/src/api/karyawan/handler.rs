//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Karyawan, KaryawanCreate, KaryawanUpdate};

use crate::core::ServerState;
use crate::db::repository::karyawan;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_amount, validate_max_len,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

const RESOURCE: &str = "karyawan";

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Karyawan {id} tidak ditemukan"))
        .with_detail("id", id)
}

/// Active employees first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Karyawan>>> {
    let employees = karyawan::find_all(&state.pool).await?;
    Ok(Json(employees))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Karyawan>> {
    let employee = karyawan::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(employee))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<KaryawanCreate>,
) -> AppResult<Json<Karyawan>> {
    validate_required_text(&payload.nama, "Nama karyawan", MAX_NAME_LEN)?;
    validate_max_len(&payload.nomor, "Nomor", MAX_SHORT_TEXT_LEN)?;
    validate_amount(payload.gaji_harian, "Gaji harian")?;

    let employee = karyawan::create(&state.pool, &payload).await?;
    tracing::info!(resource = RESOURCE, karyawan_id = employee.id, "Employee created");
    Ok(Json(employee))
}

/// Partial update; absent fields keep their value
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<KaryawanUpdate>,
) -> AppResult<Json<Karyawan>> {
    if let Some(nama) = &payload.nama {
        validate_required_text(nama, "Nama karyawan", MAX_NAME_LEN)?;
    }
    if let Some(nomor) = &payload.nomor {
        validate_max_len(nomor, "Nomor", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(gaji) = payload.gaji_harian {
        validate_amount(gaji, "Gaji harian")?;
    }

    let _guard = state.lock_writes().await;

    if karyawan::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    let employee = karyawan::update(&state.pool, id, &payload).await?;
    tracing::info!(resource = RESOURCE, karyawan_id = id, "Employee updated");
    Ok(Json(employee))
}
