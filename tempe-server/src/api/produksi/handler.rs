//! Production API Handlers
//!
//! Creating a batch gives each worker a Draft payroll entry. Edits keep the
//! entries in step with the worker list, and marking a batch expired books
//! its remaining pieces as spoilage.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    ProductVariant, Produksi, ProduksiCreate, ProduksiExpire, ProduksiUpdate, SpoilageSource,
    StokRusak,
};

use crate::core::ServerState;
use crate::db::repository::{self, RepoError, gaji, karyawan, produksi, stok};
use crate::utils::time::validate_not_before;
use crate::utils::validation::validate_quantities;
use crate::utils::{AppError, AppResult, ErrorCode};

const RESOURCE: &str = "produksi";

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ProductionNotFound, format!("Produksi {id} tidak ditemukan"))
        .with_detail("id", id)
}

fn validate_kedelai(kg: f64) -> AppResult<()> {
    if !kg.is_finite() || kg < 0.0 {
        return Err(AppError::validation("Berat kedelai tidak boleh negatif"));
    }
    Ok(())
}

/// Drop repeated ids, keep first-seen order
fn dedup(ids: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}

/// Every worker must exist and be active
async fn check_workers(state: &ServerState, ids: &[i64]) -> AppResult<()> {
    for id in ids {
        let worker = karyawan::find_by_id(&state.pool, *id).await?.ok_or_else(|| {
            AppError::with_message(
                ErrorCode::EmployeeNotFound,
                format!("Karyawan {id} tidak ditemukan"),
            )
            .with_detail("karyawan_id", *id)
        })?;
        if !worker.status_aktif {
            return Err(AppError::with_message(
                ErrorCode::WorkerInactive,
                format!("Karyawan {} tidak aktif", worker.nama),
            )
            .with_detail("karyawan_id", *id));
        }
    }
    Ok(())
}

async fn load(state: &ServerState, id: i64) -> AppResult<Produksi> {
    produksi::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// All batches, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Produksi>>> {
    let batches = produksi::find_all(&state.pool).await?;
    Ok(Json(batches))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Produksi>> {
    Ok(Json(load(&state, id).await?))
}

/// Record the day's batch
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProduksiCreate>,
) -> AppResult<Json<Produksi>> {
    let qty = payload.qty();
    validate_quantities(&qty, "Jumlah produksi")?;
    validate_kedelai(payload.kedelai_kg)?;
    let workers = dedup(&payload.pekerja);

    let _guard = state.lock_writes().await;

    check_workers(&state, &workers).await?;
    if produksi::find_by_tanggal(&state.pool, payload.tanggal)
        .await?
        .is_some()
    {
        return Err(date_taken(payload.tanggal));
    }

    let id = shared::util::snowflake_id();
    let mut tx = repository::begin(&state.pool).await?;
    match produksi::insert(&mut *tx, id, payload.tanggal, payload.kedelai_kg, &qty).await {
        Err(RepoError::Duplicate(_)) => return Err(date_taken(payload.tanggal)),
        other => other?,
    }
    for worker in &workers {
        gaji::insert_draft(&mut *tx, *worker, id).await?;
    }
    repository::commit(tx).await?;

    tracing::info!(
        resource = RESOURCE,
        produksi_id = id,
        tanggal = %payload.tanggal,
        total_pcs = qty.total(),
        pekerja = workers.len(),
        "Production batch created"
    );

    Ok(Json(load(&state, id).await?))
}

fn date_taken(tanggal: chrono::NaiveDate) -> AppError {
    AppError::with_message(
        ErrorCode::ProductionDateExists,
        format!("Produksi tanggal {tanggal} sudah ada"),
    )
    .with_detail("tanggal", tanggal.to_string())
}

/// Edit amounts and workers of a batch that is not expired
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProduksiUpdate>,
) -> AppResult<Json<Produksi>> {
    let _guard = state.lock_writes().await;

    let current = load(&state, id).await?;
    if current.stat_exp {
        return Err(AppError::with_message(
            ErrorCode::ProductionExpired,
            format!("Produksi {} sudah kedaluwarsa", current.tanggal),
        ));
    }

    let qty = payload.qty_over(current.qty());
    validate_quantities(&qty, "Jumlah produksi")?;
    let kedelai_kg = payload.kedelai_kg.unwrap_or(current.kedelai_kg);
    validate_kedelai(kedelai_kg)?;

    // Pieces already sold or written off cannot be un-produced
    if let Some(balance) = stok::load_batch(&state.pool, id).await?.batch(id) {
        let consumed = balance.consumed();
        for variant in ProductVariant::ALL {
            if qty.get(variant) < consumed.get(variant) {
                return Err(AppError::with_message(
                    ErrorCode::ProductionBelowConsumed,
                    format!(
                        "Produksi tempe {} tidak boleh kurang dari {} pcs yang sudah terpakai",
                        variant,
                        consumed.get(variant)
                    ),
                )
                .with_detail("variant", variant.label())
                .with_detail("minimum", consumed.get(variant)));
            }
        }
    }

    let (removed, added) = match &payload.pekerja {
        Some(next) => {
            let next = dedup(next);
            let removed: Vec<i64> = current
                .pekerja
                .iter()
                .copied()
                .filter(|w| !next.contains(w))
                .collect();
            let added: Vec<i64> = next
                .iter()
                .copied()
                .filter(|w| !current.pekerja.contains(w))
                .collect();
            (removed, added)
        }
        None => (Vec::new(), Vec::new()),
    };

    if let Some(locked) = removed
        .iter()
        .find(|w| current.paid_karyawan_ids.contains(w))
    {
        return Err(AppError::with_message(
            ErrorCode::WorkerLocked,
            "Gaji karyawan ini sudah dibayar, tidak bisa dihapus dari produksi",
        )
        .with_detail("karyawan_id", *locked));
    }
    check_workers(&state, &added).await?;

    let mut tx = repository::begin(&state.pool).await?;
    produksi::update_amounts(&mut *tx, id, kedelai_kg, &qty).await?;
    for worker in &removed {
        gaji::delete_unpaid(&mut *tx, id, *worker).await?;
    }
    for worker in &added {
        gaji::insert_draft(&mut *tx, *worker, id).await?;
    }
    repository::commit(tx).await?;

    tracing::info!(
        resource = RESOURCE,
        produksi_id = id,
        removed = removed.len(),
        added = added.len(),
        "Production batch updated"
    );

    Ok(Json(load(&state, id).await?))
}

/// Mark a batch expired and write off what is left of it
///
/// One way only: `stat_exp: false` is rejected and a second call conflicts.
pub async fn expire(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProduksiExpire>,
) -> AppResult<Json<Produksi>> {
    if !payload.stat_exp {
        return Err(AppError::validation(
            "Status kedaluwarsa tidak dapat dibatalkan",
        ));
    }

    let _guard = state.lock_writes().await;

    let current = load(&state, id).await?;
    if current.stat_exp {
        return Err(AppError::with_message(
            ErrorCode::ProductionExpired,
            format!("Produksi {} sudah kedaluwarsa", current.tanggal),
        ));
    }

    let tanggal_exp = payload.tanggal_exp.unwrap_or_else(shared::util::today);
    validate_not_before(tanggal_exp, current.tanggal, "kedaluwarsa", "produksi")?;

    let leftover = stok::load_batch(&state.pool, id)
        .await?
        .batch(id)
        .map(|b| b.sisa.map(|_, v| v.max(0)))
        .unwrap_or_default();

    let mut tx = repository::begin(&state.pool).await?;
    if !produksi::mark_expired(&mut *tx, id, tanggal_exp).await? {
        return Err(AppError::new(ErrorCode::ProductionExpired));
    }
    if !leftover.is_empty() {
        stok::insert(
            &mut *tx,
            &StokRusak {
                id: shared::util::snowflake_id(),
                produksi_id: id,
                tanggal: tanggal_exp,
                rusak_3k: leftover.pcs_3k,
                rusak_5k: leftover.pcs_5k,
                rusak_10k: leftover.pcs_10k,
                sumber: SpoilageSource::Expired,
                created_at: shared::util::now_millis(),
            },
        )
        .await?;
    }
    repository::commit(tx).await?;

    tracing::info!(
        resource = RESOURCE,
        produksi_id = id,
        tanggal_exp = %tanggal_exp,
        rusak_pcs = leftover.total(),
        "Production batch expired"
    );

    Ok(Json(load(&state, id).await?))
}
