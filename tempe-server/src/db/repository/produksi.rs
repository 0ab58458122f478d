//! Production Batch Repository
//!
//! A batch's workers are the employees holding a payroll entry on it, so
//! reads attach `pekerja`, `nama_pekerja` and `paid_karyawan_ids` from `gaji`.

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{Produksi, VariantQty};
use sqlx::{SqliteExecutor, SqlitePool};
use std::collections::HashMap;

const SELECT: &str = "SELECT p.id, p.tanggal, p.kedelai_kg, \
     p.tempe_3k_produksi, p.tempe_5k_produksi, p.tempe_10k_produksi, \
     (p.tempe_3k_produksi + p.tempe_5k_produksi + p.tempe_10k_produksi) AS total_produksi, \
     (SELECT COUNT(*) FROM gaji g WHERE g.produksi_id = p.id) AS jumlah_pekerja, \
     p.stat_exp, p.tanggal_exp, p.created_at \
     FROM produksi p";

#[derive(Debug, sqlx::FromRow)]
struct WorkerRow {
    produksi_id: i64,
    karyawan_id: i64,
    nama: String,
    status_bayar: bool,
}

async fn attach_workers(pool: &SqlitePool, batches: &mut [Produksi]) -> RepoResult<()> {
    if batches.is_empty() {
        return Ok(());
    }
    let rows = sqlx::query_as::<_, WorkerRow>(
        "SELECT g.produksi_id, g.karyawan_id, k.nama, g.status_bayar \
         FROM gaji g JOIN karyawan k ON k.id = g.karyawan_id \
         ORDER BY k.nama COLLATE NOCASE",
    )
    .fetch_all(pool)
    .await?;

    let mut by_batch: HashMap<i64, Vec<WorkerRow>> = HashMap::new();
    for row in rows {
        by_batch.entry(row.produksi_id).or_default().push(row);
    }
    for batch in batches.iter_mut() {
        let Some(workers) = by_batch.remove(&batch.id) else {
            continue;
        };
        for w in workers {
            batch.pekerja.push(w.karyawan_id);
            batch.nama_pekerja.push(w.nama);
            if w.status_bayar {
                batch.paid_karyawan_ids.push(w.karyawan_id);
            }
        }
    }
    Ok(())
}

/// All batches, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Produksi>> {
    let mut rows = sqlx::query_as::<_, Produksi>(&format!(
        "{SELECT} ORDER BY p.tanggal DESC"
    ))
    .fetch_all(pool)
    .await?;
    attach_workers(pool, &mut rows).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Produksi>> {
    let row = sqlx::query_as::<_, Produksi>(&format!("{SELECT} WHERE p.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let Some(row) = row else {
        return Ok(None);
    };
    let mut rows = [row];
    attach_workers(pool, &mut rows).await?;
    let [row] = rows;
    Ok(Some(row))
}

pub async fn find_by_tanggal(pool: &SqlitePool, tanggal: NaiveDate) -> RepoResult<Option<Produksi>> {
    let row = sqlx::query_as::<_, Produksi>(&format!("{SELECT} WHERE p.tanggal = ?"))
        .bind(tanggal)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn insert(
    exec: impl SqliteExecutor<'_>,
    id: i64,
    tanggal: NaiveDate,
    kedelai_kg: f64,
    qty: &VariantQty,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO produksi (id, tanggal, kedelai_kg, tempe_3k_produksi, tempe_5k_produksi, tempe_10k_produksi, stat_exp, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, 0, ?)",
    )
    .bind(id)
    .bind(tanggal)
    .bind(kedelai_kg)
    .bind(qty.pcs_3k)
    .bind(qty.pcs_5k)
    .bind(qty.pcs_10k)
    .bind(shared::util::now_millis())
    .execute(exec)
    .await?;
    Ok(())
}

/// Overwrite soybean weight and piece counts of a batch that is not expired
pub async fn update_amounts(
    exec: impl SqliteExecutor<'_>,
    id: i64,
    kedelai_kg: f64,
    qty: &VariantQty,
) -> RepoResult<()> {
    let result = sqlx::query(
        "UPDATE produksi SET kedelai_kg = ?, tempe_3k_produksi = ?, tempe_5k_produksi = ?, tempe_10k_produksi = ? \
         WHERE id = ? AND stat_exp = 0",
    )
    .bind(kedelai_kg)
    .bind(qty.pcs_3k)
    .bind(qty.pcs_5k)
    .bind(qty.pcs_10k)
    .bind(id)
    .execute(exec)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Produksi {id} tidak ditemukan")));
    }
    Ok(())
}

/// Flag a batch expired. Returns false when it already was.
pub async fn mark_expired(
    exec: impl SqliteExecutor<'_>,
    id: i64,
    tanggal_exp: NaiveDate,
) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE produksi SET stat_exp = 1, tanggal_exp = ? WHERE id = ? AND stat_exp = 0")
        .bind(tanggal_exp)
        .bind(id)
        .execute(exec)
        .await?;
    Ok(result.rows_affected() == 1)
}
