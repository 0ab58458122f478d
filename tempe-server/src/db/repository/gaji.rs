//! Payroll Entry Repository
//!
//! Entries move Draft (`nominal = 0`) → Verified (`nominal > 0`) → Paid.
//! Every write guards the expected state in its WHERE clause and reports
//! whether a row moved.

use super::RepoResult;
use chrono::NaiveDate;
use shared::models::Gaji;
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT: &str = "SELECT g.id, g.karyawan_id, k.nama AS nama_karyawan, g.produksi_id, \
     p.tanggal AS tanggal_produksi, g.nominal, k.gaji_harian AS nominal_standar, \
     g.status_bayar, g.tanggal_bayar \
     FROM gaji g \
     JOIN karyawan k ON k.id = g.karyawan_id \
     JOIN produksi p ON p.id = g.produksi_id";

/// Newest production date first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Gaji>> {
    let rows = sqlx::query_as::<_, Gaji>(&format!(
        "{SELECT} ORDER BY p.tanggal DESC, k.nama COLLATE NOCASE"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Gaji>> {
    let row = sqlx::query_as::<_, Gaji>(&format!("{SELECT} WHERE g.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Rows for the given ids; unknown ids are absent from the result
pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> RepoResult<Vec<Gaji>> {
    let mut rows = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(row) = find_by_id(pool, *id).await? {
            rows.push(row);
        }
    }
    Ok(rows)
}

pub async fn insert_draft(
    exec: impl SqliteExecutor<'_>,
    karyawan_id: i64,
    produksi_id: i64,
) -> RepoResult<i64> {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO gaji (id, karyawan_id, produksi_id, nominal, status_bayar, created_at) \
         VALUES (?, ?, ?, 0, 0, ?)",
    )
    .bind(id)
    .bind(karyawan_id)
    .bind(produksi_id)
    .bind(shared::util::now_millis())
    .execute(exec)
    .await?;
    Ok(id)
}

/// Drop an unpaid entry when its worker leaves the batch
pub async fn delete_unpaid(
    exec: impl SqliteExecutor<'_>,
    produksi_id: i64,
    karyawan_id: i64,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "DELETE FROM gaji WHERE produksi_id = ? AND karyawan_id = ? AND status_bayar = 0",
    )
    .bind(produksi_id)
    .bind(karyawan_id)
    .execute(exec)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Draft → Verified
pub async fn verify(exec: impl SqliteExecutor<'_>, id: i64, nominal: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE gaji SET nominal = ? WHERE id = ? AND nominal = 0 AND status_bayar = 0",
    )
    .bind(nominal)
    .bind(id)
    .execute(exec)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Verified → Paid
pub async fn mark_paid(
    exec: impl SqliteExecutor<'_>,
    id: i64,
    tanggal_bayar: NaiveDate,
    pengeluaran_id: i64,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE gaji SET status_bayar = 1, tanggal_bayar = ?, pengeluaran_id = ? \
         WHERE id = ? AND nominal > 0 AND status_bayar = 0",
    )
    .bind(tanggal_bayar)
    .bind(pengeluaran_id)
    .bind(id)
    .execute(exec)
    .await?;
    Ok(result.rows_affected() == 1)
}
