//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Karyawan, KaryawanCreate, KaryawanUpdate};
use sqlx::SqlitePool;

const SELECT: &str = "SELECT id, nama, nomor, gaji_harian, status_aktif, created_at FROM karyawan";

/// Active employees first, then by name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Karyawan>> {
    let rows = sqlx::query_as::<_, Karyawan>(&format!(
        "{SELECT} ORDER BY status_aktif DESC, nama COLLATE NOCASE"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Karyawan>> {
    let row = sqlx::query_as::<_, Karyawan>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: &KaryawanCreate) -> RepoResult<Karyawan> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO karyawan (id, nama, nomor, gaji_harian, status_aktif, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(data.nama.trim())
    .bind(data.nomor.trim())
    .bind(data.gaji_harian)
    .bind(data.status_aktif)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create karyawan".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: &KaryawanUpdate) -> RepoResult<Karyawan> {
    let rows = sqlx::query(
        "UPDATE karyawan SET nama = COALESCE(?1, nama), nomor = COALESCE(?2, nomor), gaji_harian = COALESCE(?3, gaji_harian), status_aktif = COALESCE(?4, status_aktif) WHERE id = ?5",
    )
    .bind(data.nama.as_deref().map(str::trim))
    .bind(data.nomor.as_deref().map(str::trim))
    .bind(data.gaji_harian)
    .bind(data.status_aktif)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Karyawan {id} tidak ditemukan")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Karyawan {id} tidak ditemukan")))
}
