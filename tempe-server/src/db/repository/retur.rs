//! Sales Return Repository

use super::RepoResult;
use shared::models::ReturnPenjualan;
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT: &str = "SELECT r.id, r.tanggal, r.penjualan_id, s.pembeli, \
     r.tempe_3k_return, r.tempe_5k_return, r.tempe_10k_return, r.total_return, \
     r.keterangan, r.created_at \
     FROM retur r JOIN penjualan s ON s.id = r.penjualan_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ReturnPenjualan>> {
    let rows = sqlx::query_as::<_, ReturnPenjualan>(&format!(
        "{SELECT} ORDER BY r.tanggal DESC, r.created_at DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_penjualan(
    pool: &SqlitePool,
    penjualan_id: i64,
) -> RepoResult<Vec<ReturnPenjualan>> {
    let rows = sqlx::query_as::<_, ReturnPenjualan>(&format!("{SELECT} WHERE r.penjualan_id = ?"))
        .bind(penjualan_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Returns against any sale of the batch
pub async fn find_by_produksi(
    pool: &SqlitePool,
    produksi_id: i64,
) -> RepoResult<Vec<ReturnPenjualan>> {
    let rows = sqlx::query_as::<_, ReturnPenjualan>(&format!("{SELECT} WHERE s.produksi_id = ?"))
        .bind(produksi_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn insert(exec: impl SqliteExecutor<'_>, retur: &ReturnPenjualan) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO retur (id, tanggal, penjualan_id, tempe_3k_return, tempe_5k_return, \
         tempe_10k_return, total_return, keterangan, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(retur.id)
    .bind(retur.tanggal)
    .bind(retur.penjualan_id)
    .bind(retur.tempe_3k_return)
    .bind(retur.tempe_5k_return)
    .bind(retur.tempe_10k_return)
    .bind(retur.total_return)
    .bind(&retur.keterangan)
    .bind(retur.created_at)
    .execute(exec)
    .await?;
    Ok(())
}
