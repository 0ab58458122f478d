//! Sales Repository

use super::{RepoError, RepoResult};
use shared::models::{PaymentStatus, Penjualan};
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT: &str = "SELECT s.id, s.tanggal, s.produksi_id, p.tanggal AS tanggal_produksi, \
     s.pembeli, s.kategori_pembeli, s.tempe_3k_pcs, s.tempe_5k_pcs, s.tempe_10k_pcs, \
     s.subtotal_3k, s.subtotal_5k, s.subtotal_10k, s.total_penjualan, \
     s.status_pembayaran, s.created_at \
     FROM penjualan s JOIN produksi p ON p.id = s.produksi_id";

/// Newest sale first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Penjualan>> {
    let rows = sqlx::query_as::<_, Penjualan>(&format!(
        "{SELECT} ORDER BY s.tanggal DESC, s.created_at DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Penjualan>> {
    let row = sqlx::query_as::<_, Penjualan>(&format!("{SELECT} WHERE s.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_produksi(pool: &SqlitePool, produksi_id: i64) -> RepoResult<Vec<Penjualan>> {
    let rows = sqlx::query_as::<_, Penjualan>(&format!("{SELECT} WHERE s.produksi_id = ?"))
        .bind(produksi_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Store a priced sale; `tanggal_produksi` is derived on read
pub async fn insert(exec: impl SqliteExecutor<'_>, sale: &Penjualan) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO penjualan (id, tanggal, produksi_id, pembeli, kategori_pembeli, \
         tempe_3k_pcs, tempe_5k_pcs, tempe_10k_pcs, subtotal_3k, subtotal_5k, subtotal_10k, \
         total_penjualan, status_pembayaran, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(sale.id)
    .bind(sale.tanggal)
    .bind(sale.produksi_id)
    .bind(&sale.pembeli)
    .bind(sale.kategori_pembeli)
    .bind(sale.tempe_3k_pcs)
    .bind(sale.tempe_5k_pcs)
    .bind(sale.tempe_10k_pcs)
    .bind(sale.subtotal_3k)
    .bind(sale.subtotal_5k)
    .bind(sale.subtotal_10k)
    .bind(sale.total_penjualan)
    .bind(sale.status_pembayaran)
    .bind(sale.created_at)
    .execute(exec)
    .await?;
    Ok(())
}

pub async fn set_status(
    exec: impl SqliteExecutor<'_>,
    id: i64,
    status: PaymentStatus,
) -> RepoResult<()> {
    let result = sqlx::query("UPDATE penjualan SET status_pembayaran = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(exec)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Penjualan {id} tidak ditemukan")));
    }
    Ok(())
}
