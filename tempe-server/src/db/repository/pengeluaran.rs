//! Expense Repository

use super::RepoResult;
use shared::models::Pengeluaran;
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT: &str =
    "SELECT id, tanggal, kategori_pengeluaran, jumlah, keterangan, created_at FROM pengeluaran";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Pengeluaran>> {
    let rows = sqlx::query_as::<_, Pengeluaran>(&format!(
        "{SELECT} ORDER BY tanggal DESC, created_at DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn insert(exec: impl SqliteExecutor<'_>, expense: &Pengeluaran) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO pengeluaran (id, tanggal, kategori_pengeluaran, jumlah, keterangan, created_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(expense.id)
    .bind(expense.tanggal)
    .bind(expense.kategori_pengeluaran)
    .bind(expense.jumlah)
    .bind(&expense.keterangan)
    .bind(expense.created_at)
    .execute(exec)
    .await?;
    Ok(())
}
