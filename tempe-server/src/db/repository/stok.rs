//! Spoilage Repository and Ledger Snapshots
//!
//! `stok_rusak` holds written-off pieces. [`LedgerSnapshot`] loads every
//! movement table so the stock views and checks can fold them with
//! `shared::ledger`.

use super::{RepoResult, penjualan, produksi, retur};
use shared::ledger::{self, Movements};
use shared::models::{
    BatchStock, Penjualan, Produksi, ReturnPenjualan, StokRusak,
};
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT: &str =
    "SELECT id, produksi_id, tanggal, rusak_3k, rusak_5k, rusak_10k, sumber, created_at FROM stok_rusak";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<StokRusak>> {
    let rows = sqlx::query_as::<_, StokRusak>(&format!("{SELECT} ORDER BY tanggal DESC"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_produksi(pool: &SqlitePool, produksi_id: i64) -> RepoResult<Vec<StokRusak>> {
    let rows = sqlx::query_as::<_, StokRusak>(&format!("{SELECT} WHERE produksi_id = ?"))
        .bind(produksi_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn insert(exec: impl SqliteExecutor<'_>, rusak: &StokRusak) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO stok_rusak (id, produksi_id, tanggal, rusak_3k, rusak_5k, rusak_10k, sumber, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(rusak.id)
    .bind(rusak.produksi_id)
    .bind(rusak.tanggal)
    .bind(rusak.rusak_3k)
    .bind(rusak.rusak_5k)
    .bind(rusak.rusak_10k)
    .bind(rusak.sumber)
    .bind(rusak.created_at)
    .execute(exec)
    .await?;
    Ok(())
}

/// Owned copy of the movement tables
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    pub produksi: Vec<Produksi>,
    pub penjualan: Vec<Penjualan>,
    pub retur: Vec<ReturnPenjualan>,
    pub rusak: Vec<StokRusak>,
}

impl LedgerSnapshot {
    pub fn movements(&self) -> Movements<'_> {
        Movements {
            produksi: &self.produksi,
            penjualan: &self.penjualan,
            retur: &self.retur,
            rusak: &self.rusak,
        }
    }

    /// Balance of the single batch this snapshot was loaded for
    pub fn batch(&self, produksi_id: i64) -> Option<BatchStock> {
        ledger::batch_balances(&self.movements())
            .into_iter()
            .find(|b| b.produksi_id == produksi_id)
    }
}

/// Every movement in the database
pub async fn load_all(pool: &SqlitePool) -> RepoResult<LedgerSnapshot> {
    let (produksi, penjualan, retur, rusak) = tokio::try_join!(
        produksi::find_all(pool),
        penjualan::find_all(pool),
        retur::find_all(pool),
        find_all(pool),
    )?;
    Ok(LedgerSnapshot {
        produksi,
        penjualan,
        retur,
        rusak,
    })
}

/// Movements touching one batch; empty when the batch does not exist
pub async fn load_batch(pool: &SqlitePool, produksi_id: i64) -> RepoResult<LedgerSnapshot> {
    let Some(batch) = produksi::find_by_id(pool, produksi_id).await? else {
        return Ok(LedgerSnapshot::default());
    };
    let (penjualan, retur, rusak) = tokio::try_join!(
        penjualan::find_by_produksi(pool, produksi_id),
        retur::find_by_produksi(pool, produksi_id),
        find_by_produksi(pool, produksi_id),
    )?;
    Ok(LedgerSnapshot {
        produksi: vec![batch],
        penjualan,
        retur,
        rusak,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use chrono::NaiveDate;
    use shared::models::{
        BuyerCategory, PaymentStatus, SpoilageSource, VariantQty,
    };

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn batch_balance_from_stored_movements() {
        let db = DbService::in_memory().await.unwrap();
        produksi::insert(&db.pool, 1, date("2024-05-01"), 1.0, &VariantQty::new(10, 10, 10))
            .await
            .unwrap();
        produksi::insert(&db.pool, 2, date("2024-05-02"), 1.0, &VariantQty::new(5, 5, 5))
            .await
            .unwrap();
        penjualan::insert(
            &db.pool,
            &Penjualan {
                id: 10,
                tanggal: date("2024-05-02"),
                produksi_id: 1,
                tanggal_produksi: date("2024-05-01"),
                pembeli: "Bu Sri".into(),
                kategori_pembeli: BuyerCategory::Eceran,
                tempe_3k_pcs: 4,
                tempe_5k_pcs: 0,
                tempe_10k_pcs: 0,
                subtotal_3k: 12_000,
                subtotal_5k: 0,
                subtotal_10k: 0,
                total_penjualan: 12_000,
                status_pembayaran: PaymentStatus::Lunas,
                created_at: 0,
            },
        )
        .await
        .unwrap();
        retur::insert(
            &db.pool,
            &ReturnPenjualan {
                id: 20,
                tanggal: date("2024-05-03"),
                penjualan_id: 10,
                pembeli: String::new(),
                tempe_3k_return: 1,
                tempe_5k_return: 0,
                tempe_10k_return: 0,
                total_return: 3_000,
                keterangan: String::new(),
                created_at: 0,
            },
        )
        .await
        .unwrap();
        insert(
            &db.pool,
            &StokRusak {
                id: 30,
                produksi_id: 1,
                tanggal: date("2024-05-03"),
                rusak_3k: 0,
                rusak_5k: 2,
                rusak_10k: 0,
                sumber: SpoilageSource::Expired,
                created_at: 0,
            },
        )
        .await
        .unwrap();

        let snapshot = load_batch(&db.pool, 1).await.unwrap();
        assert_eq!(snapshot.produksi.len(), 1);
        let b = snapshot.batch(1).unwrap();
        assert_eq!(b.sisa, VariantQty::new(7, 8, 10));

        let all = load_all(&db.pool).await.unwrap();
        assert_eq!(all.produksi.len(), 2);
        assert_eq!(ledger::summary(&all.movements()).total_pcs, 25 + 15);
    }

    #[tokio::test]
    async fn unknown_batch_loads_empty() {
        let db = DbService::in_memory().await.unwrap();
        let snapshot = load_batch(&db.pool, 99).await.unwrap();
        assert!(snapshot.batch(99).is_none());
    }
}
