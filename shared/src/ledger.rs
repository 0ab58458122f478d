//! Stock ledger
//!
//! Folds production, sales, returns and spoilage into balances:
//! `remaining = produced − sold + returned − spoiled`, per batch and variant.
//! Returns are attributed to the batch of the sale they reference.

use crate::models::{
    BatchStock, DailyStockRow, Penjualan, Produksi, ReturnPenjualan, StokRusak, StokSummary,
    VariantQty,
};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Everything the ledger folds
#[derive(Debug, Clone, Copy, Default)]
pub struct Movements<'a> {
    pub produksi: &'a [Produksi],
    pub penjualan: &'a [Penjualan],
    pub retur: &'a [ReturnPenjualan],
    pub rusak: &'a [StokRusak],
}

impl<'a> Movements<'a> {
    /// Batch id of every return, via its sale. Returns of unknown sales are dropped.
    fn returns_by_batch(&self) -> impl Iterator<Item = (i64, &'a ReturnPenjualan)> {
        let batch_of_sale: HashMap<i64, i64> = self
            .penjualan
            .iter()
            .map(|s| (s.id, s.produksi_id))
            .collect();
        self.retur
            .iter()
            .filter_map(move |r| batch_of_sale.get(&r.penjualan_id).map(|b| (*b, r)))
    }
}

/// Balance of every batch, newest production date first
pub fn batch_balances(m: &Movements<'_>) -> Vec<BatchStock> {
    let mut by_id: HashMap<i64, BatchStock> = m
        .produksi
        .iter()
        .map(|p| {
            (
                p.id,
                BatchStock {
                    produksi_id: p.id,
                    tanggal: p.tanggal,
                    stat_exp: p.stat_exp,
                    produksi: p.qty(),
                    terjual: VariantQty::ZERO,
                    retur: VariantQty::ZERO,
                    rusak: VariantQty::ZERO,
                    sisa: VariantQty::ZERO,
                },
            )
        })
        .collect();

    for sale in m.penjualan {
        if let Some(b) = by_id.get_mut(&sale.produksi_id) {
            b.terjual += sale.qty();
        }
    }
    for (batch_id, ret) in m.returns_by_batch() {
        if let Some(b) = by_id.get_mut(&batch_id) {
            b.retur += ret.qty();
        }
    }
    for spoiled in m.rusak {
        if let Some(b) = by_id.get_mut(&spoiled.produksi_id) {
            b.rusak += spoiled.qty();
        }
    }

    let mut out: Vec<BatchStock> = by_id
        .into_values()
        .map(|mut b| {
            b.sisa = b.produksi - b.terjual + b.retur - b.rusak;
            b
        })
        .collect();
    out.sort_by(|a, b| b.tanggal.cmp(&a.tanggal).then(b.produksi_id.cmp(&a.produksi_id)));
    out
}

#[derive(Default)]
struct Day {
    expired: bool,
    produced: VariantQty,
    sold: VariantQty,
    returned: VariantQty,
    spoiled: VariantQty,
}

/// One row per day with any movement, newest first
///
/// `sisa_*` is the running balance across all batches at the end of the day.
pub fn daily_rows(m: &Movements<'_>) -> Vec<DailyStockRow> {
    let mut days: BTreeMap<NaiveDate, Day> = BTreeMap::new();

    for p in m.produksi {
        let day = days.entry(p.tanggal).or_default();
        day.produced += p.qty();
        day.expired |= p.stat_exp;
    }
    for s in m.penjualan {
        days.entry(s.tanggal).or_default().sold += s.qty();
    }
    for (_, r) in m.returns_by_batch() {
        days.entry(r.tanggal).or_default().returned += r.qty();
    }
    for x in m.rusak {
        days.entry(x.tanggal).or_default().spoiled += x.qty();
    }

    let mut running = VariantQty::ZERO;
    let mut rows: Vec<DailyStockRow> = days
        .into_iter()
        .map(|(tanggal, day)| {
            running += day.produced - day.sold + day.returned - day.spoiled;
            DailyStockRow {
                tanggal,
                stat_exp: day.expired,
                prod_stok_3k: day.produced.pcs_3k,
                prod_stok_5k: day.produced.pcs_5k,
                prod_stok_10k: day.produced.pcs_10k,
                sell_stok_3k: day.sold.pcs_3k,
                sell_stok_5k: day.sold.pcs_5k,
                sell_stok_10k: day.sold.pcs_10k,
                res_stok_3k: day.returned.pcs_3k,
                res_stok_5k: day.returned.pcs_5k,
                res_stok_10k: day.returned.pcs_10k,
                rsk_stok_3k: day.spoiled.pcs_3k,
                rsk_stok_5k: day.spoiled.pcs_5k,
                rsk_stok_10k: day.spoiled.pcs_10k,
                sisa_stok_3k: running.pcs_3k,
                sisa_stok_5k: running.pcs_5k,
                sisa_stok_10k: running.pcs_10k,
            }
        })
        .collect();
    rows.reverse();
    rows
}

/// Stock on hand right now
pub fn summary(m: &Movements<'_>) -> StokSummary {
    let on_hand: VariantQty = batch_balances(m).iter().map(|b| b.sisa).sum();
    let last_updated = m
        .produksi
        .iter()
        .map(|p| p.tanggal)
        .chain(m.penjualan.iter().map(|s| s.tanggal))
        .chain(m.retur.iter().map(|r| r.tanggal))
        .chain(m.rusak.iter().map(|x| x.tanggal))
        .max();

    StokSummary {
        stok_3k: on_hand.pcs_3k,
        stok_5k: on_hand.pcs_5k,
        stok_10k: on_hand.pcs_10k,
        total_pcs: on_hand.total(),
        last_updated,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::*;
    use chrono::NaiveDate;

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub fn produksi(id: i64, tanggal: &str, qty: VariantQty) -> Produksi {
        Produksi {
            id,
            tanggal: date(tanggal),
            kedelai_kg: 10.0,
            tempe_3k_produksi: qty.pcs_3k,
            tempe_5k_produksi: qty.pcs_5k,
            tempe_10k_produksi: qty.pcs_10k,
            total_produksi: qty.total(),
            jumlah_pekerja: 0,
            pekerja: vec![],
            nama_pekerja: vec![],
            paid_karyawan_ids: vec![],
            stat_exp: false,
            tanggal_exp: None,
            created_at: 0,
        }
    }

    pub fn sale(id: i64, tanggal: &str, batch: &Produksi, qty: VariantQty) -> Penjualan {
        let sub = crate::pricing::subtotals(BuyerCategory::Eceran, &qty);
        Penjualan {
            id,
            tanggal: date(tanggal),
            produksi_id: batch.id,
            tanggal_produksi: batch.tanggal,
            pembeli: "Warung".into(),
            kategori_pembeli: BuyerCategory::Eceran,
            tempe_3k_pcs: qty.pcs_3k,
            tempe_5k_pcs: qty.pcs_5k,
            tempe_10k_pcs: qty.pcs_10k,
            subtotal_3k: sub.pcs_3k,
            subtotal_5k: sub.pcs_5k,
            subtotal_10k: sub.pcs_10k,
            total_penjualan: sub.total(),
            status_pembayaran: PaymentStatus::Lunas,
            created_at: 0,
        }
    }

    pub fn retur(id: i64, tanggal: &str, sale: &Penjualan, qty: VariantQty) -> ReturnPenjualan {
        ReturnPenjualan {
            id,
            tanggal: date(tanggal),
            penjualan_id: sale.id,
            pembeli: sale.pembeli.clone(),
            tempe_3k_return: qty.pcs_3k,
            tempe_5k_return: qty.pcs_5k,
            tempe_10k_return: qty.pcs_10k,
            total_return: crate::pricing::total(sale.kategori_pembeli, &qty),
            keterangan: String::new(),
            created_at: 0,
        }
    }

    pub fn rusak(id: i64, tanggal: &str, batch: &Produksi, qty: VariantQty) -> StokRusak {
        StokRusak {
            id,
            produksi_id: batch.id,
            tanggal: date(tanggal),
            rusak_3k: qty.pcs_3k,
            rusak_5k: qty.pcs_5k,
            rusak_10k: qty.pcs_10k,
            sumber: SpoilageSource::Expired,
            created_at: 0,
        }
    }
}
