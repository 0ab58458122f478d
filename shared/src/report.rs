//! Profit report and dashboard figures
//!
//! omzet = sales − returns, laba = omzet − expenses. The dashboard uses the
//! same arithmetic as a daily report row.

use crate::models::{
    DashboardSummary, LaporanLabaItem, Pengeluaran, Penjualan, Produksi, ReportPeriod,
    ReturnPenjualan,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Grouping key of a date
pub fn period_key(tanggal: NaiveDate, period: ReportPeriod) -> String {
    match period {
        ReportPeriod::Daily => tanggal.format("%Y-%m-%d").to_string(),
        ReportPeriod::Monthly => tanggal.format("%Y-%m").to_string(),
    }
}

#[derive(Default)]
struct Bucket {
    omzet: i64,
    pengeluaran: i64,
}

/// Profit per day or month: the newest `limit` keys, ascending
pub fn laporan_laba(
    penjualan: &[Penjualan],
    retur: &[ReturnPenjualan],
    pengeluaran: &[Pengeluaran],
    period: ReportPeriod,
    limit: usize,
) -> Vec<LaporanLabaItem> {
    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();
    for s in penjualan {
        buckets.entry(period_key(s.tanggal, period)).or_default().omzet += s.total_penjualan;
    }
    for r in retur {
        buckets.entry(period_key(r.tanggal, period)).or_default().omzet -= r.total_return;
    }
    for e in pengeluaran {
        buckets
            .entry(period_key(e.tanggal, period))
            .or_default()
            .pengeluaran += e.jumlah;
    }

    let skip = buckets.len().saturating_sub(limit);
    buckets
        .into_iter()
        .skip(skip)
        .map(|(tanggal, b)| LaporanLabaItem {
            tanggal,
            omzet: b.omzet,
            pengeluaran: b.pengeluaran,
            laba: b.omzet - b.pengeluaran,
        })
        .collect()
}

/// Dashboard figures for one day
pub fn dashboard_summary(
    tanggal: NaiveDate,
    produksi: &[Produksi],
    penjualan: &[Penjualan],
    retur: &[ReturnPenjualan],
    pengeluaran: &[Pengeluaran],
) -> DashboardSummary {
    let on_day = |d: NaiveDate| d == tanggal;

    let total_produksi = produksi
        .iter()
        .filter(|p| on_day(p.tanggal))
        .map(|p| p.qty().total())
        .sum();
    let row = laporan_laba(
        &penjualan
            .iter()
            .filter(|s| on_day(s.tanggal))
            .cloned()
            .collect::<Vec<_>>(),
        &retur
            .iter()
            .filter(|r| on_day(r.tanggal))
            .cloned()
            .collect::<Vec<_>>(),
        &pengeluaran
            .iter()
            .filter(|e| on_day(e.tanggal))
            .cloned()
            .collect::<Vec<_>>(),
        ReportPeriod::Daily,
        1,
    )
    .pop();

    let (omzet, biaya, laba) = row
        .map(|r| (r.omzet, r.pengeluaran, r.laba))
        .unwrap_or_default();

    DashboardSummary {
        tanggal: Some(tanggal),
        total_produksi_hari_ini: total_produksi,
        total_penjualan_hari_ini: omzet,
        total_pengeluaran_hari_ini: biaya,
        laba_hari_ini: laba,
    }
}
