//! Page loaders
//!
//! Each page fetches its data in parallel pairs. If either request of a pair
//! fails the whole load fails and the caller keeps what it showed before.

use chrono::NaiveDate;
use shared::models::{
    BatchStock, BayarBatchResponse, DailyStockRow, DashboardSummary, Gaji, LaporanLabaItem,
    Penjualan, ReportPeriod, ReturnPenjualan,
};
use shared::payroll::{self, EmployeePayroll};

use crate::{ClientResult, TempeClient};

/// Points on the dashboard chart
pub const DASHBOARD_REPORT_DAYS: usize = 7;

#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub summary: DashboardSummary,
    pub laporan: Vec<LaporanLabaItem>,
}

#[derive(Debug, Clone)]
pub struct ReturnsPage {
    pub returns: Vec<ReturnPenjualan>,
    /// Sales a new return can be filed against
    pub sales: Vec<Penjualan>,
}

#[derive(Debug, Clone)]
pub struct StockPage {
    pub daily: Vec<DailyStockRow>,
    pub batches: Vec<BatchStock>,
}

#[derive(Debug, Clone)]
pub struct PayrollPage {
    pub entries: Vec<Gaji>,
    pub cards: Vec<EmployeePayroll>,
}

pub async fn load_dashboard(
    client: &TempeClient,
    tanggal: Option<NaiveDate>,
) -> ClientResult<DashboardPage> {
    let (summary, laporan) = tokio::try_join!(
        client.dashboard_summary(tanggal),
        client.laporan_laba(ReportPeriod::Daily, DASHBOARD_REPORT_DAYS),
    )?;
    Ok(DashboardPage { summary, laporan })
}

pub async fn load_returns_page(client: &TempeClient) -> ClientResult<ReturnsPage> {
    let (returns, sales) = tokio::try_join!(client.list_returns(), client.list_penjualan())?;
    Ok(ReturnsPage { returns, sales })
}

pub async fn load_stock_page(client: &TempeClient) -> ClientResult<StockPage> {
    let (daily, batches) = tokio::try_join!(client.stok_harian(), client.stok_batch())?;
    Ok(StockPage { daily, batches })
}

/// Payroll entries plus one payable card per employee
pub async fn load_payroll_page(client: &TempeClient) -> ClientResult<PayrollPage> {
    let entries = client.list_gaji().await?;
    let cards = payroll::summarize(&entries);
    Ok(PayrollPage { entries, cards })
}

/// Pay everything verified on one card
///
/// A card with nothing payable sends no request and returns `None`.
pub async fn pay_employee(
    client: &TempeClient,
    card: &EmployeePayroll,
) -> ClientResult<Option<BayarBatchResponse>> {
    if card.total_gaji <= 0 || card.ids.is_empty() {
        return Ok(None);
    }
    let paid = client.bayar_batch(&card.to_request()).await?;
    tracing::info!(
        nama_karyawan = %card.nama_karyawan,
        dibayar = paid.dibayar,
        total = paid.total_nominal,
        "Payroll card paid"
    );
    Ok(Some(paid))
}
