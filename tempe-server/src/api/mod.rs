//! API routes
//!
//! Each module exposes `router()`; [`crate::services::build_app`] merges them.
//!
//! - [`health`] - liveness
//! - [`auth`] - login
//! - [`dashboard`] - daily summary
//! - [`laporan`] - profit report
//! - [`produksi`] - production batches and expiry
//! - [`penjualan`] - sales and payment status
//! - [`retur`] - sales returns
//! - [`pengeluaran`] - expenses
//! - [`karyawan`] - employees
//! - [`gaji`] - payroll verify and pay
//! - [`stok`] - stock ledger views

pub mod auth;
pub mod health;

pub mod dashboard;
pub mod laporan;

pub mod penjualan;
pub mod pengeluaran;
pub mod produksi;
pub mod retur;

pub mod gaji;
pub mod karyawan;
pub mod stok;

pub use crate::utils::AppResult;
