//! Data models
//!
//! Shared between tempe-server and tempe-client (via API).
//! JSON field names are the Indonesian names the pages already use.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are snowflake `i64`, money is integer rupiah.

pub mod auth;
pub mod gaji;
pub mod karyawan;
pub mod laporan;
pub mod pengeluaran;
pub mod penjualan;
pub mod produksi;
pub mod retur;
pub mod serde_helpers;
pub mod stok;
pub mod variant;

// Re-exports
pub use auth::*;
pub use gaji::*;
pub use karyawan::*;
pub use laporan::*;
pub use pengeluaran::*;
pub use penjualan::*;
pub use produksi::*;
pub use retur::*;
pub use stok::*;
pub use variant::*;
