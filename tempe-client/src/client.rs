//! Typed client for the `/api` endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{
    BatchStock, BayarBatchRequest, BayarBatchResponse, DailyStockRow, DashboardSummary, Gaji,
    Karyawan, KaryawanCreate, KaryawanUpdate, LaporanLabaItem, LoginRequest, LoginResponse,
    Pengeluaran, PengeluaranCreate, Penjualan, PenjualanCreate, Produksi, ProduksiCreate,
    ProduksiExpire, ProduksiUpdate, ReportPeriod, ReturnPenjualan, ReturnPenjualanCreate,
    StokRusak, StokSummary,
};

use crate::http::HttpClient;
use crate::session::{Session, SessionStore};
use crate::{ClientConfig, ClientError, ClientResult};

/// `GET /api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    pub id: i64,
    pub username: String,
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: String,
    pub database: String,
    #[serde(default)]
    pub uptime_seconds: u64,
}

/// API client with an optional on-disk session
///
/// A stored session is picked up on construction, so a restarted client is
/// still logged in.
#[derive(Debug, Clone)]
pub struct TempeClient {
    http: HttpClient,
    store: Option<SessionStore>,
    session: Option<Session>,
}

impl TempeClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut http = HttpClient::new(config)?;
        let store = config.session_path.clone().map(SessionStore::new);
        let session = store.as_ref().and_then(SessionStore::load);
        http.set_token(session.as_ref().map(|s| s.token.clone()));
        Ok(Self {
            http,
            store,
            session,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    fn authed(&self) -> ClientResult<&HttpClient> {
        if self.session.is_none() {
            return Err(ClientError::NotLoggedIn);
        }
        Ok(&self.http)
    }

    // ========== Auth ==========

    /// Log in and persist the session
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<Session> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.http.post("/api/auth/login", &req).await?;

        let session = Session {
            token: resp.token,
            username: resp.username,
        };
        if let Some(store) = &self.store {
            store.save(&session)?;
        }
        self.http.set_token(Some(session.token.clone()));
        self.session = Some(session.clone());

        tracing::info!(username = %session.username, "Logged in");
        Ok(session)
    }

    /// Forget the session locally; the server keeps no session state
    pub fn logout(&mut self) -> ClientResult<()> {
        if let Some(store) = &self.store {
            store.clear()?;
        }
        self.http.set_token(None);
        self.session = None;
        Ok(())
    }

    pub async fn me(&self) -> ClientResult<Me> {
        self.authed()?.get("/api/auth/me").await
    }

    pub async fn health(&self) -> ClientResult<Health> {
        self.http.get("/health").await
    }

    // ========== Dashboard & Report ==========

    pub async fn dashboard_summary(&self, tanggal: Option<NaiveDate>) -> ClientResult<DashboardSummary> {
        let path = match tanggal {
            Some(d) => format!("/api/dashboard/summary?tanggal={d}"),
            None => "/api/dashboard/summary".to_string(),
        };
        self.authed()?.get(&path).await
    }

    pub async fn laporan_laba(
        &self,
        period: ReportPeriod,
        limit: usize,
    ) -> ClientResult<Vec<LaporanLabaItem>> {
        let period = match period {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Monthly => "monthly",
        };
        self.authed()?
            .get(&format!("/api/laporan/laba?period={period}&limit={limit}"))
            .await
    }

    // ========== Produksi ==========

    pub async fn list_produksi(&self) -> ClientResult<Vec<Produksi>> {
        self.authed()?.get("/api/produksi").await
    }

    pub async fn get_produksi(&self, id: i64) -> ClientResult<Produksi> {
        self.authed()?.get(&format!("/api/produksi/{id}")).await
    }

    pub async fn create_produksi(&self, req: &ProduksiCreate) -> ClientResult<Produksi> {
        self.authed()?.post("/api/produksi", req).await
    }

    pub async fn update_produksi(&self, id: i64, req: &ProduksiUpdate) -> ClientResult<Produksi> {
        self.authed()?.put(&format!("/api/produksi/{id}"), req).await
    }

    /// Mark a batch expired; cannot be undone
    pub async fn expire_produksi(
        &self,
        id: i64,
        tanggal_exp: Option<NaiveDate>,
    ) -> ClientResult<Produksi> {
        let req = ProduksiExpire {
            stat_exp: true,
            tanggal_exp,
        };
        self.authed()?
            .patch(&format!("/api/produksi/{id}/update-exp"), &req)
            .await
    }

    // ========== Penjualan ==========

    pub async fn list_penjualan(&self) -> ClientResult<Vec<Penjualan>> {
        self.authed()?.get("/api/penjualan").await
    }

    pub async fn get_penjualan(&self, id: i64) -> ClientResult<Penjualan> {
        self.authed()?.get(&format!("/api/penjualan/{id}")).await
    }

    pub async fn create_penjualan(&self, req: &PenjualanCreate) -> ClientResult<Penjualan> {
        self.authed()?.post("/api/penjualan", req).await
    }

    /// Lunas ⇄ Tempo
    pub async fn toggle_status(&self, id: i64) -> ClientResult<Penjualan> {
        self.authed()?
            .patch_empty(&format!("/api/penjualan/{id}/toggle-status"))
            .await
    }

    // ========== Return ==========

    pub async fn list_returns(&self) -> ClientResult<Vec<ReturnPenjualan>> {
        self.authed()?.get("/api/return").await
    }

    pub async fn create_return(&self, req: &ReturnPenjualanCreate) -> ClientResult<ReturnPenjualan> {
        self.authed()?.post("/api/return", req).await
    }

    // ========== Pengeluaran ==========

    pub async fn list_pengeluaran(&self) -> ClientResult<Vec<Pengeluaran>> {
        self.authed()?.get("/api/pengeluaran").await
    }

    pub async fn create_pengeluaran(&self, req: &PengeluaranCreate) -> ClientResult<Pengeluaran> {
        self.authed()?.post("/api/pengeluaran", req).await
    }

    // ========== Karyawan ==========

    pub async fn list_karyawan(&self) -> ClientResult<Vec<Karyawan>> {
        self.authed()?.get("/api/karyawan").await
    }

    pub async fn create_karyawan(&self, req: &KaryawanCreate) -> ClientResult<Karyawan> {
        self.authed()?.post("/api/karyawan", req).await
    }

    pub async fn update_karyawan(&self, id: i64, req: &KaryawanUpdate) -> ClientResult<Karyawan> {
        self.authed()?.put(&format!("/api/karyawan/{id}"), req).await
    }

    // ========== Gaji ==========

    pub async fn list_gaji(&self) -> ClientResult<Vec<Gaji>> {
        self.authed()?.get("/api/gaji").await
    }

    /// Draft → Verified
    pub async fn verify_gaji(&self, id: i64) -> ClientResult<Gaji> {
        self.authed()?
            .patch_empty(&format!("/api/gaji/{id}/verifikasi"))
            .await
    }

    pub async fn bayar_batch(&self, req: &BayarBatchRequest) -> ClientResult<BayarBatchResponse> {
        self.authed()?.post("/api/gaji/bayar-batch", req).await
    }

    // ========== Stok ==========

    pub async fn stok_harian(&self) -> ClientResult<Vec<DailyStockRow>> {
        self.authed()?.get("/api/stok/produk").await
    }

    pub async fn stok_summary(&self) -> ClientResult<StokSummary> {
        self.authed()?.get("/api/stok/mon").await
    }

    pub async fn stok_batch(&self) -> ClientResult<Vec<BatchStock>> {
        self.authed()?.get("/api/stok/batch").await
    }

    pub async fn stok_rusak(&self) -> ClientResult<Vec<StokRusak>> {
        self.authed()?.get("/api/stok/rusak").await
    }
}
