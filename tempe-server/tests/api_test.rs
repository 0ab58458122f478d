use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempe_server::{ServerState, build_router};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    token: String,
}

impl TestApp {
    async fn new() -> Self {
        let state = ServerState::for_test().await.unwrap();
        let router = build_router(state);
        let mut app = Self {
            router,
            token: String::new(),
        };
        let (status, body) = app
            .send(
                Method::POST,
                "/api/auth/login",
                Some(json!({"username": "admin", "password": "admin123"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        app.token = body["token"].as_str().unwrap().to_string();
        app
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if !self.token.is_empty() {
            builder = builder.header("authorization", format!("Bearer {}", self.token));
        }
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn get(&self, uri: &str) -> Value {
        let (status, body) = self.send(Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}: {body}");
        body
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn karyawan(&self, nama: &str, gaji_harian: i64) -> i64 {
        let (status, body) = self
            .post(
                "/api/karyawan",
                json!({"nama": nama, "nomor": "0812", "gaji_harian": gaji_harian}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap()
    }

    async fn produksi(&self, tanggal: &str, pcs: [i64; 3], pekerja: &[i64]) -> i64 {
        let (status, body) = self
            .post(
                "/api/produksi",
                json!({
                    "tanggal": tanggal,
                    "kedelai_kg": 10.0,
                    "tempe_3k_produksi": pcs[0],
                    "tempe_5k_produksi": pcs[1],
                    "tempe_10k_produksi": pcs[2],
                    "pekerja": pekerja,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap()
    }

    async fn sale(&self, tanggal: &str, produksi: &str, kategori: &str, pcs: [i64; 3]) -> (StatusCode, Value) {
        self.post(
            "/api/penjualan",
            json!({
                "tanggal": tanggal,
                "tanggal_produksi": produksi,
                "pembeli": "Bu Sri",
                "kategori_pembeli": kategori,
                "tempe_3k_pcs": pcs[0],
                "tempe_5k_pcs": pcs[1],
                "tempe_10k_pcs": pcs[2],
                "status_pembayaran": "Lunas",
            }),
        )
        .await
    }
}

fn batch<'a>(batches: &'a Value, id: i64) -> &'a Value {
    batches
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["produksi_id"].as_i64() == Some(id))
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let state = ServerState::for_test().await.unwrap();
    let app = TestApp {
        router: build_router(state),
        token: String::new(),
    };
    let (status, body) = app.send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn api_requires_bearer_token() {
    let state = ServerState::for_test().await.unwrap();
    let app = TestApp {
        router: build_router(state),
        token: String::new(),
    };
    let (status, body) = app.send(Method::GET, "/api/produksi", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);

    let app = TestApp {
        token: "not-a-jwt".into(),
        ..app
    };
    let (status, body) = app.send(Method::GET, "/api/produksi", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);
    assert_eq!(body["detail"], "Sesi login tidak valid, silakan login ulang");
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let state = ServerState::for_test().await.unwrap();
    let app = TestApp {
        router: build_router(state),
        token: String::new(),
    };

    let (status, wrong_password) = app
        .post("/api/auth/login", json!({"username": "admin", "password": "nope"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (_, unknown_user) = app
        .post("/api/auth/login", json!({"username": "ghost", "password": "nope"}))
        .await;
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["code"], 1002);
    assert_eq!(wrong_password["detail"], "Username atau password salah");
}

#[tokio::test]
async fn me_returns_logged_in_user() {
    let app = TestApp::new().await;
    let me = app.get("/api/auth/me").await;
    assert_eq!(me["username"], "admin");
}

#[tokio::test]
async fn one_batch_per_date() {
    let app = TestApp::new().await;
    app.produksi("2024-05-01", [10, 10, 10], &[]).await;

    let (status, body) = app
        .post(
            "/api/produksi",
            json!({"tanggal": "2024-05-01", "kedelai_kg": 1.0, "tempe_3k_produksi": 1}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2002);
}

#[tokio::test]
async fn inactive_worker_rejected() {
    let app = TestApp::new().await;
    let (_, body) = app
        .post(
            "/api/karyawan",
            json!({"nama": "Ani", "gaji_harian": 40000, "status_aktif": false}),
        )
        .await;
    let ani = body["id"].as_i64().unwrap();

    let (status, body) = app
        .post(
            "/api/produksi",
            json!({"tanggal": "2024-05-01", "kedelai_kg": 1.0, "pekerja": [ani]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2005);
}

#[tokio::test]
async fn sale_is_priced_and_bounded_by_remaining_stock() {
    let app = TestApp::new().await;
    let id = app.produksi("2024-05-01", [10, 5, 2], &[]).await;

    let (status, body) = app.sale("2024-05-02", "2024-05-01", "Eceran", [0, 6, 0]).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 3002);
    assert_eq!(body["details"]["variant"], "5k");
    assert_eq!(body["details"]["available"], 5);

    let (status, sale) = app.sale("2024-05-02", "2024-05-01", "Grosir", [4, 5, 1]).await;
    assert_eq!(status, StatusCode::OK, "{sale}");
    assert_eq!(sale["subtotal_3k"], 4 * 2500);
    assert_eq!(sale["subtotal_5k"], 5 * 4000);
    assert_eq!(sale["subtotal_10k"], 10000);
    assert_eq!(sale["total_penjualan"], 10000 + 20000 + 10000);

    // the 5k variant is now sold out
    let (status, _) = app.sale("2024-05-02", "2024-05-01", "Eceran", [0, 1, 0]).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let batches = app.get("/api/stok/batch").await;
    assert_eq!(batch(&batches, id)["sisa"], json!({"3k": 6, "5k": 0, "10k": 1}));
}

#[tokio::test]
async fn sale_rules() {
    let app = TestApp::new().await;
    app.produksi("2024-05-02", [10, 10, 10], &[]).await;

    let (status, body) = app.sale("2024-05-03", "2024-05-02", "Eceran", [0, 0, 0]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3003);

    let (status, body) = app.sale("2024-05-03", "2024-04-30", "Eceran", [1, 0, 0]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2001);

    // sold before it was made
    let (status, _) = app.sale("2024-05-01", "2024-05-02", "Eceran", [1, 0, 0]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn toggle_status_twice_restores_original() {
    let app = TestApp::new().await;
    app.produksi("2024-05-01", [10, 0, 0], &[]).await;
    let (_, sale) = app.sale("2024-05-01", "2024-05-01", "Eceran", [2, 0, 0]).await;
    let uri = format!("/api/penjualan/{}/toggle-status", sale["id"]);

    let (status, once) = app.send(Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(once["status_pembayaran"], "Tempo");

    let (_, twice) = app.send(Method::PATCH, &uri, None).await;
    assert_eq!(twice["status_pembayaran"], "Lunas");

    let (status, body) = app
        .send(Method::PATCH, "/api/penjualan/42/toggle-status", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn returns_restock_and_are_bounded_by_sold() {
    let app = TestApp::new().await;
    let id = app.produksi("2024-05-01", [10, 10, 10], &[]).await;
    let (_, sale) = app.sale("2024-05-02", "2024-05-01", "Eceran", [5, 0, 0]).await;
    let sale_id = sale["id"].as_i64().unwrap();

    let (status, retur) = app
        .post(
            "/api/return",
            json!({"tanggal": "2024-05-03", "penjualan_id": sale_id, "tempe_3k_return": 3, "keterangan": "basi"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{retur}");
    assert_eq!(retur["total_return"], 9000);
    assert_eq!(retur["pembeli"], "Bu Sri");

    let (status, body) = app
        .post(
            "/api/return",
            json!({"tanggal": "2024-05-03", "penjualan_id": sale_id, "tempe_3k_return": 3}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4001);
    assert_eq!(body["details"]["returned"], 3);

    let (status, body) = app
        .post(
            "/api/return",
            json!({"tanggal": "2024-05-03", "penjualan_id": sale_id}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    let batches = app.get("/api/stok/batch").await;
    assert_eq!(batch(&batches, id)["sisa"]["3k"], 8);
    assert_eq!(app.get("/api/return").await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn expiry_writes_off_stock_and_closes_the_batch() {
    let app = TestApp::new().await;
    let id = app.produksi("2024-05-01", [10, 10, 10], &[]).await;
    let (_, sale) = app.sale("2024-05-01", "2024-05-01", "Eceran", [4, 0, 0]).await;
    let uri = format!("/api/produksi/{id}/update-exp");

    let (status, _) = app
        .send(Method::PATCH, &uri, Some(json!({"stat_exp": false})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, batch_row) = app
        .send(
            Method::PATCH,
            &uri,
            Some(json!({"stat_exp": true, "tanggal_exp": "2024-05-04"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{batch_row}");
    assert_eq!(batch_row["stat_exp"], true);
    assert_eq!(batch_row["tanggal_exp"], "2024-05-04");

    // irreversible
    let (status, body) = app
        .send(Method::PATCH, &uri, Some(json!({"stat_exp": true})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2003);

    let rusak = app.get("/api/stok/rusak").await;
    assert_eq!(rusak[0]["rusak_3k"], 6);
    assert_eq!(rusak[0]["rusak_10k"], 10);
    assert_eq!(rusak[0]["sumber"], "expired");

    let summary = app.get("/api/stok/mon").await;
    assert_eq!(summary["total_pcs"], 0);

    // no more sales or edits on it
    let (status, _) = app.sale("2024-05-05", "2024-05-01", "Eceran", [1, 0, 0]).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/produksi/{id}"),
            Some(json!({"tempe_3k_produksi": 20})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // a return against it goes straight to spoilage
    let (status, _) = app
        .post(
            "/api/return",
            json!({"tanggal": "2024-05-06", "penjualan_id": sale["id"], "tempe_3k_return": 2}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let rusak = app.get("/api/stok/rusak").await;
    assert_eq!(rusak[0]["sumber"], "return");
    assert_eq!(rusak[0]["rusak_3k"], 2);
    assert_eq!(app.get("/api/stok/mon").await["total_pcs"], 0);
}

#[tokio::test]
async fn edit_cannot_drop_below_consumed() {
    let app = TestApp::new().await;
    let id = app.produksi("2024-05-01", [10, 10, 10], &[]).await;
    app.sale("2024-05-01", "2024-05-01", "Eceran", [0, 7, 0]).await;
    let uri = format!("/api/produksi/{id}");

    let (status, body) = app
        .send(Method::PUT, &uri, Some(json!({"tempe_5k_produksi": 6})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2006);
    assert_eq!(body["details"]["minimum"], 7);

    let (status, body) = app
        .send(Method::PUT, &uri, Some(json!({"tempe_5k_produksi": 7, "kedelai_kg": 8.5})))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["tempe_5k_produksi"], 7);
    assert_eq!(body["tempe_3k_produksi"], 10);
    assert_eq!(body["kedelai_kg"], 8.5);
    assert_eq!(body["total_produksi"], 27);
}

#[tokio::test]
async fn payroll_verify_then_pay_batch() {
    let app = TestApp::new().await;
    let budi = app.karyawan("Budi", 50000).await;
    let ani = app.karyawan("Ani", 40000).await;
    app.produksi("2024-05-01", [1, 0, 0], &[budi, ani]).await;
    app.produksi("2024-05-02", [1, 0, 0], &[budi]).await;

    let entries = app.get("/api/gaji").await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|g| g["nominal"] == 0));
    assert_eq!(entries[0]["tanggal_produksi"], "2024-05-02");

    let budi_ids: Vec<i64> = entries
        .iter()
        .filter(|g| g["karyawan_id"].as_i64() == Some(budi))
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    let ani_id = entries
        .iter()
        .find(|g| g["karyawan_id"].as_i64() == Some(ani))
        .map(|g| g["id"].as_i64().unwrap())
        .unwrap();

    // paying drafts is refused
    let (status, body) = app
        .post(
            "/api/gaji/bayar-batch",
            json!({"ids": budi_ids, "total_nominal": 100000, "nama_karyawan": "Budi"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 7004);

    for id in &budi_ids {
        let (status, body) = app
            .send(Method::PATCH, &format!("/api/gaji/{id}/verifikasi"), None)
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["nominal"], 50000);
    }
    let (status, body) = app
        .send(Method::PATCH, &format!("/api/gaji/{}/verifikasi", budi_ids[0]), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7002);

    // wrong total
    let (status, body) = app
        .post(
            "/api/gaji/bayar-batch",
            json!({"ids": budi_ids, "total_nominal": 90000, "nama_karyawan": "Budi"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 7005);

    // someone else's entry
    let mut mixed = budi_ids.clone();
    mixed.push(ani_id);
    app.send(Method::PATCH, &format!("/api/gaji/{ani_id}/verifikasi"), None)
        .await;
    let (status, body) = app
        .post(
            "/api/gaji/bayar-batch",
            json!({"ids": mixed, "total_nominal": 140000, "nama_karyawan": "Budi"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 7006);

    let (status, paid) = app
        .post(
            "/api/gaji/bayar-batch",
            json!({"ids": budi_ids, "total_nominal": 100000, "nama_karyawan": "Budi", "tanggal": "2024-05-03"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{paid}");
    assert_eq!(paid["dibayar"], 2);
    assert_eq!(paid["total_nominal"], 100000);

    let expenses = app.get("/api/pengeluaran").await;
    assert_eq!(expenses[0]["kategori_pengeluaran"], "gaji");
    assert_eq!(expenses[0]["jumlah"], 100000);
    assert_eq!(expenses[0]["id"], paid["pengeluaran_id"]);

    // settled entries are locked
    let (status, body) = app
        .post(
            "/api/gaji/bayar-batch",
            json!({"ids": budi_ids, "total_nominal": 100000, "nama_karyawan": "Budi"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7003);
}

#[tokio::test]
async fn paid_worker_cannot_leave_the_batch() {
    let app = TestApp::new().await;
    let budi = app.karyawan("Budi", 50000).await;
    let ani = app.karyawan("Ani", 40000).await;
    let id = app.produksi("2024-05-01", [1, 0, 0], &[budi, ani]).await;

    let entries = app.get("/api/gaji").await;
    let budi_entry = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["karyawan_id"].as_i64() == Some(budi))
        .map(|g| g["id"].as_i64().unwrap())
        .unwrap();
    app.send(Method::PATCH, &format!("/api/gaji/{budi_entry}/verifikasi"), None)
        .await;
    let (status, _) = app
        .post(
            "/api/gaji/bayar-batch",
            json!({"ids": [budi_entry], "total_nominal": 50000, "nama_karyawan": "Budi"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/produksi/{id}");
    let (status, body) = app
        .send(Method::PUT, &uri, Some(json!({"pekerja": [ani]})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2004);

    // dropping the unpaid worker removes their entry
    let (status, body) = app
        .send(Method::PUT, &uri, Some(json!({"pekerja": [budi]})))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["pekerja"], json!([budi]));
    assert_eq!(body["paid_karyawan_ids"], json!([budi]));
    assert_eq!(app.get("/api/gaji").await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn zero_wage_cannot_be_verified() {
    let app = TestApp::new().await;
    let budi = app.karyawan("Budi", 0).await;
    app.produksi("2024-05-01", [1, 0, 0], &[budi]).await;
    let id = app.get("/api/gaji").await[0]["id"].as_i64().unwrap();

    let (status, body) = app
        .send(Method::PATCH, &format!("/api/gaji/{id}/verifikasi"), None)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 7008);
}

#[tokio::test]
async fn gaji_expense_cannot_be_posted_by_hand() {
    let app = TestApp::new().await;
    let (status, body) = app
        .post(
            "/api/pengeluaran",
            json!({"tanggal": "2024-05-01", "kategori_pengeluaran": "gaji", "jumlah": 1000}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5001);

    let (status, body) = app
        .post(
            "/api/pengeluaran",
            json!({"tanggal": "2024-05-01", "kategori_pengeluaran": "listrik", "jumlah": 0}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}

#[tokio::test]
async fn dashboard_profit_matches_report() {
    let app = TestApp::new().await;
    app.produksi("2024-05-01", [10, 10, 10], &[]).await;
    let (_, sale) = app.sale("2024-05-01", "2024-05-01", "Eceran", [2, 2, 1]).await;
    app.post(
        "/api/return",
        json!({"tanggal": "2024-05-01", "penjualan_id": sale["id"], "tempe_3k_return": 1}),
    )
    .await;
    app.post(
        "/api/pengeluaran",
        json!({"tanggal": "2024-05-01", "kategori_pengeluaran": "kedelai", "jumlah": 5000}),
    )
    .await;

    let summary = app.get("/api/dashboard/summary?tanggal=2024-05-01").await;
    assert_eq!(summary["total_produksi_hari_ini"], 30);
    assert_eq!(summary["total_penjualan_hari_ini"], 26000 - 3000);
    assert_eq!(summary["total_pengeluaran_hari_ini"], 5000);
    assert_eq!(summary["laba_hari_ini"], 18000);

    let report = app.get("/api/laporan/laba?period=daily&limit=7").await;
    let last = report.as_array().unwrap().last().unwrap();
    assert_eq!(last["tanggal"], "2024-05-01");
    assert_eq!(last["laba"], summary["laba_hari_ini"]);

    let monthly = app.get("/api/laporan/laba?period=monthly").await;
    assert_eq!(monthly[0]["tanggal"], "2024-05");

    let (status, _) = app
        .send(Method::GET, "/api/laporan/laba?limit=0", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn daily_stock_rows_carry_running_balance() {
    let app = TestApp::new().await;
    app.produksi("2024-05-01", [10, 0, 0], &[]).await;
    app.produksi("2024-05-02", [5, 0, 0], &[]).await;
    app.sale("2024-05-02", "2024-05-01", "Eceran", [3, 0, 0]).await;

    let rows = app.get("/api/stok/produk").await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows[0]["tanggal"], "2024-05-02");
    assert_eq!(rows[0]["prod_stok_3k"], 5);
    assert_eq!(rows[0]["sell_stok_3k"], 3);
    assert_eq!(rows[0]["sisa_stok_3k"], 12);
    assert_eq!(rows[1]["sisa_stok_3k"], 10);
}

#[tokio::test]
async fn stock_views_are_served_at_their_own_paths() {
    let app = TestApp::new().await;
    app.produksi("2024-05-01", [10, 4, 2], &[]).await;
    app.sale("2024-05-01", "2024-05-01", "Eceran", [3, 0, 0]).await;

    let on_hand = app.get("/api/stok/mon").await;
    assert!(on_hand.is_object(), "{on_hand}");
    assert_eq!(on_hand["stok_3k"], 7);
    assert_eq!(on_hand["stok_5k"], 4);
    assert_eq!(on_hand["stok_10k"], 2);
    assert_eq!(on_hand["total_pcs"], 13);

    let rows = app.get("/api/stok/produk").await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["tanggal"], "2024-05-01");
    assert_eq!(rows[0]["sisa_stok_3k"], 7);

    let batches = app.get("/api/stok/batch").await;
    assert!(batches.is_array());
}

#[tokio::test]
async fn oversized_quantities_are_refused() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/produksi",
            json!({"tanggal": "2024-05-01", "kedelai_kg": 1.0, "tempe_3k_produksi": 4_000_000_000_000_000_i64}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
    assert_eq!(body["details"]["variant"], "3k");

    app.produksi("2024-05-01", [1_000_000, 0, 0], &[]).await;
    let (status, body) = app
        .sale("2024-05-01", "2024-05-01", "Eceran", [4_000_000_000_000_000, 0, 0])
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);

    // the cap itself is accepted and priced without overflow
    let (status, sale) = app
        .sale("2024-05-01", "2024-05-01", "Eceran", [1_000_000, 0, 0])
        .await;
    assert_eq!(status, StatusCode::OK, "{sale}");
    assert_eq!(sale["total_penjualan"], 3_000_000_000_i64);
}

#[tokio::test]
async fn oversized_amounts_are_refused() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/karyawan",
            json!({"nama": "Budi", "gaji_harian": i64::MAX}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);

    let (status, body) = app
        .post(
            "/api/pengeluaran",
            json!({"tanggal": "2024-05-01", "kategori_pengeluaran": "kedelai", "jumlah": i64::MAX}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}
