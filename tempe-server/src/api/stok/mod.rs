//! Stock API Module
//!
//! Read-only views of the ledger:
//!
//! | Path | Returns |
//! |------|---------|
//! | /api/stok/mon | stock on hand |
//! | /api/stok/produk | one row per day, newest first |
//! | /api/stok/batch | balance per production batch |
//! | /api/stok/rusak | spoilage records |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stok", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/mon", get(handler::summary))
        .route("/produk", get(handler::daily))
        .route("/batch", get(handler::batches))
        .route("/rusak", get(handler::spoilage))
}
