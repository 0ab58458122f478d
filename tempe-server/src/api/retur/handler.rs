//! Sales Return Handlers

use axum::{
    Json,
    extract::State,
};
use shared::models::{
    ProductVariant, ReturnPenjualan, ReturnPenjualanCreate, SpoilageSource, StokRusak,
    VariantQty,
};
use shared::pricing;

use crate::core::ServerState;
use crate::db::repository::{self, penjualan, produksi, retur, stok};
use crate::utils::time::validate_not_before;
use crate::utils::validation::{MAX_NOTE_LEN, validate_max_len, validate_quantities};
use crate::utils::{AppError, AppResult, ErrorCode};

const RESOURCE: &str = "retur";

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ReturnPenjualan>>> {
    let returns = retur::find_all(&state.pool).await?;
    Ok(Json(returns))
}

/// Take pieces back from a sale
///
/// Per variant, everything returned against the sale stays within what it
/// sold. The refund uses the sale's buyer-category prices. A return against
/// an expired batch goes straight to spoilage on the return date.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReturnPenjualanCreate>,
) -> AppResult<Json<ReturnPenjualan>> {
    let qty = payload.qty();
    validate_quantities(&qty, "Jumlah retur")?;
    if qty.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyReturn));
    }
    validate_max_len(&payload.keterangan, "Keterangan", MAX_NOTE_LEN)?;

    let _guard = state.lock_writes().await;

    let sale = penjualan::find_by_id(&state.pool, payload.penjualan_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::SaleNotFound,
                format!("Penjualan {} tidak ditemukan", payload.penjualan_id),
            )
            .with_detail("penjualan_id", payload.penjualan_id)
        })?;
    validate_not_before(payload.tanggal, sale.tanggal, "retur", "penjualan")?;

    let returned: VariantQty = retur::find_by_penjualan(&state.pool, sale.id)
        .await?
        .iter()
        .map(ReturnPenjualan::qty)
        .sum();
    let sold = sale.qty();
    for variant in ProductVariant::ALL {
        let room = sold.get(variant) - returned.get(variant);
        if qty.get(variant) > room {
            return Err(AppError::with_message(
                ErrorCode::ReturnExceedsSold,
                format!(
                    "Retur tempe {} melebihi jumlah terjual: terjual {} pcs, sudah diretur {} pcs",
                    variant,
                    sold.get(variant),
                    returned.get(variant)
                ),
            )
            .with_detail("variant", variant.label())
            .with_detail("sold", sold.get(variant))
            .with_detail("returned", returned.get(variant)));
        }
    }

    let batch_expired = produksi::find_by_id(&state.pool, sale.produksi_id)
        .await?
        .is_some_and(|b| b.stat_exp);

    let record = ReturnPenjualan {
        id: shared::util::snowflake_id(),
        tanggal: payload.tanggal,
        penjualan_id: sale.id,
        pembeli: sale.pembeli.clone(),
        tempe_3k_return: qty.pcs_3k,
        tempe_5k_return: qty.pcs_5k,
        tempe_10k_return: qty.pcs_10k,
        total_return: pricing::total(sale.kategori_pembeli, &qty),
        keterangan: payload.keterangan.trim().to_string(),
        created_at: shared::util::now_millis(),
    };

    let mut tx = repository::begin(&state.pool).await?;
    retur::insert(&mut *tx, &record).await?;
    if batch_expired {
        stok::insert(
            &mut *tx,
            &StokRusak {
                id: shared::util::snowflake_id(),
                produksi_id: sale.produksi_id,
                tanggal: record.tanggal,
                rusak_3k: qty.pcs_3k,
                rusak_5k: qty.pcs_5k,
                rusak_10k: qty.pcs_10k,
                sumber: SpoilageSource::Return,
                created_at: record.created_at,
            },
        )
        .await?;
    }
    repository::commit(tx).await?;

    tracing::info!(
        resource = RESOURCE,
        retur_id = record.id,
        penjualan_id = sale.id,
        total = record.total_return,
        spoiled = batch_expired,
        "Return recorded"
    );

    Ok(Json(record))
}
