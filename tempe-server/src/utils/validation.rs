//! Input validation helpers
//!
//! Text length limits and numeric checks shared by the handlers.

use shared::models::VariantQty;

use crate::utils::{AppError, ErrorCode};

/// Names: employee, buyer
pub const MAX_NAME_LEN: usize = 200;

/// Notes on returns and expenses
pub const MAX_NOTE_LEN: usize = 500;

/// Phone or staff numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Pieces of one variant in a single batch, sale or return
pub const MAX_PCS: i64 = 1_000_000;

/// Rupiah in a single wage or expense
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} wajib diisi")));
    }
    validate_max_len(value, field, max_len)
}

pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} terlalu panjang (maks {max_len} karakter)"
        )));
    }
    Ok(())
}

/// Amounts and wages are never negative and stay under [`MAX_AMOUNT`]
pub fn validate_amount(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!("{field} tidak boleh negatif")));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} melebihi batas Rp {MAX_AMOUNT}"),
        )
        .with_detail("max", MAX_AMOUNT));
    }
    Ok(())
}

/// No variant may hold a negative count or more than [`MAX_PCS`]
pub fn validate_quantities(qty: &VariantQty, field: &str) -> Result<(), AppError> {
    if let Some(variant) = qty.first_negative() {
        return Err(AppError::validation(format!(
            "{field} tempe {variant} tidak boleh negatif"
        ))
        .with_detail("variant", variant.label()));
    }
    if let Some(variant) = qty.first_above(MAX_PCS) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} tempe {variant} melebihi {MAX_PCS} pcs"),
        )
        .with_detail("variant", variant.label())
        .with_detail("max", MAX_PCS));
    }
    Ok(())
}
