//! Date helpers

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Parse `YYYY-MM-DD`
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Format tanggal tidak valid: {}", date)))
}

/// Optional query date, today when absent or blank
pub fn date_or_today(date: Option<&str>) -> AppResult<NaiveDate> {
    match date.map(str::trim) {
        Some(d) if !d.is_empty() => parse_date(d),
        _ => Ok(shared::util::today()),
    }
}

/// `later` must not precede `earlier`
pub fn validate_not_before(
    later: NaiveDate,
    earlier: NaiveDate,
    what: &str,
    reference: &str,
) -> AppResult<()> {
    if later < earlier {
        return Err(AppError::validation(format!(
            "Tanggal {} ({}) tidak boleh sebelum tanggal {} ({})",
            what, later, reference, earlier
        )));
    }
    Ok(())
}
