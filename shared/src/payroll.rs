//! Payroll accumulation
//!
//! Entries move Draft → Verified → Paid. Verified unpaid entries of one
//! employee form the payable card that a batch payment settles.

use crate::models::{BayarBatchRequest, Gaji};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    /// nominal = 0, not paid
    Draft,
    /// nominal > 0, not paid
    Verified,
    /// Locked
    Paid,
}

impl PayrollStatus {
    pub fn of(entry: &Gaji) -> Self {
        if entry.status_bayar {
            Self::Paid
        } else if entry.nominal > 0 {
            Self::Verified
        } else {
            Self::Draft
        }
    }
}

/// Payable card of one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayroll {
    pub nama_karyawan: String,
    pub total_gaji: i64,
    pub total_hari: usize,
    pub ids: Vec<i64>,
}

impl EmployeePayroll {
    pub fn to_request(&self) -> BayarBatchRequest {
        BayarBatchRequest {
            ids: self.ids.clone(),
            total_nominal: self.total_gaji,
            nama_karyawan: self.nama_karyawan.clone(),
            tanggal: None,
        }
    }
}

/// Group entries by employee name in first-seen order
///
/// Employees without payable entries still get a card with a zero total.
pub fn summarize(entries: &[Gaji]) -> Vec<EmployeePayroll> {
    let mut cards: Vec<EmployeePayroll> = Vec::new();
    for entry in entries {
        let idx = match cards
            .iter()
            .position(|c| c.nama_karyawan == entry.nama_karyawan)
        {
            Some(idx) => idx,
            None => {
                cards.push(EmployeePayroll {
                    nama_karyawan: entry.nama_karyawan.clone(),
                    total_gaji: 0,
                    total_hari: 0,
                    ids: Vec::new(),
                });
                cards.len() - 1
            }
        };
        if PayrollStatus::of(entry) == PayrollStatus::Verified {
            let card = &mut cards[idx];
            card.total_gaji += entry.nominal;
            card.total_hari += 1;
            card.ids.push(entry.id);
        }
    }
    cards
}

/// Amount shown on an entry: the verified nominal, else the projected wage
pub fn display_nominal(entry: &Gaji) -> i64 {
    if entry.nominal > 0 {
        entry.nominal
    } else {
        entry.nominal_standar
    }
}

/// Why a batch payment is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("Tidak ada data gaji yang dipilih")]
    Empty,
    #[error("Total pembayaran harus lebih dari 0")]
    NonPositiveTotal,
    #[error("Data gaji {0} tidak ditemukan")]
    NotFound(i64),
    #[error("Data gaji {0} sudah dibayar")]
    AlreadyPaid(i64),
    #[error("Data gaji {0} belum diverifikasi")]
    NotVerified(i64),
    #[error("Data gaji {id} milik {actual}, bukan {expected}")]
    WrongEmployee {
        id: i64,
        expected: String,
        actual: String,
    },
    #[error("Total pembayaran {requested} tidak sesuai dengan total gaji {computed}")]
    TotalMismatch { requested: i64, computed: i64 },
}

/// Check a batch payment against the stored entries and return the amount to pay
///
/// `entries` are the stored rows for `req.ids` (missing ids are simply absent).
pub fn validate_settlement(
    req: &BayarBatchRequest,
    entries: &[Gaji],
) -> Result<i64, SettlementError> {
    if req.ids.is_empty() {
        return Err(SettlementError::Empty);
    }
    if req.total_nominal <= 0 {
        return Err(SettlementError::NonPositiveTotal);
    }

    let mut computed = 0;
    let mut seen = std::collections::HashSet::new();
    for id in &req.ids {
        if !seen.insert(*id) {
            continue;
        }
        let entry = entries
            .iter()
            .find(|e| e.id == *id)
            .ok_or(SettlementError::NotFound(*id))?;
        match PayrollStatus::of(entry) {
            PayrollStatus::Paid => return Err(SettlementError::AlreadyPaid(*id)),
            PayrollStatus::Draft => return Err(SettlementError::NotVerified(*id)),
            PayrollStatus::Verified => {}
        }
        if entry.nama_karyawan != req.nama_karyawan {
            return Err(SettlementError::WrongEmployee {
                id: *id,
                expected: req.nama_karyawan.clone(),
                actual: entry.nama_karyawan.clone(),
            });
        }
        computed += entry.nominal;
    }

    if computed != req.total_nominal {
        return Err(SettlementError::TotalMismatch {
            requested: req.total_nominal,
            computed,
        });
    }
    Ok(computed)
}
