//! Verified prescription records and their fabricated demo sources.
//!
//! All record contents in the fabrication functions are hardcoded and
//! fictional, standing in for a real prescription lookup that this
//! system does not have.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a record on the verification desk.
///
/// Unrelated to `PrescriptionId`: the desk never references
/// doctor-created records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{}", _0)]
pub struct VerificationId(Uuid);

impl VerificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VerificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Desk-side state of a verified record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispenseState {
    Verified,
    Dispensed,
}

/// A prescription as the pharmacist desk sees it after verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifiedPrescription {
    pub id: VerificationId,
    pub patient_name: String,
    pub medication: String,
    pub dosage: String,
    pub doctor_name: String,
    pub verified_at: DateTime<Utc>,
    pub state: DispenseState,
}

/// The fixed record produced by code-entry verification.
pub(crate) fn code_entry_record(now: DateTime<Utc>) -> VerifiedPrescription {
    VerifiedPrescription {
        id: VerificationId::new(),
        patient_name: "John Doe".to_string(),
        medication: "Amoxicillin 500mg".to_string(),
        dosage: "Take one capsule twice daily".to_string(),
        doctor_name: "Dr. Smith".to_string(),
        verified_at: now,
        state: DispenseState::Verified,
    }
}

/// The fixed record produced by a completed QR scan.
pub(crate) fn scan_record(now: DateTime<Utc>) -> VerifiedPrescription {
    VerifiedPrescription {
        id: VerificationId::new(),
        patient_name: "Jane Smith".to_string(),
        medication: "Ibuprofen 400mg".to_string(),
        dosage: "Take one tablet as needed for pain".to_string(),
        doctor_name: "Dr. Johnson".to_string(),
        verified_at: now,
        state: DispenseState::Verified,
    }
}
