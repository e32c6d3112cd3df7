//! Prescription record and draft validation.

use chrono::{DateTime, Utc};
use mediscript_shared::{Frequency, Otp, PrescriptionId, QrToken};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a doctor-created prescription.
///
/// Records are always created Active. Nothing in the doctor view drives
/// the other transitions; the pharmacist flow tracks dispensing on its
/// own record shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrescriptionStatus {
    Active,
    Dispensed,
    Expired,
}

/// A medication order from a doctor to a patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: PrescriptionId,
    pub patient_name: String,
    /// Optional contact; free text, may be empty.
    pub patient_email: String,
    pub medication: String,
    pub dosage: String,
    pub frequency: Option<Frequency>,
    pub duration: String,
    pub instructions: String,
    pub doctor_name: String,
    pub created_at: DateTime<Utc>,
    pub status: PrescriptionStatus,
    /// Opaque token embedded in the rendered QR image.
    pub qr_code: QrToken,
    /// Alternate human-enterable code.
    pub otp: Otp,
}

/// Form input for a new prescription.
///
/// Only `patient_name`, `medication`, and `dosage` are mandatory; the
/// rest may stay empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionDraft {
    pub patient_name: String,
    pub patient_email: String,
    pub medication: String,
    pub dosage: String,
    pub frequency: Option<Frequency>,
    pub duration: String,
    pub instructions: String,
}

/// Error surfaced to the user when a draft cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrescriptionError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl PrescriptionDraft {
    /// Presence check on the mandatory fields.
    ///
    /// Whitespace-only input counts as empty. The first missing field is
    /// reported.
    pub fn validate(&self) -> Result<(), PrescriptionError> {
        if self.patient_name.trim().is_empty() {
            return Err(PrescriptionError::MissingField("patient name"));
        }
        if self.medication.trim().is_empty() {
            return Err(PrescriptionError::MissingField("medication"));
        }
        if self.dosage.trim().is_empty() {
            return Err(PrescriptionError::MissingField("dosage"));
        }
        Ok(())
    }
}
