//! In-memory prescription registry backing the doctor dashboard.

use chrono::{DateTime, Utc};
use mediscript_shared::{Otp, PrescriptionId, QrToken};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{Prescription, PrescriptionDraft, PrescriptionError, PrescriptionStatus};

/// Newest-first list of a doctor's created prescriptions.
///
/// Local view state only: not shared across views or sessions, not
/// persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PrescriptionRegistry {
    items: Vec<Prescription>,
}

/// Dashboard counters for the doctor view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total: usize,
    /// Distinct patient email values across all records.
    pub active_patients: usize,
    pub created_today: usize,
}

impl PrescriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and, on success, prepend the new record.
    ///
    /// The record gets a fresh id, a generated OTP, the QR token derived
    /// from the id, and status Active. On validation failure nothing is
    /// mutated.
    pub fn create<R: Rng + ?Sized>(
        &mut self,
        draft: PrescriptionDraft,
        doctor_name: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<&Prescription, PrescriptionError> {
        draft.validate()?;

        let id = PrescriptionId::new();
        let prescription = Prescription {
            id,
            patient_name: draft.patient_name,
            patient_email: draft.patient_email,
            medication: draft.medication,
            dosage: draft.dosage,
            frequency: draft.frequency,
            duration: draft.duration,
            instructions: draft.instructions,
            doctor_name: doctor_name.to_string(),
            created_at: now,
            status: PrescriptionStatus::Active,
            qr_code: QrToken::for_prescription(&id),
            otp: Otp::generate(rng),
        };

        tracing::info!(
            %id,
            patient = %prescription.patient_name,
            medication = %prescription.medication,
            "prescription created"
        );

        self.items.insert(0, prescription);
        Ok(&self.items[0])
    }

    pub fn get(&self, id: &PrescriptionId) -> Option<&Prescription> {
        self.items.iter().find(|p| p.id == *id)
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Prescription> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dashboard counters as of `now`.
    pub fn stats(&self, now: DateTime<Utc>) -> RegistryStats {
        let today = now.date_naive();
        let active_patients = self
            .items
            .iter()
            .map(|p| p.patient_email.as_str())
            .collect::<HashSet<_>>()
            .len();
        RegistryStats {
            total: self.items.len(),
            active_patients,
            created_today: self
                .items
                .iter()
                .filter(|p| p.created_at.date_naive() == today)
                .count(),
        }
    }
}
