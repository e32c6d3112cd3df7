//! The patient chart: local view state for the patient dashboard.

use chrono::{DateTime, Duration, Utc};
use mediscript_shared::Frequency;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{DoseReminder, PatientPrescription, PatientStatus, ReminderId};

/// Error surfaced when a reminder action cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("no reminder with id {0}")]
    UnknownReminder(ReminderId),
}

/// Dashboard counters for the patient view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStats {
    pub active_prescriptions: usize,
    pub pending_reminders: usize,
    pub taken_today: usize,
    /// Earliest upcoming dose among active prescriptions.
    pub next_dose: Option<DateTime<Utc>>,
}

/// The patient's prescriptions and today's reminders.
///
/// Prescriptions are static in this mock; only the reminder taken flags
/// ever change.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PatientChart {
    prescriptions: Vec<PatientPrescription>,
    reminders: Vec<DoseReminder>,
}

impl PatientChart {
    pub fn new(prescriptions: Vec<PatientPrescription>, reminders: Vec<DoseReminder>) -> Self {
        Self {
            prescriptions,
            reminders,
        }
    }

    /// The hard-coded demo chart: an antibiotic course prescribed
    /// yesterday with a dose an hour out, an as-needed painkiller from
    /// two days ago, and two reminders for today (morning pending,
    /// evening already taken).
    pub fn demo(now: DateTime<Utc>) -> Self {
        let prescriptions = vec![
            PatientPrescription {
                id: Uuid::new_v4(),
                medication: "Amoxicillin 500mg".to_string(),
                dosage: "500mg".to_string(),
                frequency: Frequency::TwiceDaily,
                duration: "7 days".to_string(),
                doctor_name: "Dr. Smith".to_string(),
                prescribed_date: now - Duration::days(1),
                status: PatientStatus::Active,
                next_dose: Some(now + Duration::hours(1)),
                instructions: "Take with food. Complete the full course even if you feel better."
                    .to_string(),
            },
            PatientPrescription {
                id: Uuid::new_v4(),
                medication: "Ibuprofen 400mg".to_string(),
                dosage: "400mg".to_string(),
                frequency: Frequency::AsNeeded,
                duration: "As needed".to_string(),
                doctor_name: "Dr. Johnson".to_string(),
                prescribed_date: now - Duration::days(2),
                status: PatientStatus::Active,
                next_dose: None,
                instructions: "Take for pain relief. Do not exceed 3 doses per day.".to_string(),
            },
        ];
        let reminders = vec![
            DoseReminder::new("Amoxicillin 500mg", "9:00 AM", false),
            DoseReminder::new("Amoxicillin 500mg", "9:00 PM", true),
        ];
        Self::new(prescriptions, reminders)
    }

    /// Mark a reminder's dose as taken.
    ///
    /// Flips exactly that reminder's flag; marking an already-taken
    /// reminder is a no-op success.
    pub fn mark_taken(&mut self, id: &ReminderId) -> Result<&DoseReminder, ChartError> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(ChartError::UnknownReminder(*id))?;
        if !reminder.taken {
            reminder.taken = true;
            tracing::info!(%id, medication = %reminder.medication, "dose marked taken");
        }
        Ok(&*reminder)
    }

    pub fn prescriptions(&self) -> impl Iterator<Item = &PatientPrescription> {
        self.prescriptions.iter()
    }

    pub fn active_prescriptions(&self) -> impl Iterator<Item = &PatientPrescription> {
        self.prescriptions
            .iter()
            .filter(|p| p.status == PatientStatus::Active)
    }

    pub fn reminders(&self) -> impl Iterator<Item = &DoseReminder> {
        self.reminders.iter()
    }

    pub fn pending_reminders(&self) -> impl Iterator<Item = &DoseReminder> {
        self.reminders.iter().filter(|r| !r.taken)
    }

    /// Dashboard counters.
    pub fn stats(&self) -> ChartStats {
        ChartStats {
            active_prescriptions: self.active_prescriptions().count(),
            pending_reminders: self.pending_reminders().count(),
            taken_today: self.reminders.iter().filter(|r| r.taken).count(),
            next_dose: self
                .active_prescriptions()
                .filter_map(|p| p.next_dose)
                .min(),
        }
    }
}
