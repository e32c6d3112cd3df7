//! Patient-side record shapes.

use chrono::{DateTime, Utc};
use derive_more::Display;
use mediscript_shared::Frequency;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status vocabulary of the patient view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Active,
    Completed,
    Missed,
}

/// A prescription as the patient sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientPrescription {
    pub id: Uuid,
    pub medication: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub duration: String,
    pub doctor_name: String,
    pub prescribed_date: DateTime<Utc>,
    pub status: PatientStatus,
    pub next_dose: Option<DateTime<Utc>>,
    pub instructions: String,
}

/// Identifier of a dose reminder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{}", _0)]
pub struct ReminderId(Uuid);

impl ReminderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

/// One scheduled dose for today, with its taken flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoseReminder {
    pub id: ReminderId,
    pub medication: String,
    /// Display time, e.g. "9:00 AM". Reminders carry no real trigger.
    pub time: String,
    pub taken: bool,
}

impl DoseReminder {
    pub fn new(medication: &str, time: &str, taken: bool) -> Self {
        Self {
            id: ReminderId::new(),
            medication: medication.to_string(),
            time: time.to_string(),
            taken,
        }
    }
}
