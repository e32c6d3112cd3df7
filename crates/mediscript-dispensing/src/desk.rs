//! The verification desk state machine.

use chrono::{DateTime, Duration, Utc};
use mediscript_shared::{CodeError, Otp};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{
    code_entry_record, scan_record, DispenseState, VerificationId, VerifiedPrescription,
};

/// Fixed duration of the simulated QR scan, in seconds.
pub const SCAN_DELAY_SECS: i64 = 2;

/// State of the simulated QR scanner.
///
/// One scan at a time, no cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanState {
    Idle,
    Scanning { started_at: DateTime<Utc> },
}

/// Errors surfaced by desk operations. Every error aborts with no state
/// change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeskError {
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error("no verified prescription with id {0}")]
    NotFound(VerificationId),
    #[error("prescription {0} has already been dispensed")]
    AlreadyDispensed(VerificationId),
    #[error("a scan is already running")]
    ScanAlreadyRunning,
    #[error("no scan is running")]
    NoScanRunning,
}

/// Dashboard counters for the pharmacist view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskStats {
    pub verified_today: usize,
    /// Dispensed records verified today.
    pub dispensed_today: usize,
    /// Distinct patient names across all desk records.
    pub unique_patients: usize,
}

/// Newest-first list of verified prescriptions plus the scanner state.
///
/// Local view state only; disconnected from the doctor's registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationDesk {
    items: Vec<VerifiedPrescription>,
    scan: ScanState,
}

impl Default for VerificationDesk {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            scan: ScanState::Idle,
        }
    }
}

impl VerificationDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify a prescription by entered code.
    ///
    /// Empty input is rejected with no state change. Any other input
    /// "verifies": the desk prepends the fixed demo record without any
    /// lookup.
    pub fn verify_code(
        &mut self,
        input: &str,
        now: DateTime<Utc>,
    ) -> Result<&VerifiedPrescription, DeskError> {
        let code = Otp::parse(input)?;
        let record = code_entry_record(now);
        tracing::info!(%code, id = %record.id, patient = %record.patient_name, "code verified");
        self.items.insert(0, record);
        Ok(&self.items[0])
    }

    /// Begin the simulated QR scan.
    pub fn start_scan(&mut self, now: DateTime<Utc>) -> Result<(), DeskError> {
        match self.scan {
            ScanState::Scanning { .. } => Err(DeskError::ScanAlreadyRunning),
            ScanState::Idle => {
                tracing::debug!("scan started");
                self.scan = ScanState::Scanning { started_at: now };
                Ok(())
            }
        }
    }

    /// Check on a running scan.
    ///
    /// Returns `Ok(None)` while the fixed delay has not elapsed. Once it
    /// has, the scanner goes back to idle and the fixed demo record is
    /// prepended and returned.
    pub fn poll_scan(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<Option<&VerifiedPrescription>, DeskError> {
        let started_at = match self.scan {
            ScanState::Idle => return Err(DeskError::NoScanRunning),
            ScanState::Scanning { started_at } => started_at,
        };
        if now.signed_duration_since(started_at) < Duration::seconds(SCAN_DELAY_SECS) {
            return Ok(None);
        }
        self.scan = ScanState::Idle;
        let record = scan_record(now);
        tracing::info!(id = %record.id, patient = %record.patient_name, "scan verified");
        self.items.insert(0, record);
        Ok(Some(&self.items[0]))
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.scan, ScanState::Scanning { .. })
    }

    /// Mark a verified record as dispensed.
    ///
    /// Flips exactly that record's state; everything else is untouched.
    pub fn dispense(&mut self, id: &VerificationId) -> Result<&VerifiedPrescription, DeskError> {
        let record = self
            .items
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(DeskError::NotFound(*id))?;
        if record.state == DispenseState::Dispensed {
            return Err(DeskError::AlreadyDispensed(*id));
        }
        record.state = DispenseState::Dispensed;
        tracing::info!(%id, "medication dispensed");
        Ok(&*record)
    }

    pub fn get(&self, id: &VerificationId) -> Option<&VerifiedPrescription> {
        self.items.iter().find(|r| r.id == *id)
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &VerifiedPrescription> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dashboard counters as of `now`.
    pub fn stats(&self, now: DateTime<Utc>) -> DeskStats {
        let today = now.date_naive();
        let unique_patients = self
            .items
            .iter()
            .map(|r| r.patient_name.as_str())
            .collect::<HashSet<_>>()
            .len();
        DeskStats {
            verified_today: self
                .items
                .iter()
                .filter(|r| r.verified_at.date_naive() == today)
                .count(),
            dispensed_today: self
                .items
                .iter()
                .filter(|r| {
                    r.state == DispenseState::Dispensed && r.verified_at.date_naive() == today
                })
                .count(),
            unique_patients,
        }
    }
}
