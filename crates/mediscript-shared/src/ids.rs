//! Prescription identifiers.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier assigned to a prescription at creation time.
///
/// Random v4 UUIDs; uniqueness is probabilistic, there is no central
/// issuing authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{}", _0)]
pub struct PrescriptionId(Uuid);

impl PrescriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PrescriptionId {
    fn default() -> Self {
        Self::new()
    }
}
