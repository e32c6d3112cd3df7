//! Pharmacist Verification Desk
//!
//! Models the pharmacist dashboard: verifying prescriptions by entered
//! code or by a simulated QR scan, and marking verified records as
//! dispensed. Both verification paths are demo stand-ins; they fabricate
//! fixed records and never look up a doctor-created prescription.

pub use desk::*;
pub use model::*;

pub mod desk;
pub mod model;
