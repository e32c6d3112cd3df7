//! Patient Chart and Dose Reminders
//!
//! Models the patient dashboard: the patient's own view of their
//! prescriptions and a list of dose reminders with a taken flag. The
//! prescription shape here is deliberately separate from the doctor's
//! record; the mock has no shared backing store. No scheduling and no
//! notification delivery exist — a reminder is just a flag the patient
//! flips.

pub use chart::*;
pub use model::*;

pub mod chart;
pub mod model;
