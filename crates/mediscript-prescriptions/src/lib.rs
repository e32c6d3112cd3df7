//! Prescription Lifecycle Model (doctor view)
//!
//! Defines the prescription record a doctor creates, presence validation
//! for its mandatory fields, and the in-memory registry that backs the
//! doctor dashboard. Records are created once and never mutated or
//! destroyed here; the pharmacist and patient views keep their own
//! separate shapes.

pub use model::*;
pub use registry::*;

pub mod model;
pub mod registry;
