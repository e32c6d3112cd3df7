//! MediScript Test Suite
//!
//! Cross-crate tests for the three role flows:
//! - Doctor prescription creation and registry statistics
//! - Pharmacist verification, scan simulation, and dispensing
//! - Patient reminders and chart statistics

pub mod dispensing;
pub mod prescriptions;
