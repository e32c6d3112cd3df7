//! MediScript Shared Utilities
//!
//! Common vocabulary for the MediScript domain crates:
//! - Prescription identifiers
//! - Generated codes (OTP and QR payload token)
//! - Dosing frequency enumeration
//!
//! Every view in MediScript keeps its own local state; this crate only
//! provides the types they agree on, never storage.

pub use codes::*;
pub use frequency::*;
pub use ids::*;

pub mod codes;
pub mod frequency;
pub mod ids;
