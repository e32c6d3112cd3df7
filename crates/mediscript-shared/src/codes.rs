//! Generated prescription codes.
//!
//! Two boundary artifacts identify a prescription outside the doctor's
//! own view: an opaque QR payload token and a short human-enterable OTP.
//! Neither is registered anywhere after generation; collision avoidance
//! is purely probabilistic.

use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ids::PrescriptionId;

/// OTP length in characters.
pub const OTP_LEN: usize = 6;

/// Uppercase alphanumeric alphabet the OTP is drawn from.
const OTP_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error raised when a code entered by a user cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("verification code must not be empty")]
    Empty,
}

/// One-Time Password: a short alternate code to the QR payload.
///
/// Six characters, digits and uppercase letters. Entry is
/// case-insensitive; parsing normalizes to uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{}", _0)]
pub struct Otp(String);

impl Otp {
    /// Generate a fresh OTP from the supplied RNG.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..OTP_LEN)
            .map(|_| OTP_ALPHABET[rng.gen_range(0..OTP_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Accept a user-entered code.
    ///
    /// Whitespace is trimmed and the code is upper-cased. The only
    /// rejected input is an empty one.
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let code = input.trim().to_uppercase();
        if code.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque token embedded in a prescription's QR image.
///
/// Rendering the image itself is a presentation concern; the token is
/// the only payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{}", _0)]
pub struct QrToken(String);

impl QrToken {
    /// Derive the QR payload for a prescription.
    pub fn for_prescription(id: &PrescriptionId) -> Self {
        Self(format!("prescription_{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
