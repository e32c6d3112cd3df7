//! Dosing frequency vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How often a medication is taken.
///
/// The wire form is the kebab-case string the prescription form uses
/// (`once-daily`, `twice-daily`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OnceDaily,
    TwiceDaily,
    ThreeTimesDaily,
    FourTimesDaily,
    AsNeeded,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OnceDaily => "once-daily",
            Frequency::TwiceDaily => "twice-daily",
            Frequency::ThreeTimesDaily => "three-times-daily",
            Frequency::FourTimesDaily => "four-times-daily",
            Frequency::AsNeeded => "as-needed",
        }
    }

    /// Human-readable form ("twice daily").
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized frequency strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown frequency: {0}")]
pub struct UnknownFrequency(pub String);

impl FromStr for Frequency {
    type Err = UnknownFrequency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "once-daily" => Ok(Frequency::OnceDaily),
            "twice-daily" => Ok(Frequency::TwiceDaily),
            "three-times-daily" => Ok(Frequency::ThreeTimesDaily),
            "four-times-daily" => Ok(Frequency::FourTimesDaily),
            "as-needed" => Ok(Frequency::AsNeeded),
            other => Err(UnknownFrequency(other.to_string())),
        }
    }
}
