//! Layer 2: Domain enums
//!
//! Classification: which numbering series a letter belongs to.
//! LetterStatus: ACTIVE | VOID, one-way transition.

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidId};

/// Letter classification. Each variant owns an independent numbering
/// series per calendar year.
///
/// The prefix is display-only; uniqueness comes from the counter key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Outgoing,
    Certificate,
}

impl Classification {
    /// All classifications, in display order.
    pub const ALL: [Classification; 2] = [Classification::Outgoing, Classification::Certificate];

    /// Canonical wire form (also the counter-key segment).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outgoing => "OUTGOING",
            Self::Certificate => "CERTIFICATE",
        }
    }

    /// Short code used in display numbers.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Outgoing => "OUT",
            Self::Certificate => "KET",
        }
    }

    /// Human label for rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Outgoing => "Outgoing letter",
            Self::Certificate => "Certificate letter",
        }
    }

    /// Parse the canonical wire form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "OUTGOING" => Ok(Self::Outgoing),
            "CERTIFICATE" => Ok(Self::Certificate),
            _ => Err(InvalidId::Classification { raw: s.to_string() }.into()),
        }
    }
}

/// Letter lifecycle status.
///
/// ACTIVE -> VOID is the only transition; there is no un-void.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterStatus {
    Active,
    Void,
}

impl LetterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Void => "VOID",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "VOID" => Ok(Self::Void),
            _ => Err(InvalidId::Status { raw: s.to_string() }.into()),
        }
    }
}
