//! Layer 1: Identity atoms
//!
//! LetterId: globally unique, immutable letter identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{CoreError, InvalidId};

/// Letter identifier - UUID v4.
///
/// Assigned exactly once at issuance; only the registration service
/// generates new ids (pub(crate)).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterId(Uuid);

impl LetterId {
    /// Parse and validate a letter id string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(s.trim()).map(Self).map_err(|e| {
            InvalidId::Letter {
                raw: s.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Generate a fresh id. Only issuance should call this.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Debug for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterId({})", self.0)
    }
}

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_generated() {
        let id = LetterId::generate();
        let parsed = LetterId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_trims_whitespace() {
        let id = LetterId::generate();
        let parsed = LetterId::parse(&format!("  {id}  ")).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(LetterId::parse("not-a-uuid").is_err());
        assert!(LetterId::parse("").is_err());
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = LetterId::generate();
        let b = LetterId::generate();
        assert_ne!(a, b);
    }
}
