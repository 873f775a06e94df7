//! Layer 7: Combined register state
//!
//! The `{counters, letters}` pair is the unit of persistence and the
//! interchange format for export/import. It round-trips exactly.

use serde::{Deserialize, Serialize};

use super::counter::{CounterKey, CounterStore};
use super::error::{CoreError, InvalidSnapshot};
use super::ledger::Ledger;

/// Everything the register knows, owned by the registration service
/// and handed to the persistence adapter by reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterState {
    pub counters: CounterStore,
    pub letters: Ledger,
}

impl RegisterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an import payload.
    ///
    /// Both top-level fields must be present; a payload missing either
    /// is rejected outright so the caller's current state stays
    /// untouched. Accepted payloads are also checked for internal
    /// consistency via [`RegisterState::validate`].
    pub fn parse_snapshot(json: &str) -> Result<Self, CoreError> {
        let state: RegisterState = serde_json::from_str(json).map_err(|e| InvalidSnapshot {
            reason: e.to_string(),
        })?;
        state.validate()?;
        Ok(state)
    }

    /// Reject states that would let a future issuance re-dispense a
    /// recorded number: every letter's sequence number must be covered
    /// by the stored counter for its key. Counters running ahead of
    /// the letters are legal (burned numbers leave that kind of gap).
    pub fn validate(&self) -> Result<(), CoreError> {
        for letter in self.letters.iter() {
            let key = CounterKey::new(letter.classification(), letter.year());
            let last = self.counters.last_issued(key);
            if letter.number().get() > last {
                return Err(InvalidSnapshot {
                    reason: format!(
                        "letter {} carries sequence {} but counter {} records only {}",
                        letter.id(),
                        letter.number(),
                        key,
                        last
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Render the interchange JSON (pretty-printed, like the export
    /// files users pass around).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            InvalidSnapshot {
                reason: format!("state failed to encode: {e}"),
            }
            .into()
        })
    }

    /// Full-state wipe: counters and letters both go. The only path
    /// that ever resets a sequence.
    pub fn wipe(&mut self) {
        self.counters.reset();
        self.letters.clear();
    }
}
