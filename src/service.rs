//! The registration service: the only writer of register state.
//!
//! Orchestrates counter allocation, ledger mutation, and persistence.
//! Every mutating method takes `&mut self`, so the single-writer model
//! is enforced by the borrow checker; there is no yield point between
//! a counter read and its write.

use time::Date;

use crate::Result;
use crate::core::{
    Classification, CoreError, CounterKey, CounterStore, Letter, LetterId, LetterStatus,
    RegisterState, SeqNo, Timestamp, ValidationError, display_number, today,
};
use crate::storage::StateStore;

/// A letter register bound to a persistence adapter.
pub struct Register {
    state: RegisterState,
    store: Box<dyn StateStore>,
}

impl Register {
    /// Open a register, loading whatever the store has (an empty
    /// default when nothing usable is stored).
    pub fn open(store: Box<dyn StateStore>) -> Self {
        let state = store.load();
        Self { state, store }
    }

    /// Register backed by an in-memory store. Handy for tests and
    /// short-lived embedding.
    pub fn in_memory() -> Self {
        Self::open(Box::new(crate::storage::MemoryStore::new()))
    }

    /// Issue a new letter.
    ///
    /// Validation happens before any state mutation. When the date is
    /// absent, today (UTC) is used. On success the letter is recorded
    /// and the full state persisted.
    ///
    /// Invariant caveat: if persistence fails, the error is surfaced
    /// but the in-memory allocation is NOT rolled back - the number is
    /// burned rather than recycled, preserving no-reuse at the cost of
    /// a gap.
    pub fn issue(
        &mut self,
        classification: Classification,
        letter_date: Option<Date>,
        subject: &str,
        party: Option<&str>,
    ) -> Result<Letter> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(CoreError::from(ValidationError {
                field: "subject",
                reason: "must not be empty".into(),
            })
            .into());
        }

        let letter_date = letter_date.unwrap_or_else(today);
        let key = CounterKey::new(classification, letter_date.year());
        let number = self.state.counters.allocate_next(key);

        let letter = Letter::new(
            LetterId::generate(),
            classification,
            letter_date,
            number,
            subject.to_string(),
            party.map(str::trim).unwrap_or_default().to_string(),
            Timestamp::now(),
        );
        self.state.letters.append(letter.clone());

        tracing::info!("issued {} ({})", letter.display(), letter.id());
        self.store.save(&self.state)?;
        Ok(letter)
    }

    /// Void a letter. Returns whether a matching letter existed.
    ///
    /// Never touches the counter store: voiding must never free,
    /// reuse, or roll back a sequence number.
    pub fn void(&mut self, id: LetterId) -> Result<bool> {
        if !self
            .state
            .letters
            .set_status(id, LetterStatus::Void, Timestamp::now())
        {
            return Ok(false);
        }
        tracing::info!("voided letter {id}");
        self.store.save(&self.state)?;
        Ok(true)
    }

    /// Permanently remove a letter record. Advisory and history-losing;
    /// the consumed sequence number stays consumed.
    pub fn purge(&mut self, id: LetterId) -> Result<bool> {
        if !self.state.letters.remove(id) {
            return Ok(false);
        }
        tracing::info!("purged letter {id}");
        self.store.save(&self.state)?;
        Ok(true)
    }

    /// Preview the display number the next issuance under this key
    /// would produce. Not a reservation.
    pub fn peek_next_display(&self, classification: Classification, year: i32) -> String {
        let next = self
            .state
            .counters
            .peek_next(CounterKey::new(classification, year));
        display_number(classification, year, next)
    }

    /// Sequence number the next issuance under this key would get.
    pub fn peek_next(&self, classification: Classification, year: i32) -> SeqNo {
        self.state
            .counters
            .peek_next(CounterKey::new(classification, year))
    }

    pub fn find(&self, id: LetterId) -> Option<&Letter> {
        self.state.letters.find(id)
    }

    /// All letters, newest first.
    pub fn letters(&self) -> impl Iterator<Item = &Letter> {
        self.state.letters.iter()
    }

    /// Filtered view over the letters; restartable.
    pub fn filter<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Letter>
    where
        P: FnMut(&Letter) -> bool + 'a,
    {
        self.state.letters.filter(predicate)
    }

    pub fn counters(&self) -> &CounterStore {
        &self.state.counters
    }

    /// Read-only view of the combined state.
    pub fn state(&self) -> &RegisterState {
        &self.state
    }

    /// Export the interchange JSON.
    pub fn export_json(&self) -> Result<String> {
        Ok(self.state.to_json()?)
    }

    /// Replace the register with an imported snapshot.
    ///
    /// The payload must carry both `counters` and `letters` and pass
    /// consistency checks; otherwise the current state is untouched.
    /// The new state is persisted before it replaces the old one, so a
    /// failed save also leaves the register as it was.
    pub fn restore_snapshot(&mut self, json: &str) -> Result<()> {
        let incoming = RegisterState::parse_snapshot(json)?;
        self.store.save(&incoming)?;
        tracing::info!(
            "restored snapshot: {} letters, {} counters",
            incoming.letters.len(),
            incoming.counters.len()
        );
        self.state = incoming;
        Ok(())
    }

    /// Wipe everything: letters and counters. The only operation that
    /// resets sequences; irreversible.
    pub fn reset(&mut self) -> Result<()> {
        let empty = RegisterState::default();
        self.store.save(&empty)?;
        self.state = empty;
        tracing::info!("register wiped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn issue_rejects_blank_subject_before_allocating() {
        let mut register = Register::in_memory();
        let err = register
            .issue(Classification::Outgoing, None, "   ", None)
            .unwrap_err();
        assert!(matches!(err.effect(), crate::Effect::None));
        // Nothing was allocated or recorded.
        assert!(register.counters().is_empty());
        assert_eq!(register.letters().count(), 0);
        assert_eq!(register.peek_next(Classification::Outgoing, 2024).get(), 1);
    }

    #[test]
    fn issue_trims_subject_and_party() {
        let mut register = Register::in_memory();
        let letter = register
            .issue(
                Classification::Outgoing,
                Some(date!(2024 - 01 - 05)),
                "  Budget request  ",
                Some("  Treasury  "),
            )
            .unwrap();
        assert_eq!(letter.subject(), "Budget request");
        assert_eq!(letter.party(), Some("Treasury"));
    }

    #[test]
    fn issue_defaults_date_to_today() {
        let mut register = Register::in_memory();
        let letter = register
            .issue(Classification::Certificate, None, "Residence", None)
            .unwrap();
        assert_eq!(letter.letter_date(), today());
        assert_eq!(letter.year(), today().year());
    }

    #[test]
    fn peek_matches_next_issue() {
        let mut register = Register::in_memory();
        let preview = register.peek_next_display(Classification::Outgoing, 2024);
        let letter = register
            .issue(
                Classification::Outgoing,
                Some(date!(2024 - 06 - 01)),
                "Notice",
                None,
            )
            .unwrap();
        assert_eq!(preview, letter.display());
    }
}
