//! Layer 6: The Letter Ledger
//!
//! Ordered collection of issued letters, newest first. The ledger owns
//! its records; it never touches the counter store.

use serde::{Deserialize, Serialize};

use super::domain::LetterStatus;
use super::identity::LetterId;
use super::letter::Letter;
use super::time::Timestamp;

/// Insertion order is most-recently-created-first: `append` prepends,
/// so natural iteration is reverse chronological.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    letters: Vec<Letter>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front. Identity uniqueness is the caller's
    /// responsibility (issuance generates fresh ids).
    pub fn append(&mut self, letter: Letter) {
        self.letters.insert(0, letter);
    }

    pub fn find(&self, id: LetterId) -> Option<&Letter> {
        self.letters.iter().find(|l| l.id() == id)
    }

    /// Set a letter's status, refreshing its update stamp.
    ///
    /// Returns false when the id is unknown. Voiding an already-VOID
    /// letter is allowed and idempotent (it still re-stamps).
    pub fn set_status(&mut self, id: LetterId, status: LetterStatus, now: Timestamp) -> bool {
        match self.letters.iter_mut().find(|l| l.id() == id) {
            Some(letter) => {
                letter.set_status(status, now);
                true
            }
            None => false,
        }
    }

    /// Delete the record if present; no-op otherwise. Counters are
    /// never adjusted: the purged sequence number stays consumed.
    pub fn remove(&mut self, id: LetterId) -> bool {
        let before = self.letters.len();
        self.letters.retain(|l| l.id() != id);
        self.letters.len() != before
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Letter> {
        self.letters.iter()
    }

    /// Non-mutating filtered view; restartable with a new predicate.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a Letter>
    where
        P: FnMut(&Letter) -> bool + 'a,
    {
        self.letters.iter().filter(move |l| predicate(l))
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Remove every record. Only the full-state wipe calls this.
    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::core::counter::SeqNo;
    use crate::core::domain::Classification;

    fn letter(seq: u64, subject: &str) -> Letter {
        Letter::new(
            LetterId::generate(),
            Classification::Outgoing,
            date!(2024 - 03 - 10),
            SeqNo::from_u64(seq).unwrap(),
            subject.into(),
            String::new(),
            Timestamp::now(),
        )
    }

    #[test]
    fn append_prepends() {
        let mut ledger = Ledger::new();
        ledger.append(letter(1, "first"));
        ledger.append(letter(2, "second"));

        let subjects: Vec<_> = ledger.iter().map(|l| l.subject().to_string()).collect();
        assert_eq!(subjects, ["second", "first"]);
    }

    #[test]
    fn set_status_on_unknown_id_is_false() {
        let mut ledger = Ledger::new();
        ledger.append(letter(1, "only"));
        let missing = LetterId::generate();
        assert!(!ledger.set_status(missing, LetterStatus::Void, Timestamp::now()));
    }

    #[test]
    fn void_is_idempotent() {
        let mut ledger = Ledger::new();
        let l = letter(1, "voidable");
        let id = l.id();
        ledger.append(l);

        assert!(ledger.set_status(id, LetterStatus::Void, Timestamp::now()));
        assert!(ledger.set_status(id, LetterStatus::Void, Timestamp::now()));
        assert_eq!(ledger.find(id).unwrap().status(), LetterStatus::Void);
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let mut ledger = Ledger::new();
        ledger.append(letter(1, "keep"));
        assert!(!ledger.remove(LetterId::generate()));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn filter_is_restartable() {
        let mut ledger = Ledger::new();
        ledger.append(letter(1, "alpha"));
        ledger.append(letter(2, "beta"));

        let alphas = ledger.filter(|l| l.subject() == "alpha").count();
        let betas = ledger.filter(|l| l.subject() == "beta").count();
        assert_eq!((alphas, betas), (1, 1));
    }
}
