//! Layer 5: The Letter
//!
//! Identity, classification, date, and sequence number are immutable
//! once issued; only the status (and with it `updated_at`) mutates.

use serde::{Deserialize, Serialize};
use time::Date;

use super::counter::SeqNo;
use super::domain::{Classification, LetterStatus};
use super::format::display_number;
use super::identity::LetterId;
use super::time::{Timestamp, ymd};

/// A registered letter.
///
/// Constructed only by the registration service's issuance path; the
/// sequence number is copied from the counter at that instant, never
/// recomputed. Field names on the wire are the interchange format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    id: LetterId,
    classification: Classification,
    #[serde(with = "ymd")]
    letter_date: Date,
    /// Derived from `letter_date` at issuance and frozen thereafter.
    year: i32,
    #[serde(rename = "register_no")]
    number: SeqNo,
    #[serde(rename = "register_display")]
    display: String,
    subject: String,
    /// Optional counterparty; empty string on the wire means none.
    #[serde(default)]
    party: String,
    status: LetterStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Letter {
    /// Build a freshly issued letter. Only the registration service
    /// calls this; `subject` is already validated and trimmed.
    pub(crate) fn new(
        id: LetterId,
        classification: Classification,
        letter_date: Date,
        number: SeqNo,
        subject: String,
        party: String,
        now: Timestamp,
    ) -> Self {
        let year = letter_date.year();
        let display = display_number(classification, year, number);
        Self {
            id,
            classification,
            letter_date,
            year,
            number,
            display,
            subject,
            party,
            status: LetterStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> LetterId {
        self.id
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn letter_date(&self) -> Date {
        self.letter_date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The consumed sequence number. Survives void and purge.
    pub fn number(&self) -> SeqNo {
        self.number
    }

    /// Cached display number, e.g. `OUT/2024/0007`.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn party(&self) -> Option<&str> {
        if self.party.is_empty() {
            None
        } else {
            Some(&self.party)
        }
    }

    pub fn status(&self) -> LetterStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == LetterStatus::Active
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Set the status and refresh `updated_at`. Idempotent re-voids
    /// still re-stamp the update time.
    pub(crate) fn set_status(&mut self, status: LetterStatus, now: Timestamp) {
        self.status = status;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn sample() -> Letter {
        Letter::new(
            LetterId::generate(),
            Classification::Certificate,
            date!(2023 - 05 - 01),
            SeqNo::FIRST,
            "Domicile".into(),
            String::new(),
            Timestamp::now(),
        )
    }

    #[test]
    fn issuance_derives_year_and_display() {
        let letter = sample();
        assert_eq!(letter.year(), 2023);
        assert_eq!(letter.display(), "KET/2023/0001");
        assert_eq!(letter.status(), LetterStatus::Active);
        assert_eq!(letter.created_at(), letter.updated_at());
    }

    #[test]
    fn empty_party_reads_as_none() {
        let letter = sample();
        assert_eq!(letter.party(), None);
    }

    #[test]
    fn set_status_restamps_update_time() {
        let mut letter = sample();
        let created = letter.created_at();
        let later = Timestamp::now();
        letter.set_status(LetterStatus::Void, later);
        assert_eq!(letter.status(), LetterStatus::Void);
        assert_eq!(letter.created_at(), created);
        assert!(letter.updated_at() >= created);
        // The display number never changes with status.
        assert_eq!(letter.display(), "KET/2023/0001");
    }

    #[test]
    fn wire_form_uses_interchange_field_names() {
        let letter = sample();
        let json = serde_json::to_value(&letter).unwrap();
        assert!(json.get("register_no").is_some());
        assert!(json.get("register_display").is_some());
        assert_eq!(json["letter_date"], "2023-05-01");
        assert_eq!(json["status"], "ACTIVE");
        assert_eq!(json["party"], "");

        let back: Letter = serde_json::from_value(json).unwrap();
        assert_eq!(back, letter);
    }
}
