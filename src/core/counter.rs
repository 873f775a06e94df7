//! Layer 4: Sequence counters
//!
//! One monotonic counter per (classification, year). Numbers are
//! issued in strictly increasing order, never reused, and never rolled
//! back; void and purge go through the ledger and never touch this.

use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use super::domain::Classification;
use super::error::{CoreError, InvalidId};

/// An issued sequence number. Always >= 1; zero is the unmaterialized
/// "nothing issued yet" counter value, which no letter ever carries.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeqNo(NonZeroU64);

impl SeqNo {
    pub const FIRST: SeqNo = SeqNo(NonZeroU64::MIN);

    pub fn from_u64(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for SeqNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeqNo({})", self.0)
    }
}

impl fmt::Display for SeqNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SeqNo> for u64 {
    fn from(value: SeqNo) -> u64 {
        value.0.get()
    }
}

/// Counter key: one numbering series per (classification, year).
///
/// Wire form (JSON object key): `"<CLASSIFICATION>:<year>"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CounterKey {
    classification: Classification,
    year: i32,
}

impl CounterKey {
    pub fn new(classification: Classification, year: i32) -> Self {
        Self {
            classification,
            year,
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Parse the canonical wire form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let Some((class_raw, year_raw)) = s.split_once(':') else {
            return Err(InvalidId::CounterKey {
                raw: s.to_string(),
                reason: "missing `:` separator".into(),
            }
            .into());
        };
        let classification = Classification::parse(class_raw).map_err(|_| InvalidId::CounterKey {
            raw: s.to_string(),
            reason: format!("unknown classification `{class_raw}`"),
        })?;
        let year: i32 = year_raw.parse().map_err(|_| InvalidId::CounterKey {
            raw: s.to_string(),
            reason: format!("year `{year_raw}` is not an integer"),
        })?;
        Ok(Self {
            classification,
            year,
        })
    }
}

impl fmt::Display for CounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.classification.as_str(), self.year)
    }
}

impl TryFrom<String> for CounterKey {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CounterKey::parse(&s)
    }
}

impl From<CounterKey> for String {
    fn from(key: CounterKey) -> String {
        key.to_string()
    }
}

/// Last-issued sequence number per counter key.
///
/// Absence means zero; a key is only materialized by its first
/// allocation. Values move by exactly +1 per allocation and never
/// decrease except through [`CounterStore::reset`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterStore {
    counters: BTreeMap<CounterKey, u64>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last issued number for the key, zero when nothing was issued.
    pub fn last_issued(&self, key: CounterKey) -> u64 {
        self.counters.get(&key).copied().unwrap_or(0)
    }

    /// The number the next allocation would return. Not a reservation:
    /// only [`CounterStore::allocate_next`] consumes a number.
    pub fn peek_next(&self, key: CounterKey) -> SeqNo {
        let next = self
            .last_issued(key)
            .checked_add(1)
            .expect("sequence counter overflow");
        SeqNo::from_u64(next).expect("peeked sequence is nonzero")
    }

    /// Allocate the next number for the key.
    ///
    /// A single read-modify-write with no intervening yield point: two
    /// calls for the same key can never return the same number, and the
    /// series is gapless under the single-writer model.
    pub fn allocate_next(&mut self, key: CounterKey) -> SeqNo {
        let next = self
            .last_issued(key)
            .checked_add(1)
            .expect("sequence counter overflow");
        self.counters.insert(key, next);
        SeqNo::from_u64(next).expect("allocated sequence is nonzero")
    }

    /// Clear every counter. Only the full-state wipe calls this;
    /// irreversible.
    pub fn reset(&mut self) {
        self.counters.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (CounterKey, u64)> + '_ {
        self.counters.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(classification: Classification, year: i32) -> CounterKey {
        CounterKey::new(classification, year)
    }

    #[test]
    fn allocation_is_monotonic_and_gapless() {
        let mut store = CounterStore::new();
        let k = key(Classification::Outgoing, 2024);

        assert_eq!(store.allocate_next(k).get(), 1);
        assert_eq!(store.allocate_next(k).get(), 2);
        assert_eq!(store.allocate_next(k).get(), 3);
        assert_eq!(store.last_issued(k), 3);
    }

    #[test]
    fn peek_does_not_materialize_or_advance() {
        let mut store = CounterStore::new();
        let k = key(Classification::Certificate, 2023);

        assert_eq!(store.peek_next(k).get(), 1);
        assert_eq!(store.peek_next(k).get(), 1);
        assert!(store.is_empty());

        store.allocate_next(k);
        assert_eq!(store.peek_next(k).get(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keys_advance_independently() {
        let mut store = CounterStore::new();
        let out_2024 = key(Classification::Outgoing, 2024);
        let out_2025 = key(Classification::Outgoing, 2025);
        let ket_2024 = key(Classification::Certificate, 2024);

        assert_eq!(store.allocate_next(out_2024).get(), 1);
        assert_eq!(store.allocate_next(out_2024).get(), 2);
        assert_eq!(store.allocate_next(out_2025).get(), 1);
        assert_eq!(store.allocate_next(ket_2024).get(), 1);
        assert_eq!(store.last_issued(out_2024), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut store = CounterStore::new();
        let k = key(Classification::Outgoing, 2024);
        store.allocate_next(k);
        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.peek_next(k).get(), 1);
    }

    #[test]
    fn counter_key_wire_form_roundtrips() {
        let k = key(Classification::Outgoing, 2024);
        assert_eq!(k.to_string(), "OUTGOING:2024");
        assert_eq!(CounterKey::parse("OUTGOING:2024").unwrap(), k);
        assert!(CounterKey::parse("OUTGOING").is_err());
        assert!(CounterKey::parse("LETTER:2024").is_err());
        assert!(CounterKey::parse("OUTGOING:year").is_err());
    }

    #[test]
    fn store_serializes_as_keyed_object() {
        let mut store = CounterStore::new();
        store.allocate_next(key(Classification::Outgoing, 2024));
        store.allocate_next(key(Classification::Outgoing, 2024));
        store.allocate_next(key(Classification::Certificate, 2023));

        // Map order follows CounterKey's Ord: classification declaration
        // order first, then year.
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, r#"{"OUTGOING:2024":2,"CERTIFICATE:2023":1}"#);

        let back: CounterStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
