//! Layer 0: Time primitives
//!
//! Timestamp for creation/update stamps (RFC 3339 on the wire).
//! Calendar dates use the `ymd` serde format (`YYYY-MM-DD`).

use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};

/// An instant in UTC, recorded when a letter is created or mutated.
///
/// Copy is fine here - it's a measurement, not an ordering primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn get(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        write!(f, "{s}")
    }
}

/// Today's calendar date in UTC. Used when a letter date is not supplied.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Serde format for calendar dates: `[year]-[month]-[day]`.
pub mod ymd {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;
    use time::macros::format_description;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let format = format_description!("[year]-[month]-[day]");
        let s = date.format(format).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let format = format_description!("[year]-[month]-[day]");
        let s = String::deserialize(deserializer)?;
        Date::parse(&s, format).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::macros::date;

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super::ymd")]
        date: time::Date,
    }

    #[test]
    fn ymd_roundtrip() {
        let holder = Holder {
            date: date!(2023 - 05 - 01),
        };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"date":"2023-05-01"}"#);
        let back: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, holder.date);
    }

    #[test]
    fn timestamp_displays_rfc3339() {
        let ts = super::Timestamp::now();
        let rendered = ts.to_string();
        assert!(rendered.contains('T'));
        assert!(rendered.ends_with('Z') || rendered.contains('+'));
    }
}
