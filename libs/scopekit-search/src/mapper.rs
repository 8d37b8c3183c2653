//! Row-to-summary helpers.
//!
//! Summaries carry timestamps as RFC 3339 strings in UTC with millisecond
//! precision and a `Z` suffix, whatever the storage representation.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

pub trait CanonicalTimestamp {
    fn to_canonical(&self) -> String;
}

impl<Tz: TimeZone> CanonicalTimestamp for DateTime<Tz> {
    fn to_canonical(&self) -> String {
        self.with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Naive values are taken to be UTC.
impl CanonicalTimestamp for NaiveDateTime {
    fn to_canonical(&self) -> String {
        self.and_utc().to_canonical()
    }
}

impl CanonicalTimestamp for time::OffsetDateTime {
    fn to_canonical(&self) -> String {
        DateTime::<Utc>::from_timestamp(self.unix_timestamp(), self.nanosecond())
            .unwrap_or_default()
            .to_canonical()
    }
}

#[must_use]
pub fn canonical<T: CanonicalTimestamp + ?Sized>(ts: &T) -> String {
    ts.to_canonical()
}

/// `None` stays `None` so it serializes as `null`.
#[must_use]
pub fn canonical_opt<T: CanonicalTimestamp>(ts: Option<&T>) -> Option<String> {
    ts.map(CanonicalTimestamp::to_canonical)
}
