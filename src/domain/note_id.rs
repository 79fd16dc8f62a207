//! Timestamp-based note identifier with numeric ordering and serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A note identifier: the Unix timestamp (seconds) at which the note was created.
///
/// On disk and in URLs the ID is its decimal string, but comparisons are numeric,
/// so `9` sorts before `10`.
///
/// # Examples
///
/// ```
/// use marginalia::domain::NoteId;
///
/// let older: NoteId = "9".parse().unwrap();
/// let newer: NoteId = "10".parse().unwrap();
/// assert!(older < newer);
/// assert_eq!(newer.to_string(), "10");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(u64);

impl NoteId {
    /// Creates a NoteId from a raw timestamp in seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Creates a NoteId from a datetime, truncated to whole seconds.
    ///
    /// Datetimes before the Unix epoch clamp to zero.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(u64::try_from(datetime.timestamp()).unwrap_or(0))
    }

    /// Returns the timestamp in seconds.
    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns the creation time encoded in this ID.
    pub fn timestamp(&self) -> DateTime<Utc> {
        i64::try_from(self.0)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Interprets a caller-supplied ID.
    ///
    /// Empty input and `0` mean "no ID" and yield `None`, so the caller gets a
    /// fresh timestamp instead.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ParseNoteIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let id: NoteId = trimmed.parse()?;
        Ok((id.0 != 0).then_some(id))
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid note ID.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid note id '{}': expected a Unix timestamp in seconds",
            self.value
        )
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the canonical decimal form: no sign, no leading zeros. Otherwise
        // "0100" and "100" would name the same note.
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && !(s.len() > 1 && s.starts_with('0'));
        if !canonical {
            return Err(ParseNoteIdError {
                value: s.to_string(),
            });
        }
        s.parse::<u64>().map(NoteId).map_err(|_| ParseNoteIdError {
            value: s.to_string(),
        })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
