//! Composite note keys: a title joined with its creation timestamp.

use crate::domain::Timestamp;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The unique identifier of a note within its category.
///
/// A key renders as `"{title} ({stamp})"`, e.g. `Groceries (2024-03-01 09:15:00)`.
/// It is kept as a structured value so that renaming a note can carry the
/// stamp forward without re-parsing strings.
///
/// Keys written by older versions may lack the stamp suffix entirely; those
/// parse with `stamp() == None` and render back to exactly the same text.
/// Parsing always looks at the *last* parenthesized suffix, so a title that
/// itself ends in a date-like suffix survives a round trip.
///
/// # Examples
///
/// ```
/// use notepad::domain::NoteKey;
///
/// let key: NoteKey = "Groceries (2024-03-01 09:15:00)".parse().unwrap();
/// assert_eq!(key.title(), "Groceries");
/// assert_eq!(key.stamp().unwrap().to_string(), "2024-03-01 09:15:00");
///
/// let legacy: NoteKey = "Groceries".parse().unwrap();
/// assert!(legacy.stamp().is_none());
/// assert_eq!(legacy.to_string(), "Groceries");
/// ```
// Field order matters: keys sort by title, then unstamped before stamped.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteKey {
    title: String,
    stamp: Option<Timestamp>,
}

impl NoteKey {
    /// Creates a key for `title` stamped with `stamp`.
    pub fn new(title: impl Into<String>, stamp: Timestamp) -> Self {
        Self {
            title: title.into(),
            stamp: Some(stamp),
        }
    }

    /// Creates a key without a stamp, as found in older files.
    pub fn unstamped(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stamp: None,
        }
    }

    /// Returns the title portion of the key.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creation stamp, if the key carries one.
    pub fn stamp(&self) -> Option<Timestamp> {
        self.stamp
    }

    /// Returns a key with a new title and the same stamp.
    ///
    /// The result is the key its rendered text parses back to, so an
    /// unstamped key given a title ending in `" (YYYY-MM-DD HH:MM:SS)"`
    /// becomes a stamped key. Two keys that render the same always compare
    /// equal.
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        let Ok(key) = Self {
            title: title.into(),
            stamp: self.stamp,
        }
        .to_string()
        .parse::<Self>();
        key
    }

    /// Returns true if `title` names this note.
    pub fn matches_title(&self, title: &str) -> bool {
        self.title == title
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stamp {
            Some(stamp) => write!(f, "{} ({})", self.title, stamp),
            None => write!(f, "{}", self.title),
        }
    }
}

impl fmt::Debug for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteKey(\"{}\")", self)
    }
}

impl FromStr for NoteKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stamped = s
            .strip_suffix(')')
            .and_then(|rest| rest.rsplit_once(" ("))
            .and_then(|(title, stamp)| {
                stamp
                    .parse::<Timestamp>()
                    .ok()
                    .map(|stamp| Self::new(title, stamp))
            });

        Ok(stamped.unwrap_or_else(|| Self::unstamped(s)))
    }
}

impl Serialize for NoteKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NoteKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(key) = s.parse::<NoteKey>();
        Ok(key)
    }
}
