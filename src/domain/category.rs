//! Category names used to group notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid category name.
#[derive(Debug, Clone)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

/// A user-defined grouping of notes.
///
/// Category names are free text, so `Work Projects` is valid. Unlike tags
/// they are case-sensitive: `Work` and `work` are different categories.
///
/// # Validation Rules
/// - Non-empty after trimming surrounding whitespace
/// - No control characters (newlines, tabs, ...)
///
/// # Examples
///
/// ```
/// use notepad::domain::Category;
///
/// let cat = Category::new("  Work ").unwrap();
/// assert_eq!(cat.as_str(), "Work");
/// assert!(Category::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(String);

impl Category {
    /// Creates a new Category from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseCategoryError` if:
    /// - The name is empty or whitespace-only
    /// - The name contains control characters
    pub fn new(s: &str) -> Result<Self, ParseCategoryError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseCategoryError("category cannot be empty".to_string()));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(ParseCategoryError(format!(
                "invalid category '{}': control characters are not allowed",
                trimmed.escape_debug()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category(\"{}\")", self.0)
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
