//! On-disk document shapes and the upgrade from older ones.
//!
//! Three shapes have been written over time, and all of them load:
//!
//! ```text
//! {"Title (2024-01-01 10:00:00)": "text"}                          flat, no categories
//! {"Work": {"Title (2024-01-01 10:00:00)": "text"}}                categories, bare strings
//! {"Work": {"Title (2024-01-01 10:00:00)": {"content": "text",
//!                                           "date": "2024-01-01 10:00:00"}}}
//! ```
//!
//! Only the last shape is ever written.

use super::{Store, StoreError, StoreResult};
use crate::domain::{Category, Note, NoteKey, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// What was upgraded while loading an older document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Notes stored as a bare string that became `{content, date}` records.
    pub bare_notes: usize,
    /// Of those, notes that had no category and were moved into the default one.
    pub uncategorized: usize,
    /// Records with a blank date that were dated from their key.
    pub dated: usize,
    /// Notes whose key was already taken in their category and that were
    /// given a ` (migrated)` title suffix instead of being dropped.
    pub renamed: usize,
}

impl MigrationReport {
    /// Returns true if loading changed anything.
    pub fn is_empty(&self) -> bool {
        self.bare_notes == 0 && self.dated == 0 && self.renamed == 0
    }

    /// Total number of notes whose stored shape changed.
    pub fn upgraded(&self) -> usize {
        self.bare_notes + self.dated
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct RawDocument(BTreeMap<String, RawEntry>);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Category(BTreeMap<NoteKey, RawNote>),
    Flat(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNote {
    Record {
        content: String,
        #[serde(default)]
        date: String,
    },
    Bare(String),
}

impl RawNote {
    fn upgrade(self, key: &NoteKey, now: Timestamp, report: &mut MigrationReport) -> Note {
        let stamp = key.stamp().unwrap_or(now);
        match self {
            RawNote::Record { content, date } if date.trim().is_empty() => {
                report.dated += 1;
                Note::new(content, stamp)
            }
            RawNote::Record { content, date } => {
                if date.parse::<Timestamp>().is_err() {
                    warn!(%key, date = %date, "note date is not a timestamp, it will sort last");
                }
                Note::with_raw_date(content, date)
            }
            RawNote::Bare(content) => {
                report.bare_notes += 1;
                Note::new(content, stamp)
            }
        }
    }
}

impl RawDocument {
    /// Converts the raw document into a store, upgrading legacy shapes.
    ///
    /// Bare-string notes are dated from their key's stamp, or from `now`
    /// when the key has none. Top-level strings are notes from before
    /// categories existed and land in `default_category`, after every
    /// categorized note, so on a key clash it is the moved note that gets
    /// renamed.
    pub(crate) fn upgrade(
        self,
        path: &Path,
        default_category: &Category,
        now: Timestamp,
    ) -> StoreResult<(Store, MigrationReport)> {
        let mut report = MigrationReport::default();
        let mut categories: BTreeMap<Category, BTreeMap<NoteKey, Note>> = BTreeMap::new();
        let mut flat = Vec::new();

        for (name, entry) in self.0 {
            match entry {
                RawEntry::Category(notes) => {
                    let category =
                        Category::new(&name).map_err(|_| StoreError::InvalidCategory {
                            path: path.to_path_buf(),
                            name: name.clone(),
                        })?;
                    let target = categories.entry(category).or_default();
                    for (key, raw) in notes {
                        let note = raw.upgrade(&key, now, &mut report);
                        insert_unique(target, key, note, &mut report);
                    }
                }
                RawEntry::Flat(content) => flat.push((name, content)),
            }
        }

        for (name, content) in flat {
            let Ok(key) = name.parse::<NoteKey>();
            let note = RawNote::Bare(content).upgrade(&key, now, &mut report);
            report.uncategorized += 1;
            let target = categories.entry(default_category.clone()).or_default();
            insert_unique(target, key, note, &mut report);
        }

        Ok((Store::from_categories(categories), report))
    }
}

/// Inserts `note`, suffixing its title with `(migrated)`, `(migrated 2)`,
/// and so on when `key` is already taken.
fn insert_unique(
    notes: &mut BTreeMap<NoteKey, Note>,
    key: NoteKey,
    note: Note,
    report: &mut MigrationReport,
) {
    if !notes.contains_key(&key) {
        notes.insert(key, note);
        return;
    }

    let free = (1..)
        .map(|n| match n {
            1 => key.with_title(format!("{} (migrated)", key.title())),
            n => key.with_title(format!("{} (migrated {n})", key.title())),
        })
        .find(|candidate| !notes.contains_key(candidate));
    if let Some(free) = free {
        warn!(%key, renamed = %free, "note key already taken, keeping both");
        report.renamed += 1;
        notes.insert(free, note);
    }
}
