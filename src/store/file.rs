//! File-backed store: every mutation rewrites the whole notes file.

use super::format::RawDocument;
use super::{MigrationReport, Store, StoreError, StoreResult};
use crate::domain::{Category, Note, NoteKey, Timestamp};
use crate::infra::{read_json, write_json};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A [`Store`] bound to the JSON file it was loaded from.
///
/// Reads go straight to the in-memory store. Every mutating method applies
/// its change and then persists the entire store before returning, so the
/// file always reflects the last successful operation. If the change or the
/// write fails, the in-memory store is put back as it was and the error is
/// returned, so memory and file never disagree about which keys exist.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    store: Store,
    migration: MigrationReport,
}

impl NoteStore {
    /// Loads the notes file at `path`.
    ///
    /// A missing file yields an empty store; nothing is written until the
    /// first mutation. Older document shapes are upgraded in memory (see
    /// [`NoteStore::migration`]); notes without a category are placed in
    /// `default_category`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Load` if the file cannot be read or is not valid
    /// JSON, and `StoreError::InvalidCategory` for a blank category name.
    pub fn open(path: impl Into<PathBuf>, default_category: &Category) -> StoreResult<Self> {
        Self::open_at(path, default_category, Timestamp::now())
    }

    /// Like [`NoteStore::open`], dating migrated notes without a stamp at `now`.
    pub fn open_at(
        path: impl Into<PathBuf>,
        default_category: &Category,
        now: Timestamp,
    ) -> StoreResult<Self> {
        let path = path.into();
        let raw: Option<RawDocument> = read_json(&path).map_err(|source| StoreError::Load {
            path: path.clone(),
            source,
        })?;

        let (store, migration) = match raw {
            Some(raw) => raw.upgrade(&path, default_category, now)?,
            None => {
                debug!(path = %path.display(), "notes file not found, starting empty");
                (Store::new(), MigrationReport::default())
            }
        };

        if !migration.is_empty() {
            info!(
                path = %path.display(),
                upgraded = migration.upgraded(),
                uncategorized = migration.uncategorized,
                renamed = migration.renamed,
                "upgraded notes from an older file format"
            );
        }
        debug!(
            path = %path.display(),
            categories = store.len(),
            notes = store.note_count(),
            "loaded notes"
        );

        Ok(Self {
            path,
            store,
            migration,
        })
    }

    /// Returns the path of the notes file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the in-memory store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns what was upgraded when the file was loaded.
    pub fn migration(&self) -> &MigrationReport {
        &self.migration
    }

    /// Writes the whole store to the notes file.
    pub fn save(&self) -> StoreResult<()> {
        write_json(&self.path, &self.store).map_err(|source| StoreError::Save {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), notes = self.store.note_count(), "saved notes");
        Ok(())
    }

    /// Applies `change` to the store and persists the result.
    ///
    /// Nothing is written when `change` fails. On either failure the store
    /// is restored to its state before the call.
    pub fn update<T>(&mut self, change: impl FnOnce(&mut Store) -> StoreResult<T>) -> StoreResult<T> {
        let snapshot = self.store.clone();
        let result = change(&mut self.store).and_then(|value| {
            self.save()?;
            Ok(value)
        });
        if result.is_err() {
            self.store = snapshot;
        }
        result
    }

    /// Adds an empty category. Returns false (and writes nothing) if it exists.
    pub fn add_category(&mut self, category: Category) -> StoreResult<bool> {
        if self.store.contains_category(&category) {
            return Ok(false);
        }
        self.update(|s| Ok(s.add_category(category)))
    }

    /// Deletes a category with all its notes.
    pub fn remove_category(&mut self, category: &Category) -> StoreResult<usize> {
        self.update(|s| s.remove_category(category))
    }

    /// Renames a category.
    pub fn rename_category(&mut self, from: &Category, to: Category) -> StoreResult<()> {
        self.update(|s| s.rename_category(from, to))
    }

    /// Creates a note titled `title`, keyed and dated at `now`.
    pub fn create_note(
        &mut self,
        category: Category,
        title: &str,
        content: impl Into<String>,
        now: Timestamp,
    ) -> StoreResult<NoteKey> {
        let key = NoteKey::new(title, now);
        let note = Note::new(content, now);
        self.update(|s| s.insert(category, key.clone(), note))?;
        Ok(key)
    }

    /// Replaces a note's content.
    pub fn set_content(
        &mut self,
        category: &Category,
        key: &NoteKey,
        content: impl Into<String>,
    ) -> StoreResult<()> {
        self.update(|s| s.set_content(category, key, content))
    }

    /// Renames a note, keeping its stamp. Returns the new key.
    pub fn rename_note(
        &mut self,
        category: &Category,
        key: &NoteKey,
        new_title: &str,
    ) -> StoreResult<NoteKey> {
        self.update(|s| s.rename_note(category, key, new_title))
    }

    /// Deletes a note.
    pub fn remove_note(&mut self, category: &Category, key: &NoteKey) -> StoreResult<Note> {
        self.update(|s| s.remove(category, key))
    }
}
