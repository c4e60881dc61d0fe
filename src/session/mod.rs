//! The edit session: which note is open and the unsaved title and content.

mod autosave;

pub use autosave::AutoSaveTimer;

use crate::domain::{Category, Note, NoteKey, Timestamp, UrlMatch, find_urls};
use crate::store::{NoteStore, StoreError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("title cannot be empty")]
    TitleEmpty,

    #[error("no note is open")]
    NothingOpen,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// The title and content being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub content: String,
}

/// The note currently open for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenNote {
    pub category: Category,
    pub key: NoteKey,
}

/// Selection and edit-buffer state over a [`NoteStore`].
///
/// A session is either editing an existing note (`open()` is `Some`) or
/// composing a new one in `category`. [`Session::save`] turns the buffer
/// into a stored note either way; [`Session::autosave`] only acts on an
/// open note.
#[derive(Debug)]
pub struct Session {
    store: NoteStore,
    category: Category,
    open: Option<OpenNote>,
    buffer: EditBuffer,
}

impl Session {
    /// Starts a session composing a new note in `category`.
    pub fn new(store: NoteStore, category: Category) -> Self {
        Self {
            store,
            category,
            open: None,
            buffer: EditBuffer::default(),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Consumes the session, returning the store.
    pub fn into_store(self) -> NoteStore {
        self.store
    }

    /// Returns the open note, if any.
    pub fn open_note(&self) -> Option<&OpenNote> {
        self.open.as_ref()
    }

    /// Returns the category new notes are saved into.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the edit buffer.
    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Loads a stored note into the buffer and marks it open.
    ///
    /// The buffer's title is the note's title without the stamp.
    pub fn open(&mut self, category: &Category, key: &NoteKey) -> SessionResult<&EditBuffer> {
        let note = self
            .store
            .store()
            .get(category, key)
            .ok_or_else(|| StoreError::NoteNotFound {
                category: category.clone(),
                key: key.clone(),
            })?;

        self.buffer = EditBuffer {
            title: key.title().to_string(),
            content: note.content().to_string(),
        };
        self.category = category.clone();
        self.open = Some(OpenNote {
            category: category.clone(),
            key: key.clone(),
        });
        debug!(%category, %key, "opened note");
        Ok(&self.buffer)
    }

    /// Clears the buffer and deselects, so the next save creates a note in `category`.
    pub fn new_note(&mut self, category: Category) {
        self.clear();
        self.category = category;
    }

    /// Replaces the buffer's title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.buffer.title = title.into();
    }

    /// Replaces the buffer's content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.buffer.content = content.into();
    }

    /// Saves the buffer, stamping new notes with the current time.
    pub fn save(&mut self) -> SessionResult<NoteKey> {
        self.save_at(Timestamp::now())
    }

    /// Saves the buffer.
    ///
    /// - With nothing open, creates `"{title} ({now})"` dated `now` and opens it.
    /// - With a note open and a changed title, renames it (the stamp and
    ///   date stay) and writes the content.
    /// - Otherwise overwrites the content under the same key.
    ///
    /// Titles are trimmed. Returns the key the note is stored under.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TitleEmpty` for a blank title; nothing is written.
    pub fn save_at(&mut self, now: Timestamp) -> SessionResult<NoteKey> {
        let title = self.buffer.title.trim().to_string();
        if title.is_empty() {
            return Err(SessionError::TitleEmpty);
        }
        let content = self.buffer.content.clone();

        let key = match self.open.take() {
            None => {
                let category = self.category.clone();
                let key = self.store.create_note(category.clone(), &title, content, now)?;
                self.open = Some(OpenNote {
                    category,
                    key: key.clone(),
                });
                key
            }
            Some(open) => {
                let OpenNote { category, key } = open.clone();
                // A failed update restores the store, so the old key stays valid
                self.open = Some(open);
                let saved = self.store.update(|s| {
                    let new_key = s.rename_note(&category, &key, &title)?;
                    s.set_content(&category, &new_key, content)?;
                    Ok(new_key)
                })?;
                self.open = Some(OpenNote {
                    category,
                    key: saved.clone(),
                });
                saved
            }
        };

        self.buffer.title = title;
        Ok(key)
    }

    /// Saves the open note, if there is one.
    ///
    /// Returns `None` without touching the store when nothing is open.
    /// Saving an unchanged note rewrites identical data.
    pub fn autosave(&mut self) -> SessionResult<Option<NoteKey>> {
        if self.open.is_none() {
            return Ok(None);
        }
        let key = self.save()?;
        info!(%key, "auto-saved");
        Ok(Some(key))
    }

    /// Deletes the open note and clears the buffer.
    pub fn delete(&mut self) -> SessionResult<Note> {
        let open = self.open.as_ref().ok_or(SessionError::NothingOpen)?;
        let note = self.store.remove_note(&open.category, &open.key)?;
        self.clear();
        Ok(note)
    }

    /// Discards the buffer and the selection without saving.
    pub fn clear(&mut self) {
        self.open = None;
        self.buffer = EditBuffer::default();
    }

    /// Returns the URLs in the buffer's content.
    pub fn urls(&self) -> Vec<UrlMatch> {
        find_urls(&self.buffer.content)
    }
}
