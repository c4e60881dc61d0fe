//! In-memory store: category -> composite key -> note.

use super::{SortOrder, StoreError, StoreResult, sort_notes};
use crate::domain::{Category, Note, NoteKey};
use serde::Serialize;
use std::collections::BTreeMap;

/// A borrowed view of one note together with where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRef<'a> {
    pub category: &'a Category,
    pub key: &'a NoteKey,
    pub note: &'a Note,
}

/// All notes, grouped by category.
///
/// Serializes to the on-disk document shape:
/// `{"<category>": {"<title> (<stamp>)": {"content": "...", "date": "..."}}}`.
/// Categories may be empty; an empty category is kept so it can be listed
/// and filled later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Store {
    categories: BTreeMap<Category, BTreeMap<NoteKey, Note>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_categories(
        categories: BTreeMap<Category, BTreeMap<NoteKey, Note>>,
    ) -> Self {
        Self { categories }
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the total number of notes across all categories.
    pub fn note_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Iterates over category names in order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.keys()
    }

    /// Returns true if the category exists.
    pub fn contains_category(&self, category: &Category) -> bool {
        self.categories.contains_key(category)
    }

    /// Adds an empty category. Returns false if it already existed.
    pub fn add_category(&mut self, category: Category) -> bool {
        if self.categories.contains_key(&category) {
            return false;
        }
        self.categories.insert(category, BTreeMap::new());
        true
    }

    /// Removes a category and every note in it, returning how many notes went with it.
    pub fn remove_category(&mut self, category: &Category) -> StoreResult<usize> {
        self.categories
            .remove(category)
            .map(|notes| notes.len())
            .ok_or_else(|| StoreError::CategoryNotFound(category.clone()))
    }

    /// Renames a category, keeping its notes.
    pub fn rename_category(&mut self, from: &Category, to: Category) -> StoreResult<()> {
        if from == &to {
            return if self.contains_category(from) {
                Ok(())
            } else {
                Err(StoreError::CategoryNotFound(from.clone()))
            };
        }
        if self.categories.contains_key(&to) {
            return Err(StoreError::CategoryExists(to));
        }
        let notes = self
            .categories
            .remove(from)
            .ok_or_else(|| StoreError::CategoryNotFound(from.clone()))?;
        self.categories.insert(to, notes);
        Ok(())
    }

    /// Returns the notes of a category in key order.
    pub fn notes(&self, category: &Category) -> StoreResult<&BTreeMap<NoteKey, Note>> {
        self.categories
            .get(category)
            .ok_or_else(|| StoreError::CategoryNotFound(category.clone()))
    }

    /// Returns the notes of a category in the requested display order.
    pub fn sorted(
        &self,
        category: &Category,
        order: SortOrder,
    ) -> StoreResult<Vec<(&NoteKey, &Note)>> {
        Ok(sort_notes(self.notes(category)?, order))
    }

    /// Looks up a single note.
    pub fn get(&self, category: &Category, key: &NoteKey) -> Option<&Note> {
        self.categories.get(category).and_then(|notes| notes.get(key))
    }

    /// Inserts a new note, creating the category if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoteExists` if the key is already taken; the
    /// existing note is left untouched.
    pub fn insert(&mut self, category: Category, key: NoteKey, note: Note) -> StoreResult<()> {
        let notes = self.categories.entry(category.clone()).or_default();
        if notes.contains_key(&key) {
            return Err(StoreError::NoteExists { category, key });
        }
        notes.insert(key, note);
        Ok(())
    }

    /// Inserts or replaces a note, creating the category if needed.
    pub fn upsert(&mut self, category: Category, key: NoteKey, note: Note) {
        self.categories.entry(category).or_default().insert(key, note);
    }

    /// Replaces the content of an existing note. The date is not touched.
    pub fn set_content(
        &mut self,
        category: &Category,
        key: &NoteKey,
        content: impl Into<String>,
    ) -> StoreResult<()> {
        let note = self.get_mut(category, key)?;
        note.set_content(content);
        Ok(())
    }

    /// Deletes a note and returns it.
    pub fn remove(&mut self, category: &Category, key: &NoteKey) -> StoreResult<Note> {
        self.categories
            .get_mut(category)
            .and_then(|notes| notes.remove(key))
            .ok_or_else(|| StoreError::NoteNotFound {
                category: category.clone(),
                key: key.clone(),
            })
    }

    /// Gives a note a new title, keeping its creation stamp, date and content.
    ///
    /// The old key is removed and the new key `"{new_title} ({stamp})"` is
    /// inserted. Renaming to the current title is a no-op. The new key is
    /// compared in its parsed form, so a legacy key cannot be renamed onto
    /// the text of an existing stamped key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoteNotFound` if the note does not exist, or
    /// `StoreError::NoteExists` if the new key is taken by another note.
    pub fn rename_note(
        &mut self,
        category: &Category,
        key: &NoteKey,
        new_title: &str,
    ) -> StoreResult<NoteKey> {
        let new_key = key.with_title(new_title);
        if &new_key == key {
            self.get_mut(category, key)?;
            return Ok(new_key);
        }

        let notes = self
            .categories
            .get_mut(category)
            .ok_or_else(|| StoreError::NoteNotFound {
                category: category.clone(),
                key: key.clone(),
            })?;
        if notes.contains_key(&new_key) {
            return Err(StoreError::NoteExists {
                category: category.clone(),
                key: new_key,
            });
        }
        let note = notes.remove(key).ok_or_else(|| StoreError::NoteNotFound {
            category: category.clone(),
            key: key.clone(),
        })?;
        notes.insert(new_key.clone(), note);
        Ok(new_key)
    }

    /// Resolves a user-supplied identifier to notes.
    ///
    /// An identifier equal to a full composite key wins outright; otherwise
    /// every note whose title equals the identifier matches. The search is
    /// limited to `category` when given.
    pub fn find(&self, category: Option<&Category>, identifier: &str) -> Vec<NoteRef<'_>> {
        let identifier = identifier.trim();
        let Ok(as_key) = identifier.parse::<NoteKey>();

        let exact: Vec<_> = self
            .iter_scope(category)
            .filter(|r| r.key == &as_key)
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        self.iter_scope(category)
            .filter(|r| r.key.matches_title(identifier))
            .collect()
    }

    /// Case-insensitive substring search over titles and content.
    pub fn search(&self, query: &str) -> Vec<NoteRef<'_>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|r| {
                r.key.title().to_lowercase().contains(&needle)
                    || r.note.content().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Iterates over every note in category, then key, order.
    pub fn iter(&self) -> impl Iterator<Item = NoteRef<'_>> {
        self.categories.iter().flat_map(|(category, notes)| {
            notes.iter().map(move |(key, note)| NoteRef { category, key, note })
        })
    }

    fn iter_scope<'a, 'c>(
        &'a self,
        category: Option<&'c Category>,
    ) -> impl Iterator<Item = NoteRef<'a>> + use<'a, 'c> {
        self.iter()
            .filter(move |r| category.is_none_or(|c| c == r.category))
    }

    fn get_mut(&mut self, category: &Category, key: &NoteKey) -> StoreResult<&mut Note> {
        self.categories
            .get_mut(category)
            .and_then(|notes| notes.get_mut(key))
            .ok_or_else(|| StoreError::NoteNotFound {
                category: category.clone(),
                key: key.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;
    use pretty_assertions::assert_eq;

    fn cat(s: &str) -> Category {
        Category::new(s).unwrap()
    }

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn key(title: &str, stamp: &str) -> NoteKey {
        NoteKey::new(title, ts(stamp))
    }

    fn put(store: &mut Store, category: &str, title: &str, stamp: &str, content: &str) -> NoteKey {
        let k = key(title, stamp);
        store
            .insert(cat(category), k.clone(), Note::new(content, ts(stamp)))
            .unwrap();
        k
    }

    fn sample_store() -> Store {
        let mut store = Store::new();
        put(&mut store, "Work", "Standup", "2024-01-01 09:00:00", "notes");
        put(&mut store, "Work", "Retro", "2024-01-05 16:00:00", "went well");
        put(&mut store, "Home", "Groceries", "2024-01-03 18:30:00", "milk\neggs");
        store
    }

    // ===========================================
    // Categories
    // ===========================================

    #[test]
    fn add_category_is_idempotent() {
        let mut store = Store::new();
        assert!(store.add_category(cat("Ideas")));
        assert!(!store.add_category(cat("Ideas")));
        assert_eq!(store.len(), 1);
        assert!(store.notes(&cat("Ideas")).unwrap().is_empty());
    }

    #[test]
    fn remove_category_deletes_its_notes() {
        let mut store = sample_store();
        let removed = store.remove_category(&cat("Work")).unwrap();
        assert_eq!(removed, 2);
        assert!(!store.contains_category(&cat("Work")));
        assert_eq!(store.note_count(), 1);
    }

    #[test]
    fn remove_missing_category_errors() {
        let mut store = sample_store();
        let err = store.remove_category(&cat("Nope")).unwrap_err();
        assert!(matches!(err, StoreError::CategoryNotFound(_)));
    }

    #[test]
    fn rename_category_moves_notes() {
        let mut store = sample_store();
        store.rename_category(&cat("Home"), cat("Household")).unwrap();
        assert!(!store.contains_category(&cat("Home")));
        assert_eq!(store.notes(&cat("Household")).unwrap().len(), 1);
    }

    #[test]
    fn rename_category_onto_existing_errors() {
        let mut store = sample_store();
        let err = store.rename_category(&cat("Home"), cat("Work")).unwrap_err();
        assert!(matches!(err, StoreError::CategoryExists(_)));
        assert_eq!(store.note_count(), 3);
    }

    #[test]
    fn categories_are_ordered() {
        let store = sample_store();
        let names: Vec<_> = store.categories().map(Category::as_str).collect();
        assert_eq!(names, vec!["Home", "Work"]);
    }

    // ===========================================
    // Notes
    // ===========================================

    #[test]
    fn insert_creates_category() {
        let mut store = Store::new();
        put(&mut store, "New", "First", "2024-02-02 02:02:02", "x");
        assert!(store.contains_category(&cat("New")));
    }

    #[test]
    fn insert_rejects_duplicate_key() {
        let mut store = sample_store();
        let k = key("Standup", "2024-01-01 09:00:00");
        let note = Note::new("other", ts("2024-01-01 09:00:00"));
        let err = store.insert(cat("Work"), k, note).unwrap_err();
        assert!(matches!(err, StoreError::NoteExists { .. }));
        let kept = store.get(&cat("Work"), &key("Standup", "2024-01-01 09:00:00")).unwrap();
        assert_eq!(kept.content(), "notes");
    }

    #[test]
    fn same_key_in_different_categories_is_allowed() {
        let mut store = sample_store();
        put(&mut store, "Home", "Standup", "2024-01-01 09:00:00", "");
        assert_eq!(store.note_count(), 4);
    }

    #[test]
    fn set_content_keeps_key_and_date() {
        let mut store = sample_store();
        let k = key("Retro", "2024-01-05 16:00:00");
        store.set_content(&cat("Work"), &k, "action items").unwrap();
        let note = store.get(&cat("Work"), &k).unwrap();
        assert_eq!(note.content(), "action items");
        assert_eq!(note.date(), "2024-01-05 16:00:00");
    }

    #[test]
    fn remove_returns_note() {
        let mut store = sample_store();
        let note = store.remove(&cat("Home"), &key("Groceries", "2024-01-03 18:30:00")).unwrap();
        assert_eq!(note.content(), "milk\neggs");
        assert!(store.notes(&cat("Home")).unwrap().is_empty());
    }

    #[test]
    fn remove_missing_note_errors() {
        let mut store = sample_store();
        let err = store.remove(&cat("Home"), &key("Nope", "2024-01-03 18:30:00")).unwrap_err();
        assert!(matches!(err, StoreError::NoteNotFound { .. }));
    }

    // ===========================================
    // Rename on edit
    // ===========================================

    #[test]
    fn rename_note_carries_stamp_and_date() {
        let mut store = sample_store();
        let old = key("Standup", "2024-01-01 09:00:00");
        let new = store.rename_note(&cat("Work"), &old, "Daily standup").unwrap();

        assert_eq!(new.to_string(), "Daily standup (2024-01-01 09:00:00)");
        assert!(store.get(&cat("Work"), &old).is_none());
        let note = store.get(&cat("Work"), &new).unwrap();
        assert_eq!(note.content(), "notes");
        assert_eq!(note.date(), "2024-01-01 09:00:00");
        assert_eq!(store.notes(&cat("Work")).unwrap().len(), 2);
    }

    #[test]
    fn rename_note_to_same_title_is_noop() {
        let mut store = sample_store();
        let old = key("Standup", "2024-01-01 09:00:00");
        let before = store.clone();
        let new = store.rename_note(&cat("Work"), &old, "Standup").unwrap();
        assert_eq!(new, old);
        assert_eq!(store, before);
    }

    #[test]
    fn rename_note_onto_existing_key_errors() {
        let mut store = sample_store();
        let a = put(&mut store, "Work", "A", "2024-01-01 00:00:00", "a");
        let b = put(&mut store, "Work", "B", "2024-01-01 00:00:00", "b");

        let err = store.rename_note(&cat("Work"), &a, "B").unwrap_err();
        assert!(matches!(err, StoreError::NoteExists { .. }));
        assert_eq!(store.get(&cat("Work"), &a).unwrap().content(), "a");
        assert_eq!(store.get(&cat("Work"), &b).unwrap().content(), "b");
    }

    #[test]
    fn rename_legacy_note_onto_stamped_key_text_errors() {
        let mut store = Store::new();
        let stamped = put(&mut store, "Work", "B", "2024-01-01 00:00:00", "stamped");
        let legacy = NoteKey::unstamped("legacy");
        store
            .insert(cat("Work"), legacy.clone(), Note::new("legacy body", ts("2023-01-01 00:00:00")))
            .unwrap();

        let err = store
            .rename_note(&cat("Work"), &legacy, "B (2024-01-01 00:00:00)")
            .unwrap_err();
        assert!(matches!(err, StoreError::NoteExists { .. }));
        assert_eq!(store.note_count(), 2);
        assert_eq!(store.get(&cat("Work"), &stamped).unwrap().content(), "stamped");
        assert_eq!(store.get(&cat("Work"), &legacy).unwrap().content(), "legacy body");
    }

    #[test]
    fn rename_missing_note_errors() {
        let mut store = sample_store();
        let err = store
            .rename_note(&cat("Work"), &key("Ghost", "2024-01-01 00:00:00"), "Ghost")
            .unwrap_err();
        assert!(matches!(err, StoreError::NoteNotFound { .. }));
    }

    // ===========================================
    // Lookup and search
    // ===========================================

    #[test]
    fn find_by_full_key() {
        let store = sample_store();
        let found = store.find(None, "Retro (2024-01-05 16:00:00)");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category.as_str(), "Work");
    }

    #[test]
    fn find_by_title_reports_all_matches() {
        let mut store = sample_store();
        put(&mut store, "Home", "Retro", "2024-02-01 10:00:00", "");

        assert_eq!(store.find(None, "Retro").len(), 2);
        assert_eq!(store.find(Some(&cat("Home")), "Retro").len(), 1);
    }

    #[test]
    fn find_results_outlive_the_category_argument() {
        let store = sample_store();
        let found = {
            let scope = cat("Work");
            store.find(Some(&scope), "Retro")
        };
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].note.content(), "went well");
    }

    #[test]
    fn find_unknown_is_empty() {
        let store = sample_store();
        assert!(store.find(None, "Nothing").is_empty());
    }

    #[test]
    fn search_matches_title_and_content_case_insensitively() {
        let store = sample_store();
        let titles: Vec<_> = store.search("EGGS").iter().map(|r| r.key.title()).collect();
        assert_eq!(titles, vec!["Groceries"]);

        let titles: Vec<_> = store.search("retro").iter().map(|r| r.key.title()).collect();
        assert_eq!(titles, vec!["Retro"]);
    }

    #[test]
    fn search_with_blank_query_is_empty() {
        assert!(sample_store().search("  ").is_empty());
    }

    #[test]
    fn serializes_to_nested_document() {
        let mut store = Store::new();
        put(&mut store, "Home", "Todo", "2024-01-01 00:00:00", "x");
        store.add_category(cat("Empty"));

        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Empty": {},
                "Home": {"Todo (2024-01-01 00:00:00)": {"content": "x", "date": "2024-01-01 00:00:00"}}
            })
        );
    }
}
