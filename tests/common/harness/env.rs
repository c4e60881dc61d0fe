//! Isolated test environment with temp directory.

use super::{NotepadCommand, TestNote};
use notepad::domain::Category;
use notepad::store::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes file.
///
/// The notes file lives in a temp directory that is cleaned up on drop.
/// Commands run with config and data directories pointed inside it, so
/// a real user config never leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    /// Path to the notes file
    notes_file: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The notes file does not exist until a note is added or a command
    /// writes it.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_file = temp_dir.path().join("notes.json");
        Self {
            temp_dir,
            notes_file,
        }
    }

    /// Returns the temp directory root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns the path to the notes file.
    pub fn notes_file(&self) -> &Path {
        &self.notes_file
    }

    /// Adds a test note to the notes file through the library.
    pub fn add_note(&self, test_note: &TestNote) {
        let mut store = self.open_store();
        store
            .update(|s| {
                s.insert(test_note.get_category().clone(), test_note.key(), test_note.to_note())
            })
            .expect("Failed to add test note");
    }

    /// Loads the notes file as the CLI would.
    pub fn open_store(&self) -> NoteStore {
        let general = Category::new("General").expect("Invalid category");
        NoteStore::open(&self.notes_file, &general).expect("Failed to open notes file")
    }

    /// Overwrites the notes file with raw text.
    pub fn write_raw(&self, content: &str) {
        std::fs::write(&self.notes_file, content).expect("Failed to write notes file");
    }

    /// Reads the notes file as raw text.
    pub fn read_raw(&self) -> String {
        std::fs::read_to_string(&self.notes_file).expect("Failed to read notes file")
    }

    /// Reads the notes file as JSON.
    pub fn read_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_raw()).expect("Notes file is not valid JSON")
    }

    /// Writes a file under the temp directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a NotepadCommand configured for this test environment.
    pub fn cmd(&self) -> NotepadCommand {
        self.cmd_without_file().file(&self.notes_file)
    }

    /// Like [`TestEnv::cmd`] but without `--file`, so the config file or
    /// the data directory decides where notes live.
    pub fn cmd_without_file(&self) -> NotepadCommand {
        NotepadCommand::new()
            .env("XDG_CONFIG_HOME", self.config_dir())
            .env("XDG_DATA_HOME", self.root().join("data"))
            .env("HOME", self.root())
            .env("EDITOR", "true")
            .env_remove("VISUAL")
            .env_remove("RUST_LOG")
    }

    /// Returns the directory commands read `notepad/config.toml` from.
    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }

    /// Writes `notepad/config.toml` for commands in this environment.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        let dir = self.config_dir().join("notepad");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, toml).expect("Failed to write config");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_starts_without_notes_file() {
        let env = TestEnv::new();
        assert!(!env.notes_file().exists());
        assert_eq!(env.open_store().store().note_count(), 0);
    }

    #[test]
    fn test_env_add_note_persists() {
        let env = TestEnv::new();
        let note = TestNote::new("Persisted").category("Work").content("body");
        env.add_note(&note);

        let store = env.open_store();
        let saved = store.store().get(note.get_category(), &note.key()).unwrap();
        assert_eq!(saved.content(), "body");
        assert_eq!(
            env.read_json()["Work"]["Persisted (2024-01-15 10:30:00)"]["date"],
            "2024-01-15 10:30:00"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--file");
        assert_eq!(args[1], env.notes_file().to_string_lossy());
    }
}
