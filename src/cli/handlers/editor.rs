//! Editing a note in an external editor, auto-saving while it is open.
//!
//! The note is written to a scratch file as its title, a blank line, then
//! the content. While the editor runs, the scratch file is read back into
//! the session and auto-saved on every timer tick; a final save happens
//! when the editor exits. Changing the first line renames the note.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Child, Command};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::cli::config::Config;
use crate::domain::NoteKey;
use crate::session::{AutoSaveTimer, EditBuffer, Session};

/// How often the editor process is checked for exit.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// A running editor process.
pub(crate) trait RunningEditor {
    /// Returns `Some(success)` once the editor has exited.
    fn try_wait(&mut self) -> Result<Option<bool>>;
}

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn launch(&self, path: &Path) -> Result<Box<dyn RunningEditor>>;
}

impl RunningEditor for Child {
    fn try_wait(&mut self) -> Result<Option<bool>> {
        let status = Child::try_wait(self).with_context(|| "failed to check editor status")?;
        Ok(status.map(|s| s.success()))
    }
}

/// Launches the editor configured by the user.
pub(crate) struct SystemEditor<'a>(pub &'a Config);

impl EditorLauncher for SystemEditor<'_> {
    fn launch(&self, path: &Path) -> Result<Box<dyn RunningEditor>> {
        let editor = self.0.editor();

        // Parse editor command (may include args like "code --wait")
        let parts: Vec<&str> = editor.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            bail!("editor command is empty");
        };

        let child = Command::new(cmd)
            .args(args)
            .arg(path)
            .spawn()
            .with_context(|| format!("failed to launch editor '{}'", editor))?;

        Ok(Box::new(child))
    }
}

/// Result of an editor session.
#[derive(Debug)]
pub(crate) struct EditOutcome {
    pub key: NoteKey,
    pub autosaves: usize,
}

/// Renders the buffer as scratch-file text.
pub(crate) fn render_scratch(buffer: &EditBuffer) -> String {
    format!("{}\n\n{}\n", buffer.title, buffer.content)
}

/// Parses scratch-file text back into a buffer.
///
/// The first line is the title. One blank line after it is a separator;
/// trailing whitespace of the content is dropped.
pub(crate) fn parse_scratch(text: &str) -> EditBuffer {
    let (title, rest) = text.split_once('\n').unwrap_or((text, ""));
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);

    EditBuffer {
        title: title.trim().to_string(),
        content: rest.trim_end().to_string(),
    }
}

fn load_scratch(session: &mut Session, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let buffer = parse_scratch(&text);
    session.set_title(buffer.title);
    session.set_content(buffer.content);
    Ok(())
}

/// Runs the editor on the session's buffer until it exits.
///
/// Every `interval` the scratch file is loaded and [`Session::autosave`]
/// runs; a failed auto-save is logged and editing continues. When the
/// editor exits successfully the buffer is saved one last time.
///
/// # Errors
///
/// Fails if the editor cannot be launched, exits with a non-zero status
/// (auto-saved changes stay saved), or the final save fails.
pub(crate) fn edit_with_autosave<E: EditorLauncher + ?Sized>(
    session: &mut Session,
    editor: &E,
    interval: Duration,
) -> Result<EditOutcome> {
    let scratch = tempfile::Builder::new()
        .prefix("notepad-")
        .suffix(".txt")
        .tempfile()
        .with_context(|| "failed to create scratch file")?;
    std::fs::write(scratch.path(), render_scratch(session.buffer()))
        .with_context(|| "failed to write scratch file")?;

    let mut running = editor.launch(scratch.path())?;
    let mut timer = AutoSaveTimer::new(interval, Instant::now());
    let mut autosaves = 0;

    loop {
        if let Some(success) = running.try_wait()? {
            if !success {
                bail!("editor exited with non-zero status; unsaved changes were discarded");
            }
            break;
        }

        if timer.poll(Instant::now()) {
            let saved = load_scratch(session, scratch.path())
                .and_then(|()| session.autosave().map_err(Into::into));
            match saved {
                Ok(Some(key)) => {
                    autosaves += 1;
                    debug!(%key, autosaves, "auto-save tick");
                }
                Ok(None) => {}
                Err(err) => warn!("auto-save skipped: {err:#}"),
            }
        }

        let wait = POLL_INTERVAL.min(timer.remaining(Instant::now()));
        std::thread::sleep(wait.max(Duration::from_millis(1)));
    }

    load_scratch(session, scratch.path())?;
    let key = session.save().with_context(|| "failed to save note")?;
    Ok(EditOutcome { key, autosaves })
}
