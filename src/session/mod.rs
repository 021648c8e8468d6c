//! Label session state machine
//!
//! A [`LabelSession`] walks the operator through one folder of images. For
//! the image on screen it keeps the text typed so far and the file name that
//! text would produce; committing renames the file, records the label in the
//! [`HistoryLedger`] and moves on to the next image.
//!
//! # Phases
//!
//! ```text
//!            load_folder
//!   Idle ───────────────→ AwaitingInput ──commit (last image)──→ Exhausted
//!     ↑   (empty folder)     │  ↑    ↑                               │
//!     └──────────────────────┘  │    └───────────go_back─────────────┘
//!                  commit/go_back
//! ```
//!
//! Every operation returns the new [`DisplayState`] so the UI never has to
//! reach into the session to find out what to draw.
//!
//! # Example
//!
//! ```no_run
//! use relabel::naming::SequenceNaming;
//! use relabel::session::{LabelSession, SessionOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = LabelSession::new(SequenceNaming::new()?, SessionOptions::default());
//! session.load_folder("/data/glyphs")?;
//! session.set_pending_label("X");
//! let next = session.commit("X", true)?;
//! println!("{next:?}");
//! # Ok(())
//! # }
//! ```

mod error;
mod state;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cursor::SequenceCursor;
use crate::history::HistoryLedger;
use crate::naming::{NamingStrategy, SequenceNaming};

pub use error::SessionError;
pub use state::{DisplayState, ImageView, LabelState, Phase};

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Characters a label may never contain
const FORBIDDEN_LABEL_CHARS: [char; 3] = ['/', '\\', '\0'];

/// Tunables for a label session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Exact number of characters a typed label must have on submit
    pub submit_length: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { submit_length: 1 }
    }
}

/// Drives labeling of one folder of images
pub struct LabelSession<N: NamingStrategy = SequenceNaming> {
    naming: N,
    options: SessionOptions,
    folder: Option<PathBuf>,
    cursor: SequenceCursor,
    history: HistoryLedger,
    phase: Phase,
    label: Option<LabelState>,
    notice: Option<String>,
}

impl<N: NamingStrategy> LabelSession<N> {
    /// Create an idle session using `naming` for all file name decisions
    #[must_use]
    pub fn new(naming: N, options: SessionOptions) -> Self {
        Self {
            naming,
            options,
            folder: None,
            cursor: SequenceCursor::new(),
            history: HistoryLedger::new(),
            phase: Phase::Idle,
            label: None,
            notice: None,
        }
    }

    /// Load a folder and show its first image
    ///
    /// The ledger is cleared. On error the previously loaded folder stays
    /// loaded and untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Naming` if the folder cannot be listed, or if
    /// the label of the first image cannot be read.
    pub fn load_folder(&mut self, folder: impl AsRef<Path>) -> Result<DisplayState> {
        let folder = folder.as_ref();
        let names = self.naming.list_images(folder)?;

        if let Some(first) = names.first() {
            self.naming.extract_label(first)?;
        }

        tracing::info!(folder = %folder.display(), images = names.len(), "loaded folder");

        self.cursor.load(names.iter().map(|name| folder.join(name)).collect());
        self.folder = Some(folder.to_path_buf());
        self.history.clear();
        Ok(self.show_next())
    }

    /// Store typed text and recompute the target file name
    ///
    /// Does nothing unless an image is on screen.
    pub fn set_pending_label(&mut self, text: &str) -> DisplayState {
        if let Some(state) = self.label.as_mut() {
            let target = self
                .naming
                .compute_renamed(text.trim(), &state.original_filename)
                .unwrap_or_else(|_| state.original_filename.clone());
            state.pending_label = text.to_string();
            state.target_filename = target;
        }
        self.display_state()
    }

    /// Accept `text` as the label of the image on screen and move on
    ///
    /// The label is the trimmed text. When `require_length_check` is set it
    /// must be exactly `submit_length` characters long. The label is recorded
    /// in the ledger only once the rename (if any) has succeeded.
    ///
    /// # Errors
    ///
    /// - `SessionError::NotLoaded` / `SessionError::Exhausted` if no image is
    ///   on screen
    /// - `SessionError::InvalidInput` if the label fails the length or shape
    ///   rule
    /// - `SessionError::Naming` if the file name does not match the pattern
    /// - `SessionError::Rename` if the filesystem rename fails
    pub fn commit(&mut self, text: &str, require_length_check: bool) -> Result<DisplayState> {
        match self.phase {
            Phase::Idle => return Err(SessionError::NotLoaded),
            Phase::Exhausted => return Err(SessionError::Exhausted),
            Phase::AwaitingInput => {}
        }

        let label = text.trim();
        self.validate(label, require_length_check)?;

        let state = self.label.as_ref().ok_or(SessionError::NotLoaded)?;
        let from = self
            .cursor
            .displayed()
            .map(Path::to_path_buf)
            .ok_or(SessionError::NotLoaded)?;
        let target = self.naming.compute_renamed(label, &state.original_filename)?;
        let to = from.with_file_name(&target);

        if target != state.original_filename {
            rename_image(&from, &to)?;
            tracing::info!(from = %state.original_filename, to = %target, "renamed image");
        }

        let count = self.history.record_accepted(label);
        tracing::debug!(label, count, "recorded label");

        let index = self.cursor.position() - 1;
        self.cursor.replace_at(index, to);
        Ok(self.show_next())
    }

    /// Return to the previously shown image
    ///
    /// The label is re-read from the file name on disk; any uncommitted edit
    /// is dropped. From the exhausted phase this re-shows the last image.
    /// Does nothing on the first image.
    pub fn go_back(&mut self) -> DisplayState {
        let moved = match self.phase {
            Phase::AwaitingInput => self.cursor.step_back(),
            Phase::Exhausted => self.cursor.reopen_last(),
            Phase::Idle => false,
        };

        if moved {
            self.show_next()
        } else {
            self.display_state()
        }
    }

    /// Replace the pending text with the label currently on disk
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Naming` if the file name carries no label.
    pub fn undo_to_original_label(&mut self) -> Result<DisplayState> {
        if self.phase != Phase::AwaitingInput {
            return Ok(self.display_state());
        }

        let Some(path) = self.cursor.displayed() else {
            return Ok(self.display_state());
        };
        let label = self.naming.extract_label(&file_name_of(path))?;
        Ok(self.set_pending_label(&label))
    }

    /// Use a label picked from the history
    ///
    /// With `also_advance` the label is committed right away and the length
    /// rule is skipped.
    ///
    /// # Errors
    ///
    /// Same as [`commit`](Self::commit) when `also_advance` is set; never
    /// fails otherwise.
    pub fn accept_from_history(&mut self, label: &str, also_advance: bool) -> Result<DisplayState> {
        let state = self.set_pending_label(label);
        if also_advance {
            self.commit(label, false)
        } else {
            Ok(state)
        }
    }

    /// Current state for rendering
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        match self.phase {
            Phase::Idle => DisplayState::Idle,
            Phase::Exhausted => DisplayState::Exhausted {
                last: self.cursor.images().last().cloned(),
                total: self.cursor.len(),
            },
            Phase::AwaitingInput => match (self.cursor.displayed(), self.label.as_ref()) {
                (Some(path), Some(label)) => DisplayState::Awaiting(ImageView {
                    path: path.to_path_buf(),
                    label: label.clone(),
                    index: self.cursor.position(),
                    total: self.cursor.len(),
                    is_last: self.cursor.is_at_end(),
                    can_go_back: self.cursor.position() > 1,
                    notice: self.notice.clone(),
                }),
                _ => DisplayState::Idle,
            },
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryLedger {
        &self.history
    }

    #[must_use]
    pub const fn cursor(&self) -> &SequenceCursor {
        &self.cursor
    }

    #[must_use]
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    #[must_use]
    pub const fn label_state(&self) -> Option<&LabelState> {
        self.label.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    #[must_use]
    pub const fn naming(&self) -> &N {
        &self.naming
    }

    fn validate(&self, label: &str, require_length_check: bool) -> Result<()> {
        if require_length_check {
            let length = label.chars().count();
            if length != self.options.submit_length {
                return Err(SessionError::invalid_input(
                    label,
                    format!(
                        "expected {} character(s), got {length}",
                        self.options.submit_length
                    ),
                ));
            }
        }

        if label.is_empty() {
            return Err(SessionError::invalid_input(label, "label is empty"));
        }
        if label.contains(FORBIDDEN_LABEL_CHARS) {
            return Err(SessionError::invalid_input(
                label,
                "label may not contain path separators",
            ));
        }
        Ok(())
    }

    /// Show the image at the cursor and step past it
    fn show_next(&mut self) -> DisplayState {
        let Some(path) = self.cursor.current().map(Path::to_path_buf) else {
            self.phase = if self.cursor.is_empty() {
                Phase::Idle
            } else {
                Phase::Exhausted
            };
            self.label = None;
            self.notice = None;
            return self.display_state();
        };
        self.cursor.advance();

        let filename = file_name_of(&path);
        let pending = match self.naming.extract_label(&filename) {
            Ok(label) => {
                self.notice = None;
                label
            }
            Err(e) => {
                tracing::warn!(file = %filename, "{e}");
                self.notice = Some(e.to_string());
                String::new()
            }
        };
        tracing::debug!(file = %filename, label = %pending, "showing image");

        self.label = Some(LabelState {
            target_filename: filename.clone(),
            original_filename: filename,
            pending_label: pending,
        });
        self.phase = Phase::AwaitingInput;
        self.display_state()
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Rename without clobbering an unrelated file
///
/// An existing `to` is only accepted when it is `from` itself, as with a
/// case-only rename on a case-insensitive filesystem.
fn rename_image(from: &Path, to: &Path) -> Result<()> {
    let rename_error = |source| SessionError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if to.exists() && !same_file::is_same_file(from, to).unwrap_or(false) {
        tracing::warn!(to = %to.display(), "refusing to overwrite existing file");
        return Err(rename_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "target file already exists",
        )));
    }

    fs::rename(from, to).map_err(|e| {
        tracing::warn!(from = %from.display(), to = %to.display(), "rename failed: {e}");
        rename_error(e)
    })
}
