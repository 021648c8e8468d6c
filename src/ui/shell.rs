//! Line-oriented terminal shell around a [`LabelSession`]
//!
//! Each prompt shows the image on screen with its label pre-filled. Plain
//! text is typed and submitted in one go; lines starting with `:` are
//! commands. The shell owns no labeling logic of its own: every intent maps
//! to one session call and the returned state is rendered.
//!
//! # Workflow
//!
//! ```text
//! prompt (label pre-filled)
//!     ↓
//! Intent::parse(line)
//!     ├─ text / empty → set_pending_label + commit
//!     ├─ :b / :u      → go_back / undo_to_original_label
//!     ├─ :N / :h      → accept_from_history(label, true)
//!     ├─ :p N / :t X  → accept_from_history(label, false) / set_pending_label
//!     └─ :o PATH      → load_folder
//!     ↓
//! render returned DisplayState → prompt
//! ```

use std::path::PathBuf;

use crate::naming::NamingStrategy;
use crate::output;
use crate::session::{DisplayState, LabelSession, SessionError};

use super::input::{InputError, Result, UserInput};
use super::output::OutputWriter;
use super::viewer::ImageViewer;

/// Command reference shown by `:help`
pub const KEY_HELP: [(&str, &str); 13] = [
    ("TEXT", "Replace the label and move to the next image"),
    ("Enter", "Keep the pre-filled label and move on"),
    ("\\TEXT", "Submit TEXT literally (for labels starting with ':' or '\\')"),
    (":b  :back", "Go back to the previous image"),
    (":u  :undo", "Restore the label currently stored in the file name"),
    (":h  :history", "Pick a previous label from a list and move on"),
    (":l  :list", "Show the labels accepted so far"),
    (":N  :use N", "Use history entry N and move on"),
    (":p N  :peek N", "Put history entry N in the input without moving"),
    (":t X  :type X", "Preview the file name for X without submitting"),
    (":o P  :open P", "Open another image folder"),
    (":?  :help", "Show this help"),
    (":q  :quit", "Quit"),
];

/// One operator intent parsed from an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Type `text` (if any) then submit the pending label
    Submit(Option<String>),
    /// Type `text` without submitting
    Type(String),
    Back,
    Undo,
    /// Choose from the history interactively and submit
    History,
    /// Print the history
    ListHistory,
    /// Load a history entry into the input by rank
    Peek(usize),
    /// Submit a history entry by rank
    Use(usize),
    Open(PathBuf),
    Help,
    Quit,
}

impl Intent {
    /// Parse one input line
    ///
    /// # Errors
    ///
    /// Returns `InputError::Invalid` for unknown commands or missing arguments.
    pub fn parse(line: &str) -> Result<Self> {
        if line.trim().is_empty() {
            return Ok(Self::Submit(None));
        }
        if let Some(literal) = line.strip_prefix('\\') {
            return Ok(Self::Submit(Some(literal.to_string())));
        }
        let Some(command) = line.trim().strip_prefix(':') else {
            return Ok(Self::Submit(Some(line.to_string())));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        if let Ok(rank) = name.parse::<usize>() {
            return Ok(Self::Use(rank));
        }

        match name {
            "b" | "back" => Ok(Self::Back),
            "u" | "undo" => Ok(Self::Undo),
            "h" | "history" => Ok(Self::History),
            "l" | "list" => Ok(Self::ListHistory),
            "p" | "peek" => parse_rank(name, arg).map(Self::Peek),
            "use" => parse_rank(name, arg).map(Self::Use),
            "t" | "type" => Ok(Self::Type(arg.to_string())),
            "o" | "open" if !arg.is_empty() => Ok(Self::Open(PathBuf::from(arg))),
            "o" | "open" => Err(InputError::Invalid(format!(":{name} needs a folder path"))),
            "?" | "help" => Ok(Self::Help),
            "q" | "quit" => Ok(Self::Quit),
            _ => Err(InputError::Invalid(format!(
                "Unknown command ':{name}'. Type :help for a list of commands"
            ))),
        }
    }
}

fn parse_rank(name: &str, arg: &str) -> Result<usize> {
    arg.parse()
        .map_err(|_| InputError::Invalid(format!(":{name} needs a history number, got '{arg}'")))
}

/// Shell settings that belong to the terminal, not the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    /// Longest label line accepted from the keyboard
    pub input_length: usize,
    /// Suppress informational messages
    pub quiet: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            input_length: 4,
            quiet: false,
        }
    }
}

/// Interactive loop driving one label session
pub struct Shell<'a, N: NamingStrategy> {
    session: LabelSession<N>,
    input: &'a dyn UserInput,
    output: &'a dyn OutputWriter,
    viewer: Option<&'a dyn ImageViewer>,
    options: ShellOptions,
}

impl<'a, N: NamingStrategy> Shell<'a, N> {
    #[must_use]
    pub fn new(
        session: LabelSession<N>,
        input: &'a dyn UserInput,
        output: &'a dyn OutputWriter,
        options: ShellOptions,
    ) -> Self {
        Self {
            session,
            input,
            output,
            viewer: None,
            options,
        }
    }

    /// Show every newly displayed image with `viewer`
    #[must_use]
    pub fn with_viewer(mut self, viewer: &'a dyn ImageViewer) -> Self {
        self.viewer = Some(viewer);
        self
    }

    #[must_use]
    pub const fn session(&self) -> &LabelSession<N> {
        &self.session
    }

    /// Consume the shell, returning the session
    #[must_use]
    pub fn into_session(self) -> LabelSession<N> {
        self.session
    }

    /// Prompt until the operator quits or input ends
    ///
    /// Session errors are reported and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns `InputError` only if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        let state = self.session.display_state();
        self.announce(&state);

        loop {
            let state = self.session.display_state();
            let (prompt, initial) = prompt_for(&state);

            let Some(line) = self.input.read_line(&prompt, &initial)? else {
                break;
            };

            let intent = match Intent::parse(&line) {
                Ok(intent) => intent,
                Err(e) => {
                    self.output.error(&e.to_string());
                    continue;
                }
            };

            if intent == Intent::Quit {
                break;
            }
            self.handle(intent)?;
        }
        Ok(())
    }

    /// Execute one intent
    ///
    /// # Errors
    ///
    /// Returns `InputError` if a follow-up prompt (history selection) fails.
    pub fn handle(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Submit(text) => {
                if let Some(text) = text {
                    if text.trim().chars().count() > self.options.input_length {
                        self.output.error(&format!(
                            "Input longer than {} character(s)",
                            self.options.input_length
                        ));
                        return Ok(());
                    }
                    self.session.set_pending_label(&text);
                }
                let pending = self
                    .session
                    .label_state()
                    .map(|state| state.pending_label.clone())
                    .unwrap_or_default();
                self.submit(&pending, false);
            }
            Intent::Type(text) => {
                let state = self.session.set_pending_label(&text);
                self.output.write(&output::state_line(&state));
            }
            Intent::Back => {
                let before = self.session.display_state();
                let state = self.session.go_back();
                if state == before {
                    self.output.warning("Already at the first image");
                } else {
                    self.announce(&state);
                }
            }
            Intent::Undo => match self.session.undo_to_original_label() {
                Ok(state) => self.output.write(&output::state_line(&state)),
                Err(e) => self.report(&e),
            },
            Intent::History => self.pick_from_history()?,
            Intent::ListHistory => self.list_history(),
            Intent::Peek(rank) => {
                if let Some(label) = self.history_label(rank) {
                    match self.session.accept_from_history(&label, false) {
                        Ok(state) => self.output.write(&output::state_line(&state)),
                        Err(e) => self.report(&e),
                    }
                }
            }
            Intent::Use(rank) => {
                if let Some(label) = self.history_label(rank) {
                    self.submit(&label, true);
                }
            }
            Intent::Open(folder) => match self.session.load_folder(&folder) {
                Ok(state) => {
                    self.info(&format!(
                        "Opened {} ({} image(s))",
                        folder.display(),
                        self.session.cursor().len()
                    ));
                    self.announce(&state);
                }
                Err(e) => self.report(&e),
            },
            Intent::Help => {
                for (keys, description) in KEY_HELP {
                    self.output.write(&format!("  {keys:<16}{description}"));
                }
            }
            Intent::Quit => {}
        }
        Ok(())
    }

    /// Commit `label` for the image on screen and report the rename
    ///
    /// History labels skip the length rule.
    fn submit(&mut self, label: &str, from_history: bool) {
        let planned = self
            .session
            .set_pending_label(label)
            .view()
            .filter(|view| view.label.renames())
            .map(|view| (view.label.original_filename.clone(), view.label.target_filename.clone()));

        let result = if from_history {
            self.session.accept_from_history(label, true)
        } else {
            self.session.commit(label, true)
        };

        match result {
            Ok(state) => {
                if let Some((from, to)) = planned {
                    self.output.success(&output::rename_line(&from, &to));
                }
                self.announce(&state);
            }
            Err(e) => self.report(&e),
        }
    }

    fn pick_from_history(&mut self) -> Result<()> {
        let entries = self.session.history().entries();
        if entries.is_empty() {
            self.output.warning("No labels accepted yet");
            return Ok(());
        }

        let items: Vec<String> = entries.iter().map(ToString::to_string).collect();
        let Some(index) = self.input.select("Use label", &items)? else {
            return Ok(());
        };
        let Some(label) = self
            .session
            .history()
            .entries()
            .get(index)
            .map(|entry| entry.label.clone())
        else {
            return Ok(());
        };

        self.submit(&label, true);
        Ok(())
    }

    fn list_history(&self) {
        let history = self.session.history();
        if history.is_empty() {
            self.info("No labels accepted yet");
            return;
        }
        for entry in history.entries() {
            self.output.write(&output::history_entry(entry, self.options.quiet));
        }
    }

    fn history_label(&self, rank: usize) -> Option<String> {
        let label = self
            .session
            .history()
            .entry_by_rank(rank)
            .map(|entry| entry.label.clone());
        if label.is_none() {
            self.output.error(&format!("No history entry {rank}"));
        }
        label
    }

    /// Report the state after navigation
    fn announce(&self, state: &DisplayState) {
        match state {
            DisplayState::Idle => {
                if self.session.folder().is_some() {
                    self.output.warning("The folder has no images");
                } else {
                    self.info("Open a folder with :o <path>");
                }
            }
            DisplayState::Awaiting(view) => {
                if let Some(notice) = &view.notice {
                    self.output.warning(notice);
                }
                if view.is_last {
                    self.info("Last image");
                }
                if let Some(viewer) = self.viewer
                    && let Err(e) = viewer.show(&view.path)
                {
                    self.output.warning(&format!("Could not open image viewer: {e}"));
                }
            }
            DisplayState::Exhausted { .. } => {
                self.output.success("All images labeled; :b goes back to the last one");
            }
        }
    }

    fn report(&self, error: &SessionError) {
        self.output.error(&error.to_string());
    }

    fn info(&self, message: &str) {
        if !self.options.quiet {
            self.output.info(message);
        }
    }
}

/// Prompt text and pre-filled input for a state
fn prompt_for(state: &DisplayState) -> (String, String) {
    match state {
        DisplayState::Awaiting(view) => (output::image_line(view), view.label.pending_label.clone()),
        other => (output::state_line(other), String::new()),
    }
}
