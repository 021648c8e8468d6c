//! User input abstraction layer
//!
//! This module provides a backend-agnostic interface for reading operator
//! input, so the shell can be driven by dialoguer in a terminal or by a
//! scripted mock in tests.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use relabel::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// // Prompt with the current label pre-filled
/// if let Some(line) = input.read_line("[1/20] 1-0-0-A.jpeg", "A").unwrap() {
///     println!("typed {line}");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Read one line of input
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `initial` - Editable text placed in the input before the user types
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered a line
    /// * `Ok(None)` - Input ended (EOF or interrupt)
    /// * `Err(_)` - Input operation failed
    fn read_line(&self, prompt: &str, initial: &str) -> Result<Option<String>>;

    /// Prompt user to select from a list
    ///
    /// # Returns
    ///
    /// * `Ok(Some(usize))` - Index of selected item
    /// * `Ok(None)` - User cancelled (ESC)
    /// * `Err(_)` - Input operation failed
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Treat end of input as a regular way to stop
fn end_of_input<T>(error: dialoguer::Error) -> Result<Option<T>> {
    let dialoguer::Error::IO(e) = error;
    match e.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => Ok(None),
        _ => Err(InputError::Io(e)),
    }
}

impl UserInput for DialoguerInput {
    fn read_line(&self, prompt: &str, initial: &str) -> Result<Option<String>> {
        use dialoguer::Input;

        match Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(e) => end_of_input(e),
        }
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        use dialoguer::Select;

        match Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
        {
            Ok(choice) => Ok(choice),
            Err(e) => end_of_input(e),
        }
    }
}
