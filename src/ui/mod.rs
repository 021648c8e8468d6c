//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for operator input,
//! status output and image display, plus the terminal [`Shell`] built on
//! top of them. The session never talks to the terminal directly.
//!
//! # Core Traits
//!
//! - **`UserInput`** - Line prompts with pre-filled text, list selection
//! - **`OutputWriter`** - Status messages with severity levels
//! - **`ImageViewer`** - Putting the current image on screen
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Shell (intent parsing, rendering)  │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  UserInput / OutputWriter / ImageViewer │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Terminal      │  │ Tests             │
//! │ - Dialoguer   │  │ - MockInput       │
//! │ - Stdout      │  │ - BufferedWriter  │
//! │ - open crate  │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use relabel::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("1-0-0-A.jpeg  -->  1-0-0-X.jpeg");
//! output.warning("Last image");
//! ```

pub mod input;
pub mod output;
pub mod shell;
pub mod viewer;

#[cfg(test)]
pub mod mock;

pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use shell::{Intent, Shell, ShellOptions};
pub use viewer::{ImageViewer, SystemViewer};
