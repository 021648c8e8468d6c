//! Relabel - correct the label embedded in sequentially numbered image names
//!
//! This library walks a folder of images named `<seq>-<a>-<b>-<label>.<ext>`
//! one image at a time, lets an operator type a replacement label, and renames
//! the file in place. Accepted labels are kept in a per-folder history for
//! quick reuse.
//!
//! The core ([`naming`], [`cursor`], [`history`], [`session`]) has no UI
//! dependencies; [`ui`] contains the terminal shell used by the binary.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod cursor;
pub mod history;
pub mod naming;
pub mod output;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RelabelError {
    /// Naming strategy error
    #[error("Naming error: {0}")]
    NamingError(#[from] naming::NamingError),
    /// Label session error
    #[error("{0}")]
    SessionError(#[from] session::SessionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal input error
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
