use std::path::PathBuf;

use thiserror::Error;

use crate::naming::NamingError;

/// Errors returned by label session operations
///
/// Every variant leaves the session, its ledger and the files on disk exactly
/// as they were before the failing call.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Listing, label extraction or file name computation failed
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// Submitted text failed the length or shape rule
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// The filesystem rename failed
    #[error("Rename failed: {} -> {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every image has already been labeled
    #[error("No images left; go back to edit the last one")]
    Exhausted,

    /// No folder is loaded or the folder is empty
    #[error("No image is loaded")]
    NotLoaded,
}

impl SessionError {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
