use thiserror::Error;

/// Errors produced by a naming strategy
#[derive(Debug, Error)]
pub enum NamingError {
    /// Folder could not be read
    #[error("Cannot list folder '{folder}': {source}")]
    FolderUnreadable {
        folder: String,
        #[source]
        source: std::io::Error,
    },
    /// A folder entry has no ordering key
    #[error("Cannot determine order of '{filename}': no leading number before '-'")]
    Unorderable { filename: String },
    /// A folder entry name is not valid UTF-8
    #[error("File name is not valid UTF-8: {name}")]
    NonUtf8Name { name: String },
    /// The label could not be extracted from a file name
    #[error("Cannot read label from '{filename}': expected <seq>-<a>-<b>-<label>.<ext>")]
    Parse { filename: String },
    /// The file name does not have the shape required for renaming
    #[error("Cannot rename '{filename}': expected <seq>-<a>-<b>-<label>.<ext>")]
    PatternMismatch { filename: String },
    /// A user-supplied pattern failed to compile
    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

impl NamingError {
    /// Whether the error belongs to the listing stage (fatal to a folder load)
    #[must_use]
    pub const fn is_listing(&self) -> bool {
        matches!(
            self,
            Self::FolderUnreadable { .. } | Self::Unorderable { .. } | Self::NonUtf8Name { .. }
        )
    }

    #[must_use]
    pub fn regex_compile(pattern: &str, reason: &str) -> Self {
        Self::InvalidRegex {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}
