//! Naming strategies
//!
//! A naming strategy decides three things about a folder of images:
//!
//! - **Listing**: which files belong to the sequence and in which order
//! - **Extraction**: which part of a file name is the editable label
//! - **Renaming**: how a new label is written back into a file name
//!
//! The three operations are independent, so an alternate strategy can replace
//! any of them without touching [`LabelSession`](crate::session::LabelSession).
//!
//! # Default Strategy
//!
//! [`SequenceNaming`] expects `<seq>-<a>-<b>-<label>.<ext>`, where `<seq>`,
//! `<a>` and `<b>` are digit runs. `<seq>` only drives sort order.
//!
//! ```
//! use relabel::naming::{NamingStrategy, SequenceNaming};
//!
//! let naming = SequenceNaming::new().unwrap();
//! assert_eq!(naming.extract_label("7-3-1-A.jpeg").unwrap(), "A");
//! assert_eq!(naming.compute_renamed("B", "7-3-1-A.jpeg").unwrap(), "7-3-1-B.jpeg");
//! ```

mod error;
mod sequence;

use std::path::Path;

pub use error::NamingError;
pub use sequence::{OrderKey, SequenceNaming};

/// Result type for naming operations
pub type Result<T> = std::result::Result<T, NamingError>;

/// Pluggable file naming behaviour
pub trait NamingStrategy {
    /// List the image file names in `folder` in traversal order
    ///
    /// Returns bare file names, not paths.
    ///
    /// # Errors
    ///
    /// Returns a listing error if the folder cannot be read or if an entry
    /// cannot be ordered.
    fn list_images(&self, folder: &Path) -> Result<Vec<String>>;

    /// Extract the label segment from a file name
    ///
    /// # Errors
    ///
    /// Returns `NamingError::Parse` if the file name does not match the
    /// expected shape.
    fn extract_label(&self, filename: &str) -> Result<String>;

    /// Compute the file name obtained by writing `label` into `original`
    ///
    /// # Errors
    ///
    /// Returns `NamingError::PatternMismatch` if `original` does not match the
    /// expected shape.
    fn compute_renamed(&self, label: &str, original: &str) -> Result<String>;
}

impl<N: NamingStrategy + ?Sized> NamingStrategy for Box<N> {
    fn list_images(&self, folder: &Path) -> Result<Vec<String>> {
        (**self).list_images(folder)
    }

    fn extract_label(&self, filename: &str) -> Result<String> {
        (**self).extract_label(filename)
    }

    fn compute_renamed(&self, label: &str, original: &str) -> Result<String> {
        (**self).compute_renamed(label, original)
    }
}
