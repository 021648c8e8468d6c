//! Image display hand-off
//!
//! The shell does not decode images itself; it asks an [`ImageViewer`] to put
//! the current image in front of the operator.

use std::io;
use std::path::Path;

/// Something that can display an image file
pub trait ImageViewer: Send + Sync {
    /// Show the image at `path`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the viewer cannot be launched.
    fn show(&self, path: &Path) -> io::Result<()>;
}

/// Opens images in the operating system's default viewer
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl ImageViewer for SystemViewer {
    fn show(&self, path: &Path) -> io::Result<()> {
        open::that_detached(path)
    }
}
