//! Testing utilities for relabel
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

/// Temporary folder pre-populated with image files
///
/// The folder and everything in it is removed when the fixture is dropped.
///
/// # Examples
/// ```ignore
/// let folder = ImageFolder::with_images(&["1-0-0-A.jpeg", "2-0-0-B.jpeg"]);
/// assert!(folder.contains("1-0-0-A.jpeg"));
/// ```
pub struct ImageFolder {
    dir: TempDir,
}

impl ImageFolder {
    /// Create a folder holding one small file per name
    ///
    /// # Panics
    /// Panics if the folder or any file cannot be created.
    pub fn with_images(names: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp folder");
        let folder = Self { dir };
        for name in names {
            folder.add(name);
        }
        folder
    }

    /// Add one more file
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn add(&self, name: &str) {
        let mut file = fs::File::create(self.dir.path().join(name)).expect("Failed to create image");
        file.write_all(b"fake image data").expect("Failed to write image");
    }

    /// Delete a file behind the session's back
    ///
    /// # Panics
    /// Panics if the file does not exist.
    pub fn remove(&self, name: &str) {
        fs::remove_file(self.dir.path().join(name)).expect("Failed to remove image");
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Whether a file with exactly this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.dir.path().join(name).is_file()
    }

    /// Sorted file names currently on disk
    ///
    /// # Panics
    /// Panics if the folder cannot be read.
    #[must_use]
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("Failed to read temp folder")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_folder_lifecycle() {
        let path = {
            let folder = ImageFolder::with_images(&["1-0-0-A.jpeg"]);
            folder.add("2-0-0-B.jpeg");
            assert_eq!(folder.file_names(), vec!["1-0-0-A.jpeg", "2-0-0-B.jpeg"]);

            folder.remove("1-0-0-A.jpeg");
            assert!(!folder.contains("1-0-0-A.jpeg"));
            folder.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
