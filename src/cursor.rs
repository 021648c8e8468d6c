//! Ordered image sequence with a traversal position
//!
//! The position is the index of the next image to show, so once an image is
//! on screen the position points one past it. `0` means nothing has been
//! shown yet and `len()` means every image has been consumed.
//!
//! ```text
//! images:    [a]  [b]  [c]
//! position: 0    1    2    3
//!                ^ showing a, current() == b
//! ```

use std::path::{Path, PathBuf};

/// Image sequence plus traversal position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceCursor {
    images: Vec<PathBuf>,
    position: usize,
}

impl SequenceCursor {
    /// Create an empty cursor
    #[must_use]
    pub const fn new() -> Self {
        Self {
            images: Vec::new(),
            position: 0,
        }
    }

    /// Replace the sequence and rewind to the start
    pub fn load(&mut self, images: Vec<PathBuf>) {
        self.images = images;
        self.position = 0;
    }

    /// Image at the position, if any remain
    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.images.get(self.position).map(PathBuf::as_path)
    }

    /// Image one step behind the position (the one on screen)
    #[must_use]
    pub fn displayed(&self) -> Option<&Path> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.images.get(index))
            .map(PathBuf::as_path)
    }

    /// Move forward one image
    ///
    /// Returns `false` and does nothing when already at the end.
    pub fn advance(&mut self) -> bool {
        if self.position < self.images.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Rewind so the next advance re-shows the previously displayed image
    ///
    /// Moves the position back by two; the caller then goes through the
    /// regular show-and-advance path. Rejected at `position <= 1`, where
    /// there is no earlier image to return to.
    pub fn step_back(&mut self) -> bool {
        if self.position > 1 {
            self.position -= 2;
            true
        } else {
            false
        }
    }

    /// Rewind from the end so the next advance re-shows the last image
    ///
    /// Only valid when every image has been consumed.
    pub fn reopen_last(&mut self) -> bool {
        if self.is_at_end() && !self.images.is_empty() {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Swap the entry at `index` for `path`, keeping position and order
    ///
    /// Returns `false` if `index` is out of range.
    pub fn replace_at(&mut self, index: usize, path: PathBuf) -> bool {
        match self.images.get_mut(index) {
            Some(slot) => {
                *slot = path;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether every image has been consumed
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position == self.images.len()
    }

    #[must_use]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(count: usize) -> SequenceCursor {
        let mut cursor = SequenceCursor::new();
        cursor.load((1..=count).map(|i| PathBuf::from(format!("/img/{i}-0-0-x.jpeg"))).collect());
        cursor
    }

    #[test]
    fn test_load_resets_position() {
        let mut cursor = cursor(3);
        cursor.advance();
        cursor.advance();
        cursor.load(vec![PathBuf::from("/other/1-0-0-a.jpeg")]);

        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.len(), 1);
        assert_eq!(cursor.current(), Some(Path::new("/other/1-0-0-a.jpeg")));
    }

    #[test]
    fn test_advance_visits_every_image_once() {
        let mut cursor = cursor(3);
        let mut visited = Vec::new();
        while let Some(path) = cursor.current() {
            visited.push(path.to_path_buf());
            assert!(cursor.advance());
        }

        assert_eq!(visited, cursor.images());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_is_noop_at_end() {
        let mut cursor = cursor(2);
        assert!(cursor.advance());
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), 2);
        assert!(cursor.current().is_none());
    }

    #[test]
    fn test_step_back_rejected_at_low_positions() {
        let mut cursor = cursor(3);
        assert!(!cursor.step_back());
        assert_eq!(cursor.position(), 0);

        cursor.advance();
        assert!(!cursor.step_back());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_step_back_then_advance_reshows_previous() {
        let mut cursor = cursor(3);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.displayed(), Some(Path::new("/img/2-0-0-x.jpeg")));

        assert!(cursor.step_back());
        assert_eq!(cursor.current(), Some(Path::new("/img/1-0-0-x.jpeg")));
        cursor.advance();
        assert_eq!(cursor.displayed(), Some(Path::new("/img/1-0-0-x.jpeg")));
    }

    #[test]
    fn test_reopen_last_only_at_end() {
        let mut cursor = cursor(2);
        assert!(!cursor.reopen_last());

        cursor.advance();
        cursor.advance();
        assert!(cursor.reopen_last());
        assert_eq!(cursor.current(), Some(Path::new("/img/2-0-0-x.jpeg")));
    }

    #[test]
    fn test_reopen_last_on_empty_sequence() {
        let mut cursor = SequenceCursor::new();
        assert!(cursor.is_at_end());
        assert!(!cursor.reopen_last());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_replace_at_keeps_order_and_position() {
        let mut cursor = cursor(3);
        cursor.advance();
        cursor.advance();

        assert!(cursor.replace_at(0, PathBuf::from("/img/1-0-0-y.jpeg")));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.images()[0], PathBuf::from("/img/1-0-0-y.jpeg"));
        assert_eq!(cursor.images()[1], PathBuf::from("/img/2-0-0-x.jpeg"));

        assert!(!cursor.replace_at(3, PathBuf::from("/img/nope.jpeg")));
    }

    #[test]
    fn test_position_stays_in_bounds() {
        let mut cursor = cursor(2);
        for step in 0..20 {
            if step % 3 == 0 {
                cursor.step_back();
            } else {
                cursor.advance();
            }
            assert!(cursor.position() <= cursor.len());
        }
    }
}
