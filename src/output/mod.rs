//! Output formatting for CLI display
//!
//! Turns session state into the lines the terminal shell prints.

use crate::history::HistoryEntry;
use crate::session::{DisplayState, ImageView};
use colored::Colorize;
use std::path::Path;

/// `[index/total]` progress marker
#[must_use]
pub fn progress(index: usize, total: usize) -> String {
    format!("[{index}/{total}]")
}

/// One-line summary of the image on screen
///
/// Shows the pending target name next to the current one when they differ.
#[must_use]
pub fn image_line(view: &ImageView) -> String {
    let marker = progress(view.index, view.total).dimmed();
    let label = &view.label;

    if label.renames() {
        format!(
            "{marker} {} -> {}",
            label.original_filename,
            label.target_filename.green()
        )
    } else {
        format!("{marker} {}", label.original_filename.bold())
    }
}

/// Summary of any display state
#[must_use]
pub fn state_line(state: &DisplayState) -> String {
    match state {
        DisplayState::Idle => "No images loaded".to_string(),
        DisplayState::Awaiting(view) => image_line(view),
        DisplayState::Exhausted { last, total } => {
            let last = last
                .as_deref()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{} All {total} image(s) done (last: {last})", progress(*total, *total).dimmed())
        }
    }
}

/// Format a history entry with its usage count
#[must_use]
pub fn history_entry(entry: &HistoryEntry, quiet: bool) -> String {
    if quiet {
        entry.to_string()
    } else {
        format!("  {entry} (used {} time(s))", entry.count)
    }
}

/// Describe a completed rename
#[must_use]
pub fn rename_line(from: &str, to: &str) -> String {
    format!("{from}  -->  {to}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::LabelState;
    use std::path::PathBuf;

    fn view(original: &str, target: &str) -> ImageView {
        ImageView {
            path: PathBuf::from("/imgs").join(original),
            label: LabelState {
                original_filename: original.to_string(),
                pending_label: String::new(),
                target_filename: target.to_string(),
            },
            index: 2,
            total: 5,
            is_last: false,
            can_go_back: true,
            notice: None,
        }
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(3, 10), "[3/10]");
    }

    #[test]
    fn test_image_line_unchanged() {
        let line = image_line(&view("2-0-0-B.jpeg", "2-0-0-B.jpeg"));
        assert!(line.contains("[2/5]"));
        assert!(line.contains("2-0-0-B.jpeg"));
        assert!(!line.contains("->"));
    }

    #[test]
    fn test_image_line_pending_rename() {
        let line = image_line(&view("2-0-0-B.jpeg", "2-0-0-X.jpeg"));
        assert!(line.contains("2-0-0-B.jpeg -> "));
        assert!(line.contains("2-0-0-X.jpeg"));
    }

    #[test]
    fn test_state_line_exhausted() {
        let state = DisplayState::Exhausted {
            last: Some(PathBuf::from("/imgs/3-0-0-C.jpeg")),
            total: 3,
        };
        let line = state_line(&state);
        assert!(line.contains("All 3 image(s) done"));
        assert!(line.contains("3-0-0-C.jpeg"));
    }

    #[test]
    fn test_history_entry() {
        let entry = HistoryEntry {
            label: "X".into(),
            count: 3,
            rank: 2,
        };
        assert_eq!(history_entry(&entry, true), "2 - X");
        assert_eq!(history_entry(&entry, false), "  2 - X (used 3 time(s))");
    }

    #[test]
    fn test_rename_line() {
        assert_eq!(rename_line("a.jpeg", "b.jpeg"), "a.jpeg  -->  b.jpeg");
    }
}
