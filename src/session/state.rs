//! Values the session hands back to the UI after every operation

use std::path::PathBuf;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No folder loaded, or the loaded folder has no images
    Idle,
    /// An image is on screen and may be edited
    AwaitingInput,
    /// Every image has been consumed; only going back is meaningful
    Exhausted,
}

/// Edit state of the image on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelState {
    /// File name the image had when it was shown
    pub original_filename: String,
    /// Raw text as typed
    pub pending_label: String,
    /// File name the image would get if the pending label were committed
    pub target_filename: String,
}

impl LabelState {
    /// Whether committing the pending label would rename the file
    #[must_use]
    pub fn renames(&self) -> bool {
        self.original_filename != self.target_filename
    }
}

/// Everything the UI needs to render the image on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub path: PathBuf,
    pub label: LabelState,
    /// 1-based index of the image in the sequence
    pub index: usize,
    pub total: usize,
    pub is_last: bool,
    pub can_go_back: bool,
    /// Set when the label could not be read from the file name
    pub notice: Option<String>,
}

/// What the UI should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Awaiting(ImageView),
    Exhausted {
        last: Option<PathBuf>,
        total: usize,
    },
}

impl DisplayState {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Awaiting(_) => Phase::AwaitingInput,
            Self::Exhausted { .. } => Phase::Exhausted,
        }
    }

    /// The view of the image on screen, if any
    #[must_use]
    pub const fn view(&self) -> Option<&ImageView> {
        match self {
            Self::Awaiting(view) => Some(view),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}
