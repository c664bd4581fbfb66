use serde::{Deserialize, Serialize};

use crate::track::Track;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", tag = "screen", content = "track")]
pub enum Mode {
    #[default]
    Menu,
    Playing(Track),
}

impl Mode {
    #[must_use]
    pub const fn track(self) -> Option<Track> {
        match self {
            Self::Menu => None,
            Self::Playing(track) => Some(track),
        }
    }

    #[must_use]
    pub const fn is_menu(self) -> bool {
        matches!(self, Self::Menu)
    }
}

/// Answer picked for the active scenario, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(usize),
}

impl Selection {
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::NoSelection => None,
            Self::Selected(index) => Some(index),
        }
    }

    #[must_use]
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// Mutable progress through a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionState {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub current_index: usize,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub completed_count: usize,
    /// Correct answers so far on this track.
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub selection: Selection,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state positioned on the first scenario of `track`.
    #[must_use]
    pub fn playing(track: Track) -> Self {
        Self {
            mode: Mode::Playing(track),
            ..Self::default()
        }
    }

    /// The explanation is shown exactly when an answer has been picked.
    #[must_use]
    pub const fn explanation_visible(&self) -> bool {
        self.selection.is_selected()
    }

    #[must_use]
    pub const fn track(&self) -> Option<Track> {
        self.mode.track()
    }
}

/// Completion percentage for a track, 0.0 when the track is empty.
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = completed.min(total) as f32 / total as f32;
    ratio * 100.0
}
