//! Error types for catalog loading and track parsing.

use thiserror::Error;

use crate::track::Track;

/// Reasons a scenario catalog can be rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to parse scenario catalog: {0}")]
    Parse(String),

    #[error("track '{0}' has no scenarios")]
    EmptyTrack(Track),

    #[error("scenario {id} in track '{track}' has no options")]
    NoOptions { track: Track, id: u32 },

    /// Every scenario needs exactly one correct option.
    #[error("scenario {id} in track '{track}' has {count} correct options, expected exactly 1")]
    CorrectOptionCount { track: Track, id: u32, count: usize },

    #[error("scenario id {id} appears more than once in track '{track}'")]
    DuplicateScenarioId { track: Track, id: u32 },

    #[error("scenario {id} in track '{track}' has blank {field}")]
    BlankText {
        track: Track,
        id: u32,
        field: &'static str,
    },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown track '{0}'")]
pub struct TrackParseError(pub String);
