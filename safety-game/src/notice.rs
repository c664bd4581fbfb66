//! Transient notifications emitted by session transitions.
use serde::{Deserialize, Serialize};

use crate::constants::{
    ANSWER_NOTICE_MS, SUMMARY_NOTICE_MS, TITLE_CORRECT, TITLE_INCORRECT, TITLE_SUMMARY,
};
use crate::track::Track;

/// Styling family for a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    /// Rendered with destructive styling.
    Failure,
    Summary,
}

/// Outcome of a fully played track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackResult {
    pub track: Track,
    pub score: u32,
    pub max_score: u32,
    pub correct_answers: u32,
    pub total: u32,
}

impl TrackResult {
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.score == self.max_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    pub duration_ms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TrackResult>,
}

impl Notice {
    /// Feedback for a submitted answer.
    #[must_use]
    pub fn answer(correct: bool, explanation: &str) -> Self {
        let (kind, title) = if correct {
            (NoticeKind::Success, TITLE_CORRECT)
        } else {
            (NoticeKind::Failure, TITLE_INCORRECT)
        };
        Self {
            kind,
            title: title.to_string(),
            description: explanation.to_string(),
            duration_ms: ANSWER_NOTICE_MS,
            result: None,
        }
    }

    /// End-of-track summary.
    #[must_use]
    pub fn summary(result: TrackResult) -> Self {
        Self {
            kind: NoticeKind::Summary,
            title: TITLE_SUMMARY.to_string(),
            description: format!(
                "Твой результат: {} баллов из {}",
                result.score, result.max_score
            ),
            duration_ms: SUMMARY_NOTICE_MS,
            result: Some(result),
        }
    }
}
