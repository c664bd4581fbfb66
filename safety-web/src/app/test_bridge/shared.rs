use serde::Serialize;

use crate::game::{QuizAction, ScenarioCatalog, SessionState, Track, progress_percent};

/// State exposed to automation, with the derived fields tests usually assert on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeSnapshot {
    pub screen: &'static str,
    pub track: Option<Track>,
    pub current_index: usize,
    pub score: u32,
    pub completed_count: usize,
    pub selected: Option<usize>,
    pub explanation_visible: bool,
    pub total: usize,
    pub progress_percent: f32,
}

impl BridgeSnapshot {
    #[must_use]
    pub fn capture(state: &SessionState, catalog: &ScenarioCatalog) -> Self {
        let total = state.track().map_or(0, |track| catalog.len(track));
        Self {
            screen: if state.mode.is_menu() { "menu" } else { "quiz" },
            track: state.track(),
            current_index: state.current_index,
            score: state.score,
            completed_count: state.completed_count,
            selected: state.selection.index(),
            explanation_visible: state.explanation_visible(),
            total,
            progress_percent: progress_percent(state.completed_count, total),
        }
    }
}

/// JSON text of the snapshot, for harnesses that compare strings.
#[must_use]
pub fn snapshot_json(state: &SessionState, catalog: &ScenarioCatalog) -> String {
    serde_json::to_string(&BridgeSnapshot::capture(state, catalog)).unwrap_or_default()
}

/// `track("flood")` style calls.
#[must_use]
pub fn track_action(raw: &str) -> Option<QuizAction> {
    match raw.parse::<Track>() {
        Ok(track) => Some(QuizAction::SelectTrack(track)),
        Err(err) => {
            log::warn!("test bridge: {err}");
            None
        }
    }
}

/// `answer(1)` style calls. JavaScript numbers arrive as `f64`.
#[must_use]
pub fn answer_action(raw: f64) -> Option<QuizAction> {
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
        log::warn!("test bridge: invalid answer index {raw}");
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = raw as usize;
    Some(QuizAction::SubmitAnswer(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Selection;

    fn catalog() -> &'static ScenarioCatalog {
        ScenarioCatalog::builtin().unwrap()
    }

    #[test]
    fn snapshot_reports_menu_and_quiz_screens() {
        let menu = BridgeSnapshot::capture(&SessionState::new(), catalog());
        assert_eq!(menu.screen, "menu");
        assert_eq!(menu.total, 0);

        let mut state = SessionState::playing(Track::Fire);
        state.selection = Selection::Selected(2);
        state.completed_count = 1;
        let quiz = BridgeSnapshot::capture(&state, catalog());
        assert_eq!(quiz.screen, "quiz");
        assert_eq!(quiz.track, Some(Track::Fire));
        assert_eq!(quiz.selected, Some(2));
        assert!(quiz.explanation_visible);
        assert_eq!(quiz.total, 3);
    }

    #[test]
    fn snapshot_json_uses_camel_case_keys() {
        let json = snapshot_json(&SessionState::playing(Track::Flood), catalog());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["screen"], "quiz");
        assert_eq!(value["track"], "flood");
        assert_eq!(value["explanationVisible"], false);
        assert_eq!(value["currentIndex"], 0);
    }

    #[test]
    fn bridge_arguments_parse_into_actions() {
        assert_eq!(
            track_action(" Fire "),
            Some(QuizAction::SelectTrack(Track::Fire))
        );
        assert_eq!(track_action("earthquake"), None);
        assert_eq!(answer_action(2.0), Some(QuizAction::SubmitAnswer(2)));
        assert_eq!(answer_action(-1.0), None);
        assert_eq!(answer_action(1.5), None);
        assert_eq!(answer_action(f64::NAN), None);
    }
}
