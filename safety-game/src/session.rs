//! Reducer-style transitions for the quiz session.
//!
//! Every transition is a pure function of the previous state, the catalog,
//! and the action. Guarded actions leave the state untouched and report why.

use serde::{Deserialize, Serialize};

use crate::constants::REWARD_PER_CORRECT;
use crate::data::{Scenario, ScenarioCatalog};
use crate::notice::{Notice, TrackResult};
use crate::state::{Mode, Selection, SessionState};
use crate::track::Track;

/// User interaction the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "value")]
pub enum QuizAction {
    SelectTrack(Track),
    SubmitAnswer(usize),
    Advance,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The explanation is already visible for this scenario.
    AlreadyAnswered,
    /// Advance was requested before any answer was picked.
    NotAnswered,
    NotPlaying,
    OptionOutOfRange { index: usize, len: usize },
    /// The state points past the end of the active track.
    ScenarioMissing { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub notice: Option<Notice>,
    pub outcome: Outcome,
}

impl Transition {
    fn applied(state: SessionState, notice: Option<Notice>) -> Self {
        Self {
            state,
            notice,
            outcome: Outcome::Applied,
        }
    }

    fn ignored(state: &SessionState, reason: IgnoreReason) -> Self {
        log::debug!("quiz action ignored: {reason:?}");
        Self {
            state: *state,
            notice: None,
            outcome: Outcome::Ignored(reason),
        }
    }
}

/// Apply `action` to `state`.
#[must_use]
pub fn transition(
    state: &SessionState,
    catalog: &ScenarioCatalog,
    action: QuizAction,
) -> Transition {
    match action {
        QuizAction::SelectTrack(track) => select_track(track),
        QuizAction::SubmitAnswer(index) => submit_answer(state, catalog, index),
        QuizAction::Advance => advance(state, catalog),
        QuizAction::Reset => reset(),
    }
}

/// Start `track` from its first scenario with a zero score.
#[must_use]
pub fn select_track(track: Track) -> Transition {
    log::info!("starting track {track}");
    Transition::applied(SessionState::playing(track), None)
}

/// Record an answer, reveal its explanation, and award the reward if correct.
#[must_use]
pub fn submit_answer(state: &SessionState, catalog: &ScenarioCatalog, index: usize) -> Transition {
    if state.explanation_visible() {
        return Transition::ignored(state, IgnoreReason::AlreadyAnswered);
    }
    let scenario = match active_scenario(state, catalog) {
        Ok(scenario) => scenario,
        Err(reason) => return Transition::ignored(state, reason),
    };
    let Some(option) = scenario.option(index) else {
        return Transition::ignored(
            state,
            IgnoreReason::OptionOutOfRange {
                index,
                len: scenario.options.len(),
            },
        );
    };

    let mut next = *state;
    next.selection = Selection::Selected(index);
    if option.correct {
        next.score = next.score.saturating_add(REWARD_PER_CORRECT);
        next.correct_answers = next.correct_answers.saturating_add(1);
    }
    Transition::applied(next, Some(Notice::answer(option.correct, &option.explanation)))
}

/// Move to the next scenario, or finish the track and return to the menu.
#[must_use]
pub fn advance(state: &SessionState, catalog: &ScenarioCatalog) -> Transition {
    let Some(track) = state.track() else {
        return Transition::ignored(state, IgnoreReason::NotPlaying);
    };
    if !state.explanation_visible() {
        return Transition::ignored(state, IgnoreReason::NotAnswered);
    }

    let total = catalog.len(track);
    if state.current_index + 1 < total {
        let next = SessionState {
            current_index: state.current_index + 1,
            completed_count: state.completed_count + 1,
            selection: Selection::NoSelection,
            ..*state
        };
        return Transition::applied(next, None);
    }

    let result = TrackResult {
        track,
        score: state.score,
        max_score: catalog.max_score(track),
        correct_answers: state.correct_answers,
        total: u32::try_from(total).unwrap_or(u32::MAX),
    };
    log::info!(
        "finished track {track}: {}/{} points",
        result.score,
        result.max_score
    );
    Transition::applied(SessionState::new(), Some(Notice::summary(result)))
}

/// Return to the menu with all counters zeroed.
#[must_use]
pub fn reset() -> Transition {
    Transition::applied(SessionState::new(), None)
}

fn active_scenario<'c>(
    state: &SessionState,
    catalog: &'c ScenarioCatalog,
) -> Result<&'c Scenario, IgnoreReason> {
    let Mode::Playing(track) = state.mode else {
        return Err(IgnoreReason::NotPlaying);
    };
    catalog
        .scenario(track, state.current_index)
        .ok_or(IgnoreReason::ScenarioMissing {
            index: state.current_index,
        })
}

/// Session wrapper binding a catalog to a mutable state.
#[derive(Debug, Clone)]
pub struct QuizSession<'c> {
    catalog: &'c ScenarioCatalog,
    state: SessionState,
}

impl<'c> QuizSession<'c> {
    #[must_use]
    pub fn new(catalog: &'c ScenarioCatalog) -> Self {
        Self::from_state(catalog, SessionState::new())
    }

    #[must_use]
    pub const fn from_state(catalog: &'c ScenarioCatalog, state: SessionState) -> Self {
        Self { catalog, state }
    }

    /// Apply an action in place, returning the outcome and any notice.
    pub fn dispatch(&mut self, action: QuizAction) -> (Outcome, Option<Notice>) {
        let Transition {
            state,
            notice,
            outcome,
        } = transition(&self.state, self.catalog, action);
        self.state = state;
        (outcome, notice)
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c ScenarioCatalog {
        self.catalog
    }

    /// Scenario currently on screen, if playing.
    #[must_use]
    pub fn current_scenario(&self) -> Option<&'c Scenario> {
        active_scenario(&self.state, self.catalog).ok()
    }

    /// Scenarios in the active track.
    #[must_use]
    pub fn total(&self) -> usize {
        self.state.track().map_or(0, |track| self.catalog.len(track))
    }

    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        crate::state::progress_percent(self.state.completed_count, self.total())
    }

    #[must_use]
    pub fn is_last_scenario(&self) -> bool {
        let total = self.total();
        total > 0 && self.state.current_index + 1 >= total
    }

    #[must_use]
    pub fn into_state(self) -> SessionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;

    fn catalog() -> &'static ScenarioCatalog {
        ScenarioCatalog::builtin().unwrap()
    }

    #[test]
    fn selecting_a_track_starts_at_zero() {
        for track in Track::ALL {
            let t = transition(&SessionState::new(), catalog(), QuizAction::SelectTrack(track));
            assert!(t.outcome.is_applied());
            assert_eq!(t.state.mode, Mode::Playing(track));
            assert_eq!(t.state.current_index, 0);
            assert_eq!(t.state.score, 0);
            assert!(t.notice.is_none());
        }
    }

    #[test]
    fn correct_first_flood_answer_scores_ten() {
        let start = SessionState::playing(Track::Flood);
        let t = submit_answer(&start, catalog(), 0);
        assert_eq!(t.state.score, 10);
        assert_eq!(t.state.selection, Selection::Selected(0));
        assert!(t.state.explanation_visible());
        let notice = t.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(
            notice.description,
            "Правильно! Документы и важные вещи нужно собрать заранее."
        );
    }

    #[test]
    fn wrong_first_flood_answers_keep_score() {
        let start = SessionState::playing(Track::Flood);
        let expected = [
            (1, "Нет! Наоборот, нужно отключить электричество перед эвакуацией."),
            (2, "Нет! Подвал первым затапливается водой."),
        ];
        for (index, explanation) in expected {
            let t = submit_answer(&start, catalog(), index);
            assert_eq!(t.state.score, 0);
            assert!(t.state.explanation_visible());
            let notice = t.notice.unwrap();
            assert_eq!(notice.kind, NoticeKind::Failure);
            assert_eq!(notice.description, explanation);
        }
    }

    #[test]
    fn resubmission_is_a_no_op() {
        let answered = submit_answer(&SessionState::playing(Track::Fire), catalog(), 1).state;
        let t = submit_answer(&answered, catalog(), 0);
        assert_eq!(t.state, answered);
        assert_eq!(t.outcome, Outcome::Ignored(IgnoreReason::AlreadyAnswered));
        assert!(t.notice.is_none());
    }

    #[test]
    fn guards_ignore_invalid_actions() {
        let menu = SessionState::new();
        assert_eq!(
            submit_answer(&menu, catalog(), 0).outcome,
            Outcome::Ignored(IgnoreReason::NotPlaying)
        );
        assert_eq!(
            advance(&menu, catalog()).outcome,
            Outcome::Ignored(IgnoreReason::NotPlaying)
        );

        let playing = SessionState::playing(Track::Flood);
        assert_eq!(
            advance(&playing, catalog()).outcome,
            Outcome::Ignored(IgnoreReason::NotAnswered)
        );
        assert_eq!(
            submit_answer(&playing, catalog(), 9).outcome,
            Outcome::Ignored(IgnoreReason::OptionOutOfRange { index: 9, len: 3 })
        );

        let stale = SessionState {
            current_index: 42,
            ..playing
        };
        assert_eq!(
            submit_answer(&stale, catalog(), 0).outcome,
            Outcome::Ignored(IgnoreReason::ScenarioMissing { index: 42 })
        );
    }

    #[test]
    fn advance_moves_to_next_scenario() {
        let answered = submit_answer(&SessionState::playing(Track::Flood), catalog(), 0).state;
        let t = advance(&answered, catalog());
        assert_eq!(t.state.current_index, 1);
        assert_eq!(t.state.completed_count, 1);
        assert_eq!(t.state.score, 10);
        assert_eq!(t.state.selection, Selection::NoSelection);
        assert!(t.notice.is_none());
    }

    #[test]
    fn finishing_a_track_resets_and_summarises_running_score() {
        let mut session = QuizSession::new(catalog());
        session.dispatch(QuizAction::SelectTrack(Track::Fire));
        let mut summary = None;
        for answer in [0, 1, 0] {
            session.dispatch(QuizAction::SubmitAnswer(answer));
            let (_, notice) = session.dispatch(QuizAction::Advance);
            summary = notice;
        }
        assert_eq!(*session.state(), SessionState::new());
        let summary = summary.unwrap();
        assert_eq!(summary.kind, NoticeKind::Summary);
        assert_eq!(summary.description, "Твой результат: 20 баллов из 30");
        let result = summary.result.unwrap();
        assert_eq!(result.correct_answers, 2);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn reset_returns_to_menu_from_anywhere() {
        let answered = submit_answer(&SessionState::playing(Track::Flood), catalog(), 0).state;
        let t = transition(&answered, catalog(), QuizAction::Reset);
        assert_eq!(t.state, SessionState::new());
        assert!(t.notice.is_none());
    }

    #[test]
    fn session_reports_progress_and_last_scenario() {
        let mut session = QuizSession::new(catalog());
        assert_eq!(session.total(), 0);
        assert!(session.current_scenario().is_none());
        session.dispatch(QuizAction::SelectTrack(Track::Flood));
        assert_eq!(session.total(), 3);
        assert!(!session.is_last_scenario());
        let mut last = 0.0;
        for _ in 0..2 {
            session.dispatch(QuizAction::SubmitAnswer(1));
            session.dispatch(QuizAction::Advance);
            let pct = session.progress_percent();
            assert!(pct >= last);
            last = pct;
        }
        assert!(session.is_last_scenario());
        assert_eq!(session.current_scenario().unwrap().id, 3);
    }

    #[test]
    fn actions_serialize_with_tags() {
        let json = serde_json::to_string(&QuizAction::SubmitAnswer(2)).unwrap();
        assert_eq!(json, r#"{"action":"submit_answer","value":2}"#);
        let parsed: QuizAction = serde_json::from_str(r#"{"action":"advance"}"#).unwrap();
        assert_eq!(parsed, QuizAction::Advance);
    }
}
