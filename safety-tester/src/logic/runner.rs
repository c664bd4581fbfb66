//! Plays whole tracks through the session state machine, checking every step.

use anyhow::{Result, ensure};
use safety_game::{
    IgnoreReason, Mode, Notice, NoticeKind, Outcome, QuizAction, QuizSession, REWARD_PER_CORRECT,
    ScenarioCatalog, SessionState, Track,
};

use super::policy::PlayerPolicy;

/// What happened during one played track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRun {
    pub answers: Vec<usize>,
    pub correct_answers: u32,
    pub final_score: u32,
    pub max_score: u32,
}

/// Start `track` and check the fresh state.
pub fn start_track<'c>(catalog: &'c ScenarioCatalog, track: Track) -> Result<QuizSession<'c>> {
    let mut session = QuizSession::new(catalog);
    let (outcome, notice) = session.dispatch(QuizAction::SelectTrack(track));
    ensure!(outcome.is_applied(), "selecting {track} was ignored");
    ensure!(notice.is_none(), "selecting {track} emitted a notice");
    let state = session.state();
    ensure!(
        state.mode == Mode::Playing(track),
        "mode after select is {:?}",
        state.mode
    );
    ensure!(
        state.current_index == 0 && state.score == 0 && state.completed_count == 0,
        "select did not reset counters: {state:?}"
    );
    ensure!(!state.explanation_visible(), "explanation visible before answering");
    Ok(session)
}

/// Submit `index` and check the score arithmetic and the answer notice.
pub fn answer_checked(session: &mut QuizSession<'_>, index: usize) -> Result<bool> {
    let before = *session.state();
    let scenario = session
        .current_scenario()
        .ok_or_else(|| anyhow::anyhow!("no scenario at index {}", before.current_index))?;
    let correct = scenario
        .option(index)
        .ok_or_else(|| anyhow::anyhow!("option {index} out of range"))?
        .correct;

    let (outcome, notice) = session.dispatch(QuizAction::SubmitAnswer(index));
    ensure!(outcome.is_applied(), "answer {index} was ignored: {outcome:?}");
    let after = *session.state();
    let expected_delta = if correct { REWARD_PER_CORRECT } else { 0 };
    ensure!(
        after.score == before.score + expected_delta,
        "score went from {} to {} for a {} answer",
        before.score,
        after.score,
        if correct { "correct" } else { "wrong" }
    );
    ensure!(
        after.score == after.correct_answers * REWARD_PER_CORRECT,
        "score {} does not match {} correct answers",
        after.score,
        after.correct_answers
    );
    if let Some(track) = after.track() {
        let max = session.catalog().max_score(track);
        ensure!(after.score <= max, "score {} exceeds max {max}", after.score);
    }
    ensure!(after.explanation_visible(), "explanation hidden after answering");

    let notice = notice.ok_or_else(|| anyhow::anyhow!("answer produced no notice"))?;
    let expected_kind = if correct {
        NoticeKind::Success
    } else {
        NoticeKind::Failure
    };
    ensure!(
        notice.kind == expected_kind,
        "notice kind {:?}, expected {expected_kind:?}",
        notice.kind
    );
    Ok(correct)
}

/// Re-submit every option and check that the state does not move.
pub fn check_resubmit_blocked(session: &mut QuizSession<'_>) -> Result<()> {
    let frozen = *session.state();
    let len = session
        .current_scenario()
        .map_or(0, |scenario| scenario.options.len());
    for index in 0..len {
        let (outcome, notice) = session.dispatch(QuizAction::SubmitAnswer(index));
        ensure!(
            outcome == Outcome::Ignored(IgnoreReason::AlreadyAnswered),
            "re-submitting {index} was not blocked: {outcome:?}"
        );
        ensure!(notice.is_none(), "re-submission emitted a notice");
        ensure!(*session.state() == frozen, "re-submission changed state");
    }
    Ok(())
}

/// Advance past an answered scenario; an ignored advance is a failure.
pub fn advance_checked(session: &mut QuizSession<'_>) -> Result<Option<Notice>> {
    let (outcome, notice) = session.dispatch(QuizAction::Advance);
    ensure!(outcome.is_applied(), "advance was ignored: {outcome:?}");
    Ok(notice)
}

/// Play `track` to the end with `policy`, checking every step.
pub fn play_track(
    catalog: &ScenarioCatalog,
    track: Track,
    policy: &mut dyn PlayerPolicy,
) -> Result<TrackRun> {
    let mut session = start_track(catalog, track)?;
    let total = catalog.len(track);
    let max_score = catalog.max_score(track);
    let mut answers = Vec::with_capacity(total);
    let mut correct_answers = 0_u32;
    let mut last_percent = session.progress_percent();

    for step in 0..total {
        let scenario = session
            .current_scenario()
            .ok_or_else(|| anyhow::anyhow!("scenario {step} missing on {track}"))?;
        let index = policy.pick_option(scenario).option_index;
        log::debug!("{} picks option {index} on {track} #{step}", policy.name());
        if answer_checked(&mut session, index)? {
            correct_answers += 1;
        }
        answers.push(index);
        check_resubmit_blocked(&mut session)?;

        let expected_score = correct_answers * REWARD_PER_CORRECT;
        let is_last = session.is_last_scenario();
        let notice = advance_checked(&mut session)?;

        if is_last {
            ensure!(
                *session.state() == SessionState::new(),
                "finishing {track} did not reset to menu: {:?}",
                session.state()
            );
            let notice = notice.ok_or_else(|| anyhow::anyhow!("no summary notice"))?;
            ensure!(notice.kind == NoticeKind::Summary, "last notice is {:?}", notice.kind);
            let result = notice
                .result
                .ok_or_else(|| anyhow::anyhow!("summary carries no result"))?;
            ensure!(
                result.score == expected_score && result.max_score == max_score,
                "summary reports {}/{}, expected {expected_score}/{max_score}",
                result.score,
                result.max_score
            );
            ensure!(
                result.correct_answers == correct_answers,
                "summary counts {} correct, expected {correct_answers}",
                result.correct_answers
            );
        } else {
            ensure!(notice.is_none(), "mid-track advance emitted a notice");
            let state = session.state();
            ensure!(
                state.current_index == step + 1 && state.completed_count == step + 1,
                "advance landed on {state:?}"
            );
            ensure!(!state.explanation_visible(), "selection not cleared on advance");
            let percent = session.progress_percent();
            ensure!(
                percent >= last_percent,
                "progress went backwards: {last_percent} -> {percent}"
            );
            last_percent = percent;
        }
    }

    ensure!(session.state().mode.is_menu(), "track {track} never finished");
    Ok(TrackRun {
        answers,
        correct_answers,
        final_score: correct_answers * REWARD_PER_CORRECT,
        max_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Strategy;

    fn catalog() -> &'static ScenarioCatalog {
        ScenarioCatalog::builtin().unwrap()
    }

    #[test]
    fn perfect_run_reaches_max_score() {
        for track in Track::ALL {
            let mut policy = Strategy::Perfect.create_policy(0);
            let run = play_track(catalog(), track, policy.as_mut()).unwrap();
            assert_eq!(run.final_score, 30);
            assert_eq!(run.max_score, 30);
            assert_eq!(run.answers.len(), 3);
        }
    }

    #[test]
    fn clueless_run_scores_zero() {
        let mut policy = Strategy::Clueless.create_policy(0);
        let run = play_track(catalog(), Track::Flood, policy.as_mut()).unwrap();
        assert_eq!(run.final_score, 0);
        assert_eq!(run.correct_answers, 0);
    }

    #[test]
    fn advance_before_answering_is_reported() {
        let mut session = start_track(catalog(), Track::Flood).unwrap();
        let err = advance_checked(&mut session).unwrap_err();
        assert!(err.to_string().contains("NotAnswered"), "{err}");

        answer_checked(&mut session, 0).unwrap();
        assert!(advance_checked(&mut session).unwrap().is_none());
        assert_eq!(session.state().current_index, 1);
    }

    #[test]
    fn out_of_range_answer_is_reported() {
        let mut session = start_track(catalog(), Track::Fire).unwrap();
        let err = answer_checked(&mut session, 7).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
