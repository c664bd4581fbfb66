use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, ensure};
use safety_game::{
    IgnoreReason, Outcome, QuizAction, REWARD_PER_CORRECT, ScenarioCatalog, SessionState, Track,
};

use super::policy::Strategy;
use super::runner::{
    advance_checked, answer_checked, check_resubmit_blocked, play_track, start_track,
};

/// Inputs shared by every check invocation.
#[derive(Debug, Clone, Copy)]
pub struct CheckCtx<'c> {
    pub catalog: &'c ScenarioCatalog,
    pub track: Track,
    pub strategy: Strategy,
    pub seed: u64,
}

/// Named checks the tester can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Check {
    Smoke,
    FullTrack,
    ResubmitGuard,
    ResetMidway,
    CatalogIntegrity,
}

impl Check {
    pub const ALL: [Self; 5] = [
        Self::Smoke,
        Self::FullTrack,
        Self::ResubmitGuard,
        Self::ResetMidway,
        Self::CatalogIntegrity,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Smoke => "smoke",
            Self::FullTrack => "full-track",
            Self::ResubmitGuard => "resubmit-guard",
            Self::ResetMidway => "reset-midway",
            Self::CatalogIntegrity => "catalog-integrity",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Smoke => "Start a track, answer the first question, advance once",
            Self::FullTrack => "Play a whole track checking score, progress and the summary",
            Self::ResubmitGuard => "Answering twice never changes state",
            Self::ResetMidway => "Returning to the menu mid-track zeroes everything",
            Self::CatalogIntegrity => "Every scenario has exactly one correct option",
        }
    }

    /// Run the check, returning the score the run finished with.
    pub fn run(self, ctx: &CheckCtx<'_>) -> Result<u32> {
        match self {
            Self::Smoke => smoke(ctx),
            Self::FullTrack => full_track(ctx),
            Self::ResubmitGuard => resubmit_guard(ctx),
            Self::ResetMidway => reset_midway(ctx),
            Self::CatalogIntegrity => catalog_integrity(ctx),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Check {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|check| check.key() == key)
            .ok_or_else(|| anyhow!("unknown check '{key}'"))
    }
}

pub fn list_checks() -> Vec<(&'static str, &'static str)> {
    Check::ALL
        .iter()
        .map(|check| (check.key(), check.description()))
        .collect()
}

fn smoke(ctx: &CheckCtx<'_>) -> Result<u32> {
    let mut session = start_track(ctx.catalog, ctx.track)?;
    let mut policy = ctx.strategy.create_policy(ctx.seed);
    let scenario = session
        .current_scenario()
        .ok_or_else(|| anyhow!("{} has no scenarios", ctx.track))?;
    let index = policy.pick_option(scenario).option_index;
    answer_checked(&mut session, index)?;
    let score = session.state().score;
    let single = session.is_last_scenario();
    advance_checked(&mut session)?;
    if single {
        ensure!(session.state().mode.is_menu(), "single-question track did not finish");
    } else {
        ensure!(
            session.state().current_index == 1,
            "advance moved to {}",
            session.state().current_index
        );
    }
    Ok(score)
}

fn full_track(ctx: &CheckCtx<'_>) -> Result<u32> {
    let mut policy = ctx.strategy.create_policy(ctx.seed);
    let run = play_track(ctx.catalog, ctx.track, policy.as_mut())?;
    log::debug!(
        "{} on {}: answers {:?}, {} correct, {}/{}",
        ctx.strategy,
        ctx.track,
        run.answers,
        run.correct_answers,
        run.final_score,
        run.max_score
    );
    Ok(run.final_score)
}

fn resubmit_guard(ctx: &CheckCtx<'_>) -> Result<u32> {
    let mut session = start_track(ctx.catalog, ctx.track)?;
    let mut policy = ctx.strategy.create_policy(ctx.seed);

    let (outcome, _) = session.dispatch(QuizAction::Advance);
    ensure!(
        outcome == Outcome::Ignored(IgnoreReason::NotAnswered),
        "advance before answering was not blocked: {outcome:?}"
    );

    let mut score = 0;
    while let Some(scenario) = session.current_scenario() {
        let index = policy.pick_option(scenario).option_index;
        answer_checked(&mut session, index)?;
        check_resubmit_blocked(&mut session)?;
        score = session.state().score;
        advance_checked(&mut session)?;
        if session.state().mode.is_menu() {
            break;
        }
    }
    Ok(score)
}

fn reset_midway(ctx: &CheckCtx<'_>) -> Result<u32> {
    let mut session = start_track(ctx.catalog, ctx.track)?;
    let mut policy = ctx.strategy.create_policy(ctx.seed);
    let midway = ctx.catalog.len(ctx.track) / 2;
    for _ in 0..midway {
        let scenario = session
            .current_scenario()
            .ok_or_else(|| anyhow!("ran out of scenarios before midway"))?;
        let index = policy.pick_option(scenario).option_index;
        answer_checked(&mut session, index)?;
        advance_checked(&mut session)?;
    }
    if let Some(scenario) = session.current_scenario() {
        let index = policy.pick_option(scenario).option_index;
        answer_checked(&mut session, index)?;
    }
    let score = session.state().score;

    let (outcome, notice) = session.dispatch(QuizAction::Reset);
    ensure!(outcome.is_applied(), "reset ignored: {outcome:?}");
    ensure!(notice.is_none(), "reset emitted a notice");
    ensure!(
        *session.state() == SessionState::new(),
        "reset left {:?}",
        session.state()
    );
    let (outcome, _) = session.dispatch(QuizAction::Advance);
    ensure!(
        outcome == Outcome::Ignored(IgnoreReason::NotPlaying),
        "advance from the menu was not blocked: {outcome:?}"
    );
    Ok(score)
}

fn catalog_integrity(ctx: &CheckCtx<'_>) -> Result<u32> {
    ctx.catalog.validate()?;
    let scenarios = ctx.catalog.scenarios(ctx.track);
    for scenario in scenarios {
        let correct = scenario.options.iter().filter(|o| o.correct).count();
        ensure!(
            correct == 1,
            "{} #{} has {correct} correct options",
            ctx.track,
            scenario.id
        );
    }
    let expected_max =
        u32::try_from(scenarios.len()).unwrap_or(u32::MAX) * REWARD_PER_CORRECT;
    ensure!(
        ctx.catalog.max_score(ctx.track) == expected_max,
        "max score {} != {expected_max}",
        ctx.catalog.max_score(ctx.track)
    );
    let mut perfect = Strategy::Perfect.create_policy(ctx.seed);
    let run = play_track(ctx.catalog, ctx.track, perfect.as_mut())?;
    ensure!(
        run.final_score == expected_max,
        "perfect play scored {} of {expected_max}",
        run.final_score
    );
    Ok(run.final_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(track: Track, strategy: Strategy) -> CheckCtx<'static> {
        CheckCtx {
            catalog: ScenarioCatalog::builtin().unwrap(),
            track,
            strategy,
            seed: 1337,
        }
    }

    #[test]
    fn every_check_passes_on_builtin_catalog() {
        for check in Check::ALL {
            for track in Track::ALL {
                for strategy in Strategy::ALL {
                    let result = check.run(&ctx(track, strategy));
                    assert!(
                        result.is_ok(),
                        "{check} on {track} with {strategy} failed: {result:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn reported_scores_follow_strategy() {
        let perfect = Check::FullTrack.run(&ctx(Track::Fire, Strategy::Perfect));
        assert_eq!(perfect.unwrap(), 30);
        let clueless = Check::FullTrack.run(&ctx(Track::Fire, Strategy::Clueless));
        assert_eq!(clueless.unwrap(), 0);
        let smoke = Check::Smoke.run(&ctx(Track::Flood, Strategy::First));
        assert_eq!(smoke.unwrap(), 10);
    }

    #[test]
    fn checks_parse_and_list() {
        assert_eq!("Reset-Midway".parse::<Check>().unwrap(), Check::ResetMidway);
        assert!("nope".parse::<Check>().is_err());
        let listed = list_checks();
        assert_eq!(listed.len(), Check::ALL.len());
        assert!(listed.iter().any(|(key, _)| *key == "catalog-integrity"));
    }
}
