//! Scoring and notification tuning for the quiz.
//!
//! Kept in code rather than in the scenario asset so that the reward math
//! can only change through a reviewed commit.

// Scoring ------------------------------------------------------------------
/// Points awarded for a correct answer.
pub const REWARD_PER_CORRECT: u32 = 10;

// Notifications ------------------------------------------------------------
/// How long an answer toast stays on screen.
pub const ANSWER_NOTICE_MS: u32 = 3_000;
/// How long the end-of-track summary toast stays on screen.
pub const SUMMARY_NOTICE_MS: u32 = 5_000;

pub(crate) const TITLE_CORRECT: &str = "🎉 Правильно!";
pub(crate) const TITLE_INCORRECT: &str = "❌ Неправильно";
pub(crate) const TITLE_SUMMARY: &str = "🏆 Игра завершена!";

// Assets -------------------------------------------------------------------
pub(crate) const BUILTIN_SCENARIOS_JSON: &str = include_str!("../assets/scenarios.json");
