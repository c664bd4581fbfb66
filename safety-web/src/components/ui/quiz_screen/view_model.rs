use crate::game::{ScenarioCatalog, SessionState, Track};
use crate::text;

/// How an option is drawn. Only the picked option is ever highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStatus {
    Idle,
    Chosen { correct: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub status: OptionStatus,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationView {
    pub correct: bool,
    pub heading: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizViewModel {
    pub track: Track,
    pub question: String,
    pub options: Vec<OptionView>,
    pub score_label: String,
    pub counter_label: String,
    pub progress_label: String,
    pub percent: f32,
    pub explanation: Option<ExplanationView>,
    pub advance_label: &'static str,
}

/// Build the question screen for `state`, or `None` when nothing is being played.
#[must_use]
pub fn build_quiz_view_model(
    state: &SessionState,
    catalog: &ScenarioCatalog,
) -> Option<QuizViewModel> {
    let track = state.track()?;
    let scenario = catalog.scenario(track, state.current_index)?;
    let total = catalog.len(track);
    let selected = state.selection.index();

    let options = scenario
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| OptionView {
            index,
            letter: text::option_letter(index),
            text: option.text.clone(),
            status: if selected == Some(index) {
                OptionStatus::Chosen {
                    correct: option.correct,
                }
            } else {
                OptionStatus::Idle
            },
            disabled: selected.is_some(),
        })
        .collect();

    let explanation = selected
        .and_then(|index| scenario.option(index))
        .map(|option| ExplanationView {
            correct: option.correct,
            heading: if option.correct {
                text::PRAISE
            } else {
                text::REMEMBER
            },
            text: option.explanation.clone(),
        });

    let percent = crate::game::progress_percent(state.completed_count, total);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = percent.round() as u32;
    let is_last = state.current_index + 1 >= total;

    Some(QuizViewModel {
        track,
        question: scenario.question.clone(),
        options,
        score_label: text::score_label(state.score),
        counter_label: text::question_counter(state.current_index + 1, total),
        progress_label: text::progress_label(rounded),
        percent,
        explanation,
        advance_label: if is_last {
            text::FINISH_GAME
        } else {
            text::NEXT_QUESTION
        },
    })
}
