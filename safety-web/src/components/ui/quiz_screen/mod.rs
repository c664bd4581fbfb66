mod option;
mod view;
mod view_model;

pub use option::{QuizOptionButton, QuizOptionProps};
pub use view::{QuizScreen, QuizScreenProps};
pub use view_model::{ExplanationView, OptionStatus, OptionView, QuizViewModel, build_quiz_view_model};
