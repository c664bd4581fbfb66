pub mod quiz_screen;
pub mod track_menu;

pub use quiz_screen::{QuizScreen, QuizScreenProps};
pub use track_menu::{TrackMenu, TrackMenuProps};
