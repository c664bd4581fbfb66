//! Safety School quiz engine
//!
//! Platform-agnostic core for the flood and fire safety quiz: the scenario
//! store, the session state machine, and the notices it emits. This crate
//! has no UI or platform-specific dependencies.

pub mod constants;
pub mod data;
pub mod error;
pub mod notice;
pub mod session;
pub mod state;
pub mod track;

// Re-export commonly used types
pub use constants::{ANSWER_NOTICE_MS, REWARD_PER_CORRECT, SUMMARY_NOTICE_MS};
pub use data::{Options, QuizOption, Scenario, ScenarioCatalog};
pub use error::{CatalogError, TrackParseError};
pub use notice::{Notice, NoticeKind, TrackResult};
pub use session::{
    IgnoreReason, Outcome, QuizAction, QuizSession, Transition, advance, reset, select_track,
    submit_answer, transition,
};
pub use state::{Mode, Selection, SessionState, progress_percent};
pub use track::{Track, TrackTheme};

/// Trait for abstracting where the scenario catalog comes from
/// Platform-specific implementations may provide their own
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and validate the scenario catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or fails validation.
    fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error>;
}

/// Loader for the catalog embedded in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLoader;

impl DataLoader for BuiltinLoader {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error> {
        ScenarioCatalog::builtin().cloned()
    }
}

/// Loader for a catalog supplied as a JSON string.
#[derive(Debug, Clone)]
pub struct JsonLoader {
    json: String,
}

impl JsonLoader {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl DataLoader for JsonLoader {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error> {
        ScenarioCatalog::from_json(&self.json)
    }
}
