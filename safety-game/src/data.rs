use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{BUILTIN_SCENARIOS_JSON, REWARD_PER_CORRECT};
use crate::error::CatalogError;
use crate::track::Track;

/// Answer choice inside a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    pub explanation: String,
}

/// Options are nearly always three, so keep them inline.
pub type Options = SmallVec<[QuizOption; 3]>;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub question: String,
    #[serde(default)]
    pub options: Options,
}

impl Scenario {
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&QuizOption> {
        self.options.get(index)
    }

    /// Index of the correct option. Validated catalogs always have one.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|opt| opt.correct)
    }

    fn validate(&self, track: Track) -> Result<(), CatalogError> {
        let id = self.id;
        if self.question.trim().is_empty() {
            return Err(CatalogError::BlankText {
                track,
                id,
                field: "question",
            });
        }
        if self.options.is_empty() {
            return Err(CatalogError::NoOptions { track, id });
        }
        for option in &self.options {
            if option.text.trim().is_empty() {
                return Err(CatalogError::BlankText {
                    track,
                    id,
                    field: "option text",
                });
            }
            if option.explanation.trim().is_empty() {
                return Err(CatalogError::BlankText {
                    track,
                    id,
                    field: "explanation",
                });
            }
        }
        let count = self.options.iter().filter(|opt| opt.correct).count();
        if count != 1 {
            return Err(CatalogError::CorrectOptionCount { track, id, count });
        }
        Ok(())
    }
}

/// Container for every track's scenarios
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScenarioCatalog {
    #[serde(default)]
    pub flood: Vec<Scenario>,
    #[serde(default)]
    pub fire: Vec<Scenario>,
}

static BUILTIN: Lazy<Result<ScenarioCatalog, CatalogError>> =
    Lazy::new(|| ScenarioCatalog::from_json(BUILTIN_SCENARIOS_JSON));

impl ScenarioCatalog {
    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any track fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from already-parsed scenarios, validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if any track fails validation.
    pub fn from_tracks(flood: Vec<Scenario>, fire: Vec<Scenario>) -> Result<Self, CatalogError> {
        let catalog = Self { flood, fire };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the crate, parsed once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded asset fails validation.
    pub fn builtin() -> Result<&'static Self, CatalogError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Check the invariants every track must hold before play.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in track order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for track in Track::ALL {
            let scenarios = self.scenarios(track);
            if scenarios.is_empty() {
                return Err(CatalogError::EmptyTrack(track));
            }
            let mut seen = BTreeSet::new();
            for scenario in scenarios {
                if !seen.insert(scenario.id) {
                    return Err(CatalogError::DuplicateScenarioId {
                        track,
                        id: scenario.id,
                    });
                }
                scenario.validate(track)?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn scenarios(&self, track: Track) -> &[Scenario] {
        match track {
            Track::Flood => &self.flood,
            Track::Fire => &self.fire,
        }
    }

    #[must_use]
    pub fn scenario(&self, track: Track, index: usize) -> Option<&Scenario> {
        self.scenarios(track).get(index)
    }

    #[must_use]
    pub fn len(&self, track: Track) -> usize {
        self.scenarios(track).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Track::ALL.iter().all(|track| self.scenarios(*track).is_empty())
    }

    /// Best score reachable on a track.
    #[must_use]
    pub fn max_score(&self, track: Track) -> u32 {
        u32::try_from(self.len(track))
            .unwrap_or(u32::MAX)
            .saturating_mul(REWARD_PER_CORRECT)
    }
}
