use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use safety_game::Scenario;

/// Decision returned by a [`PlayerPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDecision {
    pub option_index: usize,
}

/// Policy interface for automated answer strategies.
pub trait PlayerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Pick an option for the scenario on screen.
    fn pick_option(&mut self, scenario: &Scenario) -> PolicyDecision;
}

/// Built-in answer strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Perfect,
    Clueless,
    First,
    Random,
}

impl Strategy {
    pub const ALL: [Self; 4] = [Self::Perfect, Self::Clueless, Self::First, Self::Random];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Clueless => "clueless",
            Self::First => "first",
            Self::Random => "random",
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn PlayerPolicy> {
        match self {
            Self::Perfect => Box::new(PerfectPolicy),
            Self::Clueless => Box::new(CluelessPolicy),
            Self::First => Box::new(FirstPolicy),
            Self::Random => Box::new(RandomPolicy::new(seed)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.key() == key)
            .ok_or_else(|| anyhow::anyhow!("unknown strategy '{key}'"))
    }
}

struct PerfectPolicy;
struct CluelessPolicy;
struct FirstPolicy;

struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl PlayerPolicy for PerfectPolicy {
    fn name(&self) -> &'static str {
        "perfect"
    }

    fn pick_option(&mut self, scenario: &Scenario) -> PolicyDecision {
        PolicyDecision {
            option_index: scenario.correct_index().unwrap_or(0),
        }
    }
}

impl PlayerPolicy for CluelessPolicy {
    fn name(&self) -> &'static str {
        "clueless"
    }

    fn pick_option(&mut self, scenario: &Scenario) -> PolicyDecision {
        let option_index = scenario
            .options
            .iter()
            .position(|option| !option.correct)
            .unwrap_or(0);
        PolicyDecision { option_index }
    }
}

impl PlayerPolicy for FirstPolicy {
    fn name(&self) -> &'static str {
        "first"
    }

    fn pick_option(&mut self, _scenario: &Scenario) -> PolicyDecision {
        PolicyDecision { option_index: 0 }
    }
}

impl PlayerPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn pick_option(&mut self, scenario: &Scenario) -> PolicyDecision {
        let len = scenario.options.len().max(1);
        PolicyDecision {
            option_index: self.rng.gen_range(0..len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safety_game::{ScenarioCatalog, Track};

    fn scenarios() -> &'static [Scenario] {
        ScenarioCatalog::builtin().unwrap().scenarios(Track::Fire)
    }

    #[test]
    fn perfect_and_clueless_agree_with_correct_flags() {
        let mut perfect = Strategy::Perfect.create_policy(0);
        let mut clueless = Strategy::Clueless.create_policy(0);
        for scenario in scenarios() {
            let right = perfect.pick_option(scenario).option_index;
            let wrong = clueless.pick_option(scenario).option_index;
            assert!(scenario.options[right].correct);
            assert!(!scenario.options[wrong].correct);
        }
    }

    #[test]
    fn random_policy_is_deterministic_per_seed_and_in_range() {
        let pick_all = |seed| {
            let mut policy = Strategy::Random.create_policy(seed);
            scenarios()
                .iter()
                .map(|s| policy.pick_option(s).option_index)
                .collect::<Vec<_>>()
        };
        let a = pick_all(1337);
        assert_eq!(a, pick_all(1337));
        assert!(a.iter().all(|&idx| idx < 3));
    }

    #[test]
    fn strategies_parse_from_keys() {
        assert_eq!("Perfect".parse::<Strategy>().unwrap(), Strategy::Perfect);
        assert_eq!(" random ".parse::<Strategy>().unwrap(), Strategy::Random);
        assert!("lucky".parse::<Strategy>().is_err());
        for strategy in Strategy::ALL {
            assert_eq!(strategy.create_policy(1).name(), strategy.key());
        }
    }
}
