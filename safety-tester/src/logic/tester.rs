use colored::Colorize;
use safety_game::{ScenarioCatalog, Track};
use serde::Serialize;

use super::checks::{Check, CheckCtx};
use super::policy::Strategy;

/// Aggregate of one check over one track, strategy and seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub track: Track,
    pub strategy: Strategy,
    pub seed: u64,
    pub passed: bool,
    pub iterations: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    pub mean_score: f64,
}

pub struct QuizTester<'c> {
    catalog: &'c ScenarioCatalog,
    verbose: bool,
}

impl<'c> QuizTester<'c> {
    #[must_use]
    pub const fn new(catalog: &'c ScenarioCatalog, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    /// Run `check` for every combination of the given tracks, strategies and seeds.
    #[must_use]
    pub fn run_matrix(
        &self,
        check: Check,
        tracks: &[Track],
        strategies: &[Strategy],
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<CheckResult> {
        let mut results = Vec::new();
        for &track in tracks {
            for &strategy in strategies {
                for &seed in seeds {
                    if self.verbose {
                        eprintln!(
                            "🧪 {} (track: {track} strategy: {strategy} seed: {seed})",
                            check.key().bright_white()
                        );
                    }
                    results.push(self.run_check(check, track, strategy, seed, iterations));
                }
            }
        }
        results
    }

    #[must_use]
    pub fn run_check(
        &self,
        check: Check,
        track: Track,
        strategy: Strategy,
        seed: u64,
        iterations: usize,
    ) -> CheckResult {
        let mut failures = Vec::new();
        let mut scores = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let ctx = CheckCtx {
                catalog: self.catalog,
                track,
                strategy,
                seed: iteration_seed,
            };
            match check.run(&ctx) {
                Ok(score) => scores.push(score),
                Err(err) => {
                    let message = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    log::warn!("{check} failed on {track}/{strategy}: {message}");
                    if self.verbose {
                        eprintln!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let mean_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
        };

        CheckResult {
            name: check.key().to_string(),
            track,
            strategy,
            seed,
            passed: failures.is_empty(),
            iterations,
            successful_iterations: scores.len(),
            failures,
            mean_score,
        }
    }
}
