mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use common::{FileLoader, split_csv};
use logic::checks::list_checks;
use logic::reports::{
    generate_console_report, generate_csv_report, generate_json_report, generate_markdown_report,
};
use logic::{Check, CheckResult, QuizTester, Strategy};
use safety_game::{BuiltinLoader, DataLoader, ScenarioCatalog, Track};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Console,
    Json,
    Markdown,
    Csv,
}

impl ReportFormat {
    fn write(self, out: &mut dyn Write, results: &[CheckResult], elapsed: Duration) -> Result<()> {
        match self {
            Self::Console => generate_console_report(out, results, elapsed),
            Self::Json => generate_json_report(out, results),
            Self::Markdown => generate_markdown_report(out, results),
            Self::Csv => generate_csv_report(out, results),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "safety-tester", version)]
#[command(about = "Automated QA for the Safety School quiz state machine")]
struct Args {
    /// Checks to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    checks: String,

    /// List all available checks and exit
    #[arg(long)]
    list_checks: bool,

    /// Tracks to play (comma-separated, or `all`)
    #[arg(long, default_value = "flood,fire")]
    tracks: String,

    /// Answer strategies (perfect,clueless,first,random or `all`)
    #[arg(long, default_value = "all")]
    strategies: String,

    /// Seeds, comma-separated; iteration `i` plays with `seed + i`
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per check, track, strategy and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Report written to stdout or `--output`
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Scenario catalog JSON to test instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Per-iteration progress on stderr and debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_checks(&args)? {
        return Ok(());
    }

    announce_banner();

    let started = Instant::now();
    let checks = parse_list(&args.checks, &Check::ALL)?;
    let tracks = parse_list(&args.tracks, &Track::ALL)?;
    let strategies = parse_list(&args.strategies, &Strategy::ALL)?;
    let seeds = common::parse_seeds(&args.seeds)?;
    let catalog = load_catalog(&args)?;

    let tester = QuizTester::new(&catalog, args.verbose);
    let mut results: Vec<CheckResult> = Vec::new();
    for check in checks {
        let batch = tester.run_matrix(check, &tracks, &strategies, &seeds, args.iterations);
        let failed = batch.iter().filter(|r| !r.passed).count();
        if failed == 0 {
            eprintln!("✅ {} ({} runs)", check.key().green(), batch.len());
        } else {
            eprintln!("❌ {} ({failed}/{} runs failed)", check.key().red(), batch.len());
        }
        results.extend(batch);
    }

    let mut out = open_output(args.output.as_deref())?;
    args.report.write(&mut out, &results, started.elapsed())?;
    out.flush().context("flushing report")?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init();
}

fn maybe_list_checks(args: &Args) -> Result<bool> {
    if !args.list_checks {
        return Ok(false);
    }
    let mut out = open_output(args.output.as_deref())?;
    writeln!(out, "Available checks:")?;
    for (key, description) in list_checks() {
        writeln!(out, "  {key:20} - {description}")?;
    }
    out.flush()?;
    Ok(true)
}

fn announce_banner() {
    eprintln!("{}", "🎓 Safety School Quiz Tester".bright_cyan().bold());
    eprintln!("{}", "============================".cyan());
}

/// Parse a comma-separated list of keys, where `all` expands to every value.
fn parse_list<T>(raw: &str, all: &[T]) -> Result<Vec<T>>
where
    T: Copy + PartialEq + std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    let mut values = Vec::new();
    for token in split_csv(raw) {
        if token.eq_ignore_ascii_case("all") {
            for value in all {
                if !values.contains(value) {
                    values.push(*value);
                }
            }
            continue;
        }
        let value = token
            .parse::<T>()
            .map_err(|err| anyhow::anyhow!("{err}"))?;
        if !values.contains(&value) {
            values.push(value);
        }
    }
    anyhow::ensure!(!values.is_empty(), "nothing selected from '{raw}'");
    Ok(values)
}

fn load_catalog(args: &Args) -> Result<ScenarioCatalog> {
    match &args.catalog {
        Some(path) => FileLoader::new(path)
            .load_catalog()
            .with_context(|| format!("loading catalog {}", path.display())),
        None => BuiltinLoader
            .load_catalog()
            .context("loading built-in catalog"),
    }
}

/// Report sink: the `--output` file when given, stdout otherwise.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating report file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}
