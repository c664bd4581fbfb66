use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;

use super::CheckResult;

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[CheckResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    passed as f64 / results.len() as f64 * 100.0
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[CheckResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Quiz Check Results".bright_cyan().bold())?;
    writeln!(out, "{}", "=====================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total runs: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} {} [{} / {} / seed {}]",
            result.name.bold(),
            result.track,
            result.strategy,
            result.seed
        )?;
        writeln!(
            out,
            "   Iterations: {}/{} successful, mean score {:.1}",
            result.successful_iterations, result.iterations, result.mean_score
        )?;
        for failure in &result.failures {
            writeln!(out, "     • {}", failure.red())?;
        }
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[CheckResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[CheckResult]) -> Result<()> {
    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(out, "# Safety School Quiz Check Results\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total runs**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    writeln!(out, "| Status | Check | Track | Strategy | Seed | Iterations | Mean score |")?;
    writeln!(out, "|---|---|---|---|---|---|---|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "| {status} | {} | {} | {} | {} | {}/{} | {:.1} |",
            result.name,
            result.track,
            result.strategy,
            result.seed,
            result.successful_iterations,
            result.iterations,
            result.mean_score
        )?;
    }

    let failed: Vec<_> = results.iter().filter(|r| !r.passed).collect();
    if !failed.is_empty() {
        writeln!(out, "\n## Failures\n")?;
        for result in failed {
            writeln!(out, "### {} ({} / {})\n", result.name, result.track, result.strategy)?;
            for failure in &result.failures {
                writeln!(out, "- {failure}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn generate_csv_report(out: &mut dyn Write, results: &[CheckResult]) -> Result<()> {
    writeln!(
        out,
        "check,track,strategy,seed,passed,iterations,successful_iterations,mean_score,failures"
    )?;
    for result in results {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{:.2},{}",
            csv_field(&result.name),
            result.track,
            result.strategy,
            result.seed,
            result.passed,
            result.iterations,
            result.successful_iterations,
            result.mean_score,
            csv_field(&result.failures.join(" | "))
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Strategy;
    use safety_game::Track;

    fn sample() -> Vec<CheckResult> {
        vec![
            CheckResult {
                name: "full-track".to_string(),
                track: Track::Flood,
                strategy: Strategy::Perfect,
                seed: 1337,
                passed: true,
                iterations: 2,
                successful_iterations: 2,
                failures: Vec::new(),
                mean_score: 30.0,
            },
            CheckResult {
                name: "smoke".to_string(),
                track: Track::Fire,
                strategy: Strategy::Random,
                seed: 1,
                passed: false,
                iterations: 1,
                successful_iterations: 0,
                failures: vec!["Iteration 1 (seed 1): score went, oddly, \"down\"".to_string()],
                mean_score: 0.0,
            },
        ]
    }

    fn render(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_report_lists_every_run() {
        colored::control::set_override(false);
        let text = render(|out| generate_console_report(out, &sample(), Duration::from_millis(5)));
        assert!(text.contains("Total runs: 2"));
        assert!(text.contains("Success rate: 50.0%"));
        assert!(text.contains("✅ PASS full-track [flood / perfect / seed 1337]"));
        assert!(text.contains("❌ FAIL smoke"));
    }

    #[test]
    fn json_report_round_trips_through_serde_json() {
        let text = render(|out| generate_json_report(out, &sample()));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["strategy"], "random");
    }

    #[test]
    fn markdown_report_has_table_and_failures() {
        let text = render(|out| generate_markdown_report(out, &sample()));
        assert!(text.contains("| ✅ | full-track | flood | perfect | 1337 | 2/2 | 30.0 |"));
        assert!(text.contains("## Failures"));
    }

    #[test]
    fn csv_report_quotes_awkward_fields() {
        let text = render(|out| generate_csv_report(out, &sample()));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("full-track,flood,perfect,1337,true,2,2,30.00,"));
        assert!(lines[2].ends_with("\"Iteration 1 (seed 1): score went, oddly, \"\"down\"\"\""));
    }
}
