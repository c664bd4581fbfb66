use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "safety-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_checks_writes_output() {
    let exe = env!("CARGO_BIN_EXE_safety-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-checks", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available checks"));
    for key in ["smoke", "resubmit-guard", "reset-midway", "catalog-integrity"] {
        assert!(content.contains(key), "missing {key} in {content}");
    }
}

#[test]
fn cli_runs_all_checks_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_safety-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--report",
            "json",
            "--iterations",
            "2",
            "--seeds",
            "1,2",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Safety School Quiz Tester"));

    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let runs = value.as_array().expect("array of results");
    // 5 checks x 2 tracks x 4 strategies x 2 seeds
    assert_eq!(runs.len(), 80);
    assert!(runs.iter().all(|run| run["passed"] == true));
}

#[test]
fn cli_fails_on_broken_catalog() {
    let exe = env!("CARGO_BIN_EXE_safety-tester");
    let catalog_path = temp_path("catalog");
    std::fs::write(&catalog_path, r#"{"flood":[],"fire":[]}"#).expect("write catalog");
    let output = Command::new(exe)
        .args(["--checks", "smoke", "--catalog"])
        .arg(&catalog_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading catalog"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_unknown_strategy() {
    let exe = env!("CARGO_BIN_EXE_safety-tester");
    let output = Command::new(exe)
        .args(["--strategies", "lucky", "--iterations", "1"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown strategy 'lucky'"));
}
