//! End-to-end tests of the `uxmetrics` binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn uxmetrics(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_uxmetrics"));
    cmd.current_dir(dir).env_remove("UXMETRICS_CONFIG");
    cmd
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is not valid JSON")
}

#[test]
fn test_sart_command_outputs_reports() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "sart.json",
        indoc! {r#"
            [
              { "instability": 2, "complexity": 3, "variability": 2,
                "arousal": 6, "concentration": 6, "division": 5, "spareCapacity": 5,
                "informationQuantity": 6, "informationQuality": 7, "familiarity": 6 },
              { "information": 3, "understanding": 2 }
            ]
        "#},
    );

    let reports = json_stdout(uxmetrics(dir.path()).args(["sart", &input, "-f", "json"]));
    let reports = reports.as_array().unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["summary"]["saScore"], 34);
    assert_eq!(reports[0]["quality"], "good");
    assert_eq!(reports[1]["summary"]["understandingScore"], 8);
}

#[test]
fn test_tam_command_with_version_override() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "tam.json",
        r#"{ "tamVersion": 1, "perceivedUsefulness": [5, 5], "image": [3] }"#,
    );

    let reports = json_stdout(uxmetrics(dir.path()).args([
        "tam",
        &input,
        "--tam-version",
        "tam-2",
        "--format",
        "json",
    ]));

    let analysis = &reports[0];
    assert_eq!(analysis["version"], 2);
    assert_eq!(analysis["dimensions"]["perceivedUsefulness"]["score"], 66.7);
    assert_eq!(analysis["dimensions"]["image"]["score"], 33.3);
    assert_eq!(analysis["overallScore"], 50.0);
}

#[test]
fn test_tlx_aggregate_to_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "tlx.json",
        r#"[{ "mentalDemand": 20 }, { "mentalDemand": 60, "effort": 90 }]"#,
    );
    let output = dir.path().join("report.json");

    uxmetrics(dir.path())
        .args(["aggregate", "tlx", &input, "-f", "json", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let report: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["respondents"], 2);
    assert_eq!(report["dimensions"]["mentalDemand"]["mean"], 40.0);
    assert_eq!(report["dimensions"]["effort"]["respondents"], 1);
    assert_eq!(report["overall"]["mean"], 47.5);
}

#[test]
fn test_terminal_output_is_default() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "tlx.json", r#"{ "effort": 55 }"#);

    let output = uxmetrics(dir.path())
        .args(["tlx", &input])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("NASA-TLX"));
    assert!(text.contains("High"));
}

#[test]
fn test_invalid_record_fails_with_position() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.json", r#"[{ "arousal": 4 }, { "arousal": 9 }]"#);

    let output = uxmetrics(dir.path())
        .args(["sart", &input, "-f", "json"])
        .assert()
        .failure()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();

    assert!(stderr.contains("SART record 2 is invalid"), "{stderr}");
    assert!(stderr.contains("out of range"), "{stderr}");
    assert!(stderr.contains("[E020]"), "{stderr}");
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    uxmetrics(dir.path())
        .args(["tlx", "does-not-exist.json"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_init_and_force() {
    let dir = TempDir::new().unwrap();

    uxmetrics(dir.path()).arg("init").assert().success();
    let config = dir.path().join(".uxmetrics.toml");
    assert!(config.exists());

    uxmetrics(dir.path()).arg("init").assert().failure();
    uxmetrics(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_file_changes_tam_scale() {
    let dir = TempDir::new().unwrap();
    write_input(
        &dir,
        ".uxmetrics.toml",
        indoc! {r#"
            [tam.scales]
            v1 = 5

            [output]
            default_format = "json"
        "#},
    );
    let input = write_input(&dir, "tam.json", r#"{ "perceivedEaseOfUse": [3] }"#);

    let reports = json_stdout(uxmetrics(dir.path()).args(["tam", &input]));
    assert_eq!(reports[0]["dimensions"]["perceivedEaseOfUse"]["score"], 50.0);
}
