use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("fortuna")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("fortuna")
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn write_config(dir: &Path, contents: &str) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write config");
    path.to_str().expect("config path").to_string()
}

#[test]
fn normalize_handles_all_recognized_shapes() {
    let out = run_cmd(&[
        "normalize",
        "79991234567",
        "9991234567",
        "+7 (999) 123-45-67",
        "89991234567",
        "12345",
    ]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "79991234567",
            "79991234567",
            "79991234567",
            "79991234567",
            "error"
        ]
    );
}

#[test]
fn normalize_json_pairs_inputs_with_results() {
    let value = run_cmd_json(&["normalize", "8 999 123 45 67"]);
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["input"], "8 999 123 45 67");
    assert_eq!(items[0]["result"], "79991234567");
}

#[test]
fn draw_avoids_excluded_sectors_and_is_reproducible() {
    let first = run_cmd(&["draw", "--count", "50", "--seed", "7"]);
    let second = run_cmd(&["draw", "--count", "50", "--seed", "7"]);
    assert_eq!(first, second);

    for line in first.lines() {
        let sector: usize = line.parse().expect("sector");
        assert!(sector < 18);
        assert_ne!(sector, 2);
        assert_ne!(sector, 8);
    }
}

#[test]
fn draw_uses_the_configured_wheel() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        temp.path(),
        "[wheel]\nsector_count = 3\nexcluded = [0, 2]\n",
    );

    let out = run_cmd(&["--config", &config, "draw", "--count", "10"]);
    for line in out.lines() {
        assert_eq!(line, "1");
    }
}

#[test]
fn invalid_config_exits_with_invalid_input_code() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        temp.path(),
        "[poller]\ninterval_ms = 500\ntimeout_ms = 100\n",
    );

    let output = cargo_bin_cmd!("fortuna")
        .args(["--config", &config, "draw"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[cfg(feature = "data-api")]
#[test]
fn spins_seed_without_api_section_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(temp.path(), "[wheel]\nsector_count = 18\n");

    let output = cargo_bin_cmd!("fortuna")
        .args([
            "--config",
            &config,
            "spins",
            "seed",
            "--prize-id",
            "prize-1",
            "--sector",
            "4",
            "--amount",
            "10",
            "--prize-type",
            "merch",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("no [api] section"));
}

#[cfg(feature = "broadcast")]
#[test]
fn remind_requires_the_bot_token() {
    let temp = TempDir::new().expect("temp dir");
    let csv = temp.path().join("export.csv");
    fs::write(&csv, "user_id\n42\n").expect("write csv");

    let output = cargo_bin_cmd!("fortuna")
        .env_remove("FORTUNA_BOT_TOKEN")
        .args([
            "remind",
            "--csv",
            csv.to_str().expect("csv path"),
            "--game-url",
            "https://game.example",
            "--message",
            "come back",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("FORTUNA_BOT_TOKEN"));
}

#[cfg(feature = "broadcast")]
#[test]
fn remind_with_missing_csv_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let csv = temp.path().join("missing.csv");

    let output = cargo_bin_cmd!("fortuna")
        .args([
            "remind",
            "--csv",
            csv.to_str().expect("csv path"),
            "--game-url",
            "https://game.example",
            "--message",
            "come back",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(feature = "data-api")]
#[test]
fn spins_seed_requires_the_api_token() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        temp.path(),
        "[api]\nbase_url = \"https://example.bubbleapps.io/api/1.1/obj/\"\n",
    );

    let output = cargo_bin_cmd!("fortuna")
        .env_remove("FORTUNA_API_TOKEN")
        .args([
            "--config",
            &config,
            "spins",
            "seed",
            "--prize-id",
            "prize-1",
            "--sector",
            "4",
            "--amount",
            "10",
            "--prize-type",
            "merch",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("FORTUNA_API_TOKEN"));
}
