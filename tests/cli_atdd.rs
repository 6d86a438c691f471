#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NOW: &str = "2024-06-30T12:00:00Z";

const HEALTHY_SNAPSHOT: &str = r#"{
  "location": {
    "name": "locations/123",
    "title": "Padaria Central",
    "phoneNumbers": { "primaryPhone": "+55 11 5555-0100", "additionalPhones": [] },
    "websiteUri": "https://padaria.example.com",
    "profile": { "description": "Fresh bread, cakes and coffee every morning since 1990 in the old town." },
    "openInfo": { "openingDate": { "year": 1990, "month": 5, "day": 12 } },
    "specialHours": {
      "specialHourPeriods": [
        { "startDate": { "year": 2024, "month": 12, "day": 25 }, "closed": true }
      ]
    }
  },
  "reviews": [
    { "starRating": "FIVE", "createTime": "2024-06-29T10:00:00Z", "reviewReply": { "comment": "Thanks!" } },
    { "starRating": "FIVE", "createTime": "2024-06-20T10:00:00Z", "reviewReply": { "comment": "Thanks!" } },
    { "starRating": 5, "createTime": "2024-06-10T10:00:00Z", "reviewReply": { "comment": "Thanks!" } },
    { "starRating": "FIVE", "createTime": "2024-05-29T10:00:00Z", "reviewReply": { "comment": "Thanks!" } },
    { "starRating": "FIVE", "createTime": "2024-05-01T10:00:00Z", "reviewReply": { "comment": "Thanks!" } },
    { "starRating": "FOUR", "createTime": "2024-04-01T10:00:00Z", "reviewReply": { "comment": "Thanks!" } }
  ],
  "localPosts": [
    { "topicType": "STANDARD", "state": "LIVE", "createTime": "2024-06-27T09:00:00Z" },
    { "topicType": "EVENT", "state": "LIVE", "createTime": "2024-05-01T09:00:00Z" }
  ],
  "mediaItems": [
    { "mediaFormat": "VIDEO", "createTime": "2024-06-20T08:00:00Z" },
    { "mediaFormat": "VIDEO", "createTime": "2024-06-01T08:00:00Z" },
    { "mediaFormat": "VIDEO", "createTime": "2024-05-15T08:00:00Z" },
    { "mediaFormat": "PHOTO", "createTime": "2024-06-25T08:00:00Z" }
  ],
  "questions": [ { "name": "locations/123/questions/1" } ]
}"#;

const SPARSE_SNAPSHOT: &str = r#"{ "location": { "title": "Empty Shop" }, "reviews": null }"#;

fn profile_health(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("profile-health").expect("binary should compile");
    cmd.env("HOME", home).env_remove("PROFILE_HEALTH_LOG");
    cmd
}

fn write_snapshot(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("snapshot should write");
    path
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn check_missing_path_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: snapshot not found"));
}

#[test]
fn check_healthy_snapshot_exits_zero_with_json_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "padaria.json", HEALTHY_SNAPSHOT);

    let output = profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--format", "json", "--now", NOW])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(0));
    let report = stdout_json(&output);
    assert_eq!(report["location"], "Padaria Central");
    assert_eq!(report["overall_score"], 100);
    assert_eq!(report["generated_at"], "2024-06-30T12:00:00+00:00");
    assert_eq!(report["checks"].as_array().map(Vec::len), Some(12));
    assert_eq!(report["checks"][4]["id"], "last_post");
    assert_eq!(report["checks"][4]["value"], "3 days");
    assert_eq!(
        report["snapshot_sha256"].as_str().map(str::len),
        Some(64),
        "sha256 should be lowercase hex"
    );
}

#[test]
fn check_sparse_snapshot_exits_with_warnings() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "sparse.json", SPARSE_SNAPSHOT);

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--now", NOW])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# Profile Health: Empty Shop"))
        .stdout(predicate::str::contains("### [Weak] Foundation date"))
        .stdout(predicate::str::contains("No media found."));
}

#[test]
fn check_below_fail_under_is_blocking() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "sparse.json", SPARSE_SNAPSHOT);

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--now", NOW, "--fail-under", "50"])
        .assert()
        .code(2);
}

#[test]
fn check_directory_renders_json_array_in_path_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshots = dir.path().join("snapshots");
    fs::create_dir_all(&snapshots).expect("snapshot dir should create");
    write_snapshot(&snapshots, "b-sparse.json", SPARSE_SNAPSHOT);
    write_snapshot(&snapshots, "a-healthy.json", HEALTHY_SNAPSHOT);
    write_snapshot(&snapshots, "notes.txt", "not a snapshot");

    let output = profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshots)
        .args(["--format", "json", "--now", NOW])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let reports = stdout_json(&output);
    let reports = reports.as_array().expect("directory mode should emit an array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["location"], "Padaria Central");
    assert_eq!(reports[1]["location"], "Empty Shop");
}

#[test]
fn check_empty_directory_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshots = dir.path().join("snapshots");
    fs::create_dir_all(&snapshots).expect("snapshot dir should create");

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshots)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no snapshot files found"));
}

#[test]
fn check_rejects_invalid_now() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "padaria.json", HEALTHY_SNAPSHOT);

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--now", "yesterday"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid instant: yesterday"));
}

#[test]
fn check_reports_malformed_snapshot() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "broken.json", "{ \"reviews\": [");

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("snapshot parse error"))
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn check_uses_locale_from_working_directory_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "sparse.json", SPARSE_SNAPSHOT);
    fs::write(
        dir.path().join("profile-health.toml"),
        "[report]\nlocale = \"pt-BR\"\n",
    )
    .expect("config should write");

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--now", NOW])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# Análise de Saúde: Empty Shop"))
        .stdout(predicate::str::contains(
            "O negócio ainda não possui data de fundação adicionada.",
        ));
}

#[test]
fn check_locale_flag_overrides_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "sparse.json", SPARSE_SNAPSHOT);
    fs::write(
        dir.path().join("profile-health.toml"),
        "[report]\nlocale = \"pt-BR\"\n",
    )
    .expect("config should write");

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--now", NOW, "--locale", "en"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# Profile Health: Empty Shop"));
}

#[test]
fn check_fail_under_from_explicit_config_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "sparse.json", SPARSE_SNAPSHOT);
    let config = dir.path().join("ci.toml");
    fs::write(&config, "[scoring]\nfail_under = 90\n").expect("config should write");

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&snapshot)
        .args(["--now", NOW])
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "sparse.json", SPARSE_SNAPSHOT);

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("check")
        .arg(&snapshot)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn unparseable_dates_flag_mode_keeps_all_checks() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(
        dir.path(),
        "odd-dates.json",
        r#"{
  "location": { "title": "Odd Dates" },
  "localPosts": [ { "createTime": "last tuesday" } ],
  "mediaItems": [ { "mediaFormat": "PHOTO", "createTime": "soon" } ]
}"#,
    );

    let omitted = profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--format", "json", "--now", NOW])
        .output()
        .expect("binary should run");
    assert_eq!(
        stdout_json(&omitted)["checks"].as_array().map(Vec::len),
        Some(10)
    );

    fs::write(
        dir.path().join("profile-health.toml"),
        "[scoring]\nunparseable_dates = \"flag\"\n",
    )
    .expect("config should write");
    let flagged = profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--format", "json", "--now", NOW])
        .output()
        .expect("binary should run");
    let report = stdout_json(&flagged);
    assert_eq!(report["checks"].as_array().map(Vec::len), Some(12));
    assert_eq!(
        report["checks"][3]["recommendation"],
        "The creation date could not be read."
    );
}

#[test]
fn summary_reports_engagement_statistics() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "padaria.json", HEALTHY_SNAPSHOT);

    let output = profile_health(dir.path())
        .current_dir(dir.path())
        .arg("summary")
        .arg(&snapshot)
        .args(["--format", "json"])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(0));
    let summary = stdout_json(&output);
    assert_eq!(summary["reviews"]["total"], 6);
    assert_eq!(summary["reviews"]["unanswered"], 0);
    assert_eq!(summary["reviews"]["distribution"][0]["rating"], "FIVE");
    assert_eq!(summary["reviews"]["distribution"][0]["count"], 5);
    assert_eq!(summary["media"]["videos"], 3);
    assert_eq!(summary["questions"], 1);
}

#[test]
fn summary_markdown_exits_zero_for_sparse_snapshot() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "sparse.json", SPARSE_SNAPSHOT);

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("summary")
        .arg(&snapshot)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Engagement Summary: Empty Shop"))
        .stdout(predicate::str::contains("- response rate: n/a"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "padaria.json", HEALTHY_SNAPSHOT);

    let output = profile_health(dir.path())
        .current_dir(dir.path())
        .arg("-v")
        .arg("check")
        .arg(&snapshot)
        .args(["--format", "json", "--now", NOW])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("snapshot loaded"));
    stdout_json(&output);
}

#[test]
fn check_tolerates_malformed_optional_fields() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(
        dir.path(),
        "malformed.json",
        r#"{
  "location": { "title": "Odd Fields", "websiteUri": 42, "openInfo": { "openingDate": { "month": -1 } } },
  "reviews": [ { "starRating": 4.0 }, { "starRating": true, "reviewReply": null } ],
  "mediaItems": [ { "mediaFormat": "VIDEO", "createTime": 1717236000 } ]
}"#,
    );

    let output = profile_health(dir.path())
        .current_dir(dir.path())
        .arg("check")
        .arg(&snapshot)
        .args(["--format", "json", "--now", NOW])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let report = stdout_json(&output);
    assert_eq!(report["location"], "Odd Fields");
    let checks = report["checks"].as_array().expect("checks should be an array");
    assert_eq!(checks.len(), 11);
    assert!(checks.iter().all(|check| check["id"] != "last_media"));
    assert_eq!(checks[1]["value"], "1 unanswered");
}

const PERFORMANCE_SNAPSHOT: &str = r#"{
  "location": { "title": "Padaria Central" },
  "metrics": [
    {
      "dailyMetric": "BUSINESS_IMPRESSIONS_MOBILE_MAPS",
      "timeSeries": { "datedValues": [
        { "date": { "year": 2024, "month": 6, "day": 1 }, "value": "300" },
        { "date": { "year": 2024, "month": 6, "day": 2 }, "value": "200" }
      ] }
    },
    {
      "dailyMetric": "WEBSITE_CLICKS",
      "timeSeries": { "datedValues": [ { "date": { "year": 2024, "month": 6, "day": 1 }, "value": "9" } ] }
    },
    {
      "dailyMetric": "BUSINESS_DIRECTION_REQUESTS",
      "timeSeries": { "datedValues": [ { "date": { "year": 2024, "month": 6, "day": 2 }, "value": 6 } ] }
    }
  ],
  "searchKeywords": [
    { "searchKeyword": "pão de queijo", "insightsValue": { "threshold": "15" } },
    { "searchKeyword": "padaria", "insightsValue": { "value": "120" } }
  ]
}"#;

#[test]
fn summary_aggregates_performance_and_keywords() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "performance.json", PERFORMANCE_SNAPSHOT);

    let output = profile_health(dir.path())
        .current_dir(dir.path())
        .arg("summary")
        .arg(&snapshot)
        .args(["--format", "json"])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(0));
    let summary = stdout_json(&output);
    assert_eq!(summary["performance"]["total_views"], 500);
    assert_eq!(summary["performance"]["total_interactions"], 15);
    assert_eq!(summary["performance"]["interactions"]["directions"], 6);
    assert_eq!(summary["performance"]["surfaces"][0]["surface"], "mobile_maps");
    assert_eq!(summary["top_keywords"][0]["keyword"], "padaria");
    assert_eq!(summary["top_keywords"][1]["approximate"], true);
}

#[test]
fn summary_markdown_follows_locale_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_snapshot(dir.path(), "performance.json", PERFORMANCE_SNAPSHOT);

    profile_health(dir.path())
        .current_dir(dir.path())
        .arg("summary")
        .arg(&snapshot)
        .args(["--locale", "pt-br"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Resumo de Engajamento: Padaria Central"))
        .stdout(predicate::str::contains("## Desempenho"))
        .stdout(predicate::str::contains("- Google Maps - Celular: 500"))
        .stdout(predicate::str::contains("2. pão de queijo: < 15"));
}
