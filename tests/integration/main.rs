//! Integration tests for the activity-readme CLI
//!
//! These run the real binary against saved event feeds in temporary
//! directories, so no network access is needed.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const README: &str = "# Hi there\n\n<!--START_SECTION:activity-->\n<!--END_SECTION:activity-->\n\nThanks for visiting!\n";

/// Helper function to create an activity-readme command with a clean environment
fn activity_readme() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("activity-readme"));
    cmd.env_remove("INPUT_USERNAME")
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Saved feed: two pushes to the same repo followed by a star
fn sample_events() -> serde_json::Value {
    serde_json::json!([
        {
            "type": "PushEvent",
            "repo": { "name": "org/repo" },
            "public": true,
            "created_at": "2024-03-05T14:07:33Z",
            "payload": { "size": 2 }
        },
        {
            "type": "PushEvent",
            "repo": { "name": "org/repo" },
            "public": true,
            "created_at": "2024-03-05T13:00:00Z",
            "payload": { "size": 3 }
        },
        {
            "type": "WatchEvent",
            "repo": { "name": "org/repo2" },
            "public": true,
            "created_at": "2024-03-04T08:30:00Z",
            "payload": { "action": "started" }
        }
    ])
}

/// Write a feed file into `dir`
fn write_events(dir: &Path, events: &serde_json::Value) -> PathBuf {
    let path = dir.join("events.json");
    fs::write(&path, serde_json::to_string_pretty(events).unwrap()).unwrap();
    path
}

#[test]
fn test_version() {
    activity_readme()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("activity-readme"));
}

#[test]
fn test_version_command_json() {
    activity_readme()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("activity-readme v"));
}

#[test]
fn test_version_command_human() {
    activity_readme()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("activity-readme v"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help() {
    activity_readme()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show your recent GitHub activity"));
}

// =============================================================================
// PREVIEW
// =============================================================================

#[test]
fn test_preview_prints_lines() {
    let temp = TempDir::new().unwrap();
    let events = write_events(temp.path(), &sample_events());

    activity_readme()
        .args(["preview", "--username", "me", "--events-file"])
        .arg(&events)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "`[03/05 14:07]` 📝 Made `5` commits in [org/repo](https://github.com/org/repo)",
        ))
        .stdout(predicate::str::contains(
            "`[03/04 08:30]` ⭐ Starred [org/repo2](https://github.com/org/repo2)",
        ));
}

#[test]
fn test_preview_json() {
    let temp = TempDir::new().unwrap();
    let events = write_events(temp.path(), &sample_events());

    let output = activity_readme()
        .args(["preview", "--json", "--username", "me", "--events-file"])
        .arg(&events)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["username"], "me");
    assert_eq!(json["mode"], "preview");
    assert_eq!(json["fetched"], 3);
    assert_eq!(json["coalesced"], 2);
    assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    assert_eq!(json["document_written"], false);
}

#[test]
fn test_username_from_environment() {
    let temp = TempDir::new().unwrap();
    let events = write_events(temp.path(), &sample_events());

    activity_readme()
        .env("INPUT_USERNAME", "me")
        .args(["preview", "--events-file"])
        .arg(&events)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Activity for me"));
}

// =============================================================================
// WRITING THE README
// =============================================================================

#[test]
fn test_run_no_publish_writes_readme() {
    let temp = TempDir::new().unwrap();
    let events = write_events(temp.path(), &sample_events());
    fs::write(temp.path().join("README.md"), README).unwrap();

    activity_readme()
        .args(["run", "--no-publish", "--username", "me", "--events-file"])
        .arg(&events)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote README.md"));

    let content = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert_eq!(
        content,
        "# Hi there\n\n<!--START_SECTION:activity-->\n\
         `[03/05 14:07]` 📝 Made `5` commits in [org/repo](https://github.com/org/repo)  \n\
         `[03/04 08:30]` ⭐ Starred [org/repo2](https://github.com/org/repo2)  \n\
         <!--END_SECTION:activity-->\n\nThanks for visiting!\n"
    );
}

#[test]
fn test_readme_and_markers_from_config() {
    let temp = TempDir::new().unwrap();
    let events = write_events(temp.path(), &sample_events());
    fs::create_dir_all(temp.path().join("profile")).unwrap();
    fs::write(temp.path().join("profile/README.md"), "top\n<!-- a -->\nold\n<!-- b -->\nbottom")
        .unwrap();
    fs::write(
        temp.path().join("activity-readme.toml"),
        r#"
username = "me"
readme = "profile/README.md"

[markers]
start = "<!-- a -->"
end = "<!-- b -->"
"#,
    )
    .unwrap();

    activity_readme()
        .args(["run", "--no-publish", "--events-file"])
        .arg(&events)
        .current_dir(temp.path())
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("profile/README.md")).unwrap();
    assert!(content.starts_with("top\n<!-- a -->\n`[03/05 14:07]`"));
    assert!(content.ends_with("  \n<!-- b -->\nbottom"));
    assert!(!content.contains("old"));
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[test]
fn test_missing_username_fails() {
    let temp = TempDir::new().unwrap();

    activity_readme()
        .arg("preview")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no username given"));
}

#[test]
fn test_invalid_username_fails() {
    let temp = TempDir::new().unwrap();

    activity_readme()
        .args(["preview", "--username", "../etc"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid username"));
}

#[test]
fn test_missing_start_marker_fails_and_keeps_readme() {
    let temp = TempDir::new().unwrap();
    let events = write_events(temp.path(), &sample_events());
    fs::write(temp.path().join("README.md"), "# No markers\n").unwrap();

    activity_readme()
        .args(["run", "--no-publish", "--username", "me", "--events-file"])
        .arg(&events)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Couldn't find the <!--START_SECTION:activity--> comment",
        ));

    assert_eq!(fs::read_to_string(temp.path().join("README.md")).unwrap(), "# No markers\n");
}

#[test]
fn test_blank_markers_in_config_fail_and_keep_readme() {
    let temp = TempDir::new().unwrap();
    let events = write_events(temp.path(), &sample_events());
    let readme = "# Me\n\nIntro paragraph.\n\nMore text\n";
    fs::write(temp.path().join("README.md"), readme).unwrap();
    fs::write(
        temp.path().join("activity-readme.toml"),
        "[markers]\nstart = \"\"\nend = \"\"\n",
    )
    .unwrap();

    activity_readme()
        .args(["run", "--no-publish", "--username", "me", "--events-file"])
        .arg(&events)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid markers"));

    assert_eq!(fs::read_to_string(temp.path().join("README.md")).unwrap(), readme);
}

#[test]
fn test_only_housekeeping_pushes_fail() {
    let temp = TempDir::new().unwrap();
    let events = write_events(
        temp.path(),
        &serde_json::json!([{
            "type": "PushEvent",
            "repo": { "name": "me/me" },
            "public": true,
            "created_at": "2024-03-05T14:07:33Z",
            "payload": { "size": 1 }
        }]),
    );
    fs::write(temp.path().join("README.md"), README).unwrap();

    activity_readme()
        .args(["run", "--no-publish", "--username", "me", "--events-file"])
        .arg(&events)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No events found"));

    assert_eq!(fs::read_to_string(temp.path().join("README.md")).unwrap(), README);
}

#[test]
fn test_failure_json_output() {
    let temp = TempDir::new().unwrap();

    activity_readme()
        .args(["preview", "--json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"));
}
