// End-to-end tests for the zoo-journey binary

mod journey_fixtures;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use journey_fixtures::{FOUR_STEP_DOCUMENT, ORPHANED_COMPLETION_DOCUMENT};

fn zoo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zoo-journey").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_doc(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_default_command_shows_builtin_map() {
    let dir = TempDir::new().unwrap();
    zoo(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloud Zoo Adventure"))
        .stdout(predicate::str::contains("50% Complete"))
        .stdout(predicate::str::contains("Demand Validation"))
        .stdout(predicate::str::contains("ENTRANCE"));
}

#[test]
fn test_show_step_renders_instructions() {
    let dir = TempDir::new().unwrap();
    zoo(&dir)
        .args(["show", "step-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🐅 Onboarding"))
        .stdout(predicate::str::contains("Status: 🚧 in progress"))
        .stdout(predicate::str::contains("☐ **Account Creation**"))
        .stdout(predicate::str::contains("Zoo Keeper's Note"))
        .stdout(predicate::str::contains("before proceeding to the next enclosure!"))
        .stdout(predicate::str::contains("📝 Notes: Waiting on firewall rule approval"));
}

#[test]
fn test_show_locked_step_requires_force() {
    let dir = TempDir::new().unwrap();
    zoo(&dir)
        .args(["show", "step-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is locked"))
        .stdout(predicate::str::contains("Operational Excellence").not());

    zoo(&dir)
        .args(["show", "step-4", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Operational Excellence"));
}

#[test]
fn test_show_unknown_step_fails() {
    let dir = TempDir::new().unwrap();
    zoo(&dir)
        .args(["show", "step-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No step with id 'step-9'"));
}

#[test]
fn test_workflow_flag_loads_document() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "journey.json", FOUR_STEP_DOCUMENT);
    zoo(&dir)
        .arg("--workflow")
        .arg(&path)
        .args(["progress", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"percentage\": 50"))
        .stdout(predicate::str::contains("\"in_progress\": 1"))
        .stdout(predicate::str::contains("\"policy\": \"known_steps_only\""));
}

#[test]
fn test_progress_policy_from_config_file() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "orphans.json", ORPHANED_COMPLETION_DOCUMENT);
    write_doc(&dir, "zoo-journey.toml", "[workflow]\nprogress_policy = \"all_entries\"\n");

    zoo(&dir)
        .arg("--workflow")
        .arg(&doc)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("100% Complete"));

    zoo(&dir)
        .env("ZOO_JOURNEY_WORKFLOW__PROGRESS_POLICY", "known_steps_only")
        .arg("--workflow")
        .arg(&doc)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("50% Complete"));
}

#[test]
fn test_dotenv_file_feeds_configuration() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "orphans.json", ORPHANED_COMPLETION_DOCUMENT);
    write_doc(&dir, ".env", "ZOO_JOURNEY_WORKFLOW__PROGRESS_POLICY=all_entries\n");

    zoo(&dir)
        .env("RUST_LOG", "info")
        .arg("--workflow")
        .arg(&doc)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("100% Complete"))
        .stderr(predicate::str::contains("Loaded environment variables from .env file"));
}

#[test]
fn test_unreadable_dotenv_file_is_reported() {
    let dir = TempDir::new().unwrap();
    write_doc(&dir, ".env", "BROKEN='never closed\n");

    zoo(&dir)
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("ENTRANCE"))
        .stderr(predicate::str::contains("Ignoring .env file"));
}

#[test]
fn test_config_command_writes_loadable_file() {
    let dir = TempDir::new().unwrap();
    let doc = write_doc(&dir, "orphans.json", ORPHANED_COMPLETION_DOCUMENT);

    zoo(&dir)
        .env("ZOO_JOURNEY_WORKFLOW__PROGRESS_POLICY", "all_entries")
        .args(["config", "--output", "saved.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written to"));

    let saved = std::fs::read_to_string(dir.path().join("saved.toml")).unwrap();
    assert!(saved.contains("progress_policy = \"all_entries\""));

    zoo(&dir)
        .arg("--config")
        .arg(dir.path().join("saved.toml"))
        .arg("--workflow")
        .arg(&doc)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("100% Complete"));

    zoo(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[observability]"));
}

#[test]
fn test_apply_rejects_positional_and_repeated_records() {
    let dir = TempDir::new().unwrap();
    zoo(&dir)
        .args(["apply", "-"])
        .write_stdin(r#"[[], {}]"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains("document must be a JSON object, not an array"))
        .stdout(predicate::str::contains("Previous workflow kept unchanged."));

    zoo(&dir)
        .args(["validate", "-"])
        .write_stdin(r#"{"steps": [], "currentState": {"a": {"status": "completed"}, "a": {"status": "locked"}}}"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate state entry for step 'a'"));
}

#[test]
fn test_apply_valid_document_renders_new_map() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "journey.json", FOUR_STEP_DOCUMENT);
    zoo(&dir)
        .arg("apply")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow updated (revision 1)"))
        .stdout(predicate::str::contains("Charlie"))
        .stdout(predicate::str::contains("📝 halfway"));
}

#[test]
fn test_apply_from_stdin_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    zoo(&dir)
        .args(["apply", "-"])
        .write_stdin("{ \"steps\": [ oops")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid JSON format. Please check your syntax."))
        .stdout(predicate::str::contains("Previous workflow kept unchanged."));
}

#[test]
fn test_validate_reports_orphans_and_unknown_animals() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "orphans.json", ORPHANED_COMPLETION_DOCUMENT);
    zoo(&dir)
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow document is valid"))
        .stdout(predicate::str::contains("State for undefined steps (ignored): ghost"))
        .stdout(predicate::str::contains("Unknown animal tags on: B"));
}

#[test]
fn test_validate_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let doc = r#"{"steps": [
        {"id": "x", "title": "", "description": "", "animal": "owl", "instructions": ""},
        {"id": "x", "title": "", "description": "", "animal": "owl", "instructions": ""}
    ], "currentState": {}}"#;
    zoo(&dir)
        .args(["validate", "-"])
        .write_stdin(doc)
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate step id 'x'"));
}

#[test]
fn test_export_round_trips_through_validate() {
    let dir = TempDir::new().unwrap();
    let output = zoo(&dir).arg("export").assert().success().get_output().stdout.clone();
    let exported = String::from_utf8(output).unwrap();
    assert!(exported.contains("\"currentState\""));

    zoo(&dir)
        .args(["validate", "-"])
        .write_stdin(exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Steps: 4"));
}

#[test]
fn test_invalid_starting_workflow_fails_fast() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "broken.json", "{");
    zoo(&dir)
        .arg("--workflow")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid"));
}

#[test]
fn test_session_edit_and_quit() {
    let dir = TempDir::new().unwrap();
    let script = format!("map\nedit\n{FOUR_STEP_DOCUMENT}\n.\nshow A\nedit\n{{ nope\n.\nprogress\nquit\n");
    zoo(&dir)
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow updated"))
        .stdout(predicate::str::contains("Alpha\n═════"))
        .stdout(predicate::str::contains("Invalid JSON format. Please check your syntax."))
        .stdout(predicate::str::contains("Bye!"));
}
