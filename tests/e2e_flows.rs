use serde_json::Value;
use std::fs;

mod common;
use common::TestEnv;

#[test]
fn list_show_and_check_on_fixture_repo() {
    let env = TestEnv::new();

    let list = env.run_json(&["list"]);
    assert_eq!(list["ok"], true);
    let items = list["data"].as_array().expect("fragment list");
    assert_eq!(items.len(), 3);

    let features = env.run_json(&["list", "--category", "feature"]);
    let items = features["data"].as_array().expect("filtered list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["ticket"], 16124);
    assert_eq!(items[0]["section"], "constants");
    assert!(
        items[0]["summary"]
            .as_str()
            .expect("summary string")
            .contains("CODATA 2022")
    );

    let show = env.run_json(&["show", "16200"]);
    assert_eq!(show["data"][0]["category"], "bugfix");
    assert_eq!(show["data"][0]["path"], "units/16200.bugfix.rst");

    let check = env.run_json(&["check"]);
    assert_eq!(check["ok"], true);
    assert_eq!(check["data"]["overall"], "ok");
    assert_eq!(check["data"]["fragments"], 3);
}

#[test]
fn add_picks_free_counter_slots() {
    let env = TestEnv::new();

    let first = env.run_json(&[
        "add",
        "16500",
        "--category",
        "bugfix",
        "--section",
        "units",
        "-m",
        "Fixed rounding in unit scale factors.",
    ]);
    assert_eq!(first["ok"], true);
    assert!(
        first["data"]
            .as_str()
            .expect("path string")
            .ends_with("16500.bugfix.rst")
    );

    let second = env.run_json(&[
        "add",
        "16500",
        "--category",
        "bugfix",
        "--section",
        "units",
        "-m",
        "Fixed rounding a second time, differently.",
    ]);
    assert!(
        second["data"]
            .as_str()
            .expect("path string")
            .ends_with("16500.bugfix.1.rst")
    );

    let check = env.run_json(&["check"]);
    assert_eq!(check["data"]["overall"], "ok");
}

#[test]
fn add_rejects_unknown_section_with_error_envelope() {
    let env = TestEnv::new();

    let err = env.run_json_failure(&[
        "add",
        "16501",
        "--category",
        "feature",
        "--section",
        "wcs",
        "-m",
        "text",
    ]);
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "UNKNOWN_SECTION");
}

#[test]
fn add_rejects_a_section_for_other_fragments() {
    let env = TestEnv::new();

    let err = env.run_json_failure(&[
        "add",
        "16502",
        "--category",
        "other",
        "--section",
        "units",
        "-m",
        "text",
    ]);
    assert_eq!(err["ok"], false);
    assert!(
        err["error"]["message"]
            .as_str()
            .expect("message")
            .contains("changes root")
    );
}

#[test]
fn check_flags_fragments_without_content() {
    let env = TestEnv::new();

    fs::write(env.changes_dir().join("units/16700.bugfix.rst"), "\n").expect("write empty file");

    let check = env.run_json_failure(&["check"]);
    assert_eq!(check["data"]["problems"][0]["code"], "EMPTY_FRAGMENT");
    assert_eq!(check["data"]["problems"][0]["path"], "units/16700.bugfix.rst");
}

#[test]
fn build_rejects_dates_outside_the_contract() {
    let env = TestEnv::new();

    let err = env.run_json_failure(&["build", "--version", "7.0", "--date", "not-a-date"]);
    assert_eq!(err["ok"], false);
    assert!(
        err["error"]["message"]
            .as_str()
            .expect("message")
            .contains("YYYY-MM-DD")
    );

    // nothing was consumed or written
    assert!(!env.repo.join("CHANGES.rst").exists());
    let list = env.run_json(&["list"]);
    assert_eq!(list["data"].as_array().expect("list").len(), 3);
}

#[test]
fn build_aggregates_and_consumes_fragments() {
    let env = TestEnv::new();

    let build = env.run_json(&["build", "--version", "7.0", "--date", "2026-08-23"]);
    assert_eq!(build["ok"], true);
    assert_eq!(build["data"]["fragments"], 3);
    assert_eq!(build["data"]["sections"], serde_json::json!(["constants", "units"]));

    let output = fs::read_to_string(env.repo.join("CHANGES.rst")).expect("changelog written");
    assert!(output.starts_with("Version 7.0 (2026-08-23)\n===="));
    assert!(output.contains("New Features"));
    assert!(output.contains("constants\n^^^^^^^^^"));
    assert!(output.contains("CODATA 2022 recommended set. [#16124]"));
    assert!(output.contains("Other Changes and Additions"));

    // fragments are consumed, a second build has nothing to do
    let list = env.run_json(&["list"]);
    assert_eq!(list["data"].as_array().expect("list").len(), 0);
    let err = env.run_json_failure(&["build", "--version", "7.1"]);
    assert_eq!(err["error"]["code"], "ERROR");
    assert!(
        err["error"]["message"]
            .as_str()
            .expect("message")
            .contains("no fragments")
    );
}

#[test]
fn build_prepends_releases_newest_first() {
    let env = TestEnv::new();

    env.run_json(&["build", "--version", "7.0", "--date", "2026-01-01"]);
    env.run_json(&[
        "add",
        "16600",
        "--category",
        "perf",
        "--section",
        "units",
        "-m",
        "Sped up unit composition for long chains.",
    ]);
    env.run_json(&["build", "--version", "7.1", "--date", "2026-08-23"]);

    let output = fs::read_to_string(env.repo.join("CHANGES.rst")).expect("changelog");
    let v71 = output.find("Version 7.1").expect("7.1 present");
    let v70 = output.find("Version 7.0").expect("7.0 present");
    assert!(v71 < v70);
}

#[test]
fn draft_and_keep_leave_fragments_in_place() {
    let env = TestEnv::new();

    let draft = env.run_json(&["build", "--version", "7.0", "--draft"]);
    assert_eq!(draft["data"]["draft"], true);
    assert!(
        draft["data"]["text"]
            .as_str()
            .expect("rendered text")
            .contains("New Features")
    );
    assert!(!env.repo.join("CHANGES.rst").exists());

    let keep = env.run_json(&["build", "--version", "7.0", "--keep"]);
    assert_eq!(keep["data"]["draft"], false);
    assert!(env.repo.join("CHANGES.rst").exists());
    let list = env.run_json(&["list"]);
    assert_eq!(list["data"].as_array().expect("list").len(), 3);
}

#[test]
fn check_flags_bad_and_misplaced_filenames() {
    let env = TestEnv::new();

    fs::write(env.changes_dir().join("units/notes.rst"), "free text\n").expect("write stray file");
    fs::write(
        env.changes_dir().join("16400.feature.rst"),
        "A feature at the wrong level.\n",
    )
    .expect("write misplaced fragment");

    let check = env.run_json_failure(&["check"]);
    assert_eq!(check["ok"], false);
    assert_eq!(check["data"]["overall"], "needs_attention");
    let codes: Vec<&str> = check["data"]["problems"]
        .as_array()
        .expect("problems")
        .iter()
        .map(|p| p["code"].as_str().expect("code"))
        .collect();
    assert!(codes.contains(&"BAD_FILENAME"));
    assert!(codes.contains(&"MISPLACED_CATEGORY"));

    // a dirty tree refuses to build
    let err = env.run_json_failure(&["build", "--version", "7.0"]);
    assert!(
        err["error"]["message"]
            .as_str()
            .expect("message")
            .contains("chlog check")
    );
}

#[test]
fn remove_deletes_every_fragment_for_a_ticket() {
    let env = TestEnv::new();

    env.run_json(&[
        "add",
        "16124",
        "--category",
        "feature",
        "--section",
        "constants",
        "-m",
        "Second fragment for the same ticket.",
    ]);

    let removed = env.run_json(&["remove", "16124"]);
    assert_eq!(removed["data"], 2);

    let err = env.run_json_failure(&["show", "16124"]);
    assert_eq!(err["error"]["code"], "NOT_FOUND");
}

#[test]
fn hooks_list_and_lint_on_pinned_fixture() {
    let env = TestEnv::new();

    let list = env.run_json(&["hooks", "list"]);
    let entries = list["data"].as_array().expect("hook entries");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["id"], "ruff");
    assert_eq!(entries[0]["rev"], "v0.8.6");
    assert_eq!(entries[0]["args"][0], "--fix");

    let filtered = env.run_json(&["hooks", "list", "--url", "ruff"]);
    assert_eq!(filtered["data"].as_array().expect("entries").len(), 2);

    let lint = env.run_json(&["hooks", "lint"]);
    assert_eq!(lint["ok"], true);
    assert_eq!(lint["data"]["overall"], "ok");
    assert_eq!(lint["data"]["repos"], 2);
    assert_eq!(lint["data"]["hooks"], 4);
}

#[test]
fn hooks_lint_fails_on_branch_pinned_repo() {
    let env = TestEnv::new();

    fs::write(
        env.repo.join(".pre-commit-config.yaml"),
        r#"repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: main
    hooks:
      - id: check-yaml
"#,
    )
    .expect("rewrite pre-commit config");

    let lint = env.run_json_failure(&["hooks", "lint"]);
    assert_eq!(lint["ok"], false);
    assert_eq!(lint["data"]["problems"][0]["code"], "MOVING_REV");
}

#[test]
fn status_aggregates_fragments_and_hooks() {
    let env = TestEnv::new();

    let status = env.run_json(&["status"]);
    assert_eq!(status["data"]["overall"], "ok");
    assert_eq!(status["data"]["output_exists"], false);
    let recs = status["data"]["recommendations"]
        .as_array()
        .expect("recommendations");
    assert_eq!(recs.len(), 1);

    fs::write(env.changes_dir().join("units/broken.rst"), "x\n").expect("write bad fragment");
    let status = env.run_json(&["status"]);
    assert_eq!(status["data"]["overall"], "needs_attention");
    assert!(
        status["data"]["recommendations"][0]
            .as_str()
            .expect("advice")
            .contains("chlog check")
    );
}

#[test]
fn init_scaffolds_a_fresh_repo() {
    let env = TestEnv::new();
    let fresh = env.repo.join("fresh");
    fs::create_dir_all(&fresh).expect("create fresh repo");

    let mut cmd = assert_cmd::Command::cargo_bin("chlog").expect("chlog binary");
    let out = cmd
        .env("HOME", &env.home)
        .args(["--json", "--repo", fresh.to_str().expect("utf8"), "init"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let init: Value = serde_json::from_slice(&out).expect("json output");
    assert_eq!(init["ok"], true);
    assert!(fresh.join("docs/changes/README.rst").exists());
    assert!(fresh.join("chlog.toml").exists());
}
