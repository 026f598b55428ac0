use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub repo: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let repo = make_fixture_repo(tmp.path());

        Self {
            _tmp: tmp,
            home,
            repo,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("chlog").expect("chlog binary");
        cmd.env("HOME", &self.home)
            .arg("--repo")
            .arg(self.repo.to_str().expect("repo path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn changes_dir(&self) -> PathBuf {
        self.repo.join("docs/changes")
    }
}

fn make_fixture_repo(base: &Path) -> PathBuf {
    let repo = base.join("repo");
    let changes = repo.join("docs/changes");

    fs::create_dir_all(changes.join("constants")).expect("create constants section");
    fs::create_dir_all(changes.join("units")).expect("create units section");

    fs::write(
        changes.join("README.rst"),
        "Changelog fragments live here.\n",
    )
    .expect("write changes readme");
    fs::write(
        changes.join("constants/16124.feature.rst"),
        "Updated the values of physical constants to the CODATA 2022 recommended set.\n",
    )
    .expect("write feature fragment");
    fs::write(
        changes.join("units/16200.bugfix.rst"),
        "Fixed parsing of composite unit strings with leading whitespace.\n",
    )
    .expect("write bugfix fragment");
    fs::write(
        changes.join("16300.other.rst"),
        "Refreshed the pinned revisions of the pre-commit hooks.\n",
    )
    .expect("write other fragment");

    fs::write(
        repo.join("chlog.toml"),
        r#"[changes]
sections = ["constants", "units", "io"]
"#,
    )
    .expect("write config");

    fs::write(
        repo.join(".pre-commit-config.yaml"),
        r#"repos:
  - repo: https://github.com/astral-sh/ruff-pre-commit
    rev: v0.8.6
    hooks:
      - id: ruff
        args: ["--fix"]
      - id: ruff-format
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v5.0.0
    hooks:
      - id: check-yaml
      - id: end-of-file-fixer
"#,
    )
    .expect("write pre-commit config");

    repo
}
