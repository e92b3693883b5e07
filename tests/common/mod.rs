#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub roster: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let roster = tmp.path().join("roster.csv");
        fs::write(
            &roster,
            "employee_id,grade\n1,A\n2,A\n3,B\n4,C\n5,D\n6,E\n",
        )
        .expect("write roster fixture");

        Self {
            _tmp: tmp,
            home,
            roster,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("shalloc").expect("binary under test");
        cmd.env("HOME", &self.home);
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

    pub fn run_json_err(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid error json output")
    }

    pub fn login(&self) {
        let v = self.run_json(&["login", "cfo@example.com", "--password", "secret"]);
        assert_eq!(v["ok"], true);
    }

    pub fn roster_path(&self) -> &str {
        self.roster.to_str().expect("roster path utf8")
    }
}
