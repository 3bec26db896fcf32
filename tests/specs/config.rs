//! Configuration loading specs.

use crate::prelude::*;

#[test]
fn missing_config_file_fails_with_context() {
    let ws = Workspace::new();
    spotwatch()
        .arg("--config")
        .arg(ws.path().join("does-not-exist.toml"))
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config file"));
}

#[test]
fn invalid_toml_fails_with_context() {
    let ws = Workspace::new();
    let path = ws.file("spotwatch.toml", "this is not = [ valid");
    spotwatch()
        .arg("--config")
        .arg(path)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn run_requires_at_least_one_target() {
    let ws = Workspace::new();
    let path = ws.config_without_targets();
    spotwatch()
        .arg("--config")
        .arg(path)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no [[targets]] configured"));
}
