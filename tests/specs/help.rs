//! Top-level CLI surface specs.

use crate::prelude::*;

#[test]
fn help_lists_all_subcommands() {
    spotwatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("classes"))
        .stdout(predicate::str::contains("book"))
        .stdout(predicate::str::contains("cancel"))
        .stdout(predicate::str::contains("bookings"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn version_flag_works() {
    spotwatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spotwatch"));
}

#[test]
fn unknown_subcommand_fails() {
    spotwatch().arg("frobnicate").assert().failure();
}
