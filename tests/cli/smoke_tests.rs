use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{Fixture, filler};

fn tag_depth() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tag_depth"))
}

#[test]
fn shows_help() {
    tag_depth()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tag_depth"));
}

#[test]
fn missing_argument_is_usage_error() {
    tag_depth()
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn nonexistent_file_fails_before_output() {
    let dir = tempfile::tempdir().unwrap();
    tag_depth()
        .arg(dir.path().join("nope.tsx"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nope.tsx"));
}

#[test]
fn non_utf8_file_is_file_access_error() {
    let fx = Fixture::new("bin.tsx", [0xffu8, 0xfe, b'\n']);
    tag_depth()
        .arg(fx.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn short_file_prints_nothing() {
    let fx = Fixture::from_lines("page.tsx", &["<div>", "</div>", "<DashboardLayout>"]);
    tag_depth()
        .arg(fx.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn prints_line_550_transition() {
    let mut lines = filler(549);
    lines[10] = "<div>";
    lines[20] = "<div className=\"a\">";
    lines.push("  <div> text </div>  ");
    let fx = Fixture::from_lines("page.tsx", &lines);

    tag_depth()
        .arg(fx.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("550: Depth 2 -> 2 : <div> text </div>\n"));
}

#[test]
fn window_flag_replaces_defaults() {
    let fx = Fixture::from_lines("page.tsx", &["<div>", "<div", "</div>"]);
    tag_depth()
        .args(["--window", "2-"])
        .arg(fx.path())
        .assert()
        .success()
        .stdout("2: Depth 1 -> 1 : <div\n3: Depth 1 -> 0 : </div>\n");
}

#[test]
fn invalid_window_is_rejected() {
    let fx = Fixture::from_lines("page.tsx", &["<div>"]);
    tag_depth()
        .args(["--window", "0-4"])
        .arg(fx.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn all_prints_every_line() {
    let fx = Fixture::from_lines("page.tsx", &["<DashboardLayout>", "</DashboardLayout>"]);
    tag_depth()
        .arg("--all")
        .arg(fx.path())
        .assert()
        .success()
        .stdout("1: Depth 0 -> 1 : <DashboardLayout>\n2: Depth 1 -> 0 : </DashboardLayout>\n");
}
