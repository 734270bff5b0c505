//! # Filekit CLI Compare Integration Tests
//!
//! File: cli/tests/compare.rs
//!
//! `filekit compare files` and `filekit compare folders` against real
//! temporary directories.
//!
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_compare_identical_files_succeeds() {
    let sb = sandbox();
    write_file(sb.path(), "a.txt", "same");
    write_file(sb.path(), "b.txt", "same");

    filekit_cmd(sb.path())
        .args(["compare", "files", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("identical"));
}

#[test]
fn test_compare_different_files_exits_one() {
    let sb = sandbox();
    write_file(sb.path(), "a.txt", "same");
    write_file(sb.path(), "b.txt", "diff");

    filekit_cmd(sb.path())
        .args(["compare", "files", "a.txt", "b.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("different"));
}

#[test]
fn test_compare_missing_file_reports_not_found() {
    let sb = sandbox();
    write_file(sb.path(), "a.txt", "x");

    filekit_cmd(sb.path())
        .args(["compare", "files", "a.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

/// first = {a.txt (5 bytes), b.txt (3 bytes)}, second = {a.txt identical, c.txt}
/// => only b.txt is reported, as NEW.
#[test]
fn test_compare_folders_reports_new_file() {
    let sb = sandbox();
    write_file(sb.path(), "first/a.txt", "hello");
    write_file(sb.path(), "first/b.txt", "hey");
    write_file(sb.path(), "second/a.txt", "hello");
    write_file(sb.path(), "second/c.txt", "other");

    filekit_cmd(sb.path())
        .args(["compare", "folders", "first", "second"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("NEW     b.txt")
                .and(predicate::str::contains("a.txt").not())
                .and(predicate::str::contains("1 new or edited file(s).")),
        );
}

#[test]
fn test_compare_folders_length_mismatch_is_edited() {
    let sb = sandbox();
    write_file(sb.path(), "first/x.txt", "0123456789");
    write_file(sb.path(), "second/x.txt", "01234567");

    filekit_cmd(sb.path())
        .args(["compare", "folders", "first", "second", "--check-contents"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("EDITED  x.txt"));
}

#[test]
fn test_compare_folders_identical_succeeds() {
    let sb = sandbox();
    write_file(sb.path(), "first/x.txt", "same");
    write_file(sb.path(), "second/x.txt", "same");

    filekit_cmd(sb.path())
        .args(["compare", "folders", "first", "second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 new or edited file(s)."));
}

#[test]
fn test_compare_folders_recursive_from_project_config() {
    let sb = sandbox();
    write_file(sb.path(), ".filekit.toml", "[diff]\nrecursive = true\n");
    write_file(sb.path(), "first/nested/deep.txt", "deep");
    write_file(sb.path(), "second/keep.txt", "keep");

    filekit_cmd(sb.path())
        .args(["compare", "folders", "first", "second"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("NEW").and(predicate::str::contains("deep.txt")));
}
