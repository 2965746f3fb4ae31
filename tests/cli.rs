//! Integration tests for CLI interface behaviour of the `commentwrap` tool.
//!
//! This module validates the command-line interface functionality, including:
//! - Formatting standard input with `--ext` and limit overrides
//! - File handling with the `--in-place` flag
//! - Ordered output when several files are processed in parallel
//! - Error handling for invalid argument combinations

use std::fs;

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

fn commentwrap() -> Command {
    Command::cargo_bin("commentwrap").expect("Failed to create cargo command for commentwrap")
}

/// Verifies that the CLI fails when `--in-place` is used without a file.
#[test]
fn test_cli_in_place_requires_file() {
    commentwrap().arg("--in-place").assert().failure();
}

/// Verifies that the `--version` flag prints the crate version and exits.
#[test]
fn test_cli_version_flag() {
    commentwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("commentwrap {}\n", env!("CARGO_PKG_VERSION")));
}

/// A zero column limit is rejected during argument parsing.
#[rstest]
#[case("--comment-limit")]
#[case("--docstring-limit")]
fn test_cli_rejects_zero_limit(#[case] flag: &str) {
    commentwrap().args([flag, "0"]).assert().failure();
}

/// Standard input is treated as Python by default.
#[test]
fn test_cli_stdin_defaults_to_python() {
    commentwrap()
        .args(["--comment-limit", "20"])
        .write_stdin("# one two three four five six\nx = 1\n")
        .assert()
        .success()
        .stdout("# one two three four\n# five six\nx = 1\n");
}

/// `--ext` selects the language used for standard input.
#[rstest]
#[case(".c", "// one two three four five six\n", "// one two three\n// four five six\n")]
#[case("c", "// one two three four five six\n", "// one two three\n// four five six\n")]
#[case(".md", "# one two three four five six\n", "# one two three four five six\n")]
fn test_cli_stdin_extension(#[case] ext: &str, #[case] input: &str, #[case] expected: &str) {
    commentwrap()
        .args(["--ext", ext, "--comment-limit", "20"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(expected.to_string());
}

/// Files are formatted and printed to stdout without being modified.
#[test]
fn test_cli_process_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file_path = dir.path().join("sample.py");
    let input = "def f():\n    # alpha beta gamma delta epsilon\n    return 1\n";
    fs::write(&file_path, input).expect("failed to write file");
    commentwrap()
        .args(["--comment-limit", "24"])
        .arg(&file_path)
        .assert()
        .success()
        .stdout(
            "def f():\n    # alpha beta gamma\n    # delta epsilon\n    return 1\n",
        );
    assert_eq!(fs::read_to_string(&file_path).expect("read back"), input);
}

/// `--in-place` rewrites every file and prints nothing.
#[test]
fn test_cli_in_place_rewrites_files() {
    let dir = tempdir().expect("failed to create temporary directory");
    let py = dir.path().join("a.py");
    let c = dir.path().join("b.c");
    fs::write(&py, "# one two three four five six\n").expect("failed to write file");
    fs::write(&c, "// one two three four five six\n").expect("failed to write file");
    commentwrap()
        .args(["--in-place", "--comment-limit", "20"])
        .arg(&py)
        .arg(&c)
        .assert()
        .success()
        .stdout("");
    assert_eq!(
        fs::read_to_string(&py).expect("read back"),
        "# one two three four\n# five six\n"
    );
    assert_eq!(
        fs::read_to_string(&c).expect("read back"),
        "// one two three\n// four five six\n"
    );
}

/// Output for several files follows the order given on the command line.
#[test]
fn test_cli_multiple_files_keep_order() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut cmd = commentwrap();
    let mut expected = String::new();
    for i in 0..4 {
        let path = dir.path().join(format!("file{i}.py"));
        fs::write(&path, format!("# file {i} has words to wrap\n")).expect("failed to write file");
        cmd.arg(&path);
        expected.push_str(&format!("# file {i} has\n# words to wrap\n"));
    }
    cmd.args(["--comment-limit", "15"])
        .assert()
        .success()
        .stdout(expected);
}

/// A missing file reports an error naming the path.
#[test]
fn test_cli_missing_file_fails() {
    let dir = tempdir().expect("failed to create temporary directory");
    let missing = dir.path().join("absent.py");
    commentwrap()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.py"));
}
