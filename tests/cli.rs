mod common;

use assert_cmd::Command;
use common::batch_file;
use predicates::prelude::*;

fn dirtree() -> Command {
    let mut cmd = Command::cargo_bin("dirtree").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    dirtree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE, DELETE, MOVE and LIST"))
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    dirtree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirtree"));
}

#[test]
fn test_two_arguments_is_usage_error() {
    dirtree()
        .args(["one.txt", "two.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_batch_file_scenario() {
    let (_tmp, file) = batch_file(
        b"CREATE fruits\n\
          CREATE fruits\n\
          CREATE fruits/apples\n\
          CREATE vegetables\n\
          MOVE fruits/apples vegetables\n\
          LIST\n",
    );
    dirtree().arg(&file).assert().success().stdout(
        "CREATE fruits\n\
         CREATE fruits\n\
         Cannot create fruits - fruits already exists\n\
         CREATE fruits/apples\n\
         CREATE vegetables\n\
         MOVE fruits/apples vegetables\n\
         LIST\n\
         fruits\n\
         vegetables\n\
         \x20\x20apples\n",
    );
}

#[test]
fn test_batch_file_missing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let missing = tmp.path().join("nope.txt");
    dirtree()
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "File {} was not found\n",
            missing.display()
        )));
}

#[test]
fn test_batch_file_not_utf8() {
    let (_tmp, file) = batch_file(&[b'C', b'R', b'E', 0xC3, 0x28, b'\n']);
    dirtree()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Error attempting to open and read text from file",
        ));
}

#[test]
fn test_batch_skips_done_lines() {
    let (_tmp, file) = batch_file(b"CREATE a\nDONE\nCREATE b\nlist\n");
    dirtree()
        .arg(&file)
        .assert()
        .success()
        .stdout("CREATE a\nCREATE b\nlist\na\nb\n");
}

#[test]
fn test_interactive_session() {
    dirtree()
        .write_stdin("create docs/notes\nLIST\ndone\nCREATE ignored\n")
        .assert()
        .success()
        .stdout(
            "Enter your commands. Type 'DONE' when finished.\n\
             Command: create docs/notes\n\
             Command: LIST\n\
             docs\n\
             \x20\x20notes\n\
             Command: ",
        );
}

#[test]
fn test_interactive_end_of_input_exits_cleanly() {
    dirtree()
        .write_stdin("CREATE a\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command: CREATE a\n"));
}

#[test]
fn test_output_is_uncolored_when_piped() {
    dirtree()
        .write_stdin("DELETE nonexistent/path\nDONE\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DELETE nonexistent/path\nCannot delete nonexistent/path - nonexistent does not exist\n",
        ))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let (_tmp, file) = batch_file(b"CREATE a\n");
    dirtree()
        .arg("-vv")
        .arg(&file)
        .assert()
        .success()
        .stdout("CREATE a\n")
        .stderr(predicate::str::contains("batch session"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let tmp = tempfile::TempDir::new().unwrap();
    dirtree()
        .arg("--quiet")
        .arg(tmp.path().join("missing.txt"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_args_parsing() {
    use clap::Parser;
    use dirtree::cli::Args;

    let args = Args::parse_from(["dirtree"]);
    assert!(args.file.is_none());
    assert_eq!(args.verbose, 0);

    let args = Args::parse_from(["dirtree", "-vv", "cmds.txt"]);
    assert_eq!(args.verbose, 2);
    assert_eq!(args.file.as_deref(), Some(std::path::Path::new("cmds.txt")));

    let args = Args::parse_from(["dirtree", "-vv", "--quiet"]).validated();
    assert!(args.quiet);
    assert_eq!(args.verbose, 0, "quiet should reset verbosity to 0");
}
