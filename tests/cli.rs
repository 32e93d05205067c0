//! Integration tests for the interactive binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_bookstore(dir: &Path, args: &[&str], input: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_bookstore");
    let mut child = Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("BOOKSTORE_CATALOG")
        .env_remove("BOOKSTORE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run bookstore binary");
    if let Err(err) = child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
    {
        // The binary may exit (e.g. on a startup error) before reading stdin.
        assert_eq!(
            err.kind(),
            std::io::ErrorKind::BrokenPipe,
            "failed to write input: {err}"
        );
    }
    child.wait_with_output().expect("failed to wait for bookstore")
}

fn write_catalog(path: &Path) {
    std::fs::write(
        path,
        r#"[
  {"id": 1, "title": "1984", "author": "Orwell", "year": 1949},
  {"id": 2, "title": "Mumu", "author": "Turgenev", "year": 1854}
]"#,
    )
    .unwrap();
}

#[test]
fn exits_cleanly_at_end_of_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_bookstore(dir.path(), &["--no-persist"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Welcome to the bookstore!"));
}

#[test]
fn help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_bookstore(dir.path(), &["--no-persist"], "help\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--order-by=date"));
    assert!(stdout.contains("buy --id=<id>"));
}

#[test]
fn no_persist_never_writes_a_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_bookstore(dir.path(), &["--no-persist"], "buy --id=1\nget\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Book '1984' purchased successfully."));
    assert!(!dir.path().join("books.json").exists());
}

#[test]
fn sorts_and_buys_against_a_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("books.json");
    write_catalog(&catalog);

    let output = run_bookstore(
        dir.path(),
        &["--catalog", catalog.to_str().unwrap()],
        "--order-by=date\nbuy --id=1\nget\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());

    let mumu = stdout.find("Mumu").unwrap();
    let orwell = stdout.find("ID: 1, Title: 1984").unwrap();
    assert!(mumu < orwell);
    assert!(stdout.contains("Book '1984' purchased successfully."));

    let after_purchase = &stdout[stdout.find("purchased successfully").unwrap()..];
    assert!(!after_purchase.contains("ID: 1,"));
    assert!(after_purchase.contains("ID: 2, Title: Mumu"));

    let saved = std::fs::read_to_string(&catalog).unwrap();
    assert!(!saved.contains("1984"));
    assert!(saved.contains("Mumu"));
}

#[test]
fn purchase_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("books.yaml");
    let args = ["--catalog", catalog.to_str().unwrap()];

    run_bookstore(dir.path(), &args, "buy 2\n");
    let output = run_bookstore(dir.path(), &args, "--id=2\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Book with ID 2 not found."));
    assert!(std::fs::read_to_string(&catalog).unwrap().contains("title:"));
}

#[test]
fn input_errors_do_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_bookstore(
        dir.path(),
        &["--no-persist"],
        "quit\n--date=abc\nbuy\n--isbn=1\nget\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Unrecognized command: quit."));
    assert!(stdout.contains("Invalid year format."));
    assert!(stdout.contains("Please specify the ID"));
    assert!(stdout.contains("Unknown flag: isbn"));
    assert!(stdout.contains("Title: War and Peace"));
}

#[test]
fn corrupt_catalog_fails_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("books.json");
    std::fs::write(&catalog, "not json").unwrap();

    let args = ["--catalog", catalog.to_str().unwrap()];
    let output = run_bookstore(dir.path(), &args, "get\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("JSON error"));
}

#[test]
fn info_logs_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let args = ["--no-persist", "--log-level", "info"];
    let output = run_bookstore(dir.path(), &args, "buy --id=3\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("book purchased"));
    assert!(!stdout.contains("book purchased"));
}
