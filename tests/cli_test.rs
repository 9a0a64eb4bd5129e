// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

use niihau_lib::error::{EXIT_ERROR, EXIT_NO_MATCH};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Run the `niihau` binary with the given arguments
fn niihau(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_niihau"))
        .args(args)
        .output()
        .expect("failed to run niihau")
}

fn write_vocabulary(dir: &Path) -> String {
    let path = dir.join("commands.txt");
    std::fs::write(&path, "get\nget-all\nset\n").unwrap();
    path.to_string_lossy().into_owned()
}

/// A matching lookup prints the entry and succeeds
#[test]
fn test_lookup_match_succeeds() {
    let dir = tempdir().unwrap();
    let vocab = write_vocabulary(dir.path());

    let output = niihau(&["--vocab", &vocab, "lookup", "get-all --json"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "get-all");
}

/// A lookup with no match exits with the no-match status
#[test]
fn test_lookup_without_match_exit_status() {
    let dir = tempdir().unwrap();
    let vocab = write_vocabulary(dir.path());

    let output = niihau(&["--vocab", &vocab, "lookup", "delete"]);

    assert_eq!(output.status.code(), Some(i32::from(EXIT_NO_MATCH)));
    assert!(output.stdout.is_empty());
}

/// An unreadable vocabulary exits with the error status, not the no-match one
#[test]
fn test_unreadable_vocabulary_exit_status() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = niihau(&["--vocab", &missing.to_string_lossy(), "lookup", "get"]);

    assert_eq!(output.status.code(), Some(i32::from(EXIT_ERROR)));
    assert_ne!(output.status.code(), Some(i32::from(EXIT_NO_MATCH)));
}

/// Missing vocabulary altogether is an error as well
#[test]
fn test_lookup_without_vocabulary_exit_status() {
    let output = niihau(&["lookup", "get"]);
    assert_eq!(output.status.code(), Some(i32::from(EXIT_ERROR)));
}
