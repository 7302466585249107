//! Tests for CLI argument parsing and binary smoke tests

use assert_cmd::Command;
use clap::Parser;
use pinetree::cli::Cli;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_cli_default_directory_is_cwd() {
    let cli = Cli::parse_from(["pinetree"]);

    assert!(cli.directory.is_none());
    assert_eq!(
        cli.start_directory().unwrap(),
        std::env::current_dir().unwrap()
    );
}

#[test]
fn test_cli_short_directory() {
    let cli = Cli::parse_from(["pinetree", "-d", "/music"]);
    assert_eq!(cli.start_directory().unwrap(), PathBuf::from("/music"));
}

#[test]
fn test_cli_long_directory() {
    let cli = Cli::parse_from(["pinetree", "--directory", "/music/flac"]);
    assert_eq!(cli.directory, Some(PathBuf::from("/music/flac")));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let result = Cli::try_parse_from(["pinetree", "--parallel"]);
    assert!(result.is_err());
}

#[test]
fn test_binary_help_lists_directory_flag() {
    Command::cargo_bin("pinetree")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--directory"));
}

#[test]
fn test_binary_rejects_missing_directory() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("does-not-exist");

    Command::cargo_bin("pinetree")
        .unwrap()
        .env("HOME", home.path())
        .arg("-d")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));

    assert!(
        !home.path().join(".config").exists(),
        "Config must not be touched before the directory is validated"
    );
}
