//! Integration tests for the pokedex binary
//!
//! Runs the compiled binary to check flag handling and a minimal session.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Helper to run the binary with given args and stdin, capturing output
fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pokedex");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for pokedex")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"], "");
    assert!(output.status.success(), "Expected --help to exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex"));
    assert!(stdout.contains("--cache-interval"));
    assert!(stdout.contains("--base-url"));
}

#[test]
fn test_zero_cache_interval_is_rejected() {
    let output = run_cli(&["--cache-interval", "0"], "");
    assert!(!output.status.success(), "Expected zero interval to fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid configuration"),
        "Should explain the configuration problem: {}",
        stderr
    );
}

#[test]
fn test_exit_command_ends_session() {
    let output = run_cli(&["--base-url", "http://127.0.0.1:9/api/v2"], "help\nexit\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to the Pokédex!"));
    assert!(stdout.contains("Exiting Pokédex..."));
}

#[test]
fn test_end_of_input_ends_session() {
    let output = run_cli(&["--base-url", "http://127.0.0.1:9/api/v2"], "pokedex\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No Pokémon have been caught"));
    assert!(stdout.contains("Error reading input or end of input detected"));
}
