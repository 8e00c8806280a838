// Integration tests for the binary using assert_cmd.
// These tests shell out the compiled binary and validate observable behavior.

use assert_cmd::prelude::*;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BIN: &str = "alien_invasion";

#[test]
fn prints_summary_and_survivors() -> Result<(), Box<dyn std::error::Error>> {
    // Small map with a few links
    let mut f = NamedTempFile::new()?;
    writeln!(f, "A north=B west=C\nB south=A\nC east=A\nD\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "200",
        "--map",
        f.path().to_str().unwrap(),
        "--seed",
        "42",
        "--suppress-events",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("THE REMAINING WORLD"))
        .stdout(contains("Simulation Latency"))
        .stdout(contains("survivors="));

    Ok(())
}

#[test]
fn t0_collision_on_single_city_destroys_everything() -> Result<(), Box<dyn std::error::Error>> {
    // Single city => both aliens must start there => destroyed before any move.
    let mut f = NamedTempFile::new()?;
    writeln!(f, "X")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["2", "-m", f.path().to_str().unwrap(), "--seed", "123"]);

    cmd.assert()
        .success()
        .stdout(contains("X has been destroyed by alien 1 and alien 2!"))
        .stdout(contains("All cities are destroyed."))
        .stdout(contains("survivors=0"));

    Ok(())
}

#[test]
fn zero_aliens_reproduce_the_input_map() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    writeln!(f, "A north=B south=C\nB south=A\nC north=A\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["0", "--map", f.path().to_str().unwrap(), "--seed", "1"]);

    cmd.assert()
        .success()
        .stdout(contains("A north=B south=C"))
        .stdout(contains("B south=A"))
        .stdout(contains("C north=A"))
        .stdout(contains("survivors=3"));

    Ok(())
}

#[test]
fn missing_arguments_fail_with_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;

    cmd.assert().failure().stderr(contains("Usage"));

    Ok(())
}
