//! End-to-end tests for the Safemark binary.

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Tests file-to-file rendering through the binary.
#[test]
fn test_render_file_to_file_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let input = dir.path().join("listing.md");
    let output = dir.path().join("listing.html");
    fs::write(
        &input,
        "# Selling: Dune\n\n**Paperback**, good condition.\n\n<script>alert(1)</script>",
    )?;

    // Act
    let status = Command::new("cargo")
        .args([
            "run",
            "--manifest-path",
            "Cargo.toml",
            "--",
            input.to_str().expect("Test input path should be valid UTF8"),
            "-o",
            output
                .to_str()
                .expect("Test output path should be valid UTF8"),
        ])
        .status()?;

    // Assert
    assert!(status.success(), "Binary should exit successfully");
    let html = fs::read_to_string(&output)?;
    assert!(html.contains("<h1>Selling: Dune</h1>"), "{}", html);
    assert!(html.contains("<strong>Paperback</strong>"));
    assert!(!html.contains("<script"), "Script stripped: {}", html);

    Ok(())
}

/// Tests stdin-to-stdout rendering through the binary.
#[test]
fn test_render_stdin_to_stdout_e2e() -> Result<()> {
    // Arrange
    let markdown = "contact http://seller.example about [this](javascript:alert(1))";

    // Act
    let mut child = Command::new("cargo")
        .args(["run", "--manifest-path", "Cargo.toml"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("Child stdin should be piped")
        .write_all(markdown.as_bytes())?;
    let output = child.wait_with_output()?;

    // Assert
    assert!(output.status.success(), "Binary should exit successfully");
    let html = String::from_utf8(output.stdout)?;
    assert!(
        html.contains("<a href=\"http://seller.example\" target=\"_blank\">"),
        "Bare URL linkified: {}",
        html
    );
    assert!(!html.contains("javascript:"), "Script URL stripped: {}", html);

    Ok(())
}

/// Tests that a missing input file fails with a useful message.
#[test]
fn test_missing_input_file_fails_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let missing = dir.path().join("nope.md");

    // Act
    let output = Command::new("cargo")
        .args([
            "run",
            "--manifest-path",
            "Cargo.toml",
            "--",
            missing
                .to_str()
                .expect("Test input path should be valid UTF8"),
        ])
        .output()?;

    // Assert
    assert!(!output.status.success(), "Missing input should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Error names the missing file: {}",
        stderr
    );

    Ok(())
}
