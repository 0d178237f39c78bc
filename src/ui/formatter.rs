//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic. Functions here have no
//! side effects beyond printing.

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Display the version change about to be released.
///
/// # Arguments
/// * `latest` - Latest released version (the baseline if none)
/// * `new_version` - The version that will be published
pub fn display_version_change(latest: &str, new_version: &str) {
    println!("Latest version: \x1b[31m{}\x1b[0m", latest);
    println!("New version:    \x1b[32m{}\x1b[0m", new_version);
}

/// Display the generated release notes.
pub fn display_release_notes(body: &str) {
    println!("\n\x1b[1mGenerated release notes:\x1b[0m");
    for line in body.lines() {
        println!("  {}", line);
    }
}

/// Display what a dry run would have published.
pub fn display_dry_run_summary(new_version: &str, branch: &str) {
    display_status("Dry run mode:");
    display_success(&format!(
        "  Would create release {} targeting '{}'",
        new_version, branch
    ));
}
