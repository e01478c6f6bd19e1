//! Terminal output formatting.
//!
//! Line helpers used by the binary; no interactive input anywhere.

use console::style;

use crate::domain::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the planned tag change (or the initial tag).
pub fn display_plan(previous: Option<&Version>, next: &Version) {
    match previous {
        Some(previous) => {
            println!("\n{}", style("Proposed tag change:").bold());
            println!("  From: {}", style(previous).red());
            println!("  To:   {}", style(next).green());
        }
        None => {
            println!("\n{}", style("Initial tag:").bold());
            println!("  New tag: {}", style(next).green());
        }
    }
}
