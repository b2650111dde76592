//! Validate command implementation

use super::rule;
use anyhow::{Context, Result};
use std::io;
use vogix_palette::{Layout, run_batch, validate_file};

/// Check every generated theme file for complete structure
pub fn run_validate(layout: &Layout) -> Result<bool> {
    let themes = layout
        .themes()
        .with_context(|| format!("Failed to list {}", layout.themes_dir.display()))?;

    println!("🔬 Theme Structure Validation");
    println!("{}", rule());
    println!(
        "Testing {} theme files for complete structure...\n",
        themes.len()
    );

    if themes.is_empty() {
        println!("❌ No theme files found in {}/", layout.themes_dir.display());
        return Ok(false);
    }

    let mut stdout = io::stdout();
    let report = run_batch(&themes, &mut stdout, |_, path| {
        validate_file(path).map(str::to_string)
    })?;

    report.write_summary(&mut stdout, "themes have complete structure")?;
    if report.is_success() {
        println!("\n✅ All themes have complete structure");
    }

    Ok(report.is_success())
}
