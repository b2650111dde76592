//! Verify command implementation

use super::rule;
use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use vogix_palette::{Layout, run_batch, verify_theme};

/// Compare every generated theme file with its SVG preview
pub fn run_verify(layout: &Layout) -> Result<bool> {
    let themes = layout
        .themes()
        .with_context(|| format!("Failed to list {}", layout.themes_dir.display()))?;

    println!("🔍 Verifying Theme Extraction");
    println!("{}", rule());

    if themes.is_empty() {
        println!("❌ No theme files found in {}/", layout.themes_dir.display());
        return Ok(false);
    }

    // (theme file, matching preview)
    let pairs: Vec<(String, (PathBuf, PathBuf))> = themes
        .into_iter()
        .map(|(name, path)| {
            let source = layout.source_path(&name);
            (name, (path, source))
        })
        .collect();

    let mut stdout = io::stdout();
    let report = run_batch(&pairs, &mut stdout, |name, (persisted, source)| {
        verify_theme(name, source, persisted).map(str::to_string)
    })?;

    report.write_summary(&mut stdout, "themes verified")?;
    if report.is_success() {
        println!("🎉 All themes match their SVG sources!");
    } else {
        println!("⚠️  {} themes have mismatches", report.failures.len());
    }

    Ok(report.is_success())
}
