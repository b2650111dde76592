//! Extract command implementation

use super::rule;
use anyhow::{Context, Result};
use std::io;
use vogix_palette::{
    ExtractWarning, Layout, Slot, ThemePair, Variant, extract::expectation_failures,
    extract_file, generate, run_batch,
};

/// Theme used by the extraction self-check
const SELF_CHECK_THEME: &str = "aikido";

/// Known colors of the aikido preview, read off the SVG by eye
const SELF_CHECK_EXPECTED: &[(Variant, u8, &str)] = &[
    (Variant::Dark, 0x00, "#262626"),
    (Variant::Dark, 0x07, "#f6f5f0"),
    (Variant::Dark, 0x08, "#4d5645"),
    (Variant::Light, 0x00, "#f6f5f0"),
    (Variant::Light, 0x07, "#262626"),
    (Variant::Light, 0x08, "#2a3328"),
];

/// Extract every SVG preview and write its theme file
pub fn run_extract(layout: &Layout) -> Result<bool> {
    let sources = layout
        .sources()
        .with_context(|| format!("Failed to list {}", layout.sources_dir.display()))?;

    if sources.is_empty() {
        eprintln!(
            "❌ No SVG files found in {}/ directory",
            layout.sources_dir.display()
        );
        return Ok(false);
    }

    println!("🎨 Extracting colors from {} theme SVG files...", sources.len());
    println!("{}\n", rule());

    let mut stdout = io::stdout();
    let report = run_batch(&sources, &mut stdout, |name, path| {
        let extraction = extract_file(path, &layout.source_prefix).inspect_err(|e| {
            print_warnings(name, e.warnings());
        })?;
        print_warnings(name, &extraction.warnings);

        let output = layout.theme_path(&extraction.theme.name);
        let generated = generate(extraction.theme, &output)?;
        for (variant, color) in &generated.preserved {
            println!("  ℹ️  {name}: preserved existing {variant} base0F: {color}");
        }

        Ok(output
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default())
    })?;

    report.write_summary(&mut stdout, "successful")?;
    if report.is_success() {
        println!("\n✅ All themes extracted successfully!");
    }

    Ok(report.is_success())
}

/// Extract the aikido preview and compare a few known slots
pub fn run_self_check(layout: &Layout) -> Result<bool> {
    let path = layout.source_path(SELF_CHECK_THEME);
    if !path.exists() {
        println!("❌ Test file not found: {}", path.display());
        return Ok(false);
    }

    println!("\n{}", rule());
    println!("Testing: {}", path.display());
    println!("{}", rule());

    let extraction = match extract_file(&path, &layout.source_prefix) {
        Ok(extraction) => extraction,
        Err(e) => {
            print_warnings(SELF_CHECK_THEME, e.warnings());
            println!("❌ Extraction failed: {e}");
            return Ok(false);
        }
    };
    print_warnings(SELF_CHECK_THEME, &extraction.warnings);

    let theme = &extraction.theme;
    println!("\n✅ Extracted {}", theme.name);
    print_tables(theme);

    let expected: Vec<(Variant, Slot, &str)> = SELF_CHECK_EXPECTED
        .iter()
        .filter_map(|(variant, index, color)| {
            Slot::new(*index).map(|slot| (*variant, slot, *color))
        })
        .collect();

    let failures = expectation_failures(theme, &expected);
    if failures.is_empty() {
        println!("\n✅ All validations passed!");
        Ok(true)
    } else {
        for failure in &failures {
            println!("  ❌ {failure}");
        }
        Ok(false)
    }
}

fn print_warnings(name: &str, warnings: &[ExtractWarning]) {
    for warning in warnings {
        eprintln!("  ⚠️  {name}: {warning}");
    }
}

fn print_tables(theme: &ThemePair) {
    for variant in Variant::all() {
        let table = theme.table(*variant);
        println!("\n{} variant ({} colors):", variant.label(), table.len());
        for (slot, color) in table.iter() {
            println!("  {slot} = {color}");
        }
    }
}
