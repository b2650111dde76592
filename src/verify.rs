//! Source/theme-file agreement checks
//!
//! Re-extracts the SVG preview and compares it slot by slot with the generated
//! Nix file. `base0F` is never compared because it may be curated by hand.

use crate::error::{Mismatch, PaletteError, Result};
use crate::extract;
use crate::palette::{ColorTable, Slot, ThemePair, Variant};
use crate::persisted;
use std::fs;
use std::path::Path;

/// Success message when every compared slot agrees
pub const PERFECT_MATCH: &str = "Perfect match";

/// Slots compared by the verifier (`base00`..`base0E`)
pub fn compared_slots() -> impl Iterator<Item = Slot> {
    Slot::all().filter(|slot| *slot != Slot::ACCENT)
}

/// Differences between one variant's source and persisted tables
///
/// Slots missing on either side are skipped.
fn compare_variant(variant: Variant, source: &ColorTable, persisted: &ColorTable) -> Vec<Mismatch> {
    compared_slots()
        .filter_map(|slot| match (source.get(slot), persisted.get(slot)) {
            (Some(s), Some(p)) if s != p => Some(Mismatch {
                variant,
                slot,
                source: s.clone(),
                persisted: p.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// All differences between source colors and persisted content, dark first
pub fn compare(source: &ThemePair, persisted_content: &str) -> Vec<Mismatch> {
    Variant::all()
        .iter()
        .flat_map(|variant| {
            let persisted = persisted::read_table(persisted_content, *variant);
            compare_variant(*variant, source.table(*variant), &persisted)
        })
        .collect()
}

/// Verify that a theme file matches its SVG preview
pub fn verify_theme(name: &str, source_path: &Path, persisted_path: &Path) -> Result<&'static str> {
    if !source_path.exists() {
        return Err(PaletteError::SourceMissing(source_path.to_path_buf()));
    }
    if !persisted_path.exists() {
        return Err(PaletteError::PersistedMissing(persisted_path.to_path_buf()));
    }

    let source = extract::scan_source(name, &fs::read_to_string(source_path)?);
    let persisted_content = fs::read_to_string(persisted_path)?;

    let mismatches = compare(&source, &persisted_content);
    if mismatches.is_empty() {
        Ok(PERFECT_MATCH)
    } else {
        Err(PaletteError::ColorMismatch(mismatches))
    }
}
