//! Palette extraction from SVG theme previews
//!
//! A preview draws the dark variant's swatches on the left and the light
//! variant's on the right. Each swatch label carries a `baseXX = "#rrggbb"`
//! assignment, usually on a line with an `x="..."` attribute.
//!
//! Classification rules:
//! - `x < 300` goes to dark, `x >= 300` goes to light
//! - without a position, the first sighting of a slot goes to dark and the
//!   second to light; later sightings are ignored
//! - within a variant the first value for a slot wins

use crate::debug;
use crate::error::{PaletteError, Result};
use crate::palette::{REQUIRED_SLOTS, Slot, ThemePair, Variant, join_slots};
use crate::scan::{self, Assignment};
use std::fmt;
use std::fs;
use std::path::Path;

/// Positions at or beyond this belong to the light variant
pub const LIGHT_THRESHOLD: u64 = 300;

/// File-name prefix stripped to obtain the theme name
pub const DEFAULT_SOURCE_PREFIX: &str = "vogix16_";

/// Non-fatal extraction finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractWarning {
    /// Required slots (`base00`..`base07`) absent from a variant
    MissingRequiredSlot { variant: Variant, slots: Vec<Slot> },
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractWarning::MissingRequiredSlot { variant, slots } => {
                write!(f, "{} variant missing: {}", variant.label(), join_slots(slots))
            }
        }
    }
}

/// Successful extraction, possibly with warnings
#[derive(Debug, Clone)]
pub struct Extraction {
    pub theme: ThemePair,
    pub warnings: Vec<ExtractWarning>,
}

/// Variant for a swatch at horizontal position `x`
pub fn variant_at(x: u64) -> Variant {
    if x < LIGHT_THRESHOLD {
        Variant::Dark
    } else {
        Variant::Light
    }
}

/// Classify every assignment in `content` into dark/light tables
///
/// No minimum is enforced; the verifier uses this directly.
pub fn scan_source(name: &str, content: &str) -> ThemePair {
    let mut theme = ThemePair::new(name);

    for Assignment { slot, color, x } in content.lines().filter_map(scan::parse_line) {
        match x {
            Some(x) => {
                theme.table_mut(variant_at(x)).insert_if_absent(slot, color);
            }
            None => {
                if !theme.dark.insert_if_absent(slot, color.clone()) {
                    theme.light.insert_if_absent(slot, color);
                }
            }
        }
    }

    theme
}

/// Extract a theme pair, enforcing the 8-slot minimum per variant
///
/// Missing required slots are reported on both outcomes; a failed minimum
/// carries them in [`PaletteError::InsufficientColors`].
pub fn extract_str(name: &str, content: &str) -> Result<Extraction> {
    let theme = scan_source(name, content);

    let warnings: Vec<ExtractWarning> = Variant::all()
        .iter()
        .filter_map(|variant| {
            let slots = theme.table(*variant).missing(Slot::required());
            (!slots.is_empty()).then_some(ExtractWarning::MissingRequiredSlot {
                variant: *variant,
                slots,
            })
        })
        .collect();

    let (dark, light) = (theme.dark.len(), theme.light.len());
    debug::log_category(
        "EXTRACT",
        &format!("{name}: dark={dark} light={light} warnings={}", warnings.len()),
    );

    let minimum = usize::from(REQUIRED_SLOTS);
    if dark < minimum || light < minimum {
        return Err(PaletteError::InsufficientColors {
            dark,
            light,
            warnings,
        });
    }

    Ok(Extraction { theme, warnings })
}

/// Read and extract a source document from disk
pub fn extract_file(path: &Path, prefix: &str) -> Result<Extraction> {
    let content = fs::read_to_string(path)?;
    extract_str(&theme_name(path, prefix), &content)
}

/// Theme name from a source path: the file stem minus `prefix`
pub fn theme_name(path: &Path, prefix: &str) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match stem.strip_prefix(prefix) {
        Some(name) => name.to_string(),
        None => stem,
    }
}

/// Check selected slots against expected colors
///
/// Returns one message per disagreement; empty when all match.
pub fn expectation_failures(
    theme: &ThemePair,
    expected: &[(Variant, Slot, &str)],
) -> Vec<String> {
    expected
        .iter()
        .filter_map(|(variant, slot, want)| {
            let actual = theme.table(*variant).get(*slot);
            match actual {
                Some(color) if color.as_str().eq_ignore_ascii_case(want) => None,
                Some(color) => Some(format!(
                    "{} {slot}: expected {want}, got {color}",
                    variant.label()
                )),
                None => Some(format!("{} {slot}: expected {want}, got MISSING", variant.label())),
            }
        })
        .collect()
}
