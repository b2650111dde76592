//! Error types for palette extraction and checking
//!
//! Every failure is scoped to a single theme; batch runners turn these into
//! per-item diagnostics instead of aborting.

use crate::extract::ExtractWarning;
use crate::palette::{Color, Slot, Variant, join_slots};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All per-theme failures
#[derive(Debug, Error)]
pub enum PaletteError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A variant ended up with fewer than 8 slots
    #[error("Insufficient colors: dark={dark}, light={light}")]
    InsufficientColors {
        dark: usize,
        light: usize,
        warnings: Vec<ExtractWarning>,
    },

    /// Persisted theme file lacks required structure
    #[error("{0}")]
    MalformedPersistedFile(StructureProblem),

    /// Source document for a persisted theme does not exist
    #[error("Source not found: {}", .0.display())]
    SourceMissing(PathBuf),

    /// Persisted theme file does not exist
    #[error("Theme file not found: {}", .0.display())]
    PersistedMissing(PathBuf),

    /// Source and persisted colors disagree
    #[error("{}", describe_mismatches(.0))]
    ColorMismatch(Vec<Mismatch>),
}

impl PaletteError {
    /// Extraction warnings carried alongside the failure
    pub fn warnings(&self) -> &[ExtractWarning] {
        match self {
            PaletteError::InsufficientColors { warnings, .. } => warnings.as_slice(),
            _ => &[],
        }
    }
}

/// Result type alias using PaletteError
pub type Result<T> = std::result::Result<T, PaletteError>;

/// What is wrong with a persisted theme file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureProblem {
    MissingName,
    MissingBlock(Variant),
    /// Slots absent (or not a valid `#rrggbb`) per variant
    MissingSlots { dark: Vec<Slot>, light: Vec<Slot> },
}

impl fmt::Display for StructureProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureProblem::MissingName => write!(f, "Missing name"),
            StructureProblem::MissingBlock(variant) => write!(f, "Missing {variant} section"),
            StructureProblem::MissingSlots { dark, light } => {
                let mut parts = Vec::new();
                if !dark.is_empty() {
                    parts.push(format!("Dark missing: {}", join_slots(dark)));
                }
                if !light.is_empty() {
                    parts.push(format!("Light missing: {}", join_slots(light)));
                }
                write!(f, "{}", parts.join("; "))
            }
        }
    }
}

/// One slot whose source and persisted colors differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub variant: Variant,
    pub slot: Slot,
    pub source: Color,
    pub persisted: Color,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: SVG={} vs Nix={}",
            self.slot, self.source, self.persisted
        )
    }
}

/// `Dark: a, b; Light: c`
fn describe_mismatches(mismatches: &[Mismatch]) -> String {
    Variant::all()
        .iter()
        .filter_map(|variant| {
            let entries: Vec<String> = mismatches
                .iter()
                .filter(|m| m.variant == *variant)
                .map(|m| m.to_string())
                .collect();
            (!entries.is_empty()).then(|| format!("{}: {}", variant.label(), entries.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(index: u8) -> Slot {
        Slot::new(index).unwrap()
    }

    #[test]
    fn test_missing_slots_message() {
        let problem = StructureProblem::MissingSlots {
            dark: vec![slot(8), slot(9)],
            light: vec![slot(0x0F)],
        };
        assert_eq!(
            problem.to_string(),
            "Dark missing: base08, base09; Light missing: base0F"
        );

        let only_light = StructureProblem::MissingSlots {
            dark: vec![],
            light: vec![slot(1)],
        };
        assert_eq!(only_light.to_string(), "Light missing: base01");
    }

    #[test]
    fn test_missing_block_message() {
        let err =
            PaletteError::MalformedPersistedFile(StructureProblem::MissingBlock(Variant::Light));
        assert_eq!(err.to_string(), "Missing light section");
    }

    #[test]
    fn test_mismatch_message_groups_by_variant() {
        let mismatches = vec![
            Mismatch {
                variant: Variant::Light,
                slot: slot(2),
                source: "#222222".parse().unwrap(),
                persisted: "#333333".parse().unwrap(),
            },
            Mismatch {
                variant: Variant::Dark,
                slot: slot(0),
                source: "#000000".parse().unwrap(),
                persisted: "#010101".parse().unwrap(),
            },
        ];

        let err = PaletteError::ColorMismatch(mismatches);
        assert_eq!(
            err.to_string(),
            "Dark: base00: SVG=#000000 vs Nix=#010101; Light: base02: SVG=#222222 vs Nix=#333333"
        );
    }

    #[test]
    fn test_insufficient_colors_message() {
        let err = PaletteError::InsufficientColors {
            dark: 5,
            light: 8,
            warnings: vec![ExtractWarning::MissingRequiredSlot {
                variant: Variant::Dark,
                slots: vec![slot(5), slot(6), slot(7)],
            }],
        };
        assert_eq!(err.to_string(), "Insufficient colors: dark=5, light=8");
        assert_eq!(err.warnings().len(), 1);
        assert!(PaletteError::SourceMissing(PathBuf::from("a.svg")).warnings().is_empty());
    }
}
