//! Line scanner for `baseXX = "#rrggbb"` assignments
//!
//! Both SVG previews and generated Nix files spell colors the same way, so one
//! scanner serves the extractor, the validator and the verifier.

use crate::palette::{Color, Slot};
use once_cell::sync::Lazy;
use regex::Regex;

static ASSIGNMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(base[0-9A-F]{2})\s*=\s*"(#[0-9a-fA-F]{6})""#).unwrap()
});

/// Any attribute ending in `x`, so `dx="..."` counts as a position too
static POSITION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"x="(\d+)""#).unwrap());

/// A color assignment found in text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub slot: Slot,
    pub color: Color,
    /// Horizontal position from an `x="..."` attribute on the same line
    pub x: Option<u64>,
}

/// Find the first slot assignment on a line, plus its position if the line has one
pub fn parse_line(line: &str) -> Option<Assignment> {
    let (slot, color) = assignments(line).next()?;
    let x = POSITION_REGEX
        .captures(line)
        // Digit runs too long for u64 are far right of any split point
        .map(|caps| caps[1].parse::<u64>().unwrap_or(u64::MAX));

    Some(Assignment { slot, color, x })
}

/// Every slot assignment in `text`, in document order
///
/// Keys outside `base00`..`base0F` are skipped.
pub fn assignments(text: &str) -> impl Iterator<Item = (Slot, Color)> + '_ {
    ASSIGNMENT_REGEX.captures_iter(text).filter_map(|caps| {
        let slot = caps[1].parse::<Slot>().ok()?;
        let color = caps[2].parse::<Color>().ok()?;
        Some((slot, color))
    })
}
