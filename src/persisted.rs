//! Nix theme file reading and rendering
//!
//! Generated files look like:
//!
//! ```nix
//! {
//!   name = "aikido";
//!
//!   dark = {
//!     base00 = "#262626";
//!   };
//!
//!   light = {
//!     base00 = "#f6f5f0";
//!   };
//! }
//! ```
//!
//! Reading is pattern based, not a Nix parser. A block runs from
//! `dark = {` / `light = {` to the first closing brace and must not be empty.

use crate::palette::{Color, ColorTable, Slot, ThemePair, Variant};
use crate::scan;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"name\s*=\s*"((?:[^"\\]|\\.)+)";"#).unwrap());

static DARK_BLOCK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bdark\s*=\s*\{([^}]+)\}").unwrap());

static LIGHT_BLOCK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blight\s*=\s*\{([^}]+)\}").unwrap());

/// The declared theme name as written (still escaped), if non-empty
pub fn theme_name(content: &str) -> Option<&str> {
    NAME_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Body of the `dark`/`light` block
pub fn block(content: &str, variant: Variant) -> Option<&str> {
    let regex = match variant {
        Variant::Dark => &DARK_BLOCK_REGEX,
        Variant::Light => &LIGHT_BLOCK_REGEX,
    };
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Colors declared in a block body; a repeated slot keeps its last value
pub fn parse_block(body: &str) -> ColorTable {
    scan::assignments(body).collect()
}

/// Colors of one variant, empty when the block is absent
pub fn read_table(content: &str, variant: Variant) -> ColorTable {
    block(content, variant).map(parse_block).unwrap_or_default()
}

/// The `base0F` value recorded for one variant
pub fn accent_color(content: &str, variant: Variant) -> Option<Color> {
    read_table(content, variant).get(Slot::ACCENT).cloned()
}

/// Render a theme pair as a Nix attribute set
pub fn render(theme: &ThemePair) -> String {
    let mut out = String::new();

    out.push_str("{\n");
    let _ = writeln!(out, "  name = \"{}\";", escape_string(&theme.name));

    for variant in Variant::all() {
        out.push('\n');
        let _ = writeln!(out, "  {variant} = {{");
        for (slot, color) in theme.table(*variant).iter() {
            let _ = writeln!(out, "    {slot} = \"{color}\";");
        }
        out.push_str("  };\n");
    }

    out.push_str("}\n");
    out
}

/// Escape text for a double-quoted Nix string
fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("${", "\\${")
}
