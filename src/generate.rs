//! Nix theme file generation
//!
//! Writes an extracted [`ThemePair`] to disk. When the new extraction has no
//! dark `base0F` and a theme file already exists, the existing `base0F` of
//! each variant is carried over, since that accent is often curated by hand
//! rather than drawn in the preview.

use crate::debug;
use crate::error::Result;
use crate::palette::{Color, Slot, ThemePair, Variant};
use crate::persisted;
use std::fs;
use std::path::Path;

/// Outcome of writing one theme file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Accent colors carried over from the previous file
    pub preserved: Vec<(Variant, Color)>,
}

/// Splice the previous file's `base0F` values into `theme`
///
/// Applies only when the dark table lacks `base0F`. Each variant is looked up
/// in its own block; a variant without a recorded accent is left as is.
pub fn preserve_accent(theme: &mut ThemePair, existing: &str) -> Vec<(Variant, Color)> {
    if theme.dark.contains(Slot::ACCENT) {
        return Vec::new();
    }

    let mut preserved = Vec::new();
    for variant in Variant::all() {
        if let Some(color) = persisted::accent_color(existing, *variant) {
            theme.table_mut(*variant).insert(Slot::ACCENT, color.clone());
            preserved.push((*variant, color));
        }
    }
    preserved
}

/// Write `theme` to `path`, replacing any previous file
pub fn generate(mut theme: ThemePair, path: &Path) -> Result<Generated> {
    let preserved = if path.exists() && !theme.dark.contains(Slot::ACCENT) {
        let existing = fs::read_to_string(path)?;
        preserve_accent(&mut theme, &existing)
    } else {
        Vec::new()
    };

    for (variant, color) in &preserved {
        debug::log_category(
            "GENERATE",
            &format!("{}: preserved {variant} base0F {color}", theme.name),
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, persisted::render(&theme))?;
    debug::log_file("wrote", path);

    Ok(Generated { preserved })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn slot(index: u8) -> Slot {
        Slot::new(index).unwrap()
    }

    fn color(s: &str) -> Color {
        s.parse().unwrap()
    }

    /// Theme with slots 0..count in both variants
    fn theme_with(name: &str, count: u8) -> ThemePair {
        let mut theme = ThemePair::new(name);
        for i in 0..count {
            theme.dark.insert(slot(i), color(&format!("#1010{i:02x}")));
            theme.light.insert(slot(i), color(&format!("#e0e0{i:02x}")));
        }
        theme
    }

    const EXISTING: &str = r##"{
  name = "aikido";

  dark = {
    base00 = "#000000";
    base0F = "#abcdef";
  };

  light = {
    base00 = "#ffffff";
    base0F = "#fedcba";
  };
}
"##;

    #[test]
    fn test_generate_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("aikido.nix");

        let result = generate(theme_with("aikido", 16), &path).unwrap();
        assert!(result.preserved.is_empty());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  name = \"aikido\";\n"));
        assert!(content.contains("    base0F = \"#10100f\";"));
    }

    #[test]
    fn test_generate_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("themes").join("new.nix");

        generate(theme_with("new", 8), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_preserves_accent_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("aikido.nix");
        fs::write(&path, EXISTING).unwrap();

        let result = generate(theme_with("aikido", 15), &path).unwrap();
        assert_eq!(
            result.preserved,
            vec![
                (Variant::Dark, color("#abcdef")),
                (Variant::Light, color("#fedcba")),
            ]
        );

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(persisted::accent_color(&written, Variant::Dark), Some(color("#abcdef")));
        assert_eq!(persisted::accent_color(&written, Variant::Light), Some(color("#fedcba")));
        // Everything else comes from the new extraction
        assert_eq!(
            persisted::read_table(&written, Variant::Dark).get(slot(0)),
            Some(&color("#101000"))
        );
    }

    #[test]
    fn test_new_accent_overrides_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("aikido.nix");
        fs::write(&path, EXISTING).unwrap();

        let result = generate(theme_with("aikido", 16), &path).unwrap();
        assert!(result.preserved.is_empty());

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(persisted::accent_color(&written, Variant::Dark), Some(color("#10100f")));
        assert_eq!(persisted::accent_color(&written, Variant::Light), Some(color("#e0e00f")));
    }

    #[test]
    fn test_nothing_preserved_when_existing_lacks_accent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plain.nix");
        fs::write(&path, persisted::render(&theme_with("plain", 8))).unwrap();

        let result = generate(theme_with("plain", 8), &path).unwrap();
        assert!(result.preserved.is_empty());

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("base0F"));
    }

    #[test]
    fn test_preserve_accent_per_block() {
        let existing = "{\n  name = \"x\";\n  dark = {\n    base00 = \"#000000\";\n  };\n  \
                        light = {\n    base0F = \"#123456\";\n  };\n}\n";
        let mut theme = theme_with("x", 8);

        let preserved = preserve_accent(&mut theme, existing);
        assert_eq!(preserved, vec![(Variant::Light, color("#123456"))]);
        assert!(!theme.dark.contains(Slot::ACCENT));
        assert_eq!(theme.light.get(Slot::ACCENT), Some(&color("#123456")));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stable.nix");
        fs::write(&path, EXISTING).unwrap();

        generate(theme_with("stable", 12), &path).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        generate(theme_with("stable", 12), &path).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }
}
