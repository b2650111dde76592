//! Structural validation of generated theme files
//!
//! Stricter than extraction: a valid file names the theme and carries all
//! sixteen slots in both blocks.

use crate::error::{PaletteError, Result, StructureProblem};
use crate::palette::{Slot, Variant};
use crate::persisted;
use std::fs;
use std::path::Path;

/// Success message for a structurally complete file
pub const COMPLETE_STRUCTURE: &str = "Complete structure";

/// Check the structure of theme file content
pub fn check_structure(content: &str) -> Result<()> {
    let malformed = |problem: StructureProblem| -> Result<()> {
        Err(PaletteError::MalformedPersistedFile(problem))
    };

    if persisted::theme_name(content).is_none() {
        return malformed(StructureProblem::MissingName);
    }

    let Some(dark_block) = persisted::block(content, Variant::Dark) else {
        return malformed(StructureProblem::MissingBlock(Variant::Dark));
    };
    let Some(light_block) = persisted::block(content, Variant::Light) else {
        return malformed(StructureProblem::MissingBlock(Variant::Light));
    };

    let dark = persisted::parse_block(dark_block).missing(Slot::all());
    let light = persisted::parse_block(light_block).missing(Slot::all());

    if dark.is_empty() && light.is_empty() {
        Ok(())
    } else {
        malformed(StructureProblem::MissingSlots { dark, light })
    }
}

/// Validate a theme file on disk
pub fn validate_file(path: &Path) -> Result<&'static str> {
    let content = fs::read_to_string(path)?;
    check_structure(&content)?;
    Ok(COMPLETE_STRUCTURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use crate::palette::{Color, ThemePair};
    use crate::persisted::render;
    use tempfile::TempDir;

    fn color(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn full_theme() -> ThemePair {
        let mut theme = ThemePair::new("full");
        for s in Slot::all() {
            theme.dark.insert(s, color(&format!("#2020{:02x}", s.index())));
            theme.light.insert(s, color(&format!("#d0d0{:02x}", s.index())));
        }
        theme
    }

    fn problem(content: &str) -> StructureProblem {
        match check_structure(content) {
            Err(PaletteError::MalformedPersistedFile(problem)) => problem,
            other => panic!("expected MalformedPersistedFile, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_structure() {
        assert!(check_structure(&render(&full_theme())).is_ok());
    }

    #[test]
    fn test_missing_name() {
        let content = render(&full_theme()).replace("name = \"full\";", "");
        assert_eq!(problem(&content), StructureProblem::MissingName);

        let content = render(&full_theme()).replace("name = \"full\";", "name = \"\";");
        assert_eq!(problem(&content), StructureProblem::MissingName);
    }

    #[test]
    fn test_missing_blocks() {
        let content = render(&full_theme()).replace("light = {", "bright: {");
        assert_eq!(problem(&content), StructureProblem::MissingBlock(Variant::Light));

        let content = render(&full_theme()).replace("dark = {", "murky: {");
        assert_eq!(problem(&content), StructureProblem::MissingBlock(Variant::Dark));
    }

    #[test]
    fn test_empty_block_is_missing() {
        let content = "{\n  name = \"bare\";\n  dark = {};\n  light = {};\n}\n";
        assert_eq!(problem(content), StructureProblem::MissingBlock(Variant::Dark));
        assert_eq!(
            PaletteError::MalformedPersistedFile(problem(content)).to_string(),
            "Missing dark section"
        );
    }

    #[test]
    fn test_escaped_name_is_present() {
        let mut theme = full_theme();
        theme.name = r#"odd "quoted" \ name"#.to_string();
        assert!(check_structure(&render(&theme)).is_ok());
    }

    #[test]
    fn test_invalid_color_counts_as_missing() {
        let content = render(&full_theme()).replace("\"#2020", "\"#zz20");
        match problem(&content) {
            StructureProblem::MissingSlots { dark, light } => {
                assert_eq!(dark.len(), 16);
                assert!(light.is_empty());
            }
            other => panic!("unexpected problem: {other:?}"),
        }
    }

    #[test]
    fn test_eight_slot_theme_fails_validation() {
        let mut theme = ThemePair::new("octet");
        for i in 0..8 {
            let s = Slot::new(i).unwrap();
            theme.dark.insert(s, color(&format!("#a0a0{i:02x}")));
            theme.light.insert(s, color(&format!("#b0b0{i:02x}")));
        }

        let err = check_structure(&render(&theme)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dark missing: base08, base09, base0A, base0B, base0C, base0D, base0E, base0F; \
             Light missing: base08, base09, base0A, base0B, base0C, base0D, base0E, base0F"
        );
    }

    #[test]
    fn test_generate_then_validate() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("full.nix");

        generate(full_theme(), &path).unwrap();
        assert_eq!(validate_file(&path).unwrap(), COMPLETE_STRUCTURE);
    }

    #[test]
    fn test_eight_slot_pipeline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("octet.nix");
        let svg: String = (0..8)
            .flat_map(|i| {
                [
                    format!(r##"<text x="10">base0{i} = "#00000{i}"</text>"##),
                    format!(r##"<text x="500">base0{i} = "#ffffF{i}"</text>"##),
                ]
            })
            .collect::<Vec<_>>()
            .join("\n");

        let extraction = crate::extract::extract_str("octet", &svg).unwrap();
        assert!(extraction.warnings.is_empty());
        generate(extraction.theme, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("base07 = \"#fffff7\";"));
        assert!(!written.contains("base08"));

        match validate_file(&path) {
            Err(PaletteError::MalformedPersistedFile(StructureProblem::MissingSlots {
                dark,
                light,
            })) => {
                let upper: Vec<Slot> = (8..16).filter_map(Slot::new).collect();
                assert_eq!(dark, upper);
                assert_eq!(light, upper);
            }
            other => panic!("expected missing slots, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = validate_file(&temp.path().join("absent.nix"));
        assert!(matches!(result, Err(PaletteError::Io(_))));
    }
}
