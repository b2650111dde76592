//! vogix-palette - vogix16 palette extraction
//!
//! Recovers dark/light base16 palettes from SVG theme previews, writes them as
//! Nix theme files, and checks generated files against their sources.
//!
//! # Modules
//!
//! - [`palette`] - Slots, colors and the dark/light theme pair
//! - [`scan`] - `baseXX = "#rrggbb"` line scanner
//! - [`extract`] - SVG preview extraction
//! - [`persisted`] - Nix theme file reading and rendering
//! - [`generate`] - Theme file generation with `base0F` preservation
//! - [`validate`] - Structural validation of theme files
//! - [`verify`] - Source/theme-file agreement checks
//! - [`batch`] - Fail-soft batch runner
//! - [`layout`] - Theme file discovery

pub mod batch;
pub mod config;
pub mod debug;
pub mod error;
pub mod extract;
pub mod generate;
pub mod layout;
pub mod palette;
pub mod persisted;
pub mod scan;
pub mod validate;
pub mod verify;

// Re-export commonly used types
pub use batch::{BatchReport, run_batch};
pub use config::Config;
pub use error::{Mismatch, PaletteError, StructureProblem};
pub use extract::{ExtractWarning, Extraction, extract_file, extract_str};
pub use generate::{Generated, generate};
pub use layout::Layout;
pub use palette::{Color, ColorTable, Slot, ThemePair, Variant};
pub use validate::{COMPLETE_STRUCTURE, validate_file};
pub use verify::{PERFECT_MATCH, verify_theme};
