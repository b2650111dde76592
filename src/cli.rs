//! CLI argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vogix_palette::Layout;

#[derive(Parser)]
#[command(name = "vogix-palette")]
#[command(
    author,
    version,
    about = "Extract vogix16 palettes from SVG previews into Nix theme files"
)]
pub struct Cli {
    #[command(flatten)]
    pub dirs: DirArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Directory overrides shared by every command
#[derive(Args, Debug, Default)]
pub struct DirArgs {
    /// Directory containing the SVG previews (default: assets)
    #[arg(long, global = true)]
    pub sources: Option<PathBuf>,

    /// Directory containing the generated theme files (default: themes)
    #[arg(long, global = true)]
    pub themes: Option<PathBuf>,
}

impl DirArgs {
    /// Apply the command-line overrides on top of a configured layout
    pub fn apply(&self, mut layout: Layout) -> Layout {
        if let Some(ref sources) = self.sources {
            layout.sources_dir = sources.clone();
        }
        if let Some(ref themes) = self.themes {
            layout.themes_dir = themes.clone();
        }
        layout
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract palettes from every SVG preview and write theme files
    Extract {
        /// Check extraction of the aikido preview against known colors instead
        #[arg(long)]
        self_check: bool,
    },
    /// Check that every theme file has all sixteen colors in both variants
    Validate,
    /// Check that every theme file matches its SVG preview
    Verify,
    /// Run extract, validate and verify in sequence
    Check,
    /// Write a default .vogix-palette.toml
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}
