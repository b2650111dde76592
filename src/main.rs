mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use vogix_palette::{Config, Layout, debug};

fn main() -> Result<ExitCode> {
    debug::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Extract { self_check: false });

    // Loaded per command so that init works even with a broken config file
    let load_layout = || -> Result<Layout> {
        let config = Config::load()?;
        let layout = cli.dirs.apply(Layout::from_config(&config));
        debug::log_category(
            "CONFIG",
            &format!(
                "sources={} themes={}",
                layout.sources_dir.display(),
                layout.themes_dir.display()
            ),
        );
        Ok(layout)
    };

    let success = match command {
        Commands::Init { force } => commands::run_init(force)?,
        Commands::Extract { self_check: true } => commands::run_self_check(&load_layout()?)?,
        Commands::Extract { self_check: false } => commands::run_extract(&load_layout()?)?,
        Commands::Validate => commands::run_validate(&load_layout()?)?,
        Commands::Verify => commands::run_verify(&load_layout()?)?,
        Commands::Check => commands::run_check(&load_layout()?)?,
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
