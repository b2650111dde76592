//! Init command implementation

use anyhow::Result;
use vogix_palette::Config;

/// Write a default configuration file
pub fn run_init(force: bool) -> Result<bool> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        println!(
            "📄 Configuration file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
        return Ok(true);
    }

    Config::generate_default(&config_path)?;
    println!("✅ Created configuration: {}", config_path.display());
    Ok(true)
}
