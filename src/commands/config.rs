//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use sortviz::theme::current_theme;
use sortviz::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file path, whether or not it exists.
pub fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Write the default config unless a file already exists.
pub fn handle_init(path: &Path) -> Result<()> {
    let theme = current_theme();
    if path.exists() {
        println!(
            "{}",
            theme.primary_text(&format!("Config already exists: {}", path.display()))
        );
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        theme.success_text(&format!("Created {}", path.display()))
    );
    Ok(())
}
