//! Config subcommands handler

use anyhow::{bail, Result};

use crate::config::Config;
use crate::theme::Theme;

/// Show current configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let theme = Theme::by_name(&config.display.theme);
    if atty::is(atty::Stream::Stdout) {
        println!("{}", theme.body_text(&toml_str));
    } else {
        println!("{}", toml_str);
    }
    Ok(())
}

/// Write the default configuration file.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
