//! Config subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use roster_core::ApiUrl;

use crate::config::{resolve_api, storage};
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Display the backend in effect and where it came from
    Show,

    /// Persist a default backend URL
    SetApi {
        /// Backend URL (https://, http://localhost or file://)
        url: String,
    },

    /// Remove the persisted defaults
    Clear,
}

pub fn run(cmd: ConfigCommand, api: Option<&str>) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(api),
        ConfigSubcommand::SetApi { url } => set_api(&url),
        ConfigSubcommand::Clear => clear(),
    }
}

fn show(api: Option<&str>) -> Result<()> {
    let (url, source) = resolve_api(api)?;
    let stored = storage::load_config().context("Failed to load config")?;

    output::field("API", url.as_str());
    output::field("Source", &source.to_string());
    output::field("Config file", &storage::config_path()?.display().to_string());
    if let Some(updated_at) = stored.updated_at {
        output::field("Updated", &updated_at.to_rfc3339());
    }
    Ok(())
}

fn set_api(url: &str) -> Result<()> {
    let url = ApiUrl::new(url).context("Invalid API URL")?;

    let mut stored = storage::load_config().context("Failed to load config")?;
    stored.api = Some(url.to_string());
    let path = storage::save_config(&mut stored).context("Failed to save config")?;

    output::success(&format!("Default API set to {}", url));
    output::field("Config file", &path.display().to_string());
    Ok(())
}

fn clear() -> Result<()> {
    if storage::clear_config()? {
        output::success("Config cleared");
    } else {
        output::note("No config file to clear.");
    }
    Ok(())
}
