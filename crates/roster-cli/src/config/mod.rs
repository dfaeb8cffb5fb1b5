//! Backend URL resolution.
//!
//! The URL comes from `--api` or `ROSTER_API`, then the config file, then
//! the built-in default.

pub mod storage;

use std::fmt;

use anyhow::{Context, Result};
use tracing::debug;

use roster_core::ApiUrl;

/// Where the backend URL was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSource {
    Argument,
    ConfigFile,
    Default,
}

impl fmt::Display for ApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApiSource::Argument => "--api / ROSTER_API",
            ApiSource::ConfigFile => "config file",
            ApiSource::Default => "default",
        };
        f.write_str(label)
    }
}

/// Resolve the backend URL for this invocation.
pub fn resolve_api(argument: Option<&str>) -> Result<(ApiUrl, ApiSource)> {
    if let Some(value) = argument {
        let api = ApiUrl::new(value).context("Invalid --api URL")?;
        return Ok((api, ApiSource::Argument));
    }

    let stored = storage::load_config().context("Failed to load config")?;
    if let Some(value) = stored.api {
        let api = ApiUrl::new(&value).context("Invalid API URL in config file")?;
        return Ok((api, ApiSource::ConfigFile));
    }

    Ok((ApiUrl::default(), ApiSource::Default))
}

/// Resolve the backend URL, logging where it came from.
pub fn api_url(argument: Option<&str>) -> Result<ApiUrl> {
    let (api, source) = resolve_api(argument)?;
    debug!(api = %api, %source, "Resolved backend");
    Ok(api)
}
