use anyhow::{Context, Result};
use std::env;
use url::Url;

pub const API_URL_VAR: &str = "LEADS_API_URL";
pub const DEFAULT_API_URL: &str = "https://leads-management-backend.vercel.app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Always ends in `/`, so endpoint paths are joined below it.
    pub api_url: Url,
    pub with_credentials: bool,
}

impl Config {
    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Self {
            api_url: parse_base_url(api_url)?,
            with_credentials: true,
        })
    }

    /// Runtime environment first, then the value baked in at build time.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var(API_URL_VAR)
            .ok()
            .or_else(|| option_env!("LEADS_API_URL").map(String::from))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(&api_url).with_context(|| format!("invalid {API_URL_VAR}"))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).with_context(|| format!("not a URL: {raw:?}"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("{raw:?} cannot be used as a base URL");
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
