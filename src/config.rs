use std::path::PathBuf;

use anyhow::Result;
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

pub static CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Portfolio content, TOML
    #[serde(default = "default_content")]
    pub content: PathBuf,
    /// Generated page
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Abort when a page check fails
    #[serde(default)]
    pub strict: bool,
}

fn default_content() -> PathBuf {
    "content.toml".into()
}

fn default_output() -> PathBuf {
    "dist/index.html".into()
}

impl Config {
    pub fn get_config() -> Result<Self> {
        Ok(Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("PORTFOLIO_"))
            .extract()?)
    }
}
