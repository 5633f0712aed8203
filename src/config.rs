use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::adapters::github::DEFAULT_API_BASE_URL;
use crate::cli::CliArgs;

/// Entries revealed per "show more"
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    pub api_base_url: String,
    pub user_agent: String,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub page_size: usize,
    /// Collapse the timeline back to one page when a new user is loaded
    pub reset_visible_on_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!("gh-activity/", env!("CARGO_PKG_VERSION")).to_string(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            reset_visible_on_load: true,
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "gh-activity")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("gh-activity.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if config.ui.page_size == 0 {
            config.ui.page_size = DEFAULT_PAGE_SIZE;
        }

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config.clone())?;

        // CLI args override config file
        if let Some(api_url) = &cli_args.api_url {
            config.api_base_url = api_url.clone();
        }

        Ok(config)
    }
}
