use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Args;
use crate::controller::badges::BadgeConfig;

pub const DEFAULT_DB_PATH: &str = "matchplay.db";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub db: Option<PathBuf>,
    pub badges: BadgeFileConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BadgeFileConfig {
    pub jekyll_hyde_min_spread: Option<i32>,
    pub ham_and_egg_struggle_min: Option<i32>,
}

/// Effective settings after merging the command line over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub db: PathBuf,
    pub badges: BadgeConfig,
}

/// # Errors
///
/// Returns an error if the config file cannot be read or parsed.
pub fn read_file_config(path: &Path) -> Result<FileConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config toml {}", path.display()))?;
    toml::from_str::<FileConfig>(&contents)
        .with_context(|| format!("parse config toml {}", path.display()))
}

/// Load settings from CLI and optional TOML file.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or malformed.
pub fn load_settings(args: &Args) -> Result<Settings> {
    let file_config = match args.config_toml.as_deref() {
        Some(path) => read_file_config(path)?,
        None => FileConfig::default(),
    };
    Ok(merge(args, file_config))
}

fn merge(args: &Args, file_config: FileConfig) -> Settings {
    let defaults = BadgeConfig::default();
    Settings {
        db: args
            .db
            .clone()
            .or(file_config.db)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
        badges: BadgeConfig {
            jekyll_hyde_min_spread: args
                .jekyll_hyde_min_spread
                .or(file_config.badges.jekyll_hyde_min_spread)
                .unwrap_or(defaults.jekyll_hyde_min_spread),
            ham_and_egg_struggle_min: args
                .ham_and_egg_struggle_min
                .or(file_config.badges.ham_and_egg_struggle_min)
                .unwrap_or(defaults.ham_and_egg_struggle_min),
        },
    }
}
