use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use anyhow::Result;

#[derive(Deserialize, Debug)]
pub struct EntryParameters {
    pub scheduled_tstamp: u32,
    #[serde(default)]
    pub actual_tstamp: Option<u32>,
    #[serde(default)]
    pub hours: u8,
    #[serde(default)]
    pub minutes: u8,
    #[serde(default)]
    pub city_index: u8,
}

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub entry: EntryParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}
