use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    data_file: Option<PathBuf>,
    strict: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub data_file: PathBuf,
    pub strict: bool,
}

pub fn load() -> Result<Config> {
    let file = read_config_file()?;

    // Environment variable wins over the config file
    let data_file = match env::var("WATCHLOG_DATA_FILE") {
        Ok(path) => PathBuf::from(path),
        Err(_) => file
            .data_file
            .unwrap_or_else(|| get_config_dir_path().join("data.json")),
    };

    Ok(Config {
        data_file,
        strict: file.strict.unwrap_or(false),
    })
}

fn read_config_file() -> Result<ConfigFile> {
    let config_path = get_config_path();
    if config_path.exists() {
        let config_content = fs::read_to_string(&config_path)?;
        let config: ConfigFile = toml::from_str(&config_content)?;
        return Ok(config);
    }

    Ok(ConfigFile::default())
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("watchlog"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}
