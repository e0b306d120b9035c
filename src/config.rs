//! Application configuration.
//!
//! Optional TOML file at `<config dir>/tagpress/config.toml`
//! (`XDG_CONFIG_HOME` is checked first, which also makes it easy to test).
//! Every key has a default, so a missing file or a missing key is fine.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tagpress";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Text placed between list entries when a list field is shown in the form.
    #[serde(default = "default_list_joiner")]
    pub list_joiner: String,
    /// Character that splits a list field back into entries on save.
    #[serde(default = "default_list_separator")]
    pub list_separator: char,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub show_debug_on_start: bool,
}

fn default_list_joiner() -> String {
    "; ".to_string()
}

fn default_list_separator() -> char {
    ';'
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_joiner: default_list_joiner(),
            list_separator: default_list_separator(),
            log_level: default_log_level(),
            show_debug_on_start: false,
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf, Box<dyn Error>> {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config).join(APP_DIR)
        } else {
            dirs::config_dir()
                .ok_or("Unable to find config directory")?
                .join(APP_DIR)
        };
        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf, Box<dyn Error>> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load from the default location. Missing file -> defaults.
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            return Ok(Default::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config.sanitized())
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }

    /// A separator that is whitespace would split every multi-word name.
    fn sanitized(mut self) -> Self {
        if self.list_separator.is_whitespace() {
            self.list_separator = default_list_separator();
        }
        if self.list_joiner.trim().is_empty() {
            self.list_joiner = default_list_joiner();
        }
        self
    }
}
