use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BumpError, Result};

/// Represents the complete configuration for tagbump.
///
/// Everything has a sensible default; a configuration file is optional.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// The remote whose references are listed and to which tags are pushed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,
}

/// Returns the default remote name.
fn default_remote_name() -> String {
    "origin".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
        }
    }
}

/// Behavior customization that does not affect version arithmetic.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Suppress progress lines; errors and the final confirmation still
    /// print.
    #[serde(default)]
    pub quiet: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagbump.toml` in current directory
/// 3. `.tagbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./tagbump.toml").exists() {
        fs::read_to_string("./tagbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config = toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("cannot parse configuration: {}", e)))?;
    Ok(config)
}
