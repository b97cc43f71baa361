//! Run settings and the optional configuration file.
//!
//! Settings are assembled once from the command line and the configuration
//! file, then passed to the pipeline as an immutable value.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::render::RenderOptions;
use crate::report::ErrorPolicy;

/// Default path for the configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.ssm-output/config.yml";

/// Region used when neither the command line nor the config file names one
pub const DEFAULT_REGION: &str = "ap-southeast-2";

/// Values read from the configuration file. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub region: String,
    pub profile: Option<String>,
    pub command_id: String,
    pub render: RenderOptions,
    pub policy: ErrorPolicy,
}

impl Settings {
    pub fn new(command_id: &str, region: &str) -> Self {
        Self {
            region: region.to_string(),
            profile: None,
            command_id: command_id.to_string(),
            render: RenderOptions::default(),
            policy: ErrorPolicy::default(),
        }
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use ssm_output_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Reads the configuration file, returning defaults if it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid YAML.
pub fn read_file_config(config_path: &str) -> Result<FileConfig> {
    if !Path::new(config_path).exists() {
        return Ok(FileConfig::default());
    }

    let reader = File::open(config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;

    // An empty file deserializes to `None` rather than an empty mapping
    let parsed: serde_yaml::Result<Option<FileConfig>> = serde_yaml::from_reader(reader);

    match parsed {
        Ok(file_config) => Ok(file_config.unwrap_or_default()),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )),
    }
}

/// Picks the region: command line first, then config file, then the default.
pub fn resolve_region(region_arg: Option<&str>, file_config: &FileConfig) -> String {
    region_arg
        .or(file_config.region.as_deref())
        .unwrap_or(DEFAULT_REGION)
        .to_string()
}
