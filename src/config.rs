// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;
use serde::Deserialize;
use std::{fs::File, io::Read, path::PathBuf};

use crate::password::{Options, MIN_LENGTH};

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) length: usize,
    pub(crate) include_symbols: bool,
    pub(crate) seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            length: MIN_LENGTH,
            include_symbols: true,
            seed: None,
        }
    }
}

impl Config {
    pub(crate) fn options(&self) -> Options {
        Options::new(self.length, self.include_symbols)
    }
}

/// Reads the configuration file, or falls back to defaults when no path is
/// given. An unreadable or malformed file is fatal.
pub(crate) fn read_config(config_path: Option<PathBuf>) -> Config {
    let Some(config_path) = config_path else {
        debug!("No config file given, using defaults");
        return Config::default();
    };

    let path_string = config_path.display().to_string();
    debug!("Reading config at: {path_string}");

    let mut config_data: String = String::new();
    let mut config_file: File = File::open(config_path)
        .unwrap_or_else(|e| panic!("Failed to read configuration file '{}': {}", path_string, e));
    config_file
        .read_to_string(&mut config_data)
        .expect("Failed to read configuration file");

    parse_config(&config_data)
}

fn parse_config(config_data: &str) -> Config {
    if config_data.trim().is_empty() {
        return Config::default();
    }

    serde_yaml::from_str(config_data).expect("Failed to parse configuration")
}
