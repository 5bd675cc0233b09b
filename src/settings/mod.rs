/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of torque-sim.
 *
 * torque-sim is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * torque-sim is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with torque-sim. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::path::PathBuf;
use config::{Config, ConfigError};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

const LOCAL_DATA_DIRNAME: &'static str = "TorqueSim";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    log_dir: String,
    decimal_places: u32,
    output_format: OutputFormat,
}

impl GlobalSettings {
    const LOG_DIR: &'static str = "log_dir";
    const DECIMAL_PLACES: &'static str = "decimal_places";
    const OUTPUT_FORMAT: &'static str = "output_format";
    pub const CONFIG_FILENAME: &'static str = "torque-sim-conf";
    pub const ENV_PREFIX: &'static str = "TORQUE_SIM";
    const DEFAULT_DECIMAL_PLACES: u32 = 2;

    pub fn default() -> Self {
        GlobalSettings {
            log_dir: get_default_log_path().to_string_lossy().into_owned(),
            decimal_places: GlobalSettings::DEFAULT_DECIMAL_PLACES,
            output_format: OutputFormat::default(),
        }
    }

    fn defaults_builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default(GlobalSettings::LOG_DIR, get_default_log_path().to_string_lossy().into_owned())?
            .set_default(GlobalSettings::DECIMAL_PLACES, GlobalSettings::DEFAULT_DECIMAL_PLACES as i64)?
            .set_default(GlobalSettings::OUTPUT_FORMAT, OutputFormat::default().as_str())
    }

    /// Load settings from defaults, then the optional config file, then the
    /// environment. A broken config file falls back to the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let loaded: Result<GlobalSettings, ConfigError> = GlobalSettings::defaults_builder()?
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME).required(false))
            .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX))
            .build()
            .and_then(|settings| settings.try_deserialize());
        match loaded {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                GlobalSettings::defaults_builder()?.build()?.try_deserialize()
            }
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.log_dir)
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn set_decimal_places(&mut self, decimal_places: u32) {
        self.decimal_places = decimal_places;
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn set_output_format(&mut self, output_format: OutputFormat) {
        self.output_format = output_format;
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&self)
    }

    pub fn write(&self) -> std::io::Result<PathBuf> {
        let path = PathBuf::from(format!("{}.toml", GlobalSettings::CONFIG_FILENAME));
        fs::write(&path, self.to_toml().map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)?;
        Ok(path)
    }
}

pub fn get_local_app_data_path() -> PathBuf {
    let mut local_data_root: PathBuf = match BaseDirs::new() {
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        Some(basedirs) => { basedirs.data_local_dir().to_path_buf() }
    };
    local_data_root.push(LOCAL_DATA_DIRNAME);
    local_data_root
}

pub fn get_default_log_path() -> PathBuf {
    let mut path = get_local_app_data_path();
    path.push("logs");
    path
}
