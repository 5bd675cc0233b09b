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

use std::io;
use powertrain::DomainError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("io error. {0}")]
    IoError(#[from] io::Error),
    #[error("failed to read `{0}`. {1}")]
    FailedToLoad(String, String),
    #[error("invalid run file `{0}`. {1}")]
    InvalidRunFile(String, toml::de::Error),
    #[error("settings error. {0}")]
    SettingsError(#[from] config::ConfigError),
    #[error("json encoding error. {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("toml encoding error. {0}")]
    TomlError(#[from] toml::ser::Error),
    #[error("{0}")]
    Domain(#[from] DomainError),
}
