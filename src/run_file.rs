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

//! TOML description of a single calculation.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::info;
use powertrain::{EngineInputs, GearSet, VehicleInputs};
use crate::error::CliError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunFile {
    pub engine: EngineInputs,
    pub gears: GearSet,
    pub vehicle: VehicleInputs,
}

impl RunFile {
    pub fn load_from_path(path: &Path) -> Result<RunFile, CliError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::FailedToLoad(path.display().to_string(), e.to_string())
        })?;
        let run = RunFile::from_toml(&contents).map_err(|e| {
            CliError::InvalidRunFile(path.display().to_string(), e)
        })?;
        info!("Loaded {} run file {}", run.engine.engine_type().as_str(), path.display());
        Ok(run)
    }

    pub fn from_toml(contents: &str) -> Result<RunFile, toml::de::Error> {
        toml::from_str(contents)
    }
}
