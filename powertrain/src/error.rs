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

use std::result;

pub type Result<T> = result::Result<T, DomainError>;

/// Every way a set of powertrain inputs can be rejected. The first violated
/// invariant found during validation is returned and nothing is computed.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum DomainError {
    #[error("engine rpm must be greater than zero, got `{0}`")]
    NonPositiveRpm(f64),
    #[error("ratio for `{gear}` must be greater than zero, got `{ratio}`")]
    NonPositiveGearRatio { gear: String, ratio: f64 },
    #[error("final drive ratio must be greater than zero, got `{0}`")]
    NonPositiveFinalDrive(f64),
    #[error("tire diameter must be greater than zero, got `{0}` m")]
    NonPositiveTireDiameter(f64),
    #[error("solenoid air gap must be greater than zero, got `{0}` mm")]
    ZeroAirGap(f64),
    #[error("solenoid current must be greater than zero, got `{0}` A")]
    ZeroCurrent(f64),
    #[error("air-fuel ratio must be greater than zero, got `{0}`")]
    ZeroAirFuelRatio(f64),
    #[error("gear set contains no gears")]
    EmptyGearSet,
    #[error("gear `{0}` is defined more than once")]
    DuplicateGear(String),
    #[error("`{0}` must be a non-negative number, got `{1}`")]
    NegativeInput(&'static str, f64),
    #[error("`{0}` must be between 0 and 1, got `{1}`")]
    FractionOutOfRange(&'static str, f64),
    #[error("`{0}` must be at least 1")]
    ZeroCount(&'static str),
    #[error("compression ratio must be at least 1, got `{0}`")]
    CompressionRatioBelowOne(f64),
    #[error("rpm sweep step must be greater than zero, got `{0}`")]
    NonPositiveSweepStep(f64),
    #[error("rpm sweep would produce `{0}` points, the limit is `{1}`")]
    SweepTooLarge(f64, usize),
    #[error("first gear ratio x final drive must be greater than zero, got `{0}`")]
    NonPositiveOverallRatio(f64),
    #[error("`{firing}` firing pistons is more than the `{pistons}` pistons in the engine")]
    FiringExceedsPistons { firing: u32, pistons: u32 },
    #[error("{0} produced a value that is not a finite number")]
    NonFiniteResult(&'static str),
}

impl DomainError {
    /// Name of the input that caused the rejection
    pub fn input_name(&self) -> &str {
        match self {
            DomainError::NonPositiveRpm(_) => "rpm",
            DomainError::NonPositiveGearRatio { gear, .. } => gear,
            DomainError::NonPositiveFinalDrive(_) => "final_drive",
            DomainError::NonPositiveTireDiameter(_) => "tire_diameter_m",
            DomainError::ZeroAirGap(_) => "air_gap_mm",
            DomainError::ZeroCurrent(_) => "current_a",
            DomainError::ZeroAirFuelRatio(_) => "air_fuel_ratio",
            DomainError::EmptyGearSet => "gears",
            DomainError::DuplicateGear(name) => name,
            DomainError::NegativeInput(name, _) => name,
            DomainError::FractionOutOfRange(name, _) => name,
            DomainError::ZeroCount(name) => name,
            DomainError::CompressionRatioBelowOne(_) => "compression_ratio",
            DomainError::NonPositiveSweepStep(_) => "step",
            DomainError::SweepTooLarge(..) => "to",
            DomainError::NonPositiveOverallRatio(_) => "final_drive",
            DomainError::FiringExceedsPistons { .. } => "firing_pistons",
            DomainError::NonFiniteResult(stage) => stage,
        }
    }
}
