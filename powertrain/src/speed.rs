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

use std::f64::consts::PI;
use indexmap::IndexMap;
use serde::Serialize;
use utils::numeric::is_strictly_positive;
use utils::units::mps_to_kph;
use crate::error::{DomainError, Result};
use crate::inputs::{GearSet, VehicleInputs};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeedEstimate {
    pub gear: String,
    pub wheel_rpm: f64,
    pub speed_mps: f64,
    pub speed_kph: f64,
}

/// Road speed (m/s) for an engine speed through a single overall ratio
pub fn engine_rpm_to_wheel_speed(engine_rpm: f64, overall_ratio: f64, tire_diameter_m: f64) -> f64 {
    let wheel_rpm = engine_rpm / overall_ratio;
    wheel_rpm * PI * tire_diameter_m / 60.0
}

/// Estimate wheel speed in the first gear of the set
pub fn estimate(engine_rpm: f64, gears: &GearSet, vehicle: &VehicleInputs) -> Result<SpeedEstimate> {
    if !is_strictly_positive(engine_rpm) {
        return Err(DomainError::NonPositiveRpm(engine_rpm));
    }
    vehicle.validate()?;
    let first = gears.first().ok_or(DomainError::EmptyGearSet)?;
    let overall_ratio = first.ratio * gears.final_drive();
    if !is_strictly_positive(first.ratio) {
        return Err(DomainError::NonPositiveGearRatio { gear: first.name.clone(), ratio: first.ratio });
    }
    if !is_strictly_positive(gears.final_drive()) {
        return Err(DomainError::NonPositiveFinalDrive(gears.final_drive()));
    }
    // Both positive but the product can still underflow
    if !is_strictly_positive(overall_ratio) {
        return Err(DomainError::NonPositiveOverallRatio(overall_ratio));
    }
    let wheel_rpm = engine_rpm / overall_ratio;
    let speed_mps = engine_rpm_to_wheel_speed(engine_rpm, overall_ratio, vehicle.tire_diameter_m);
    if !(wheel_rpm.is_finite() && speed_mps.is_finite()) {
        return Err(DomainError::NonFiniteResult("speed estimate"));
    }
    Ok(SpeedEstimate { gear: first.name.clone(), wheel_rpm, speed_mps, speed_kph: mps_to_kph(speed_mps) })
}

/// Road speed (km/h) in every gear at the given engine speed.
/// Inputs are expected to have been validated.
pub fn gear_speeds_kph(engine_rpm: f64, gears: &GearSet, vehicle: &VehicleInputs) -> IndexMap<String, f64> {
    gears.iter().map(|gear| {
        let mps = engine_rpm_to_wheel_speed(engine_rpm, gear.ratio * gears.final_drive(), vehicle.tire_diameter_m);
        (gear.name.clone(), mps_to_kph(mps))
    }).collect()
}
