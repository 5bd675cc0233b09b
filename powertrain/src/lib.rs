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

//! Closed-form powertrain calculations: engine force, torque and power,
//! gearbox and wheel torque, and first gear road speed.

pub mod error;
pub mod inputs;
pub mod force;
pub mod engine;
pub mod drivetrain;
pub mod speed;

pub use error::{DomainError, Result};
pub use inputs::{EngineInputs, EngineModel, EngineType, Gear, GearSet, LeverArm, RadialAspiratedParams, ReciprocatingParams, SolenoidDrive, SolenoidParams, VehicleInputs};
pub use force::{AirflowBreakdown, ForceModel, ForceOutput};
pub use engine::{EngineOutput, TorqueDerivation};
pub use drivetrain::GearTorque;
pub use speed::SpeedEstimate;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};
use utils::numeric::is_strictly_positive;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedResult {
    pub engine_type: EngineType,
    pub rpm: f64,
    pub piston_count: u32,
    pub firing_pistons: u32,
    pub engine: EngineOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow: Option<AirflowBreakdown>,
    pub gears: IndexMap<String, GearTorque>,
    pub gear_speeds_kph: IndexMap<String, f64>,
    pub speed: SpeedEstimate,
}

impl DerivedResult {
    pub fn force_per_piston(&self) -> f64 {
        self.engine.force_per_piston
    }

    pub fn total_force(&self) -> f64 {
        self.engine.total_force
    }

    pub fn engine_torque(&self) -> f64 {
        self.engine.engine_torque
    }

    pub fn horsepower(&self) -> f64 {
        self.engine.horsepower
    }
}

fn validate_all(engine: &EngineInputs, gears: &GearSet, vehicle: &VehicleInputs) -> Result<()> {
    engine.validate()?;
    gears.validate()?;
    vehicle.validate()
}

/// Run the full calculation for one set of inputs. Every input is validated
/// before anything is computed and the first problem found is returned.
pub fn compute(engine: EngineInputs, gears: GearSet, vehicle: VehicleInputs) -> Result<DerivedResult> {
    if let Err(e) = validate_all(&engine, &gears, &vehicle) {
        warn!("Rejected {} engine inputs at `{}`. {}", engine.engine_type().as_str(), e.input_name(), e);
        return Err(e);
    }

    let engine_output = engine::aggregate(&engine)?;
    let airflow = match &engine.model {
        EngineModel::RadialAspirated(params) => Some(params.breakdown(engine.rpm)),
        _ => None
    };
    if airflow.as_ref().is_some_and(|a| !a.is_finite()) {
        return Err(DomainError::NonFiniteResult("airflow"));
    }
    let gear_torque = drivetrain::map_torque(engine_output.engine_torque, &gears);
    if !gear_torque.values().all(|g| g.gearbox_torque.is_finite() && g.wheel_torque.is_finite()) {
        return Err(DomainError::NonFiniteResult("drivetrain"));
    }
    let speed = speed::estimate(engine.rpm, &gears, &vehicle)?;
    let gear_speeds_kph = speed::gear_speeds_kph(engine.rpm, &gears, &vehicle);
    if !gear_speeds_kph.values().all(|v| v.is_finite()) {
        return Err(DomainError::NonFiniteResult("gear speeds"));
    }
    debug!("{} gears mapped. {:.2} km/h in {}", gear_torque.len(), speed.speed_kph, speed.gear);

    Ok(DerivedResult {
        engine_type: engine.engine_type(),
        rpm: engine.rpm,
        piston_count: engine.piston_count,
        firing_pistons: engine.firing_pistons,
        engine: engine_output,
        airflow,
        gears: gear_torque,
        gear_speeds_kph,
        speed,
    })
}

/// Upper bound on the number of points a single sweep may produce
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Run [`compute`] at each RPM from `from_rpm` to `to_rpm` inclusive in
/// `step_rpm` increments. The RPM in `engine` is ignored. Steps too small to
/// change the RPM at floating point precision are collapsed into one point.
pub fn sweep(engine: &EngineInputs,
             gears: &GearSet,
             vehicle: &VehicleInputs,
             from_rpm: f64,
             to_rpm: f64,
             step_rpm: f64) -> Result<Vec<DerivedResult>>
{
    if !is_strictly_positive(from_rpm) {
        return Err(DomainError::NonPositiveRpm(from_rpm));
    }
    if !is_strictly_positive(step_rpm) {
        return Err(DomainError::NonPositiveSweepStep(step_rpm));
    }
    if !to_rpm.is_finite() || to_rpm < from_rpm {
        return Ok(Vec::new());
    }
    let points = ((to_rpm - from_rpm) / step_rpm + 1e-9).floor() + 1.0;
    if !(points <= MAX_SWEEP_POINTS as f64) {
        return Err(DomainError::SweepTooLarge(points, MAX_SWEEP_POINTS));
    }
    (0..points as usize)
        .map(|idx| from_rpm + idx as f64 * step_rpm)
        .dedup()
        .map(|rpm| compute(engine.with_rpm(rpm), gears.clone(), vehicle.clone()))
        .collect()
}
