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

//! Input records for a single calculation. Values are accepted in the units
//! shown in their field names and converted to SI by the stage that uses them.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use utils::numeric::{is_non_negative, is_strictly_positive, is_valid_fraction};
use crate::error::{DomainError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineInputs {
    pub model: EngineModel,
    pub piston_count: u32,
    pub firing_pistons: u32,
    pub lever_arm: LeverArm,
    pub rpm: f64,
}

impl EngineInputs {
    pub fn validate(&self) -> Result<()> {
        if !is_strictly_positive(self.rpm) {
            return Err(DomainError::NonPositiveRpm(self.rpm));
        }
        if self.piston_count == 0 {
            return Err(DomainError::ZeroCount("piston_count"));
        }
        if self.firing_pistons == 0 {
            return Err(DomainError::ZeroCount("firing_pistons"));
        }
        if self.firing_pistons > self.piston_count {
            return Err(DomainError::FiringExceedsPistons { firing: self.firing_pistons, pistons: self.piston_count });
        }
        self.lever_arm.validate()?;
        self.model.validate()
    }

    pub fn engine_type(&self) -> EngineType {
        self.model.engine_type()
    }

    pub fn with_rpm(&self, rpm: f64) -> EngineInputs {
        EngineInputs { rpm, ..self.clone() }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineType {
    Reciprocating,
    Solenoid,
    RadialAspirated,
}

impl EngineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineType::Reciprocating => "reciprocating",
            EngineType::Solenoid => "solenoid",
            EngineType::RadialAspirated => "radial-aspirated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineModel {
    Reciprocating(ReciprocatingParams),
    Solenoid(SolenoidParams),
    RadialAspirated(RadialAspiratedParams),
}

impl EngineModel {
    pub fn engine_type(&self) -> EngineType {
        match self {
            EngineModel::Reciprocating(_) => EngineType::Reciprocating,
            EngineModel::Solenoid(_) => EngineType::Solenoid,
            EngineModel::RadialAspirated(_) => EngineType::RadialAspirated,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            EngineModel::Reciprocating(p) => p.validate(),
            EngineModel::Solenoid(p) => p.validate(),
            EngineModel::RadialAspirated(p) => p.validate(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReciprocatingParams {
    pub bore_mm: f64,
    pub pressure_mpa: f64,
}

impl ReciprocatingParams {
    pub fn validate(&self) -> Result<()> {
        non_negative("bore_mm", self.bore_mm)?;
        non_negative("pressure_mpa", self.pressure_mpa)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolenoidParams {
    pub drive: SolenoidDrive,
    pub efficiency: f64,
    /// When present the force is additionally scaled by `stroke_length_m * 20`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_length_m: Option<f64>,
}

impl SolenoidParams {
    pub fn validate(&self) -> Result<()> {
        self.drive.validate()?;
        if !is_valid_fraction(self.efficiency) {
            return Err(DomainError::FractionOutOfRange("efficiency", self.efficiency));
        }
        if let Some(stroke) = self.stroke_length_m {
            non_negative("stroke_length_m", stroke)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolenoidDrive {
    MagneticCircuit {
        turns: u32,
        current_a: f64,
        core_area_cm2: f64,
        air_gap_mm: f64,
    },
    Rated {
        force_n: f64,
    },
}

impl SolenoidDrive {
    pub fn validate(&self) -> Result<()> {
        match self {
            SolenoidDrive::MagneticCircuit { current_a, core_area_cm2, air_gap_mm, .. } => {
                if !is_strictly_positive(*current_a) {
                    return Err(DomainError::ZeroCurrent(*current_a));
                }
                if !is_strictly_positive(*air_gap_mm) {
                    return Err(DomainError::ZeroAirGap(*air_gap_mm));
                }
                non_negative("core_area_cm2", *core_area_cm2)
            }
            SolenoidDrive::Rated { force_n } => non_negative("force_n", *force_n),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialAspiratedParams {
    pub bore_mm: f64,
    pub stroke_mm: f64,
    pub compression_ratio: f64,
    pub air_fuel_ratio: f64,
    pub volumetric_efficiency: f64,
    #[serde(default)]
    pub boost_pressure_mpa: f64,
    pub cylinders: u32,
}

impl RadialAspiratedParams {
    pub fn validate(&self) -> Result<()> {
        non_negative("bore_mm", self.bore_mm)?;
        non_negative("stroke_mm", self.stroke_mm)?;
        if !(self.compression_ratio.is_finite() && self.compression_ratio >= 1.0) {
            return Err(DomainError::CompressionRatioBelowOne(self.compression_ratio));
        }
        if !is_strictly_positive(self.air_fuel_ratio) {
            return Err(DomainError::ZeroAirFuelRatio(self.air_fuel_ratio));
        }
        non_negative("volumetric_efficiency", self.volumetric_efficiency)?;
        non_negative("boost_pressure_mpa", self.boost_pressure_mpa)?;
        if self.cylinders == 0 {
            return Err(DomainError::ZeroCount("cylinders"));
        }
        Ok(())
    }
}

/// The radius or length through which piston force becomes engine torque.
/// Either way it is a length in metres; the variant only records which
/// measurement the user supplied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverArm {
    CrankRadius(f64),
    StrokeLength(f64),
}

impl LeverArm {
    pub fn metres(&self) -> f64 {
        match self {
            LeverArm::CrankRadius(m) | LeverArm::StrokeLength(m) => *m,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            LeverArm::CrankRadius(m) => non_negative("crank_radius", *m),
            LeverArm::StrokeLength(m) => non_negative("stroke_length", *m),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    pub name: String,
    pub ratio: f64,
}

/// Gear ratios in gear order plus the final drive. The first gear is the one
/// used for the road speed estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GearSet {
    #[serde(default)]
    #[serde(rename = "gear")]
    gears: Vec<Gear>,
    final_drive: f64,
}

impl GearSet {
    pub fn new(final_drive: f64) -> GearSet {
        GearSet { gears: Vec::new(), final_drive }
    }

    /// Build a set from bare ratios, naming them "Gear 1", "Gear 2", ...
    pub fn from_ratios(ratios: &[f64], final_drive: f64) -> GearSet {
        let gears = ratios.iter().enumerate().map(|(idx, ratio)| {
            Gear { name: format!("Gear {}", idx + 1), ratio: *ratio }
        }).collect();
        GearSet { gears, final_drive }
    }

    pub fn with_gear(mut self, name: &str, ratio: f64) -> GearSet {
        self.push_gear(name, ratio);
        self
    }

    pub fn push_gear(&mut self, name: &str, ratio: f64) {
        self.gears.push(Gear { name: name.to_string(), ratio })
    }

    pub fn final_drive(&self) -> f64 {
        self.final_drive
    }

    pub fn first(&self) -> Option<&Gear> {
        self.gears.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gear> {
        self.gears.iter()
    }

    pub fn len(&self) -> usize {
        self.gears.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.gears.is_empty() {
            return Err(DomainError::EmptyGearSet);
        }
        if let Some(gear) = self.gears.iter().find(|g| !is_strictly_positive(g.ratio)) {
            return Err(DomainError::NonPositiveGearRatio { gear: gear.name.clone(), ratio: gear.ratio });
        }
        if let Some(name) = self.gears.iter().map(|g| &g.name).duplicates().next() {
            return Err(DomainError::DuplicateGear(name.clone()));
        }
        if !is_strictly_positive(self.final_drive) {
            return Err(DomainError::NonPositiveFinalDrive(self.final_drive));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleInputs {
    pub tire_diameter_m: f64,
}

impl VehicleInputs {
    pub fn validate(&self) -> Result<()> {
        if !is_strictly_positive(self.tire_diameter_m) {
            return Err(DomainError::NonPositiveTireDiameter(self.tire_diameter_m));
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, val: f64) -> Result<()> {
    if !is_non_negative(val) {
        return Err(DomainError::NegativeInput(name, val));
    }
    Ok(())
}
