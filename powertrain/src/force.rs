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

//! Force models. Each engine type turns its parameters into either a force
//! per piston or, for the radial model, a power figure with torque derived
//! from it.

use std::f64::consts::PI;
use serde::Serialize;
use utils::numeric::is_strictly_positive;
use utils::units::{cm2_to_m2, hp_to_torque, mm_to_m, mpa_to_pa, watts_to_hp, STANDARD_ATMOSPHERE_PA};
use crate::error::{DomainError, Result};
use crate::inputs::{EngineModel, RadialAspiratedParams, ReciprocatingParams, SolenoidDrive, SolenoidParams};

/// μ0 in T·m/A
pub const VACUUM_PERMEABILITY: f64 = 4.0 * PI * 1e-7;
/// Empirical multiplier applied with the solenoid stroke length
pub const SOLENOID_STROKE_GAIN: f64 = 20.0;
pub const INTAKE_AIR_TEMPERATURE_K: f64 = 300.0;
/// J/(kg·K)
pub const AIR_GAS_CONSTANT: f64 = 287.05;
/// J/kg
pub const FUEL_HEATING_VALUE: f64 = 44.0e6;
pub const THERMAL_EFFICIENCY: f64 = 0.30;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum ForceOutput {
    /// Newtons delivered by a single piston
    PerPiston(f64),
    /// Power modelled directly; torque is derived from horsepower
    Power { torque: f64, horsepower: f64 },
}

pub trait ForceModel {
    fn validate(&self) -> Result<()>;

    /// Evaluate without validating. Callers must have validated `self` and `rpm`
    fn force_output(&self, rpm: f64) -> ForceOutput;

    fn evaluate(&self, rpm: f64) -> Result<ForceOutput> {
        self.validate()?;
        if !is_strictly_positive(rpm) {
            return Err(DomainError::NonPositiveRpm(rpm));
        }
        Ok(self.force_output(rpm))
    }
}

pub fn piston_area_m2(bore_mm: f64) -> f64 {
    let radius_m = mm_to_m(bore_mm) / 2.0;
    PI * radius_m.powi(2)
}

impl ForceModel for ReciprocatingParams {
    fn validate(&self) -> Result<()> {
        ReciprocatingParams::validate(self)
    }

    fn force_output(&self, _rpm: f64) -> ForceOutput {
        ForceOutput::PerPiston(mpa_to_pa(self.pressure_mpa) * piston_area_m2(self.bore_mm))
    }
}

impl SolenoidDrive {
    /// Force before efficiency and stroke scaling
    pub fn raw_force(&self) -> f64 {
        match self {
            SolenoidDrive::MagneticCircuit { turns, current_a, core_area_cm2, air_gap_mm } => {
                let flux_density = VACUUM_PERMEABILITY * (*turns as f64) * current_a / mm_to_m(*air_gap_mm);
                flux_density.powi(2) * cm2_to_m2(*core_area_cm2) / (2.0 * VACUUM_PERMEABILITY)
            }
            SolenoidDrive::Rated { force_n } => *force_n,
        }
    }
}

impl ForceModel for SolenoidParams {
    fn validate(&self) -> Result<()> {
        SolenoidParams::validate(self)
    }

    fn force_output(&self, _rpm: f64) -> ForceOutput {
        let mut force = self.drive.raw_force() * self.efficiency;
        if let Some(stroke_length_m) = self.stroke_length_m {
            force *= stroke_length_m * SOLENOID_STROKE_GAIN;
        }
        ForceOutput::PerPiston(force)
    }
}

/// Intermediate figures of the radial air-standard model
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AirflowBreakdown {
    pub displacement_m3: f64,
    pub intake_pressure_pa: f64,
    pub intake_density: f64,
    pub air_mass_flow_kg_s: f64,
    pub fuel_mass_flow_kg_s: f64,
    pub brake_power_w: f64,
    pub horsepower: f64,
    pub ideal_otto_efficiency: f64,
}

impl AirflowBreakdown {
    pub fn is_finite(&self) -> bool {
        [self.displacement_m3, self.intake_pressure_pa, self.intake_density, self.air_mass_flow_kg_s,
            self.fuel_mass_flow_kg_s, self.brake_power_w, self.horsepower, self.ideal_otto_efficiency]
            .iter().all(|v| v.is_finite())
    }
}

impl RadialAspiratedParams {
    pub fn cylinder_displacement_m3(&self) -> f64 {
        piston_area_m2(self.bore_mm) * mm_to_m(self.stroke_mm)
    }

    pub fn total_displacement_m3(&self) -> f64 {
        self.cylinder_displacement_m3() * self.cylinders as f64
    }

    /// Four-stroke cycle: each cylinder draws one charge every second revolution
    pub fn breakdown(&self, rpm: f64) -> AirflowBreakdown {
        let displacement_m3 = self.total_displacement_m3();
        let intake_pressure_pa = STANDARD_ATMOSPHERE_PA + mpa_to_pa(self.boost_pressure_mpa);
        let intake_density = intake_pressure_pa / (AIR_GAS_CONSTANT * INTAKE_AIR_TEMPERATURE_K);
        let intake_strokes_per_s = rpm / 60.0 / 2.0;
        let air_mass_flow_kg_s = displacement_m3 * intake_strokes_per_s * self.volumetric_efficiency * intake_density;
        let fuel_mass_flow_kg_s = air_mass_flow_kg_s / self.air_fuel_ratio;
        let brake_power_w = fuel_mass_flow_kg_s * FUEL_HEATING_VALUE * THERMAL_EFFICIENCY;
        AirflowBreakdown {
            displacement_m3,
            intake_pressure_pa,
            intake_density,
            air_mass_flow_kg_s,
            fuel_mass_flow_kg_s,
            brake_power_w,
            horsepower: watts_to_hp(brake_power_w),
            ideal_otto_efficiency: self.ideal_otto_efficiency(),
        }
    }

    /// Ideal Otto-cycle efficiency for the configured compression ratio.
    /// Informational only, the power figure uses [`THERMAL_EFFICIENCY`]
    pub fn ideal_otto_efficiency(&self) -> f64 {
        1.0 - self.compression_ratio.powf(1.0 - 1.4)
    }
}

impl ForceModel for RadialAspiratedParams {
    fn validate(&self) -> Result<()> {
        RadialAspiratedParams::validate(self)
    }

    fn force_output(&self, rpm: f64) -> ForceOutput {
        let horsepower = self.breakdown(rpm).horsepower;
        ForceOutput::Power { torque: hp_to_torque(horsepower, rpm), horsepower }
    }
}

impl ForceModel for EngineModel {
    fn validate(&self) -> Result<()> {
        EngineModel::validate(self)
    }

    fn force_output(&self, rpm: f64) -> ForceOutput {
        match self {
            EngineModel::Reciprocating(p) => p.force_output(rpm),
            EngineModel::Solenoid(p) => p.force_output(rpm),
            EngineModel::RadialAspirated(p) => p.force_output(rpm),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DomainError;
    use crate::force::{ForceModel, ForceOutput, SOLENOID_STROKE_GAIN};
    use crate::inputs::{RadialAspiratedParams, ReciprocatingParams, SolenoidDrive, SolenoidParams};

    fn per_piston(output: ForceOutput) -> f64 {
        match output {
            ForceOutput::PerPiston(f) => f,
            ForceOutput::Power { .. } => panic!("expected a per piston force"),
        }
    }

    fn piston_force(bore_mm: f64, pressure_mpa: f64) -> f64 {
        per_piston(ReciprocatingParams { bore_mm, pressure_mpa }.evaluate(3000.0).unwrap())
    }

    fn magnetic(turns: u32, current_a: f64, air_gap_mm: f64) -> SolenoidParams {
        SolenoidParams {
            drive: SolenoidDrive::MagneticCircuit { turns, current_a, core_area_cm2: 4.0, air_gap_mm },
            efficiency: 0.85,
            stroke_length_m: None,
        }
    }

    fn solenoid_force(params: SolenoidParams) -> f64 {
        per_piston(params.evaluate(3000.0).unwrap())
    }

    fn radial() -> RadialAspiratedParams {
        RadialAspiratedParams {
            bore_mm: 130.0,
            stroke_mm: 150.0,
            compression_ratio: 7.0,
            air_fuel_ratio: 12.5,
            volumetric_efficiency: 0.85,
            boost_pressure_mpa: 0.0,
            cylinders: 9,
        }
    }

    #[test]
    fn reciprocating_force() {
        // 86mm bore at 8MPa
        let expected = 8.0e6 * std::f64::consts::PI * 0.043 * 0.043;
        assert!((piston_force(86.0, 8.0) - expected).abs() < 1e-6);
        assert_eq!(piston_force(0.0, 8.0), 0.0);
        assert_eq!(piston_force(86.0, 0.0), 0.0);
    }

    #[test]
    fn reciprocating_force_is_monotonic() {
        let mut previous = 0.0;
        for bore in [10.0, 50.0, 86.0, 100.0, 140.0] {
            let force = piston_force(bore, 8.0);
            assert!(force > previous);
            previous = force;
        }
        previous = 0.0;
        for pressure in [0.5, 1.0, 4.0, 8.0, 12.0] {
            let force = piston_force(86.0, pressure);
            assert!(force > previous);
            previous = force;
        }
    }

    #[test]
    fn solenoid_force_follows_magnetic_circuit() {
        // B = 4πe-7 * 500 * 2 / 0.001, F = B²A / 2μ0
        let mu0 = 4.0 * std::f64::consts::PI * 1e-7;
        let b = mu0 * 500.0 * 2.0 / 0.001;
        let expected = b * b * 0.0004 / (2.0 * mu0) * 0.85;
        assert!((solenoid_force(magnetic(500, 2.0, 1.0)) - expected).abs() < 1e-6);
    }

    #[test]
    fn solenoid_force_is_monotonic() {
        assert!(solenoid_force(magnetic(600, 2.0, 1.0)) > solenoid_force(magnetic(500, 2.0, 1.0)));
        assert!(solenoid_force(magnetic(500, 2.5, 1.0)) > solenoid_force(magnetic(500, 2.0, 1.0)));
        assert!(solenoid_force(magnetic(500, 2.0, 2.0)) < solenoid_force(magnetic(500, 2.0, 1.0)));
    }

    #[test]
    fn solenoid_stroke_gain() {
        let plain = solenoid_force(magnetic(500, 2.0, 1.0));
        let mut scaled = magnetic(500, 2.0, 1.0);
        scaled.stroke_length_m = Some(0.05);
        assert!((solenoid_force(scaled) - plain * 0.05 * SOLENOID_STROKE_GAIN).abs() < 1e-6);
    }

    #[test]
    fn rated_solenoid() {
        let params = SolenoidParams { drive: SolenoidDrive::Rated { force_n: 1000.0 }, efficiency: 0.85, stroke_length_m: None };
        assert!((solenoid_force(params) - 850.0).abs() < 1e-9);
    }

    #[test]
    fn solenoid_rejects_zero_air_gap() {
        assert_eq!(magnetic(500, 2.0, 0.0).evaluate(3000.0), Err(DomainError::ZeroAirGap(0.0)));
    }

    #[test]
    fn radial_power_and_back_derived_torque() {
        let params = radial();
        let rpm = 2400.0;
        let breakdown = params.breakdown(rpm);
        // 9 x 1.991L
        assert!((breakdown.displacement_m3 - 0.017_918).abs() < 1e-5);
        assert!(breakdown.horsepower > 0.0);
        match params.evaluate(rpm).unwrap() {
            ForceOutput::Power { torque, horsepower } => {
                assert_eq!(horsepower, breakdown.horsepower);
                assert!((torque * rpm / 5252.0 - horsepower).abs() <= horsepower * 1e-12);
            }
            ForceOutput::PerPiston(_) => panic!("radial model should report power"),
        }
    }

    #[test]
    fn radial_boost_raises_power() {
        let mut boosted = radial();
        boosted.boost_pressure_mpa = 0.05;
        assert!(boosted.breakdown(2400.0).horsepower > radial().breakdown(2400.0).horsepower);
    }

    #[test]
    fn radial_rejects_bad_inputs() {
        let mut params = radial();
        params.air_fuel_ratio = 0.0;
        assert_eq!(params.evaluate(2400.0), Err(DomainError::ZeroAirFuelRatio(0.0)));
        assert_eq!(radial().evaluate(0.0), Err(DomainError::NonPositiveRpm(0.0)));
    }

    #[test]
    fn otto_efficiency() {
        assert!((radial().ideal_otto_efficiency() - 0.540_8).abs() < 1e-3);
        assert_eq!(radial().breakdown(2400.0).ideal_otto_efficiency, radial().ideal_otto_efficiency());
    }
}
