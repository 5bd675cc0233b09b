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

use serde::Serialize;
use tracing::debug;
use utils::units::torque_to_hp;
use crate::error::{DomainError, Result};
use crate::force::{ForceModel, ForceOutput};
use crate::inputs::EngineInputs;

/// Which direction torque and power were related in
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TorqueDerivation {
    /// torque = force x lever arm, horsepower from torque
    FromForce,
    /// horsepower modelled directly, torque back-derived from it
    FromPower,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EngineOutput {
    pub force_per_piston: f64,
    pub total_force: f64,
    pub engine_torque: f64,
    pub horsepower: f64,
    pub derivation: TorqueDerivation,
}

impl EngineOutput {
    pub fn is_finite(&self) -> bool {
        [self.force_per_piston, self.total_force, self.engine_torque, self.horsepower].iter().all(|v| v.is_finite())
    }
}

pub fn aggregate(inputs: &EngineInputs) -> Result<EngineOutput> {
    inputs.validate()?;
    let output = match inputs.model.evaluate(inputs.rpm)? {
        ForceOutput::PerPiston(force_per_piston) => {
            let total_force = force_per_piston * inputs.piston_count as f64;
            let engine_torque = total_force * inputs.lever_arm.metres();
            EngineOutput {
                force_per_piston,
                total_force,
                engine_torque,
                horsepower: torque_to_hp(engine_torque, inputs.rpm),
                derivation: TorqueDerivation::FromForce,
            }
        }
        ForceOutput::Power { torque, horsepower } => EngineOutput {
            force_per_piston: 0.0,
            total_force: 0.0,
            engine_torque: torque,
            horsepower,
            derivation: TorqueDerivation::FromPower,
        },
    };
    if !output.is_finite() {
        return Err(DomainError::NonFiniteResult("engine"));
    }
    debug!("{} engine at {} rpm: {:.2} Nm, {:.2} hp",
           inputs.engine_type().as_str(), inputs.rpm, output.engine_torque, output.horsepower);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use crate::engine::{aggregate, TorqueDerivation};
    use crate::error::DomainError;
    use crate::inputs::{EngineInputs, EngineModel, LeverArm, RadialAspiratedParams, ReciprocatingParams, SolenoidDrive, SolenoidParams};

    fn piston_engine(bore_mm: f64, pressure_mpa: f64) -> EngineInputs {
        EngineInputs {
            model: EngineModel::Reciprocating(ReciprocatingParams { bore_mm, pressure_mpa }),
            piston_count: 4,
            firing_pistons: 2,
            lever_arm: LeverArm::CrankRadius(0.043),
            rpm: 3000.0,
        }
    }

    #[test]
    fn overflowing_inputs_are_rejected() {
        // 1e303 MPa overflows to inf Pa, and inf x 0 area is NaN
        assert_eq!(aggregate(&piston_engine(0.0, 1e303)), Err(DomainError::NonFiniteResult("engine")));
        assert_eq!(aggregate(&piston_engine(1e200, 1e200)), Err(DomainError::NonFiniteResult("engine")));
    }

    fn rated_solenoid_engine(force_n: f64, lever_arm: LeverArm, rpm: f64) -> EngineInputs {
        EngineInputs {
            model: EngineModel::Solenoid(SolenoidParams {
                drive: SolenoidDrive::Rated { force_n },
                efficiency: 1.0,
                stroke_length_m: None,
            }),
            piston_count: 4,
            firing_pistons: 2,
            lever_arm,
            rpm,
        }
    }

    #[test]
    fn torque_and_horsepower_from_force() {
        // 4 x 2500N through 0.05m = 500Nm
        let output = aggregate(&rated_solenoid_engine(2500.0, LeverArm::CrankRadius(0.05), 3000.0)).unwrap();
        assert_eq!(output.total_force, 10_000.0);
        assert!((output.engine_torque - 500.0).abs() < 1e-9);
        assert!((output.horsepower - 285.605_483).abs() < 1e-5);
        assert_eq!(output.derivation, TorqueDerivation::FromForce);
    }

    #[test]
    fn lever_arm_kind_does_not_change_result() {
        let crank = aggregate(&rated_solenoid_engine(2500.0, LeverArm::CrankRadius(0.05), 3000.0)).unwrap();
        let stroke = aggregate(&rated_solenoid_engine(2500.0, LeverArm::StrokeLength(0.05), 3000.0)).unwrap();
        assert_eq!(crank, stroke);
    }

    #[test]
    fn zero_rpm_is_rejected() {
        assert_eq!(aggregate(&rated_solenoid_engine(2500.0, LeverArm::CrankRadius(0.05), 0.0)),
                   Err(DomainError::NonPositiveRpm(0.0)));
    }

    #[test]
    fn radial_engine_has_no_piston_force() {
        let inputs = EngineInputs {
            model: EngineModel::RadialAspirated(RadialAspiratedParams {
                bore_mm: 130.0,
                stroke_mm: 150.0,
                compression_ratio: 7.0,
                air_fuel_ratio: 12.5,
                volumetric_efficiency: 0.85,
                boost_pressure_mpa: 0.0,
                cylinders: 9,
            }),
            piston_count: 9,
            firing_pistons: 1,
            lever_arm: LeverArm::StrokeLength(0.15),
            rpm: 2400.0,
        };
        let output = aggregate(&inputs).unwrap();
        assert_eq!(output.total_force, 0.0);
        assert_eq!(output.force_per_piston, 0.0);
        assert_eq!(output.derivation, TorqueDerivation::FromPower);
        assert!((output.engine_torque * 2400.0 / 5252.0 - output.horsepower).abs() <= output.horsepower * 1e-12);
    }
}
