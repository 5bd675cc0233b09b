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

//! Example run files, one per engine type.

use powertrain::EngineType;

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum TemplateKind {
    Reciprocating,
    Solenoid,
    RadialAspirated,
}

impl From<TemplateKind> for EngineType {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Reciprocating => EngineType::Reciprocating,
            TemplateKind::Solenoid => EngineType::Solenoid,
            TemplateKind::RadialAspirated => EngineType::RadialAspirated,
        }
    }
}

const DRIVETRAIN: &str = r#"
# Gears are listed in order. The first gear is used for the speed estimate
[gears]
final_drive = 3.9

[[gears.gear]]
name = "Gear 1"
ratio = 3.5

[[gears.gear]]
name = "Gear 2"
ratio = 2.1

[[gears.gear]]
name = "Gear 3"
ratio = 1.4

[vehicle]
tire_diameter_m = 0.65
"#;

const RECIPROCATING: &str = r#"# Reciprocating piston engine
[engine]
piston_count = 4
firing_pistons = 2
rpm = 3000
lever_arm = { crank_radius = 0.043 }

[engine.model]
type = "reciprocating"
bore_mm = 86.0
pressure_mpa = 8.0
"#;

const SOLENOID: &str = r#"# Electromagnetic solenoid engine
[engine]
piston_count = 6
firing_pistons = 3
rpm = 3000
lever_arm = { stroke_length = 0.05 }

[engine.model]
type = "solenoid"
efficiency = 0.85
# Optional. Scales force by stroke_length_m x 20
stroke_length_m = 0.05

# Use `kind = "rated"` with `force_n` to give the solenoid force directly
[engine.model.drive]
kind = "magnetic_circuit"
turns = 500
current_a = 2.0
core_area_cm2 = 4.0
air_gap_mm = 1.0
"#;

const RADIAL_ASPIRATED: &str = r#"# Radial engine, naturally aspirated unless boost_pressure_mpa is set
[engine]
piston_count = 9
firing_pistons = 1
rpm = 2400
lever_arm = { stroke_length = 0.15 }

[engine.model]
type = "radial_aspirated"
bore_mm = 130.0
stroke_mm = 150.0
compression_ratio = 7.0
air_fuel_ratio = 12.5
volumetric_efficiency = 0.85
boost_pressure_mpa = 0.0
cylinders = 9
"#;

pub fn template_for(engine_type: EngineType) -> String {
    let engine = match engine_type {
        EngineType::Reciprocating => RECIPROCATING,
        EngineType::Solenoid => SOLENOID,
        EngineType::RadialAspirated => RADIAL_ASPIRATED,
    };
    format!("{}{}", engine, DRIVETRAIN)
}

#[cfg(test)]
mod tests {
    use powertrain::{compute, EngineType};
    use crate::run_file::RunFile;
    use crate::templates::template_for;

    #[test]
    fn every_template_computes() {
        for engine_type in [EngineType::Reciprocating, EngineType::Solenoid, EngineType::RadialAspirated] {
            let run = RunFile::from_toml(&template_for(engine_type)).unwrap();
            assert_eq!(run.engine.engine_type(), engine_type);
            assert_eq!(run.gears.len(), 3);
            let result = compute(run.engine, run.gears, run.vehicle).unwrap();
            assert!(result.horsepower() > 0.0);
            assert!(result.speed.speed_kph > 0.0);
        }
    }
}
