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

//! Human readable and JSON renderings of calculation results.

use itertools::Itertools;
use powertrain::{DerivedResult, TorqueDerivation};
use utils::units::hp_to_kw;

pub fn render_text(result: &DerivedResult, decimal_places: u32) -> String {
    let dp = decimal_places as usize;
    let mut lines = vec![
        format!("Engine Configuration ({})", result.engine_type.as_str()),
        format!("  Total Pistons: {}", result.piston_count),
        format!("  Pistons Firing per Cycle: {}", result.firing_pistons),
        format!("  Force per Piston: {:.*} N", dp, result.force_per_piston()),
        format!("  Total Engine Force: {:.*} N", dp, result.total_force()),
    ];

    if let Some(airflow) = &result.airflow {
        lines.extend([
            "Airflow".to_string(),
            format!("  Displacement: {:.*} L", dp, airflow.displacement_m3 * 1000.0),
            format!("  Intake Pressure: {:.*} kPa", dp, airflow.intake_pressure_pa / 1000.0),
            format!("  Air Mass Flow: {:.*} g/s", dp, airflow.air_mass_flow_kg_s * 1000.0),
            format!("  Fuel Mass Flow: {:.*} g/s", dp, airflow.fuel_mass_flow_kg_s * 1000.0),
            format!("  Ideal Otto Efficiency: {:.*} %", dp, airflow.ideal_otto_efficiency * 100.0),
        ]);
    }

    lines.push("Torque & Horsepower".to_string());
    lines.push(format!("  Engine Torque: {:.*} Nm", dp, result.engine_torque()));
    lines.push(format!("  Horsepower @ {} RPM: {:.*} HP ({:.*} kW)",
                       result.rpm, dp, result.horsepower(), dp, hp_to_kw(result.horsepower())));
    if result.engine.derivation == TorqueDerivation::FromPower {
        lines.push("  Torque derived from modelled power".to_string());
    }

    lines.push("Gearbox & Wheel Torque".to_string());
    lines.extend(result.gears.iter().map(|(gear, torque)| {
        let speed = result.gear_speeds_kph.get(gear).copied().unwrap_or_default();
        format!("  {}: Gearbox Torque = {:.*} Nm | Wheel Torque = {:.*} Nm | {:.*} km/h",
                gear, dp, torque.gearbox_torque, dp, torque.wheel_torque, dp, speed)
    }));

    lines.push(format!("Estimated Speed in {}", result.speed.gear));
    lines.push(format!("  Wheel RPM: {:.*}", dp, result.speed.wheel_rpm));
    lines.push(format!("  Speed: {:.*} m/s ({:.*} km/h)", dp, result.speed.speed_mps, dp, result.speed.speed_kph));
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn render_sweep(results: &[DerivedResult], decimal_places: u32) -> String {
    let dp = decimal_places as usize;
    let first_gear = results.first().map(|r| r.speed.gear.as_str()).unwrap_or("first gear");
    let header = format!("RPM\tTorque (Nm)\tPower (HP)\t{} (km/h)\n", first_gear);
    let rows = results.iter().map(|result| {
        let row = [
            format!("{}", result.rpm),
            format!("{:.*}", dp, result.engine_torque()),
            format!("{:.*}", dp, result.horsepower()),
            format!("{:.*}", dp, result.speed.speed_kph),
        ];
        format!("{}\n", row.iter().join("\t"))
    });
    std::iter::once(header).chain(rows).collect()
}

pub fn render_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use powertrain::{compute, sweep, EngineInputs, EngineModel, GearSet, LeverArm, RadialAspiratedParams, SolenoidDrive, SolenoidParams, VehicleInputs};
    use crate::report::{render_json, render_sweep, render_text};

    fn engine(rpm: f64) -> EngineInputs {
        EngineInputs {
            model: EngineModel::Solenoid(SolenoidParams {
                drive: SolenoidDrive::Rated { force_n: 2500.0 },
                efficiency: 1.0,
                stroke_length_m: None,
            }),
            piston_count: 4,
            firing_pistons: 2,
            lever_arm: LeverArm::CrankRadius(0.05),
            rpm,
        }
    }

    fn vehicle() -> VehicleInputs {
        VehicleInputs { tire_diameter_m: 0.65 }
    }

    #[test]
    fn text_report_uses_two_decimals() {
        let result = compute(engine(3000.0), GearSet::from_ratios(&[3.5, 2.1], 3.9), vehicle()).unwrap();
        let report = render_text(&result, 2);
        assert!(report.contains("Total Pistons: 4"));
        assert!(report.contains("Pistons Firing per Cycle: 2"));
        assert!(report.contains("Force per Piston: 2500.00 N"));
        assert!(report.contains("Engine Torque: 500.00 Nm"));
        assert!(report.contains("Horsepower @ 3000 RPM: 285.61 HP (212.98 kW)"));
        assert!(report.contains("Gear 1: Gearbox Torque = 1750.00 Nm | Wheel Torque = 6825.00 Nm | 26.93 km/h"));
        assert!(report.contains("Gear 2: Gearbox Torque = 1050.00 Nm | Wheel Torque = 4095.00 Nm"));
        assert!(report.contains("Wheel RPM: 219.78"));
        assert!(report.contains("Speed: 7.48 m/s (26.93 km/h)"));
        assert!(!report.contains("Airflow"));
    }

    #[test]
    fn radial_report_shows_airflow() {
        let radial = EngineInputs {
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
        let result = compute(radial, GearSet::from_ratios(&[3.5], 3.9), vehicle()).unwrap();
        let airflow = result.airflow.clone().unwrap();
        let report = render_text(&result, 2);
        assert!(report.contains("Ideal Otto Efficiency: 54.08 %"));
        assert!(report.contains(&format!("HP ({:.2} kW)", airflow.brake_power_w / 1000.0)));
        assert!(report.contains("Torque derived from modelled power"));
        assert!(report.ends_with("km/h)\n"));
    }

    #[test]
    fn gears_are_listed_in_order() {
        let gears = GearSet::new(3.9).with_gear("Top", 0.8).with_gear("Bottom", 3.5);
        let report = render_text(&compute(engine(3000.0), gears, vehicle()).unwrap(), 1);
        let top = report.find("Top:").unwrap();
        let bottom = report.find("Bottom:").unwrap();
        assert!(top < bottom);
        assert!(report.contains("Estimated Speed in Top"));
    }

    #[test]
    fn sweep_table() {
        let results = sweep(&engine(1.0), &GearSet::from_ratios(&[3.5], 3.9), &vehicle(), 1000.0, 2000.0, 1000.0).unwrap();
        let table = render_sweep(&results, 1);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "RPM\tTorque (Nm)\tPower (HP)\tGear 1 (km/h)");
        assert!(lines[1].starts_with("1000\t500.0\t95.2\t"));
        assert!(lines[2].starts_with("2000\t500.0\t190.4\t"));
    }

    #[test]
    fn json_report() {
        let result = compute(engine(3000.0), GearSet::from_ratios(&[3.5, 2.1], 3.9), vehicle()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert_eq!(json["engine_type"], "solenoid");
        assert_eq!(json["piston_count"], 4);
        assert_eq!(json["engine"]["derivation"], "from_force");
        assert_eq!(json["gears"]["Gear 1"]["wheel_torque"].as_f64().map(|v| v.round()), Some(6825.0));
        assert!(json.get("airflow").is_none());
    }
}
