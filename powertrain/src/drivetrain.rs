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

use indexmap::IndexMap;
use serde::Serialize;
use crate::inputs::GearSet;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GearTorque {
    pub ratio: f64,
    pub gearbox_torque: f64,
    pub wheel_torque: f64,
}

/// Map engine torque through every gear and the final drive, keyed by gear
/// name in gear order. Ratios are expected to have been validated.
pub fn map_torque(engine_torque: f64, gears: &GearSet) -> IndexMap<String, GearTorque> {
    gears.iter().map(|gear| {
        let gearbox_torque = engine_torque * gear.ratio;
        let wheel_torque = gearbox_torque * gears.final_drive();
        (gear.name.clone(), GearTorque { ratio: gear.ratio, gearbox_torque, wheel_torque })
    }).collect()
}
