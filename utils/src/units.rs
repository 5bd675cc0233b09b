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

//! Unit conversions used at the input boundary and for reporting.

/// Nm·RPM -> HP constant
pub const TORQUE_RPM_PER_HP: f64 = 5252.0;
pub const WATTS_PER_HP: f64 = 745.7;
pub const MPS_TO_KPH: f64 = 3.6;
pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;

pub fn mm_to_m(mm: f64) -> f64 {
    mm / 1000.0
}

pub fn cm2_to_m2(cm2: f64) -> f64 {
    cm2 / 10_000.0
}

pub fn mpa_to_pa(mpa: f64) -> f64 {
    mpa * 1_000_000.0
}

pub fn mps_to_kph(mps: f64) -> f64 {
    mps * MPS_TO_KPH
}

pub fn watts_to_hp(watts: f64) -> f64 {
    watts / WATTS_PER_HP
}

/// Kilowatts for a horsepower figure, on the same 745.7 W/HP basis
pub fn hp_to_kw(horsepower: f64) -> f64 {
    horsepower * WATTS_PER_HP / 1000.0
}

/// Horsepower from torque (Nm) at the given RPM using the 5252 convention
pub fn torque_to_hp(torque: f64, rpm: f64) -> f64 {
    torque * rpm / TORQUE_RPM_PER_HP
}

/// Inverse of [`torque_to_hp`]. The caller must ensure `rpm` is non-zero
pub fn hp_to_torque(horsepower: f64, rpm: f64) -> f64 {
    horsepower * TORQUE_RPM_PER_HP / rpm
}
