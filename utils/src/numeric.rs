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

pub fn is_valid_fraction(val: f64) -> bool {
    (0.0..=1.0).contains(&val)
}

/// True for finite values strictly greater than zero
pub fn is_strictly_positive(val: f64) -> bool {
    val.is_finite() && val > 0.0
}

/// True for finite values greater than or equal to zero
pub fn is_non_negative(val: f64) -> bool {
    val.is_finite() && val >= 0.0
}

#[cfg(test)]
mod tests {
    use crate::numeric::{is_non_negative, is_strictly_positive, is_valid_fraction};

    #[test]
    fn fraction_tests() {
        assert_eq!(is_valid_fraction(-0.01), false);
        assert_eq!(is_valid_fraction(0.0), true);
        assert_eq!(is_valid_fraction(0.85), true);
        assert_eq!(is_valid_fraction(1.0), true);
        assert_eq!(is_valid_fraction(1.01), false);
        assert_eq!(is_valid_fraction(f64::NAN), false);
    }

    #[test]
    fn sign_tests() {
        assert_eq!(is_strictly_positive(0.0), false);
        assert_eq!(is_strictly_positive(0.1), true);
        assert_eq!(is_strictly_positive(f64::INFINITY), false);
        assert_eq!(is_non_negative(0.0), true);
        assert_eq!(is_non_negative(-1.0), false);
        assert_eq!(is_non_negative(f64::NAN), false);
    }
}
