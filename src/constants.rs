//! Physical constants used by the parameter formulas.
//!
//! ## Accuracy
//!
//! The line-constant formulas are conventionally evaluated with the classical
//! values μ₀ = 4π × 10⁻⁷ H/m and ε₀ = 8.854 × 10⁻¹² F/m. Both are fixed here
//! and not configurable, so results match hand calculations and published
//! tables for overhead lines.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permeability μ₀ in henries per meter (H/m), classical value 4π × 10⁻⁷.
pub const VACUUM_PERMEABILITY: Scalar = 4.0 * PI * 1.0e-7;
/// Vacuum permittivity ε₀ in farads per meter (F/m), rounded to 8.854 × 10⁻¹².
pub const VACUUM_PERMITTIVITY: Scalar = 8.854e-12;
/// μ₀ / 2π, the coefficient of the inductance formula (2 × 10⁻⁷ H/m).
pub const INDUCTANCE_COEFFICIENT: Scalar = VACUUM_PERMEABILITY / (2.0 * PI);
/// 2π·ε₀, the numerator of the capacitance formula (F/m).
pub const CAPACITANCE_COEFFICIENT: Scalar = 2.0 * PI * VACUUM_PERMITTIVITY;
/// Meters per kilometer.
pub const METERS_PER_KM: Scalar = 1_000.0;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}
