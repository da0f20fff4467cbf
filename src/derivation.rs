//! R, L, C and reactances from equivalent GMD/GMR.
//!
//! L′ = (μ₀/2π) ln(D_eq / D_s) and C′ = 2πε₀ / ln(D_eq / D_sc), both per meter,
//! then scaled to the full line length.

use crate::constants::{
    angular_frequency, CAPACITANCE_COEFFICIENT, INDUCTANCE_COEFFICIENT, METERS_PER_KM,
};
use crate::errors::{LineError, Result};
use crate::math::Scalar;
use crate::transmission::Rlgc;

/// Inputs to [`derive`], all in SI units except the length (km).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationInputs {
    /// Equivalent GMD D_eq in meters.
    pub equivalent_gmd: Scalar,
    /// Equivalent GMR D_s in meters.
    pub equivalent_gmr: Scalar,
    /// Radius D_sc used for capacitance, in meters.
    pub capacitive_radius: Scalar,
    /// Per-phase series resistance in Ω/km.
    pub resistance_per_km: Scalar,
    /// Line length in kilometers.
    pub length_km: Scalar,
    /// Operating frequency in hertz.
    pub frequency_hz: Scalar,
}

/// Per-phase line constants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineConstants {
    /// Series resistance per kilometer (Ω/km).
    pub resistance_per_km: Scalar,
    /// Series inductance per meter (H/m).
    pub inductance_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub capacitance_per_m: Scalar,
    /// Total series resistance (Ω).
    pub resistance_ohm: Scalar,
    /// Total series inductance (H).
    pub inductance_h: Scalar,
    /// Total shunt capacitance (F).
    pub capacitance_f: Scalar,
    /// Total series reactance X_L = ωL (Ω).
    pub inductive_reactance_ohm: Scalar,
    /// Total shunt reactance X_C = 1/(ωC) (Ω).
    pub capacitive_reactance_ohm: Scalar,
}

impl LineConstants {
    /// Inductance per kilometer (H/km).
    #[must_use]
    pub fn inductance_per_km(&self) -> Scalar {
        self.inductance_per_m * METERS_PER_KM
    }

    /// Capacitance per kilometer (F/km).
    #[must_use]
    pub fn capacitance_per_km(&self) -> Scalar {
        self.capacitance_per_m * METERS_PER_KM
    }

    /// Per-meter distributed parameters with zero shunt conductance.
    #[must_use]
    pub fn rlgc(&self) -> Rlgc {
        Rlgc {
            r_per_m: self.resistance_per_km / METERS_PER_KM,
            l_per_m: self.inductance_per_m,
            g_per_m: 0.0,
            c_per_m: self.capacitance_per_m,
        }
    }
}

/// Computes line constants. Fails on non-positive or non-finite radii and
/// distances, when D_eq equals D_sc (capacitance undefined), and on a
/// negative or non-finite resistance.
pub fn derive(inputs: &DerivationInputs) -> Result<LineConstants> {
    let DerivationInputs {
        equivalent_gmd: d_eq,
        equivalent_gmr: d_s,
        capacitive_radius: d_sc,
        resistance_per_km,
        length_km,
        frequency_hz,
    } = *inputs;

    for (what, value) in [
        ("equivalent GMD", d_eq),
        ("equivalent GMR", d_s),
        ("capacitive radius", d_sc),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(LineError::DegenerateGeometry(format!(
                "{what} must be positive, got {value} m"
            )));
        }
    }

    if !(resistance_per_km.is_finite() && resistance_per_km >= 0.0) {
        return Err(LineError::InvalidParameter {
            name: "resistance_per_km",
            value: resistance_per_km,
        });
    }

    let ln_c = (d_eq / d_sc).ln();
    if ln_c == 0.0 {
        return Err(LineError::DegenerateGeometry(format!(
            "equivalent GMD equals capacitive radius ({d_eq} m)"
        )));
    }

    let inductance_per_m = INDUCTANCE_COEFFICIENT * (d_eq / d_s).ln();
    let capacitance_per_m = CAPACITANCE_COEFFICIENT / ln_c;

    let length_m = length_km * METERS_PER_KM;
    let resistance_ohm = resistance_per_km * length_km;
    let inductance_h = inductance_per_m * length_m;
    let capacitance_f = capacitance_per_m * length_m;

    let omega = angular_frequency(frequency_hz);
    let inductive_reactance_ohm = omega * inductance_h;
    let capacitive_reactance_ohm = 1.0 / (omega * capacitance_f);

    Ok(LineConstants {
        resistance_per_km,
        inductance_per_m,
        capacitance_per_m,
        resistance_ohm,
        inductance_h,
        capacitance_f,
        inductive_reactance_ohm,
        capacitive_reactance_ohm,
    })
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    fn flat_line_inputs() -> DerivationInputs {
        let d_eq = 250.0_f64.cbrt();
        DerivationInputs {
            equivalent_gmd: d_eq,
            equivalent_gmr: 0.011,
            capacitive_radius: 0.011,
            resistance_per_km: 0.05,
            length_km: 100.0,
            frequency_hz: 60.0,
        }
    }

    #[test]
    fn flat_line_inductance_per_meter() {
        let k = derive(&flat_line_inputs()).unwrap();
        assert_relative_eq!(k.inductance_per_m, 1.270_07e-6, max_relative = 1.0e-5);
        assert_relative_eq!(
            k.inductance_per_m,
            2.0e-7 * (250.0_f64.cbrt() / 0.011).ln(),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn totals_scale_with_length_and_reactances_follow() {
        let inputs = flat_line_inputs();
        let k = derive(&inputs).unwrap();
        assert_relative_eq!(k.resistance_ohm, 5.0, max_relative = 1.0e-12);
        assert_relative_eq!(k.inductance_h, k.inductance_per_m * 1.0e5, max_relative = 1.0e-12);
        assert_relative_eq!(k.capacitance_f, k.capacitance_per_m * 1.0e5, max_relative = 1.0e-12);
        let omega = 2.0 * PI * 60.0;
        assert_relative_eq!(k.inductive_reactance_ohm, omega * k.inductance_h, max_relative = 1.0e-12);
        assert_relative_eq!(
            k.capacitive_reactance_ohm * omega * k.capacitance_f,
            1.0,
            max_relative = 1.0e-12
        );
        assert_relative_eq!(k.inductance_per_km(), k.inductance_per_m * 1.0e3, max_relative = 1.0e-12);
    }

    #[test]
    fn lc_product_matches_free_space_when_radii_agree() {
        let k = derive(&flat_line_inputs()).unwrap();
        let lc = k.inductance_per_m * k.capacitance_per_m;
        assert_relative_eq!(lc, 4.0 * PI * 1.0e-7 * 8.854e-12, max_relative = 1.0e-12);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let mut inputs = flat_line_inputs();
        inputs.equivalent_gmr = 0.0;
        assert!(matches!(derive(&inputs), Err(LineError::DegenerateGeometry(_))));

        let mut inputs = flat_line_inputs();
        inputs.equivalent_gmd = -1.0;
        assert!(matches!(derive(&inputs), Err(LineError::DegenerateGeometry(_))));

        let mut inputs = flat_line_inputs();
        inputs.capacitive_radius = inputs.equivalent_gmd;
        assert!(matches!(derive(&inputs), Err(LineError::DegenerateGeometry(_))));
    }

    #[test]
    fn rejects_negative_or_non_finite_resistance() {
        for bad in [-0.01, f64::NAN, f64::NEG_INFINITY] {
            let mut inputs = flat_line_inputs();
            inputs.resistance_per_km = bad;
            assert!(matches!(
                derive(&inputs),
                Err(LineError::InvalidParameter { name: "resistance_per_km", .. })
            ));
        }
        let mut lossless = flat_line_inputs();
        lossless.resistance_per_km = 0.0;
        assert_eq!(derive(&lossless).unwrap().resistance_ohm, 0.0);
    }

    #[test]
    fn equal_gmd_and_gmr_gives_zero_inductance() {
        let mut inputs = flat_line_inputs();
        inputs.equivalent_gmr = inputs.equivalent_gmd;
        let k = derive(&inputs).unwrap();
        assert_eq!(k.inductance_per_m, 0.0);
        assert_eq!(k.inductive_reactance_ohm, 0.0);
    }
}
