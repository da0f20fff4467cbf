//! Distributed per-meter parameters and the quantities derived from them.

use crate::math::{CScalar, Scalar};

/// Distributed RLGC parameters per unit length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rlgc {
    /// Series resistance per meter (Ω/m).
    pub r_per_m: Scalar,
    /// Series inductance per meter (H/m).
    pub l_per_m: Scalar,
    /// Shunt conductance per meter (S/m).
    pub g_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub c_per_m: Scalar,
}

impl Rlgc {
    /// Lossless line parameters (R=G=0).
    #[must_use]
    pub const fn lossless(l_per_m: Scalar, c_per_m: Scalar) -> Self {
        Self {
            r_per_m: 0.0,
            l_per_m,
            g_per_m: 0.0,
            c_per_m,
        }
    }

    /// Series impedance per meter R + jωL.
    #[must_use]
    pub fn series_impedance(&self, omega: Scalar) -> CScalar {
        CScalar::new(self.r_per_m, omega * self.l_per_m)
    }

    /// Shunt admittance per meter G + jωC.
    #[must_use]
    pub fn shunt_admittance(&self, omega: Scalar) -> CScalar {
        CScalar::new(self.g_per_m, omega * self.c_per_m)
    }

    /// Characteristic (surge) impedance Zc = √((R + jωL)/(G + jωC)).
    #[must_use]
    pub fn characteristic_impedance(&self, omega: Scalar) -> CScalar {
        (self.series_impedance(omega) / self.shunt_admittance(omega)).sqrt()
    }

    /// Propagation constant γ = √((R + jωL)(G + jωC)) per meter.
    #[must_use]
    pub fn propagation_constant(&self, omega: Scalar) -> CScalar {
        (self.series_impedance(omega) * self.shunt_admittance(omega)).sqrt()
    }

    /// Surge impedance loading V²/|Zc| in watts for line-to-line voltage `v_ll` (V).
    #[must_use]
    pub fn surge_impedance_loading(&self, omega: Scalar, v_ll: Scalar) -> Scalar {
        v_ll * v_ll / self.characteristic_impedance(omega).norm()
    }
}
