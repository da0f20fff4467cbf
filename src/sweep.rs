//! Frequency sweeps of the line reactances.

use crate::constants::angular_frequency;
use crate::history::ComputationResult;
use crate::math::Scalar;

/// Reactances of one line at one frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactancePoint {
    /// Frequency in hertz.
    pub frequency_hz: Scalar,
    /// Total series reactance ωL (Ω).
    pub inductive_reactance_ohm: Scalar,
    /// Total shunt reactance 1/(ωC) (Ω).
    pub capacitive_reactance_ohm: Scalar,
}

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Re-evaluates X_L and X_C of `result` at each frequency. L and C do not depend on frequency.
#[must_use]
pub fn reactance_sweep<I>(result: &ComputationResult, frequencies_hz: I) -> Vec<ReactancePoint>
where
    I: IntoIterator<Item = Scalar>,
{
    let l = result.constants.inductance_h;
    let c = result.constants.capacitance_f;
    frequencies_hz
        .into_iter()
        .map(|f| {
            let w = angular_frequency(f);
            ReactancePoint {
                frequency_hz: f,
                inductive_reactance_ohm: w * l,
                capacitive_reactance_ohm: 1.0 / (w * c),
            }
        })
        .collect()
}
