//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Point2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Conductor position in the cross-section plane, in meters.
pub type P2 = Point2<Scalar>;
/// Primary complex scalar type used for phasor quantities.
pub type CScalar = num_complex::Complex<Scalar>;

/// Euclidean distance between two conductor positions.
#[inline]
#[must_use]
pub fn distance(a: &P2, b: &P2) -> Scalar {
    nalgebra::distance(a, b)
}

/// Geometric mean of `values`, evaluated as the exponential of the mean logarithm.
///
/// Returns `None` for an empty input. Any zero term yields `0.0`; negative terms
/// are outside the domain and yield `NaN`.
#[must_use]
pub fn geometric_mean<I>(values: I) -> Option<Scalar>
where
    I: IntoIterator<Item = Scalar>,
{
    let mut count = 0usize;
    let mut log_sum = 0.0;
    for v in values {
        count += 1;
        log_sum += v.ln();
    }
    if count == 0 {
        return None;
    }
    Some((log_sum / count as Scalar).exp())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn distance_matches_pythagoras() {
        let a = P2::new(0.0, 0.0);
        let b = P2::new(3.0, 4.0);
        assert_relative_eq!(distance(&a, &b), 5.0, epsilon = 1.0e-12);
    }

    #[test]
    fn geometric_mean_of_known_values() {
        let g = geometric_mean([5.0, 5.0, 10.0]).unwrap();
        assert_relative_eq!(g, 250.0_f64.cbrt(), max_relative = 1.0e-12);
        assert!(geometric_mean(std::iter::empty()).is_none());
    }

    #[test]
    fn geometric_mean_with_zero_term_is_zero() {
        assert_eq!(geometric_mean([0.0, 4.0]).unwrap(), 0.0);
    }
}
