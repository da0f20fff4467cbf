//! Standard sub-conductor layouts for bundled phases.

use std::f64::consts::PI;

use crate::math::{Scalar, P2};

/// Regular bundle arrangements with equal adjacent spacing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundlePreset {
    /// Two conductors side by side.
    Twin,
    /// Equilateral triangle, apex up.
    Triangle,
    /// Axis-aligned square.
    Quad,
}

impl BundlePreset {
    /// Number of sub-conductors.
    #[must_use]
    pub const fn conductor_count(self) -> usize {
        match self {
            Self::Twin => 2,
            Self::Triangle => 3,
            Self::Quad => 4,
        }
    }

    /// Positions around `center` with adjacent conductors `spacing` apart.
    #[must_use]
    pub fn points(self, center: P2, spacing: Scalar) -> Vec<P2> {
        let n = self.conductor_count();
        // circumradius of a regular n-gon with side `spacing`
        let radius = spacing / (2.0 * (PI / n as Scalar).sin());
        let start = match self {
            Self::Twin => 0.0,
            Self::Triangle => PI / 2.0,
            Self::Quad => PI / 4.0,
        };
        (0..n)
            .map(|k| {
                let angle = start + 2.0 * PI * k as Scalar / n as Scalar;
                P2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::distance;

    #[test]
    fn adjacent_spacing_matches_request() {
        let center = P2::new(-3.0, 12.0);
        for preset in [BundlePreset::Twin, BundlePreset::Triangle, BundlePreset::Quad] {
            let pts = preset.points(center, 0.45);
            assert_eq!(pts.len(), preset.conductor_count());
            for k in 0..pts.len() {
                let next = &pts[(k + 1) % pts.len()];
                assert_relative_eq!(distance(&pts[k], next), 0.45, max_relative = 1.0e-12);
            }
        }
    }

    #[test]
    fn twin_is_horizontal_and_quad_is_axis_aligned() {
        let twin = BundlePreset::Twin.points(P2::new(0.0, 10.0), 1.0);
        assert_relative_eq!(twin[0].y, twin[1].y, epsilon = 1.0e-12);
        assert_relative_eq!(twin[0].x, 0.5, epsilon = 1.0e-12);

        let quad = BundlePreset::Quad.points(P2::origin(), 2.0);
        assert_relative_eq!(quad[0].x, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(quad[0].y, 1.0, epsilon = 1.0e-12);
    }
}
