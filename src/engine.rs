//! Geometric mean radius and distance of conductor bundles.
//!
//! For a bundle of N sub-conductors with self-GMR r′ the composite GMR is the
//! N²-th root of r′ᴺ · Π d_ij over every ordered pair i ≠ j. The GMD between
//! bundles P (M conductors) and Q (K conductors) is the (M·K)-th root of the
//! product of all cross distances. Both are evaluated in log space so large
//! bundles neither overflow nor underflow.

use std::iter;

use crate::errors::{LineError, Result};
use crate::geometry::Bundle;
use crate::math::{distance, geometric_mean, Scalar, P2};

/// Composite GMR of a single bundle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BundleGmr {
    /// Bundle label.
    pub label: String,
    /// Number of sub-conductors folded into the value.
    pub conductors: usize,
    /// Composite GMR in meters.
    pub gmr_m: Scalar,
}

/// GMD between two distinct bundles.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BundleGmd {
    /// Label of the bundle created first.
    pub first: String,
    /// Label of the bundle created second.
    pub second: String,
    /// Geometric mean distance in meters.
    pub gmd_m: Scalar,
}

impl BundleGmd {
    /// Pair name in the `A-B` form.
    #[must_use]
    pub fn pair(&self) -> String {
        format!("{}-{}", self.first, self.second)
    }
}

/// Everything the engine derives from the geometry store.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricMeans {
    /// Per-bundle composite GMR, in bundle order.
    pub bundle_gmrs: Vec<BundleGmr>,
    /// GMD of every unordered pair of distinct bundles.
    pub gmds: Vec<BundleGmd>,
    /// Geometric mean of all pairwise GMDs (D_eq).
    pub equivalent_gmd: Scalar,
    /// Geometric mean of all bundle GMRs (D_s).
    pub equivalent_gmr: Scalar,
}

/// Composite GMR of sub-conductors at `points`, each with self-GMR `self_gmr`.
///
/// A single conductor returns `self_gmr` unchanged. Returns `None` for an empty slice.
#[must_use]
pub fn bundle_gmr(points: &[P2], self_gmr: Scalar) -> Option<Scalar> {
    match points.len() {
        0 => None,
        1 => Some(self_gmr),
        n => {
            let own = iter::repeat(self_gmr).take(n);
            let mutual = points.iter().enumerate().flat_map(|(i, a)| {
                points
                    .iter()
                    .enumerate()
                    .filter(move |(j, _)| *j != i)
                    .map(move |(_, b)| distance(a, b))
            });
            geometric_mean(own.chain(mutual))
        }
    }
}

/// GMD between conductor sets `p` and `q`. Returns `None` if either is empty.
#[must_use]
pub fn bundle_gmd(p: &[P2], q: &[P2]) -> Option<Scalar> {
    geometric_mean(p.iter().flat_map(|a| q.iter().map(move |b| distance(a, b))))
}

/// GMD for every unordered pair of distinct bundles, in bundle order (AB, AC, BC, ...).
pub fn pairwise_gmds(bundles: &[Bundle]) -> Result<Vec<BundleGmd>> {
    if bundles.len() < 2 {
        return Err(LineError::InsufficientBundles {
            found: bundles.len(),
        });
    }
    if let Some(empty) = bundles.iter().find(|b| b.points().is_empty()) {
        return Err(LineError::EmptyBundle(empty.label().to_owned()));
    }
    let mut out = Vec::with_capacity(bundles.len() * (bundles.len() - 1) / 2);
    for (i, p) in bundles.iter().enumerate() {
        for q in &bundles[i + 1..] {
            let gmd_m = bundle_gmd(p.points(), q.points())
                .ok_or_else(|| LineError::EmptyBundle(p.label().to_owned()))?;
            tracing::debug!(pair = %format!("{}-{}", p.label(), q.label()), gmd_m, "bundle GMD");
            out.push(BundleGmd {
                first: p.label().to_owned(),
                second: q.label().to_owned(),
                gmd_m,
            });
        }
    }
    Ok(out)
}

/// Validates `bundles` and computes composite GMRs, pairwise GMDs and the equivalents.
pub fn evaluate(bundles: &[Bundle]) -> Result<GeometricMeans> {
    if bundles.len() < 2 {
        return Err(LineError::InsufficientBundles {
            found: bundles.len(),
        });
    }

    let mut bundle_gmrs = Vec::with_capacity(bundles.len());
    for bundle in bundles {
        if bundle.points().is_empty() {
            return Err(LineError::EmptyBundle(bundle.label().to_owned()));
        }
        let self_gmr = bundle
            .self_gmr()
            .ok_or_else(|| LineError::MissingSelfGmr(bundle.label().to_owned()))?;
        let gmr_m = bundle_gmr(bundle.points(), self_gmr)
            .ok_or_else(|| LineError::EmptyBundle(bundle.label().to_owned()))?;
        tracing::debug!(
            bundle = bundle.label(),
            conductors = bundle.conductor_count(),
            gmr_m,
            "bundle GMR"
        );
        bundle_gmrs.push(BundleGmr {
            label: bundle.label().to_owned(),
            conductors: bundle.conductor_count(),
            gmr_m,
        });
    }

    let gmds = pairwise_gmds(bundles)?;
    let equivalent_gmd = geometric_mean(gmds.iter().map(|g| g.gmd_m))
        .ok_or(LineError::InsufficientBundles { found: bundles.len() })?;
    let equivalent_gmr = geometric_mean(bundle_gmrs.iter().map(|g| g.gmr_m))
        .ok_or(LineError::InsufficientBundles { found: bundles.len() })?;

    Ok(GeometricMeans {
        bundle_gmrs,
        gmds,
        equivalent_gmd,
        equivalent_gmr,
    })
}

/// Equivalent capacitive radius: the bundle GMR formula with the physical
/// conductor `radius_m` in place of r′, averaged geometrically over bundles.
pub fn capacitive_radius(bundles: &[Bundle], radius_m: Scalar) -> Result<Scalar> {
    let mut radii = Vec::with_capacity(bundles.len());
    for bundle in bundles {
        let r = bundle_gmr(bundle.points(), radius_m)
            .ok_or_else(|| LineError::EmptyBundle(bundle.label().to_owned()))?;
        radii.push(r);
    }
    geometric_mean(radii).ok_or(LineError::InsufficientBundles { found: 0 })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::GeometryStore;

    fn flat_line() -> GeometryStore {
        let mut store = GeometryStore::new();
        for (label, x) in [("A", -5.0), ("B", 0.0), ("C", 5.0)] {
            store.add_point(label, P2::new(x, 10.0)).unwrap();
            store.set_self_gmr(label, 0.011).unwrap();
        }
        store
    }

    #[test]
    fn single_conductor_gmr_is_self_gmr() {
        assert_eq!(bundle_gmr(&[P2::new(3.0, 4.0)], 0.0121), Some(0.0121));
        assert_eq!(bundle_gmr(&[], 0.0121), None);
    }

    #[test]
    fn twin_bundle_gmr_is_sqrt_of_r_times_d() {
        // Values in feet; the formula is unit-agnostic.
        let pts = [P2::new(0.0, 0.0), P2::new(1.5, 0.0)];
        let gmr = bundle_gmr(&pts, 0.0435).unwrap();
        assert_relative_eq!(gmr, (0.0435_f64 * 1.5).sqrt(), max_relative = 1.0e-12);
        assert_relative_eq!(gmr, 0.2554, epsilon = 1.0e-4);
    }

    #[test]
    fn composite_gmr_is_geometric_not_arithmetic() {
        // Triangle with sides 1, 1, and a 4-conductor square of side 1.
        let r = 0.01;
        let tri = [
            P2::new(0.0, 0.0),
            P2::new(1.0, 0.0),
            P2::new(0.5, 3.0_f64.sqrt() / 2.0),
        ];
        assert_relative_eq!(bundle_gmr(&tri, r).unwrap(), (r * 1.0 * 1.0).cbrt(), max_relative = 1.0e-12);

        let square = [
            P2::new(0.0, 0.0),
            P2::new(1.0, 0.0),
            P2::new(1.0, 1.0),
            P2::new(0.0, 1.0),
        ];
        let expected = (r * 2.0_f64.sqrt()).powf(0.25);
        let gmr = bundle_gmr(&square, r).unwrap();
        assert_relative_eq!(gmr, expected, max_relative = 1.0e-12);

        let arithmetic = (4.0 * r + 8.0 * 1.0 + 4.0 * 2.0_f64.sqrt()) / 16.0;
        assert!((gmr - arithmetic).abs() > 1.0e-3);
    }

    #[test]
    fn composite_gmr_exceeds_self_gmr_when_spacing_is_larger() {
        let r = 0.012;
        for n in 2..=8 {
            let spacing = 0.45;
            let radius = spacing / (2.0 * (std::f64::consts::PI / n as f64).sin());
            let pts: Vec<P2> = (0..n)
                .map(|k| {
                    let a = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
                    P2::new(radius * a.cos(), radius * a.sin())
                })
                .collect();
            assert!(bundle_gmr(&pts, r).unwrap() > r, "n = {n}");
        }
    }

    #[test]
    fn gmd_is_symmetric() {
        let p = [P2::new(0.0, 0.0), P2::new(0.4, 0.0), P2::new(0.2, 0.35)];
        let q = [P2::new(7.0, 1.0), P2::new(7.4, 1.0)];
        let pq = bundle_gmd(&p, &q).unwrap();
        let qp = bundle_gmd(&q, &p).unwrap();
        assert_relative_eq!(pq, qp, max_relative = 1.0e-12);
    }

    #[test]
    fn flat_line_gmds_and_equivalents() {
        let store = flat_line();
        let means = evaluate(store.bundles()).unwrap();

        let pairs: Vec<_> = means.gmds.iter().map(BundleGmd::pair).collect();
        assert_eq!(pairs, ["A-B", "A-C", "B-C"]);
        assert_relative_eq!(means.gmds[0].gmd_m, 5.0, epsilon = 1.0e-12);
        assert_relative_eq!(means.gmds[1].gmd_m, 10.0, epsilon = 1.0e-12);
        assert_relative_eq!(means.gmds[2].gmd_m, 5.0, epsilon = 1.0e-12);
        assert_relative_eq!(means.equivalent_gmd, 6.2996, epsilon = 1.0e-4);
        assert_relative_eq!(means.equivalent_gmr, 0.011, max_relative = 1.0e-12);
    }

    #[test]
    fn evaluate_reports_structural_errors() {
        let mut store = GeometryStore::new();
        store.add_point("A", P2::new(0.0, 0.0)).unwrap();
        store.set_self_gmr("A", 0.01).unwrap();
        assert_eq!(
            evaluate(store.bundles()),
            Err(LineError::InsufficientBundles { found: 1 })
        );

        store.add_point("B", P2::new(1.0, 0.0)).unwrap();
        assert_eq!(
            evaluate(store.bundles()),
            Err(LineError::MissingSelfGmr("B".into()))
        );

        store.set_self_gmr("C", 0.01).unwrap();
        store.set_self_gmr("B", 0.01).unwrap();
        assert_eq!(evaluate(store.bundles()), Err(LineError::EmptyBundle("C".into())));
        assert!(pairwise_gmds(&store.bundles()[..1]).is_err());
    }

    #[test]
    fn pairwise_gmds_names_the_empty_bundle() {
        let mut store = GeometryStore::new();
        store.add_point("A", P2::new(0.0, 0.0)).unwrap();
        store.set_self_gmr("B", 0.01).unwrap();
        store.add_point("C", P2::new(4.0, 0.0)).unwrap();
        assert_eq!(
            pairwise_gmds(store.bundles()),
            Err(LineError::EmptyBundle("B".into()))
        );
    }

    #[test]
    fn capacitive_radius_uses_physical_radius() {
        let mut store = GeometryStore::new();
        store.add_point("A", P2::new(0.0, 0.0)).unwrap();
        store.add_point("A", P2::new(0.4, 0.0)).unwrap();
        store.add_point("B", P2::new(8.0, 0.0)).unwrap();
        store.add_point("B", P2::new(8.4, 0.0)).unwrap();
        let r = capacitive_radius(store.bundles(), 0.015).unwrap();
        assert_relative_eq!(r, (0.015_f64 * 0.4).sqrt(), max_relative = 1.0e-12);
    }
}
