//! Conductor geometry grouped by phase bundle.
//!
//! The store only holds data. Positions and self-GMR values arrive here
//! already normalized to meters; composite GMR and GMD are computed by
//! [`crate::engine`].

use crate::errors::{LineError, Result};
use crate::math::{Scalar, P2};

/// One phase bundle: a label, its sub-conductor positions and their self-GMR.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    label: String,
    points: Vec<P2>,
    self_gmr: Option<Scalar>,
}

impl Bundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
            self_gmr: None,
        }
    }

    /// Phase label, e.g. `"A"`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sub-conductor positions in meters, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[P2] {
        &self.points
    }

    /// Self-GMR (r′) of each sub-conductor in meters, if set.
    #[must_use]
    pub const fn self_gmr(&self) -> Option<Scalar> {
        self.self_gmr
    }

    /// Number of sub-conductors.
    #[must_use]
    pub fn conductor_count(&self) -> usize {
        self.points.len()
    }
}

/// Bundles keyed by label, kept in creation order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryStore {
    bundles: Vec<Bundle>,
}

impl GeometryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a conductor position (meters) to `label`, creating the bundle if absent.
    pub fn add_point(&mut self, label: &str, position: P2) -> Result<()> {
        for (name, value) in [("x coordinate", position.x), ("y coordinate", position.y)] {
            if !value.is_finite() {
                return Err(LineError::InvalidParameter { name, value });
            }
        }
        self.bundle_mut(label).points.push(position);
        Ok(())
    }

    /// Records or overwrites the self-GMR (meters) of `label`, creating the bundle if absent.
    pub fn set_self_gmr(&mut self, label: &str, self_gmr: Scalar) -> Result<()> {
        if !(self_gmr.is_finite() && self_gmr > 0.0) {
            return Err(LineError::InvalidParameter {
                name: "self GMR",
                value: self_gmr,
            });
        }
        self.bundle_mut(label).self_gmr = Some(self_gmr);
        Ok(())
    }

    /// Removes every position from `label`, keeping its self-GMR.
    ///
    /// Returns `false` when no such bundle exists.
    pub fn clear_bundle(&mut self, label: &str) -> bool {
        match self.bundles.iter_mut().find(|b| b.label == label) {
            Some(bundle) => {
                bundle.points.clear();
                true
            }
            None => false,
        }
    }

    /// Discards all bundles.
    pub fn clear(&mut self) {
        self.bundles.clear();
    }

    /// Looks up a bundle by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.label == label)
    }

    /// All bundles in creation order.
    #[must_use]
    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    /// Number of bundles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// True if no bundle has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    fn bundle_mut(&mut self, label: &str) -> &mut Bundle {
        let idx = match self.bundles.iter().position(|b| b.label == label) {
            Some(idx) => idx,
            None => {
                self.bundles.push(Bundle::new(label));
                self.bundles.len() - 1
            }
        };
        &mut self.bundles[idx]
    }
}
