//! Computation records and the append-only history log.

use chrono::{DateTime, Utc};

use crate::config::LineConfig;
use crate::derivation::LineConstants;
use crate::engine::{BundleGmd, BundleGmr};
use crate::geometry::Bundle;
use crate::math::Scalar;

/// Outcome of one successful computation together with the inputs that produced it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    /// Position in the session history, starting at 1.
    pub sequence: usize,
    /// Wall-clock time the computation completed.
    pub recorded_at: DateTime<Utc>,
    /// Configuration snapshot.
    pub config: LineConfig,
    /// Geometry snapshot, positions and self-GMR in meters.
    pub bundles: Vec<Bundle>,
    /// Composite GMR per bundle.
    pub bundle_gmrs: Vec<BundleGmr>,
    /// GMD per unordered bundle pair.
    pub gmds: Vec<BundleGmd>,
    /// Equivalent GMD D_eq (m).
    pub equivalent_gmd_m: Scalar,
    /// Equivalent GMR D_s (m).
    pub equivalent_gmr_m: Scalar,
    /// Radius used in the capacitance formula (m).
    pub capacitive_radius_m: Scalar,
    /// Derived R, L, C, X_L, X_C.
    pub constants: LineConstants,
}

impl ComputationResult {
    /// GMR of the bundle labelled `label`, in meters.
    #[must_use]
    pub fn gmr(&self, label: &str) -> Option<Scalar> {
        self.bundle_gmrs
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.gmr_m)
    }

    /// GMD between bundles `a` and `b` in either order, in meters.
    #[must_use]
    pub fn gmd(&self, a: &str, b: &str) -> Option<Scalar> {
        self.gmds
            .iter()
            .find(|g| (g.first == a && g.second == b) || (g.first == b && g.second == a))
            .map(|g| g.gmd_m)
    }
}

/// What happens to the history when a session is cleared.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPolicy {
    /// Keep previous results so scenarios can be compared.
    #[default]
    Retain,
    /// Drop previous results together with the geometry.
    Discard,
}

/// Append-only sequence of results in computation order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<ComputationResult>,
    last_sequence: usize,
}

impl HistoryLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next appended entry should carry.
    #[must_use]
    pub const fn next_sequence(&self) -> usize {
        self.last_sequence + 1
    }

    pub(crate) fn push(&mut self, entry: ComputationResult) {
        self.last_sequence = entry.sequence;
        self.entries.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in computation order.
    #[must_use]
    pub fn entries(&self) -> &[ComputationResult] {
        &self.entries
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&ComputationResult> {
        self.entries.last()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in computation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComputationResult> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a ComputationResult;
    type IntoIter = std::slice::Iter<'a, ComputationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
