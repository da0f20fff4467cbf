//! Convenience re-exports for line parameter studies.

pub use crate::config::{CapacitanceRadius, LineConfig, LineConfigBuilder};
pub use crate::constants::*;
pub use crate::derivation::{derive, DerivationInputs, LineConstants};
pub use crate::engine::{bundle_gmd, bundle_gmr, pairwise_gmds, BundleGmd, BundleGmr, GeometricMeans};
pub use crate::errors::{LineError, Result};
pub use crate::geometry::{Bundle, GeometryStore};
pub use crate::history::{ComputationResult, HistoryLog, HistoryPolicy};
pub use crate::materials::{FixedResistance, ResistanceSource, ResistivityTable};
pub use crate::math::{distance, geometric_mean, CScalar, Scalar, P2};
pub use crate::presets::BundlePreset;
pub use crate::session::{LineCalculator, SharedCalculator};
pub use crate::sweep::{linspace, reactance_sweep, ReactancePoint};
pub use crate::transmission::Rlgc;
pub use crate::units::LengthUnit;
