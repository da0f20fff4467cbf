//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = LineError> = std::result::Result<T, E>;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// Raised when a unit symbol is not one of `m`, `ft`, `in`, `cm`, `mm`.
    #[error("unsupported unit `{0}` (expected one of m, ft, in, cm, mm)")]
    UnsupportedUnit(String),
    /// Raised when fewer than two bundles are defined at compute time.
    #[error("at least two bundles are required, found {found}")]
    InsufficientBundles {
        /// Number of bundles present.
        found: usize,
    },
    /// Raised when a bundle has no self-GMR at compute time.
    #[error("bundle `{0}` has no self-GMR")]
    MissingSelfGmr(String),
    /// Raised when a bundle has no conductor positions at compute time.
    #[error("bundle `{0}` has no conductor positions")]
    EmptyBundle(String),
    /// Raised for non-positive GMD/GMR or a log-domain violation.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    /// Raised when the resistance source does not know the configured material.
    #[error("unknown conductor material `{0}`")]
    UnknownMaterial(String),
    /// Raised when a numeric input is outside its valid range.
    #[error("invalid {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: Scalar,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = LineError::MissingSelfGmr("B".into());
        assert_eq!(err.to_string(), "bundle `B` has no self-GMR");
        let err = LineError::InvalidParameter { name: "frequency_hz", value: -1.0 };
        assert_eq!(err.to_string(), "invalid frequency_hz: -1");
    }
}
