#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fixed physical constants used by the line formulas.
pub mod constants;
/// Length units and conversion to meters.
pub mod units;
/// Shared numerical helpers (points, distances, geometric means).
pub mod math;
/// Conductor positions and self-GMR grouped by bundle.
pub mod geometry;
/// Composite bundle GMR and inter-bundle GMD.
pub mod engine;
/// Line configuration and its builder.
pub mod config;
/// Pluggable conductor resistance sources.
pub mod materials;
/// R, L, C and reactance derivation.
pub mod derivation;
/// Distributed RLGC parameters, surge impedance and propagation.
pub mod transmission;
/// Standard bundle layouts.
pub mod presets;
/// Computation records and history log.
pub mod history;
/// Calculator session orchestrating a computation.
pub mod session;
/// Frequency sweep helpers.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
