//! Calculator session: configuration, geometry, resistance source and history.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use crate::config::{CapacitanceRadius, LineConfig};
use crate::derivation::{derive, DerivationInputs};
use crate::engine::{self, GeometricMeans};
use crate::errors::Result;
use crate::geometry::{Bundle, GeometryStore};
use crate::history::{ComputationResult, HistoryLog, HistoryPolicy};
use crate::materials::{ResistanceSource, ResistivityTable};
use crate::math::{Scalar, P2};
use crate::presets::BundlePreset;
use crate::units::LengthUnit;

type BoxedResistance = Box<dyn ResistanceSource + Send + Sync>;

/// One line-parameter scenario at a time, with a history of completed computations.
///
/// Coordinates and self-GMR values are entered in the configured
/// [`LengthUnit`] and stored in meters. Changing the unit later does not
/// reinterpret values already entered.
pub struct LineCalculator {
    config: LineConfig,
    geometry: GeometryStore,
    history: HistoryLog,
    policy: HistoryPolicy,
    resistance: BoxedResistance,
}

impl fmt::Debug for LineCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineCalculator")
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("history_len", &self.history.len())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Default for LineCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCalculator {
    /// Session with default configuration, the standard resistivity table,
    /// and history retained across [`clear_all`](Self::clear_all).
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_policy(HistoryPolicy::Retain)
    }

    /// Session with an explicit history policy.
    #[must_use]
    pub fn with_history_policy(policy: HistoryPolicy) -> Self {
        Self {
            config: LineConfig::default(),
            geometry: GeometryStore::new(),
            history: HistoryLog::new(),
            policy,
            resistance: Box::new(ResistivityTable::standard()),
        }
    }

    /// Replaces the resistance source.
    #[must_use]
    pub fn with_resistance_source<S>(mut self, source: S) -> Self
    where
        S: ResistanceSource + Send + Sync + 'static,
    {
        self.resistance = Box::new(source);
        self
    }

    /// History policy chosen at construction.
    #[must_use]
    pub const fn history_policy(&self) -> HistoryPolicy {
        self.policy
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &LineConfig {
        &self.config
    }

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: LineConfig) {
        self.config = config;
    }

    /// Sets material, length (km), conductor radius (m) and frequency (Hz).
    ///
    /// Values are range-checked by [`compute_results`](Self::compute_results).
    pub fn set_line_params(
        &mut self,
        material: impl Into<String>,
        length_km: Scalar,
        conductor_radius_m: Scalar,
        frequency_hz: Scalar,
    ) {
        self.config = self
            .config
            .to_builder()
            .material(material)
            .length_km(length_km)
            .conductor_radius_m(conductor_radius_m)
            .frequency_hz(frequency_hz)
            .build();
    }

    /// Sets the input unit from its symbol (`m`, `ft`, `in`, `cm`, `mm`).
    pub fn set_unit(&mut self, symbol: &str) -> Result<()> {
        let unit = symbol.parse::<LengthUnit>()?;
        self.set_length_unit(unit);
        Ok(())
    }

    /// Sets the input unit.
    pub fn set_length_unit(&mut self, unit: LengthUnit) {
        self.config = self.config.to_builder().unit(unit).build();
    }

    /// Sets the capacitance radius policy.
    pub fn set_capacitance_radius(&mut self, policy: CapacitanceRadius) {
        self.config = self.config.to_builder().capacitance_radius(policy).build();
    }

    /// Active input unit.
    #[must_use]
    pub const fn unit(&self) -> LengthUnit {
        self.config.unit()
    }

    /// Adds a conductor at (`x`, `y`) in the active unit to bundle `label`.
    pub fn add_point(&mut self, x: Scalar, y: Scalar, label: &str) -> Result<()> {
        let unit = self.unit();
        self.geometry
            .add_point(label, P2::new(unit.to_meters(x), unit.to_meters(y)))
    }

    /// Sets the sub-conductor self-GMR of bundle `label`, in the active unit.
    pub fn set_self_gmr(&mut self, label: &str, value: Scalar) -> Result<()> {
        let meters = self.unit().to_meters(value);
        self.geometry.set_self_gmr(label, meters)?;
        tracing::debug!(bundle = label, self_gmr_m = meters, "self GMR set");
        Ok(())
    }

    /// Adds a whole preset bundle centred on (`x`, `y`) with adjacent `spacing`, all in the active unit.
    pub fn add_bundle_preset(
        &mut self,
        label: &str,
        preset: BundlePreset,
        x: Scalar,
        y: Scalar,
        spacing: Scalar,
    ) -> Result<()> {
        let unit = self.unit();
        let center = P2::new(unit.to_meters(x), unit.to_meters(y));
        for point in preset.points(center, unit.to_meters(spacing)) {
            self.geometry.add_point(label, point)?;
        }
        Ok(())
    }

    /// Removes every conductor of one bundle, keeping its self-GMR.
    pub fn clear_bundle(&mut self, label: &str) -> bool {
        self.geometry.clear_bundle(label)
    }

    /// Geometry entered so far.
    #[must_use]
    pub const fn geometry(&self) -> &GeometryStore {
        &self.geometry
    }

    /// Bundles in creation order.
    #[must_use]
    pub fn bundles(&self) -> &[Bundle] {
        self.geometry.bundles()
    }

    /// Runs the full computation, records it and returns it.
    ///
    /// Nothing is recorded when any step fails.
    pub fn compute_results(&mut self) -> Result<ComputationResult> {
        self.config.validate()?;
        let bundles = self.geometry.bundles();
        let GeometricMeans {
            bundle_gmrs,
            gmds,
            equivalent_gmd,
            equivalent_gmr,
        } = engine::evaluate(bundles)?;

        let capacitive_radius = match self.config.capacitance_radius() {
            CapacitanceRadius::SelfGmr => equivalent_gmr,
            CapacitanceRadius::ConductorRadius => {
                engine::capacitive_radius(bundles, self.config.conductor_radius_m())?
            }
        };

        let conductors_per_phase = bundles
            .iter()
            .map(Bundle::conductor_count)
            .max()
            .unwrap_or(1);
        let resistance_per_km = self
            .resistance
            .resistance_per_km(&self.config, conductors_per_phase)?;

        let constants = derive(&DerivationInputs {
            equivalent_gmd,
            equivalent_gmr,
            capacitive_radius,
            resistance_per_km,
            length_km: self.config.length_km(),
            frequency_hz: self.config.frequency_hz(),
        })?;

        let result = ComputationResult {
            sequence: self.history.next_sequence(),
            recorded_at: Utc::now(),
            config: self.config.clone(),
            bundles: bundles.to_vec(),
            bundle_gmrs,
            gmds,
            equivalent_gmd_m: equivalent_gmd,
            equivalent_gmr_m: equivalent_gmr,
            capacitive_radius_m: capacitive_radius,
            constants,
        };
        tracing::info!(
            sequence = result.sequence,
            bundles = result.bundles.len(),
            d_eq_m = equivalent_gmd,
            d_s_m = equivalent_gmr,
            l_h_per_m = constants.inductance_per_m,
            c_f_per_m = constants.capacitance_per_m,
            "line parameters computed"
        );
        self.history.push(result.clone());
        Ok(result)
    }

    /// Resets geometry and line parameters for a new scenario.
    ///
    /// The input unit and capacitance radius policy are kept. History survives under [`HistoryPolicy::Retain`] and is dropped under
    /// [`HistoryPolicy::Discard`].
    pub fn clear_all(&mut self) {
        self.geometry.clear();
        self.config = LineConfig::builder()
            .unit(self.config.unit())
            .capacitance_radius(self.config.capacitance_radius())
            .build();
        if self.policy == HistoryPolicy::Discard && !self.history.is_empty() {
            tracing::warn!(entries = self.history.len(), "discarding history on clear");
            self.history.clear();
        }
    }

    /// Empties the history regardless of policy.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Completed computations in call order.
    #[must_use]
    pub fn history(&self) -> &[ComputationResult] {
        self.history.entries()
    }

    /// The history log itself.
    #[must_use]
    pub const fn history_log(&self) -> &HistoryLog {
        &self.history
    }
}

/// A [`LineCalculator`] behind one mutex, for callers sharing a session across threads.
///
/// Every method holds the lock for the whole operation, so each computation
/// sees a consistent snapshot of geometry and configuration.
#[derive(Debug, Default)]
pub struct SharedCalculator {
    inner: Mutex<LineCalculator>,
}

impl SharedCalculator {
    /// Wraps an existing session.
    #[must_use]
    pub fn new(calculator: LineCalculator) -> Self {
        Self {
            inner: Mutex::new(calculator),
        }
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut LineCalculator) -> R) -> R {
        // operations never leave the session half-updated, so a poisoned lock is still usable
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// See [`LineCalculator::compute_results`].
    pub fn compute_results(&self) -> Result<ComputationResult> {
        self.with(LineCalculator::compute_results)
    }

    /// Snapshot of the history.
    #[must_use]
    pub fn history(&self) -> Vec<ComputationResult> {
        self.with(|calc| calc.history().to_vec())
    }

    /// Unwraps the session.
    #[must_use]
    pub fn into_inner(self) -> LineCalculator {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
