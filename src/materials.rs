//! Conductor resistance sources.
//!
//! The calculator does not hardcode resistance. It asks a
//! [`ResistanceSource`] for the per-phase resistance per kilometer and scales
//! it by line length. A resistivity table, a fixed value, or any closure
//! mapping a material name to Ω/km can serve as the source.

use std::f64::consts::PI;

use crate::config::LineConfig;
use crate::constants::METERS_PER_KM;
use crate::errors::{LineError, Result};
use crate::math::Scalar;

/// Supplies the per-phase series resistance of a line in Ω/km.
pub trait ResistanceSource {
    /// Resistance per kilometer of one phase with `conductors_per_phase` sub-conductors in parallel.
    fn resistance_per_km(&self, config: &LineConfig, conductors_per_phase: usize) -> Result<Scalar>;
}

/// Material name to DC resistivity (Ω·m) at 20 °C.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ResistivityTable {
    entries: Vec<(String, Scalar)>,
}

impl Default for ResistivityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ResistivityTable {
    /// Empty table.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Copper, aluminum, steel and ACSR.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.insert("Copper", 1.68e-8);
        table.insert("Aluminum", 2.82e-8);
        table.insert("Steel", 1.43e-7);
        table.insert("ACSR", 3.2e-8);
        table
    }

    /// Adds or replaces a material. Names compare case-insensitively.
    pub fn insert(&mut self, material: impl Into<String>, resistivity_ohm_m: Scalar) {
        let material = material.into();
        match self
            .entries
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&material))
        {
            Some(entry) => entry.1 = resistivity_ohm_m,
            None => self.entries.push((material, resistivity_ohm_m)),
        }
    }

    /// Resistivity of `material` in Ω·m.
    #[must_use]
    pub fn resistivity(&self, material: &str) -> Option<Scalar> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(material))
            .map(|(_, rho)| *rho)
    }

    /// Known material names in insertion order.
    pub fn materials(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl ResistanceSource for ResistivityTable {
    /// R′ = ρ · 1000 / (π r² n) for n parallel solid conductors of radius r.
    fn resistance_per_km(&self, config: &LineConfig, conductors_per_phase: usize) -> Result<Scalar> {
        let rho = self
            .resistivity(config.material())
            .ok_or_else(|| LineError::UnknownMaterial(config.material().to_owned()))?;
        let area = PI * config.conductor_radius_m().powi(2);
        let n = conductors_per_phase.max(1) as Scalar;
        Ok(rho * METERS_PER_KM / (area * n))
    }
}

/// Fixed per-phase resistance in Ω/km, independent of material and geometry.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedResistance(pub Scalar);

impl ResistanceSource for FixedResistance {
    fn resistance_per_km(&self, _config: &LineConfig, _conductors_per_phase: usize) -> Result<Scalar> {
        Ok(self.0)
    }
}

/// Closures map a material name to Ω/km per phase.
impl<F> ResistanceSource for F
where
    F: Fn(&str) -> Option<Scalar>,
{
    fn resistance_per_km(&self, config: &LineConfig, _conductors_per_phase: usize) -> Result<Scalar> {
        self(config.material()).ok_or_else(|| LineError::UnknownMaterial(config.material().to_owned()))
    }
}
