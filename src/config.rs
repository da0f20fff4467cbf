//! Line configuration: material, length, conductor radius, frequency and input unit.

use crate::errors::{LineError, Result};
use crate::math::Scalar;
use crate::units::LengthUnit;

/// Radius used in the capacitance formula.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacitanceRadius {
    /// Reuse the equivalent self-GMR D_s, giving C′ = 2πε₀ / ln(D_eq / D_s).
    #[default]
    SelfGmr,
    /// Standard equivalent radius: the bundle GMR formula with the physical
    /// conductor radius in place of r′, averaged geometrically over bundles.
    ConductorRadius,
}

/// Immutable line configuration. Build with [`LineConfig::builder`].
///
/// Values are range-checked only by [`LineConfig::validate`], which the
/// calculator runs before every computation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LineConfig {
    material: String,
    length_km: Scalar,
    conductor_radius_m: Scalar,
    frequency_hz: Scalar,
    unit: LengthUnit,
    capacitance_radius: CapacitanceRadius,
}

impl Default for LineConfig {
    /// 100 km copper line, 1 cm conductor radius, 60 Hz, coordinates in meters.
    fn default() -> Self {
        Self {
            material: "Copper".to_owned(),
            length_km: 100.0,
            conductor_radius_m: 0.01,
            frequency_hz: 60.0,
            unit: LengthUnit::Meter,
            capacitance_radius: CapacitanceRadius::SelfGmr,
        }
    }
}

impl LineConfig {
    /// Starts a builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> LineConfigBuilder {
        LineConfigBuilder::default()
    }

    /// Starts a builder seeded with this configuration.
    #[must_use]
    pub fn to_builder(&self) -> LineConfigBuilder {
        LineConfigBuilder {
            config: self.clone(),
        }
    }

    /// Conductor material label.
    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Total line length in kilometers.
    #[must_use]
    pub const fn length_km(&self) -> Scalar {
        self.length_km
    }

    /// Physical radius of one sub-conductor in meters.
    #[must_use]
    pub const fn conductor_radius_m(&self) -> Scalar {
        self.conductor_radius_m
    }

    /// Operating frequency in hertz.
    #[must_use]
    pub const fn frequency_hz(&self) -> Scalar {
        self.frequency_hz
    }

    /// Unit in which coordinates and self-GMR values are entered.
    #[must_use]
    pub const fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Capacitance radius policy.
    #[must_use]
    pub const fn capacitance_radius(&self) -> CapacitanceRadius {
        self.capacitance_radius
    }

    /// Checks that length, radius and frequency are finite and positive.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("length_km", self.length_km),
            ("conductor_radius_m", self.conductor_radius_m),
            ("frequency_hz", self.frequency_hz),
        ];
        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(LineError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Incremental builder for [`LineConfig`].
#[derive(Debug, Clone, Default)]
pub struct LineConfigBuilder {
    config: LineConfig,
}

impl LineConfigBuilder {
    /// Sets the conductor material label.
    #[must_use]
    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.config.material = material.into();
        self
    }

    /// Sets the line length in kilometers.
    #[must_use]
    pub fn length_km(mut self, length_km: Scalar) -> Self {
        self.config.length_km = length_km;
        self
    }

    /// Sets the physical conductor radius in meters.
    #[must_use]
    pub fn conductor_radius_m(mut self, radius_m: Scalar) -> Self {
        self.config.conductor_radius_m = radius_m;
        self
    }

    /// Sets the operating frequency in hertz.
    #[must_use]
    pub fn frequency_hz(mut self, frequency_hz: Scalar) -> Self {
        self.config.frequency_hz = frequency_hz;
        self
    }

    /// Sets the input unit.
    #[must_use]
    pub fn unit(mut self, unit: LengthUnit) -> Self {
        self.config.unit = unit;
        self
    }

    /// Sets the capacitance radius policy.
    #[must_use]
    pub fn capacitance_radius(mut self, policy: CapacitanceRadius) -> Self {
        self.config.capacitance_radius = policy;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> LineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = LineConfig::builder()
            .material("ACSR")
            .length_km(80.0)
            .frequency_hz(50.0)
            .unit(LengthUnit::Foot)
            .build();
        assert_eq!(cfg.material(), "ACSR");
        assert_eq!(cfg.length_km(), 80.0);
        assert_eq!(cfg.frequency_hz(), 50.0);
        assert_eq!(cfg.conductor_radius_m(), 0.01);
        assert_eq!(cfg.unit(), LengthUnit::Foot);
        assert_eq!(cfg.capacitance_radius(), CapacitanceRadius::SelfGmr);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validation_is_deferred_to_validate() {
        let cfg = LineConfig::builder().frequency_hz(0.0).build();
        assert_eq!(
            cfg.validate(),
            Err(LineError::InvalidParameter { name: "frequency_hz", value: 0.0 })
        );
        let cfg = cfg.to_builder().frequency_hz(60.0).length_km(f64::NAN).build();
        assert!(matches!(
            cfg.validate(),
            Err(LineError::InvalidParameter { name: "length_km", .. })
        ));
    }
}
