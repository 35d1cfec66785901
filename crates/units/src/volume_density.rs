use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A physical volume density (mass per volume) quantity using f64 precision.
///
/// The `VolumeDensity` struct represents bulk density with kilograms per
/// cubic meter as the base unit, matching the SI convention of the rest of
/// the pipeline.
///
/// Typical bulk densities of small bodies:
/// - Water ice: ~920 kg/m³
/// - Comet nuclei: ~500-1200 kg/m³
/// - Differentiated dwarf planets: ~2000-3000 kg/m³
/// - Silicate rock: ~3300 kg/m³
///
/// # Examples
///
/// ```rust
/// use units::VolumeDensity;
///
/// let ceres = VolumeDensity::from_kg_per_m3(2_162.0);
/// let in_cgs = ceres.to_grams_per_cm3();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: kg/m³

impl VolumeDensity {
    /// Creates a new `VolumeDensity` from a value in kilograms per cubic meter.
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `VolumeDensity` from a value in grams per cubic centimeter.
    ///
    /// 1 g/cm³ = 1000 kg/m³
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value * 1_000.0)
    }

    /// Returns the volume density in kilograms per cubic meter.
    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }

    /// Converts the volume density to grams per cubic centimeter.
    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 / 1_000.0
    }

    /// Density of water ice, a common lower bound for solid bodies.
    pub fn water_ice() -> Self {
        Self::from_kg_per_m3(920.0)
    }

    /// Density of silicate rock, a common upper bound for undifferentiated bodies.
    pub fn silicate_rock() -> Self {
        Self::from_kg_per_m3(3_300.0)
    }
}

impl Add for VolumeDensity {
    type Output = VolumeDensity;

    fn add(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 + rhs.0)
    }
}

impl Sub for VolumeDensity {
    type Output = VolumeDensity;

    fn sub(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn mul(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 * rhs)
    }
}

impl Div<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn div(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 / rhs)
    }
}

/// Allow f64 * VolumeDensity (commutative multiplication)
impl Mul<VolumeDensity> for f64 {
    type Output = VolumeDensity;

    fn mul(self, rhs: VolumeDensity) -> VolumeDensity {
        rhs * self
    }
}
