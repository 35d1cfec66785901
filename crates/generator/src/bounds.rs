//! Sampling bounds for population synthesis

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default population size (central body excluded)
pub const DEFAULT_COUNT: usize = 1_000;

/// Configuration domain errors.
///
/// No bound configuration is expected to be invalid in normal use; these
/// are rejected up front at configuration time and treated as fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisError {
    #[error("{field} bounds are inverted: min {min} > max {max}")]
    EmptyRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} bounds must be strictly positive, got min {min}")]
    NonPositive { field: &'static str, min: f64 },

    #[error("eccentricity bounds [{min}, {max}] must lie within [0, 1)")]
    EccentricityDomain { min: f64, max: f64 },
}

/// Every sampling range the synthesizer draws from.
///
/// All attributes are drawn uniformly and independently per body; the
/// deliberate simplification is that density is not coupled to mass, so two
/// bodies of equal mass may end up with different diameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisBounds {
    /// Number of synthesized bodies (the central body is extra)
    pub count: usize,
    /// Mass range in kg, small asteroids to massive dwarf planets
    pub mass_kg: (f64, f64),
    /// Bulk density range in kg/m³, used only to derive diameter
    pub density_kg_m3: (f64, f64),
    /// Semi-major axis range in AU
    pub semi_major_axis_au: (f64, f64),
    /// Eccentricity range, circular to somewhat elliptical
    pub eccentricity: (f64, f64),
    /// Rotational period range in hours
    pub rotational_period_hours: (f64, f64),
    /// Axial tilt range in degrees
    pub axial_tilt_deg: (f64, f64),
    /// Orbital inclination range in degrees
    pub orbital_inclination_deg: (f64, f64),
}

impl Default for SynthesisBounds {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            mass_kg: (1e20, 1e28),
            density_kg_m3: (1_000.0, 5_000.0),
            semi_major_axis_au: (0.4, 40.0),
            eccentricity: (0.0, 0.2),
            rotational_period_hours: (5.0, 1_000.0),
            axial_tilt_deg: (0.0, 90.0),
            orbital_inclination_deg: (0.0, 30.0),
        }
    }
}

impl SynthesisBounds {
    /// Default bounds with an explicit population size.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Rejects bound configurations the derivations cannot support:
    /// inverted ranges anywhere, non-positive mass/density/axis/rotation
    /// ranges (the sphere inversion and Kepler's law both divide by them),
    /// and eccentricity outside [0, 1).
    pub fn validate(&self) -> Result<(), SynthesisError> {
        ordered("mass", self.mass_kg)?;
        ordered("density", self.density_kg_m3)?;
        ordered("semi-major axis", self.semi_major_axis_au)?;
        ordered("eccentricity", self.eccentricity)?;
        ordered("rotational period", self.rotational_period_hours)?;
        ordered("axial tilt", self.axial_tilt_deg)?;
        ordered("orbital inclination", self.orbital_inclination_deg)?;

        strictly_positive("mass", self.mass_kg)?;
        strictly_positive("density", self.density_kg_m3)?;
        strictly_positive("semi-major axis", self.semi_major_axis_au)?;
        strictly_positive("rotational period", self.rotational_period_hours)?;

        let (e_min, e_max) = self.eccentricity;
        if e_min < 0.0 || e_max >= 1.0 {
            return Err(SynthesisError::EccentricityDomain {
                min: e_min,
                max: e_max,
            });
        }

        Ok(())
    }
}

fn ordered(field: &'static str, (min, max): (f64, f64)) -> Result<(), SynthesisError> {
    if min > max {
        return Err(SynthesisError::EmptyRange { field, min, max });
    }
    Ok(())
}

fn strictly_positive(field: &'static str, (min, _): (f64, f64)) -> Result<(), SynthesisError> {
    if min <= 0.0 {
        return Err(SynthesisError::NonPositive { field, min });
    }
    Ok(())
}
