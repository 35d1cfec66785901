//! Body records and the orbital derivations applied to them

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use units::{Length, Mass, Time, VolumeDensity};

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67e-11;

/// Name of the fixed central body every synthesized body orbits
pub const CENTRAL_BODY_NAME: &str = "Sun";

/// Mass of the central body in kilograms
pub const CENTRAL_BODY_MASS_KG: f64 = 1.9891e30;

/// Diameter of the central body in meters
pub const CENTRAL_BODY_DIAMETER_M: f64 = 1.391684e9;

/// Sidereal rotation period of the central body in hours
pub const CENTRAL_BODY_ROTATION_HOURS: f64 = 587.28;

/// A single body of a synthesized system.
///
/// The population is a flat hierarchy: every synthesized body orbits the
/// central body directly, and the central body orbits nothing. `orbits` is
/// a named-lookup relation, not an ownership pointer — the dataset file
/// resolves it by name.
///
/// Records are immutable after synthesis; every derived field is computed
/// once at generation time and must stay internally consistent:
/// `perihelion ≤ semi_major_axis ≤ aphelion` and
/// `diameter = 2·(3m / 4πρ)^(1/3)` for the density drawn at synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Unique name, ordinal scheme (`Body1`, `Body2`, …)
    pub name: String,
    /// Name of the body this one orbits; `None` for the central body
    pub orbits: Option<String>,
    pub mass: Mass,
    pub diameter: Length,
    pub semi_major_axis: Length,
    /// Orbit shape parameter, `0 ≤ e < 1`
    pub eccentricity: f64,
    pub perihelion: Length,
    pub aphelion: Length,
    pub orbital_period: Time,
    pub rotational_period: Time,
    pub axial_tilt_deg: f64,
    pub orbital_inclination_deg: f64,
}

impl CelestialBody {
    /// The fixed central body.
    ///
    /// Not synthesized: mass and diameter are physical constants, the
    /// orbital fields are zero, and `orbits` is `None` (serialized as the
    /// explicit null marker).
    pub fn central() -> Self {
        Self {
            name: CENTRAL_BODY_NAME.to_string(),
            orbits: None,
            mass: Mass::from_kg(CENTRAL_BODY_MASS_KG),
            diameter: Length::from_meters(CENTRAL_BODY_DIAMETER_M),
            semi_major_axis: Length::zero(),
            eccentricity: 0.0,
            perihelion: Length::zero(),
            aphelion: Length::zero(),
            orbital_period: Time::zero(),
            rotational_period: Time::from_hours(CENTRAL_BODY_ROTATION_HOURS),
            axial_tilt_deg: 0.0,
            orbital_inclination_deg: 0.0,
        }
    }

    pub fn is_central(&self) -> bool {
        self.orbits.is_none()
    }
}

/// Diameter of a homogeneous sphere with the given mass and bulk density.
///
/// Inverts the sphere volume: `d = 2·(3m / 4πρ)^(1/3)`. Density is drawn
/// independently of mass during synthesis, so two bodies of equal mass may
/// legitimately have different diameters.
pub fn diameter_for(mass: Mass, density: VolumeDensity) -> Length {
    let volume = mass.to_kg() / density.to_kg_per_m3();
    let radius = (3.0 * volume / (4.0 * PI)).cbrt();
    Length::from_meters(2.0 * radius)
}

/// Orbital period from Kepler's third law, `T² = 4π²a³ / (G·M)`.
///
/// Assumes the orbiting body's mass is negligible relative to the central
/// mass, which holds for the synthesized population (≤ 1e28 kg against a
/// ~2e30 kg central body).
pub fn kepler_period(semi_major_axis: Length, central_mass: Mass) -> Time {
    let a = semi_major_axis.to_m();
    let seconds = (4.0 * PI * PI * a.powi(3) / (G * central_mass.to_kg())).sqrt();
    Time::from_seconds(seconds)
}
