//! Body attribute synthesis
//!
//! Produces exactly N independent body records plus the fixed central body.
//! The hierarchy is flat: every synthesized body orbits the central body
//! directly, no moons or multi-level systems.

use rand::Rng;
use rand_chacha::ChaChaRng;

use celestial::{
    diameter_for, kepler_period, CelestialBody, CENTRAL_BODY_MASS_KG, CENTRAL_BODY_NAME,
};
use units::{Length, Mass, Time, VolumeDensity};

use crate::bounds::{SynthesisBounds, SynthesisError};

/// Synthesizes the full population: the central body first, then exactly
/// `bounds.count` bodies orbiting it, named `Body1` through `BodyN`.
///
/// Bounds are validated before the first draw; a rejected configuration
/// produces no partial population.
pub fn synthesize(
    rng: &mut ChaChaRng,
    bounds: &SynthesisBounds,
) -> Result<Vec<CelestialBody>, SynthesisError> {
    bounds.validate()?;

    let mut population = Vec::with_capacity(bounds.count + 1);
    population.push(CelestialBody::central());
    for ordinal in 1..=bounds.count {
        population.push(synthesize_body(rng, bounds, ordinal));
    }
    Ok(population)
}

/// Derives one internally consistent body record.
///
/// Draw order is part of the reproducibility contract: mass, density,
/// semi-major axis, eccentricity, rotation, tilt, inclination. Reordering
/// the draws changes every seeded population.
fn synthesize_body(rng: &mut ChaChaRng, bounds: &SynthesisBounds, ordinal: usize) -> CelestialBody {
    let mass = Mass::from_kg(sample(rng, bounds.mass_kg));
    let density = VolumeDensity::from_kg_per_m3(sample(rng, bounds.density_kg_m3));
    let diameter = diameter_for(mass, density);

    let semi_major_axis = Length::from_au(sample(rng, bounds.semi_major_axis_au));
    let eccentricity = sample(rng, bounds.eccentricity);
    let perihelion = semi_major_axis * (1.0 - eccentricity);
    let aphelion = semi_major_axis * (1.0 + eccentricity);
    let orbital_period = kepler_period(semi_major_axis, Mass::from_kg(CENTRAL_BODY_MASS_KG));

    CelestialBody {
        name: format!("Body{ordinal}"),
        orbits: Some(CENTRAL_BODY_NAME.to_string()),
        mass,
        diameter,
        semi_major_axis,
        eccentricity,
        perihelion,
        aphelion,
        orbital_period,
        rotational_period: Time::from_hours(sample(rng, bounds.rotational_period_hours)),
        axial_tilt_deg: sample(rng, bounds.axial_tilt_deg),
        orbital_inclination_deg: sample(rng, bounds.orbital_inclination_deg),
    }
}

fn sample(rng: &mut ChaChaRng, (min, max): (f64, f64)) -> f64 {
    rng.random_range(min..=max)
}
