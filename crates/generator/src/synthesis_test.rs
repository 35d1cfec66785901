mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;
    use std::collections::HashSet;
    use std::f64::consts::PI;

    use crate::bounds::SynthesisBounds;
    use crate::synthesis::synthesize;

    fn population(seed: u64, count: usize) -> Vec<celestial::CelestialBody> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        synthesize(&mut rng, &SynthesisBounds::with_count(count)).unwrap()
    }

    #[test]
    fn test_population_shape() {
        let bodies = population(7, 50);

        // Central body first, then exactly N synthesized bodies
        assert_eq!(bodies.len(), 51);
        assert!(bodies[0].is_central());
        assert!(bodies[1..].iter().all(|b| !b.is_central()));

        // Flat hierarchy: everything orbits the central body
        for body in &bodies[1..] {
            assert_eq!(body.orbits.as_deref(), Some("Sun"));
        }

        // Ordinal names are unique
        let names: HashSet<&str> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names.len(), bodies.len());
        assert_eq!(bodies[1].name, "Body1");
        assert_eq!(bodies[50].name, "Body50");
    }

    #[test]
    fn test_same_seed_reproduces_population() {
        let first = population(42, 20);
        let second = population(42, 20);
        assert_eq!(first, second);

        let other = population(43, 20);
        assert_ne!(first, other);
    }

    #[test]
    fn test_orbit_geometry_invariants() {
        for body in &population(11, 200)[1..] {
            let a = body.semi_major_axis.to_m();
            let q = body.perihelion.to_m();
            let big_q = body.aphelion.to_m();
            let e = body.eccentricity;

            assert!((0.0..1.0).contains(&e));
            assert!(q <= a && a <= big_q);

            // Conic relations hold exactly for the drawn eccentricity
            assert_relative_eq!(q, a * (1.0 - e), max_relative = 1e-12);
            assert_relative_eq!(big_q, a * (1.0 + e), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_attributes_stay_in_bounds() {
        let bounds = SynthesisBounds::default();
        for body in &population(23, 200)[1..] {
            let mass = body.mass.to_kg();
            assert!(mass >= bounds.mass_kg.0 && mass <= bounds.mass_kg.1);

            let a_au = body.semi_major_axis.to_au();
            assert!(a_au >= 0.4 && a_au <= 40.0);

            let rot = body.rotational_period.to_hours();
            assert!(rot >= 5.0 && rot <= 1_000.0);

            assert!(body.axial_tilt_deg >= 0.0 && body.axial_tilt_deg <= 90.0);
            assert!(body.orbital_inclination_deg >= 0.0 && body.orbital_inclination_deg <= 30.0);
        }
    }

    #[test]
    fn test_diameter_implies_density_in_bounds() {
        // Invert the sphere-volume relation: the density a body's recorded
        // mass and diameter imply must fall back inside the sampled range
        for body in &population(3, 200)[1..] {
            let radius = body.diameter.to_m() / 2.0;
            let volume = 4.0 / 3.0 * PI * radius.powi(3);
            let implied_density = body.mass.to_kg() / volume;

            assert!(
                implied_density >= 1_000.0 * (1.0 - 1e-9)
                    && implied_density <= 5_000.0 * (1.0 + 1e-9),
                "implied density {implied_density} outside sampling range"
            );
        }
    }

    #[test]
    fn test_orbital_period_monotonic_in_axis() {
        let mut bodies = population(5, 100);
        let bodies = &mut bodies[1..];
        bodies.sort_by(|a, b| {
            a.semi_major_axis
                .partial_cmp(&b.semi_major_axis)
                .unwrap()
        });

        for pair in bodies.windows(2) {
            assert!(pair[0].orbital_period <= pair[1].orbital_period);
        }
    }

    #[test]
    fn test_invalid_bounds_produce_no_population() {
        let mut rng = ChaChaRng::seed_from_u64(1);
        let bounds = SynthesisBounds {
            mass_kg: (-1.0, 1e28),
            ..SynthesisBounds::default()
        };
        assert!(synthesize(&mut rng, &bounds).is_err());
    }
}
