mod tests {
    use approx::assert_relative_eq;

    use crate::body::{
        diameter_for, kepler_period, CelestialBody, CENTRAL_BODY_MASS_KG,
        CENTRAL_BODY_ROTATION_HOURS,
    };
    use std::f64::consts::PI;
    use units::{Length, Mass, VolumeDensity};

    #[test]
    fn test_central_body_is_fixed() {
        let sun = CelestialBody::central();

        assert!(sun.is_central());
        assert_eq!(sun.name, "Sun");
        assert_eq!(sun.orbits, None);
        assert_relative_eq!(sun.mass.to_kg(), CENTRAL_BODY_MASS_KG);
        assert_relative_eq!(sun.semi_major_axis.to_m(), 0.0);
        assert_relative_eq!(sun.orbital_period.to_days(), 0.0);
        assert_relative_eq!(
            sun.rotational_period.to_hours(),
            CENTRAL_BODY_ROTATION_HOURS,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_diameter_inverts_sphere_volume() {
        let mass = Mass::from_kg(1e21);
        let density = VolumeDensity::from_kg_per_m3(2_000.0);

        let diameter = diameter_for(mass, density);

        // Recompute the volume of the implied sphere and check it matches
        // mass / density
        let radius = diameter.to_m() / 2.0;
        let volume = 4.0 / 3.0 * PI * radius.powi(3);
        assert_relative_eq!(volume, 1e21 / 2_000.0, max_relative = 1e-12);
        assert!(diameter.to_m() > 0.0);
    }

    #[test]
    fn test_diameter_scales_with_mass_and_density() {
        let density = VolumeDensity::from_kg_per_m3(3_000.0);

        // 8x the mass doubles the diameter at fixed density
        let small = diameter_for(Mass::from_kg(1e22), density);
        let large = diameter_for(Mass::from_kg(8e22), density);
        assert_relative_eq!(large.to_m(), 2.0 * small.to_m(), max_relative = 1e-12);

        // Denser bodies of equal mass are smaller
        let light = diameter_for(Mass::from_kg(1e22), VolumeDensity::from_kg_per_m3(1_000.0));
        let dense = diameter_for(Mass::from_kg(1e22), VolumeDensity::from_kg_per_m3(5_000.0));
        assert!(dense.to_m() < light.to_m());
    }

    #[test]
    fn test_kepler_period_at_one_au() {
        // A massless test body at 1 AU around the central mass completes an
        // orbit in roughly one year
        let period = kepler_period(Length::from_au(1.0), Mass::from_kg(CENTRAL_BODY_MASS_KG));
        assert_relative_eq!(period.to_days(), 365.25, max_relative = 0.01);
    }

    #[test]
    fn test_kepler_period_monotonic_in_semi_major_axis() {
        let central = Mass::from_kg(CENTRAL_BODY_MASS_KG);

        let mut previous = kepler_period(Length::from_au(0.4), central);
        for tenths in 5..=400 {
            let a = Length::from_au(tenths as f64 / 10.0);
            let period = kepler_period(a, central);
            assert!(
                period > previous,
                "period not monotonic at a = {} AU",
                a.to_au()
            );
            previous = period;
        }
    }
}
