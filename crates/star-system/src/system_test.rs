mod tests {
    use approx::assert_relative_eq;
    use units::{Length, Mass};

    use crate::planet::Planet;
    use crate::primary_star::PrimaryStar;
    use crate::system::PlanetarySystem;

    fn planet_at(a: f64) -> Planet {
        Planet::new(
            Mass::from_earth_masses(1.0),
            Mass::zero(),
            Length::from_au(a),
            0.05,
            false,
        )
    }

    #[test]
    fn test_new_sorts_by_semi_major_axis() {
        let star = PrimaryStar::from_mass(Mass::from_solar_masses(1.0));
        let system =
            PlanetarySystem::new(star, vec![planet_at(5.2), planet_at(0.4), planet_at(1.0)]);

        assert!(system.is_ordered());
        assert_relative_eq!(system.planets[0].semi_major_axis.to_au(), 0.4);
        assert_relative_eq!(system.planets[2].semi_major_axis.to_au(), 5.2);
    }

    #[test]
    fn test_main_sequence_luminosity() {
        let star = PrimaryStar::from_mass(Mass::from_solar_masses(1.0));
        assert_relative_eq!(star.luminosity, 1.0);

        let heavier = PrimaryStar::from_mass(Mass::from_solar_masses(2.0));
        assert_relative_eq!(heavier.luminosity, 2.0_f64.powf(3.5));
    }

    #[test]
    fn test_total_planetary_mass() {
        let star = PrimaryStar::from_mass(Mass::from_solar_masses(1.0));
        let mut inner = planet_at(0.7);
        inner.moons.push(planet_at(0.001));
        let system = PlanetarySystem::new(star, vec![inner, planet_at(1.5)]);

        assert_relative_eq!(system.total_planetary_mass().to_earth_masses(), 3.0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let star = PrimaryStar::from_mass(Mass::from_solar_masses(0.8));
        let system = PlanetarySystem::new(star, vec![planet_at(1.0)]);

        let json = serde_json::to_string(&system).unwrap();
        let back: PlanetarySystem = serde_json::from_str(&json).unwrap();
        assert_eq!(system, back);
    }
}
