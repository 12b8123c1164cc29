mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;
    use star_system::Planet;

    use crate::config::{ConfigError, SimulationConfig};
    use crate::driver::Accretion;
    use crate::generation::{
        planet, planet_with_config, planetary_system, planetary_system_with_config,
    };
    use crate::protoplanet::Protoplanet;

    #[test]
    fn test_same_seed_same_system() {
        let a = planetary_system(42, 1.0).unwrap();
        let b = planetary_system(42, 1.0).unwrap();
        assert_eq!(a.planets, b.planets);
        assert_eq!(a.primary, b.primary);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = planetary_system(42, 1.0).unwrap();
        let b = planetary_system(43, 1.0).unwrap();
        assert_ne!(a.planets, b.planets);
    }

    #[test]
    fn test_solar_run_produces_an_ordered_system() {
        let system = planetary_system(42, 1.0).unwrap();
        assert!(!system.planets.is_empty());
        assert!(system.planets.len() <= 30);
        assert!(system.is_ordered());

        let total = system.total_planetary_mass().to_solar_masses();
        assert!(total > 0.0);
        // Planets hold a small fraction of the stellar mass
        assert!(total < 0.1);
    }

    #[test]
    fn test_zero_stellar_mass_is_rejected() {
        assert_eq!(
            planetary_system(42, 0.0),
            Err(ConfigError::NonPositiveStellarMass(0.0))
        );
    }

    #[test]
    fn test_bad_cloud_eccentricity_is_rejected() {
        let config = SimulationConfig {
            cloud_eccentricity: 1.0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            planetary_system_with_config(42, &config),
            Err(ConfigError::EccentricityOutOfRange(1.0))
        );
    }

    #[test]
    fn test_zero_intensity_skips_bombardment() {
        let config = SimulationConfig {
            post_accretion_intensity: 0,
            ..SimulationConfig::default()
        };
        let system = planetary_system_with_config(9, &config).unwrap();

        let mut rng = ChaChaRng::seed_from_u64(9);
        let mut accretion = Accretion::new(&config);
        accretion.run(&mut rng);
        let expected: Vec<Planet> = accretion
            .into_planets()
            .iter()
            .map(Protoplanet::to_planet)
            .collect();

        assert_eq!(system.planets, expected);
    }

    #[test]
    fn test_bombardment_only_adds_mass() {
        let config = SimulationConfig {
            post_accretion_intensity: 0,
            ..SimulationConfig::default()
        };
        let before = planetary_system_with_config(11, &config).unwrap();
        let after = planetary_system(11, 1.0).unwrap();

        assert_eq!(before.planets.len(), after.planets.len());
        for (b, a) in before.planets.iter().zip(&after.planets) {
            assert_eq!(b.semi_major_axis, a.semi_major_axis);
            assert!(a.system_mass() >= b.system_mass());
        }
    }

    #[test]
    fn test_unreachable_critical_mass_yields_no_gas_giants() {
        let config = SimulationConfig {
            crit_mass_coeff: 1.0,
            ..SimulationConfig::default()
        };
        let system = planetary_system_with_config(42, &config).unwrap();
        assert!(!system.planets.is_empty());
        assert_eq!(system.gas_giant_count(), 0);
        for p in &system.planets {
            assert_relative_eq!(p.gas_mass.to_solar_masses(), 0.0);
        }
    }

    #[test]
    fn test_standalone_planet_is_deterministic() {
        let a = planet(7, 1.0).unwrap();
        let b = planet(7, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_standalone_planet_samples_its_ranges() {
        for seed in 0..20 {
            let p = planet(seed, 1.0).unwrap();
            let a = p.semi_major_axis.to_au();
            assert!((0.3..50.0).contains(&a));
            assert!((0.0..1.0).contains(&p.eccentricity));
            // Bombardment adds at most a few thousandths of an Earth mass
            assert!(p.mass.to_earth_masses() < 501.0);
            assert!(p.mass.to_earth_masses() > 0.0);
        }
    }

    #[test]
    fn test_standalone_planet_honors_overrides() {
        let config = SimulationConfig {
            planet_a: Some(1.0),
            planet_e: Some(0.1),
            planet_mass: Some(1.0),
            post_accretion_intensity: 0,
            ..SimulationConfig::default()
        };
        let p = planet_with_config(3, &config).unwrap();

        assert_relative_eq!(p.semi_major_axis.to_au(), 1.0);
        assert_relative_eq!(p.eccentricity, 0.1);
        assert_relative_eq!(p.mass.to_earth_masses(), 1.0, max_relative = 1.0e-12);
        assert!(!p.is_gas_giant);
        assert!(!p.is_asteroid_field);
    }

    #[test]
    fn test_tiny_standalone_planet_is_an_asteroid_field() {
        let config = SimulationConfig {
            planet_a: Some(2.0),
            planet_e: Some(0.0),
            planet_mass: Some(1.0e-5),
            post_accretion_intensity: 0,
            ..SimulationConfig::default()
        };
        let p = planet_with_config(5, &config).unwrap();

        assert!(p.is_asteroid_field);
        assert!(!p.is_gas_giant);
    }

    #[test]
    fn test_standalone_gas_giant_classification() {
        // 300 Earth masses at 5 AU is far above the critical mass there
        let config = SimulationConfig {
            planet_a: Some(5.0),
            planet_e: Some(0.0),
            planet_mass: Some(300.0),
            ..SimulationConfig::default()
        };
        let p = planet_with_config(3, &config).unwrap();
        assert!(p.is_gas_giant);
    }

    #[test]
    fn test_smaller_star_shrinks_the_system() {
        let system = planetary_system(42, 0.5).unwrap();
        assert!(system.is_ordered());
        for p in &system.planets {
            // Planet bounds scale with the cube root of the stellar mass
            assert!(p.semi_major_axis.to_au() < 50.0);
        }
    }
}
