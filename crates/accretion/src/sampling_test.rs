mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    use crate::sampling::{innermost_planet, outermost_planet, random_eccentricity, trial_orbit};

    #[test]
    fn test_planet_bounds_for_solar_mass() {
        assert_relative_eq!(innermost_planet(1.0), 0.3);
        assert_relative_eq!(outermost_planet(1.0), 50.0);
    }

    #[test]
    fn test_planet_bounds_scale_with_cube_root_of_mass() {
        assert_relative_eq!(innermost_planet(8.0), 0.6);
        assert_relative_eq!(outermost_planet(8.0), 100.0);
    }

    #[test]
    fn test_trial_orbit_stays_within_bounds() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        for _ in 0..1000 {
            let a = trial_orbit(&mut rng, 0.3, 50.0);
            assert!((0.3..50.0).contains(&a));
        }
    }

    #[test]
    fn test_eccentricity_stays_in_range() {
        let mut rng = ChaChaRng::seed_from_u64(11);
        for _ in 0..1000 {
            let e = random_eccentricity(&mut rng, 0.2);
            assert!((0.0..1.0).contains(&e));
        }
    }

    #[test]
    fn test_eccentricity_mean_tracks_cloud_eccentricity() {
        let mut rng = ChaChaRng::seed_from_u64(13);
        let n = 20_000;
        let sum: f64 = (0..n).map(|_| random_eccentricity(&mut rng, 0.2)).sum();
        let mean = sum / n as f64;
        assert!((mean - 0.2).abs() < 0.01, "mean eccentricity {mean}");
    }

    #[test]
    fn test_cold_cloud_yields_circular_orbits() {
        let mut rng = ChaChaRng::seed_from_u64(17);
        for _ in 0..100 {
            assert_relative_eq!(random_eccentricity(&mut rng, 0.0), 0.0);
        }
    }

    #[test]
    fn test_draws_are_deterministic_per_seed() {
        let mut a = ChaChaRng::seed_from_u64(42);
        let mut b = ChaChaRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(
                random_eccentricity(&mut a, 0.25),
                random_eccentricity(&mut b, 0.25)
            );
        }
    }
}
