//! Public generation entry points
//!
//! Two deterministic pure functions of (seed, config): a full accretion run
//! producing a planetary system, and a direct standalone-planet sample that
//! skips the accretion loop entirely. Both validate the configuration
//! before any simulation state exists; a malformed configuration is the
//! only user-visible failure.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use star_system::{Planet, PlanetarySystem, PrimaryStar};
use units::{Mass, EARTH_MASSES_PER_SOLAR_MASS};

use crate::bombardment::bombard;
use crate::cloud::outer_dust_limit;
use crate::config::{ConfigError, SimulationConfig};
use crate::driver::Accretion;
use crate::protoplanet::{critical_mass, Protoplanet, ASTEROID_MASS_LIMIT, PROTOPLANET_MASS};
use crate::sampling::random_eccentricity;

/// Default standalone-planet orbit range in AU (the planet bounds of a one
/// solar mass cloud).
const PLANET_A_RANGE: std::ops::Range<f64> = 0.3..50.0;

/// Default standalone-planet mass range in Earth masses; the lower edge is
/// the nucleus seed mass.
///
/// With this workspace's gram constants the seed mass converts to about
/// 3.3278e-10 M⊕. Generators in the Dole tradition often quote
/// 3.3467202125167e-10 instead, derived from a rounded 334672 M⊕/M☉ ratio;
/// the difference is a 0.6 percent disagreement on the Earth's mass and has
/// no effect on the accretion pipeline, which works in solar masses.
const PLANET_MASS_MAX: f64 = 500.0;

/// Generate a full planetary system with default tuning parameters.
///
/// Runs the accretion pipeline (cloud initialization, trial growth,
/// coalescence, bombardment) seeded from `seed`. The same (seed, mass)
/// always produces an identical system.
///
/// # Example
///
/// ```ignore
/// let system = accretion::planetary_system(42, 1.0)?;
/// assert!(system.is_ordered());
/// ```
pub fn planetary_system(seed: u64, stellar_mass: f64) -> Result<PlanetarySystem, ConfigError> {
    planetary_system_with_config(seed, &SimulationConfig::for_stellar_mass(stellar_mass))
}

/// Generate a full planetary system with explicit tuning parameters.
pub fn planetary_system_with_config(
    seed: u64,
    config: &SimulationConfig,
) -> Result<PlanetarySystem, ConfigError> {
    config.validate()?;
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let mut accretion = Accretion::new(config);
    accretion.run(&mut rng);
    let mut protoplanets = accretion.into_planets();

    bombard(
        &mut protoplanets,
        outer_dust_limit(config.stellar_mass),
        config.stellar_mass,
        config.cloud_eccentricity,
        config.post_accretion_intensity,
        &mut rng,
    );

    let primary = PrimaryStar::new(
        Mass::from_solar_masses(config.stellar_mass),
        config.luminosity(),
    );
    let planets = protoplanets.iter().map(Protoplanet::to_planet).collect();
    Ok(PlanetarySystem::new(primary, planets))
}

/// Generate one standalone planet with default tuning parameters.
///
/// A direct sample of orbit, eccentricity, and mass from their default
/// ranges, not a simulation product: the accretion loop never runs. The
/// gas-giant flag still follows the critical-mass classifier, and the
/// configured bombardment intensity is applied to the single body.
pub fn planet(seed: u64, stellar_mass: f64) -> Result<Planet, ConfigError> {
    planet_with_config(seed, &SimulationConfig::for_stellar_mass(stellar_mass))
}

/// Generate one standalone planet with explicit tuning parameters.
pub fn planet_with_config(seed: u64, config: &SimulationConfig) -> Result<Planet, ConfigError> {
    config.validate()?;
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let a = config
        .planet_a
        .unwrap_or_else(|| rng.random_range(PLANET_A_RANGE));
    let e = config
        .planet_e
        .unwrap_or_else(|| random_eccentricity(&mut rng, config.cloud_eccentricity));
    let mass_earth = config.planet_mass.unwrap_or_else(|| {
        rng.random_range(PROTOPLANET_MASS * EARTH_MASSES_PER_SOLAR_MASS..PLANET_MASS_MAX)
    });

    let mut body = Protoplanet::seed(a, e);
    body.mass = mass_earth / EARTH_MASSES_PER_SOLAR_MASS;
    body.dust_mass = body.mass;
    body.is_gas_giant =
        body.mass >= critical_mass(a, e, config.luminosity(), config.crit_mass_coeff);
    body.is_asteroid_field = body.mass < ASTEROID_MASS_LIMIT;

    bombard(
        std::slice::from_mut(&mut body),
        outer_dust_limit(config.stellar_mass),
        config.stellar_mass,
        config.cloud_eccentricity,
        config.post_accretion_intensity,
        &mut rng,
    );

    Ok(body.to_planet())
}
