//! Post-accretion bombardment
//!
//! After the cloud is exhausted, a configurable number of late impactors
//! perturb the finished system. Each event draws an impactor and a target
//! radius from the RNG stream, strictly in draw order so the whole phase is
//! reproducible from the seed; the planet nearest the target radius either
//! captures the impactor as a new moon (ground into a ring when the drawn
//! orbit falls inside twice its Roche limit) or simply absorbs its mass.
//! No planet is ever removed, reordered, or lightened by this phase.

use log::debug;
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::protoplanet::{Protoplanet, Ring};
use crate::sampling::random_eccentricity;

/// Smallest late impactor, in solar masses (the nucleus seed mass).
pub const IMPACTOR_MASS_MIN: f64 = 1.0e-15;

/// Largest late impactor, in solar masses (~3 × 10⁻⁵ M⊕, a large
/// planetesimal rather than a planet).
pub const IMPACTOR_MASS_MAX: f64 = 1.0e-10;

/// Exponent shaping the capture probability: the chance of surviving as a
/// moon falls off as (impactor/target)^(1/8), so a planet much heavier than
/// the impactor almost always swallows it whole.
const CAPTURE_PROBABILITY_EXPONENT: f64 = 0.125;

/// Subject `planets` to `intensity` independent impact events.
pub fn bombard(
    planets: &mut [Protoplanet],
    cloud_extent: f64,
    stellar_mass: f64,
    cloud_eccentricity: f64,
    intensity: u32,
    rng: &mut ChaChaRng,
) {
    if planets.is_empty() {
        return;
    }

    let mut captures = 0u32;
    for _ in 0..intensity {
        let impactor_mass = log_uniform_mass(rng);
        let target_radius = rng.random_range(0.0..cloud_extent);

        let Some(target) = nearest_planet(planets, target_radius) else {
            break;
        };
        let capture_probability =
            (impactor_mass / target.mass).powf(CAPTURE_PROBABILITY_EXPONENT);

        if rng.random::<f64>() < capture_probability {
            let hill_sphere = target.hill_sphere_radius(stellar_mass);
            let mut moon = Protoplanet::seed(
                rng.random_range(0.0..hill_sphere),
                random_eccentricity(rng, cloud_eccentricity),
            );
            moon.mass = impactor_mass;
            moon.dust_mass = impactor_mass;
            let roche_limit = target.roche_limit(&moon);
            if moon.a <= 2.0 * roche_limit {
                // Tides grind an impactor this close into a ring
                target.rings.push(Ring {
                    a: roche_limit,
                    mass: moon.mass,
                    width: 2.0 * moon.body_radius(),
                });
            } else {
                target.moons.push(moon);
            }
            captures += 1;
        } else {
            target.mass += impactor_mass;
            target.dust_mass += impactor_mass;
        }
    }

    debug!(
        "bombardment complete: {} impacts, {} moon captures",
        intensity, captures
    );
}

/// Impactor mass drawn log-uniformly across five decades, matching the
/// steep size distribution of leftover planetesimals.
fn log_uniform_mass(rng: &mut ChaChaRng) -> f64 {
    let log_min = IMPACTOR_MASS_MIN.ln();
    let log_max = IMPACTOR_MASS_MAX.ln();
    (log_min + rng.random::<f64>() * (log_max - log_min)).exp()
}

/// The planet whose orbit lies closest to the target radius.
fn nearest_planet(planets: &mut [Protoplanet], radius: f64) -> Option<&mut Protoplanet> {
    planets.iter_mut().min_by(|p, q| {
        let dp = (p.a - radius).abs();
        let dq = (q.a - radius).abs();
        dp.partial_cmp(&dq).unwrap_or(std::cmp::Ordering::Equal)
    })
}
