//! Random draws for trial bodies
//!
//! Every random decision of the pipeline routes through one seeded ChaCha
//! stream, so the whole simulation stays a pure function of (seed, config).

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Innermost orbit a planetary nucleus may occupy, in AU.
///
/// Dole set this bound arbitrarily at 0.3 distance units for one solar
/// mass; more than 92 percent of the cloud mass lies between the planet
/// bounds.
pub fn innermost_planet(stellar_mass: f64) -> f64 {
    0.3 * stellar_mass.powf(1.0 / 3.0)
}

/// Outermost orbit a planetary nucleus may occupy, in AU.
pub fn outermost_planet(stellar_mass: f64) -> f64 {
    50.0 * stellar_mass.powf(1.0 / 3.0)
}

/// Uniform trial orbit within the planet bounds.
pub fn trial_orbit(rng: &mut ChaChaRng, inner: f64, outer: f64) -> f64 {
    rng.random_range(inner..outer)
}

/// Draw an orbital eccentricity whose mean tracks the cloud eccentricity.
///
/// Dole's empirical distribution is e = 1 - (1 - u)^q. The shape exponent
/// q = w / (1 - w) makes the expected value equal the cloud eccentricity w,
/// so a hotter cloud yields more eccentric (and fewer) planets. Always in
/// [0, 1).
pub fn random_eccentricity(rng: &mut ChaChaRng, cloud_eccentricity: f64) -> f64 {
    let shape = cloud_eccentricity / (1.0 - cloud_eccentricity);
    let u: f64 = rng.random();
    (1.0 - (1.0 - u).powf(shape)).clamp(0.0, 0.999)
}
