//! Accretion driver
//!
//! The outer loop of the simulation: inject trial nuclei at random orbits,
//! grow each against the remaining cloud, sweep the dust it consumed, and
//! resolve it against the accreted planets. The loop ends when no dust
//! remains inside the planet bounds, or when enough consecutive trials land
//! on swept-clean orbits that the cloud is effectively exhausted.

use log::{debug, trace};
use rand_chacha::ChaChaRng;

use crate::cloud::DustCloud;
use crate::coalescence::resolve;
use crate::config::SimulationConfig;
use crate::growth::{grow, GrowthParams};
use crate::protoplanet::{critical_mass, Protoplanet};
use crate::sampling::{innermost_planet, outermost_planet, random_eccentricity, trial_orbit};

/// Failed trials tolerated per AU of cloud extent before the run is
/// declared exhausted. A sparse cloud legitimately stops producing planets
/// long before every band is swept.
const FAILED_TRIALS_PER_AU: f64 = 10.0;

/// One full accretion run over a dust cloud.
#[derive(Debug)]
pub struct Accretion {
    cloud: DustCloud,
    planets: Vec<Protoplanet>,
    stellar_mass: f64,
    stellar_luminosity: f64,
    cloud_eccentricity: f64,
    crit_mass_coeff: f64,
    k: f64,
    inner_bound: f64,
    outer_bound: f64,
}

impl Accretion {
    /// Set up the initial conditions for a validated configuration.
    pub fn new(config: &SimulationConfig) -> Self {
        let cloud = DustCloud::new(config.stellar_mass, config.dust_density_coeff);
        Self {
            cloud,
            planets: Vec::new(),
            stellar_mass: config.stellar_mass,
            stellar_luminosity: config.luminosity(),
            cloud_eccentricity: config.cloud_eccentricity,
            crit_mass_coeff: config.crit_mass_coeff,
            k: config.k,
            inner_bound: innermost_planet(config.stellar_mass),
            outer_bound: outermost_planet(config.stellar_mass),
        }
    }

    /// Run trials until the cloud is exhausted.
    pub fn run(&mut self, rng: &mut ChaChaRng) {
        let max_failed_trials = (self.cloud.outer_limit() * FAILED_TRIALS_PER_AU) as u32;
        let mut failed_trials = 0;
        let mut trials = 0u32;

        while self.cloud.has_dust_between(self.inner_bound, self.outer_bound)
            && failed_trials <= max_failed_trials
        {
            trials += 1;
            if self.step(rng) {
                failed_trials = 0;
            } else {
                failed_trials += 1;
            }
        }

        debug!(
            "accretion exhausted after {} trials: {} planets, {} bands",
            trials,
            self.planets.len(),
            self.cloud.bands().len()
        );
    }

    /// One trial: seed, grow, sweep, resolve. Returns `false` when the
    /// trial orbit offered no dust and the nucleus was discarded.
    fn step(&mut self, rng: &mut ChaChaRng) -> bool {
        let a = trial_orbit(rng, self.inner_bound, self.outer_bound);
        let e = random_eccentricity(rng, self.cloud_eccentricity);
        let mut nucleus = Protoplanet::seed(a, e);

        let inner = nucleus.inner_effect_limit(self.cloud_eccentricity);
        let outer = nucleus.outer_effect_limit(self.cloud_eccentricity);
        if !self.cloud.has_dust_between(inner, outer) {
            trace!("trial at {:.3} AU found no dust", a);
            return false;
        }

        let params = GrowthParams {
            dust_density: self.cloud.dust_density(a),
            crit_mass: critical_mass(a, e, self.stellar_luminosity, self.crit_mass_coeff),
            cloud_eccentricity: self.cloud_eccentricity,
            k: self.k,
        };
        if !grow(&mut nucleus, &self.cloud, &params) {
            trace!("trial at {:.3} AU failed to grow", a);
            return false;
        }

        // Clear what the body consumed before resolving collisions; the
        // merged result never re-sweeps contributors' zones.
        let swept_inner = nucleus.inner_effect_limit(self.cloud_eccentricity);
        let swept_outer = nucleus.outer_effect_limit(self.cloud_eccentricity);
        self.cloud
            .sweep(swept_inner, swept_outer, nucleus.is_gas_giant);

        debug!(
            "planet formed: {:.3} AU, e {:.3}, {:.3e} M☉{}",
            nucleus.a,
            nucleus.e,
            nucleus.mass,
            if nucleus.is_gas_giant {
                " (gas giant)"
            } else {
                ""
            }
        );

        resolve(
            &mut self.planets,
            nucleus,
            self.cloud_eccentricity,
            self.stellar_mass,
            rng,
        );
        true
    }

    /// The accreted planet list, ordered by semi-major axis.
    pub fn into_planets(self) -> Vec<Protoplanet> {
        self.planets
    }
}
