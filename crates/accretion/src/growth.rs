//! Protoplanet growth engine
//!
//! Grows a single nucleus at its trial orbit until its mass converges. Each
//! iteration recomputes the body's effect zone from its current mass, sums
//! the dust (and, above the critical mass, gas) collected across every
//! overlapping cloud band, and repeats; the widening zone is the feedback
//! loop that drives runaway growth. Convergence is a relative mass change
//! below 0.01 percent, with an iteration cap treated as converged rather
//! than an error so pathologically slow seeds just stop small.

use crate::cloud::{DustBand, DustCloud};
use crate::protoplanet::{Protoplanet, ASTEROID_MASS_LIMIT, PROTOPLANET_MASS};

/// Relative growth per iteration below which the mass has converged.
const CONVERGENCE_THRESHOLD: f64 = 1.0e-4;

/// Upper bound on growth iterations; reaching it counts as converged.
const MAX_GROWTH_ITERATIONS: u32 = 1_000;

/// Parameters the growth loop needs from the simulation configuration.
#[derive(Debug, Clone, Copy)]
pub struct GrowthParams {
    /// Local dust density at the trial orbit
    pub dust_density: f64,
    /// Critical mass for runaway gas accretion at the trial orbit
    pub crit_mass: f64,
    /// Cloud particle eccentricity
    pub cloud_eccentricity: f64,
    /// Gas-to-dust ratio "K"
    pub k: f64,
}

/// Grow `p` in place until convergence. Returns `false` when the trial
/// orbit offered no dust at all and the nucleus never exceeded its seed
/// mass; such bodies cannot form and the caller discards them.
pub fn grow(p: &mut Protoplanet, cloud: &DustCloud, params: &GrowthParams) -> bool {
    let mut iterations = 0;
    loop {
        let (mut dust, mut gas) = (0.0, 0.0);
        for band in cloud.bands() {
            let (band_dust, band_gas) = collect_from_band(p, band, params);
            dust += band_dust;
            gas += band_gas;
        }
        let new_mass = dust + gas;
        let converged = new_mass - p.mass < CONVERGENCE_THRESHOLD * p.mass;

        if new_mass > p.mass {
            p.mass = new_mass;
            p.dust_mass = dust;
            p.gas_mass = gas;
        }

        iterations += 1;
        if converged || iterations >= MAX_GROWTH_ITERATIONS {
            break;
        }
    }

    if p.mass > PROTOPLANET_MASS {
        p.is_gas_giant = p.mass >= params.crit_mass;
        p.is_asteroid_field = p.mass < ASTEROID_MASS_LIMIT;
        true
    } else {
        false
    }
}

/// Mass collected from one cloud band by the body's current effect zone,
/// split into (dust, gas) contributions in solar masses.
///
/// The volume swept is Dole's 4πa²·μ·width torus, scaled down by the band
/// overlap and by the body's eccentricity penalty. Above the critical mass
/// in a gas-bearing band, the collected density rises toward K times the
/// dust density as (crit/m)^(1/2) shrinks.
fn collect_from_band(p: &Protoplanet, band: &DustBand, params: &GrowthParams) -> (f64, f64) {
    if !band.dust_present {
        return (0.0, 0.0);
    }

    let r_inner = p.inner_effect_limit(params.cloud_eccentricity);
    let r_outer = p.outer_effect_limit(params.cloud_eccentricity);
    if band.outer_edge <= r_inner || band.inner_edge >= r_outer {
        return (0.0, 0.0);
    }

    let gas_accreting = p.mass >= params.crit_mass && band.gas_present;
    let density = if gas_accreting {
        combined_density(params.k, params.dust_density, params.crit_mass, p.mass)
    } else {
        params.dust_density
    };

    // Truncate the zone to the part overlapping this band
    let bandwidth = r_outer - r_inner;
    let outer_excess = (r_outer - band.outer_edge).max(0.0);
    let inner_excess = (band.inner_edge - r_inner).max(0.0);
    let width = bandwidth - outer_excess - inner_excess;

    let volume = 4.0 * std::f64::consts::PI
        * p.a.powi(2)
        * p.reduced_margin()
        * width
        * (1.0 - p.e * (outer_excess - inner_excess) / bandwidth);
    let collected = volume * density;

    if gas_accreting {
        let dust_fraction = params.dust_density / density;
        (collected * dust_fraction, collected * (1.0 - dust_fraction))
    } else {
        (collected, 0.0)
    }
}

/// Combined dust and gas density once a body accretes gas:
/// K·rho / (1 + (crit/m)^(1/2) · (K - 1)).
fn combined_density(k: f64, dust_density: f64, crit_mass: f64, mass: f64) -> f64 {
    k * dust_density / (1.0 + (crit_mass / mass).sqrt() * (k - 1.0))
}
