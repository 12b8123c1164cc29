//! Collision and coalescence resolution
//!
//! After a nucleus finishes growing, it is tested against every planet
//! already accreted. Bodies interact when their effect zones overlap in
//! orbital radius. Comparable masses merge into one body on a mass-weighted
//! orbit; a much lighter body on a distinct orbit is captured as a moon of
//! the heavier. With several overlaps the candidate absorbs them pairwise,
//! closest orbit first, so at most one body ever occupies a given zone.

use log::debug;
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::protoplanet::{Protoplanet, Ring};

/// Largest small-to-large mass ratio at which the lighter body can survive
/// as a satellite instead of merging.
pub const MOON_MASS_RATIO_LIMIT: f64 = 0.05;

/// Minimum orbital separation, as a fraction of the heavier body's
/// semi-major axis, for the lighter body to be plausible as a satellite
/// rather than a fragment of the same orbit.
pub const MOON_SEPARATION_LIMIT: f64 = 0.05;

/// How a candidate body joins the planet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No effect zone overlaps: the candidate becomes a new planet.
    Insert,
    /// Comparable masses: candidate and existing planet become one body.
    Merge,
    /// The lighter body becomes a satellite of the heavier.
    CaptureAsMoon,
}

/// True when the two bodies' effect zones overlap in orbital radius.
pub fn orbits_interact(p: &Protoplanet, q: &Protoplanet, cloud_eccentricity: f64) -> bool {
    let separation = (q.a - p.a).abs();
    let (reach_p, reach_q) = if q.a > p.a {
        (
            p.outer_effect_limit(cloud_eccentricity) - p.a,
            q.a - q.inner_effect_limit(cloud_eccentricity),
        )
    } else {
        (
            p.a - p.inner_effect_limit(cloud_eccentricity),
            q.outer_effect_limit(cloud_eccentricity) - q.a,
        )
    };
    separation < reach_p.abs() || separation < reach_q.abs()
}

/// Decide how `candidate` interacts with one overlapping planet.
pub fn classify(candidate: &Protoplanet, existing: &Protoplanet) -> Resolution {
    let (larger, smaller) = if candidate.mass >= existing.mass {
        (candidate, existing)
    } else {
        (existing, candidate)
    };
    let ratio = smaller.mass / larger.mass;
    let separation = (candidate.a - existing.a).abs();

    if ratio < MOON_MASS_RATIO_LIMIT && separation > MOON_SEPARATION_LIMIT * larger.a {
        Resolution::CaptureAsMoon
    } else {
        Resolution::Merge
    }
}

/// Mass-weighted orbit of two coalescing bodies.
///
/// The combined semi-major axis is the harmonic mass average
/// M / (m1/a1 + m2/a2), which conserves orbital energy to first order; the
/// eccentricity follows from conserving the sum of the bodies' angular
/// momenta.
pub fn merged_orbit(p: &Protoplanet, q: &Protoplanet) -> (f64, f64) {
    let total = p.mass + q.mass;
    let axis = total / (p.mass / p.a + q.mass / q.a);
    let term1 = p.mass * (p.a * (1.0 - p.e.powi(2))).sqrt();
    let term2 = q.mass * (q.a * (1.0 - q.e.powi(2))).sqrt();
    let momentum_ratio = (term1 + term2) / (total * axis.sqrt());
    let eccentricity = (1.0 - momentum_ratio.powi(2)).abs().sqrt();
    (axis, eccentricity)
}

/// Resolve `candidate` against the accreted planet list.
///
/// Overlapping planets are absorbed pairwise, closest orbit first, until no
/// overlap remains; the surviving body is then inserted at its sorted
/// position. The list stays ordered by semi-major axis throughout.
pub fn resolve(
    planets: &mut Vec<Protoplanet>,
    mut candidate: Protoplanet,
    cloud_eccentricity: f64,
    stellar_mass: f64,
    rng: &mut ChaChaRng,
) {
    loop {
        // Two asteroid fields pass through each other without coalescing
        let overlapping = planets
            .iter()
            .enumerate()
            .filter(|(_, p)| !(candidate.is_asteroid_field && p.is_asteroid_field))
            .filter(|(_, p)| orbits_interact(&candidate, p, cloud_eccentricity))
            .min_by(|(_, p), (_, q)| {
                let dp = (p.a - candidate.a).abs();
                let dq = (q.a - candidate.a).abs();
                dp.partial_cmp(&dq).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i);

        let Some(index) = overlapping else {
            break;
        };
        let existing = planets.remove(index);
        candidate = match classify(&candidate, &existing) {
            Resolution::CaptureAsMoon => {
                debug!(
                    "moon capture at {:.3} AU (masses {:.3e} / {:.3e} M☉)",
                    candidate.a, candidate.mass, existing.mass
                );
                capture_moon(candidate, existing, stellar_mass, rng)
            }
            _ => {
                debug!(
                    "merge at {:.3} AU (masses {:.3e} / {:.3e} M☉)",
                    candidate.a, candidate.mass, existing.mass
                );
                merge(candidate, existing)
            }
        };
    }

    let position = planets
        .iter()
        .position(|p| p.a > candidate.a)
        .unwrap_or(planets.len());
    planets.insert(position, candidate);
}

/// Merge two bodies into one: additive mass, mass-weighted orbit, gas-giant
/// status latched from either input. The merged body inherits both moon
/// lists and both ring sets; it is an asteroid field only if both inputs
/// were.
fn merge(p: Protoplanet, q: Protoplanet) -> Protoplanet {
    let (axis, eccentricity) = merged_orbit(&p, &q);
    let mut merged = Protoplanet {
        a: axis,
        e: eccentricity,
        mass: p.mass + q.mass,
        dust_mass: p.dust_mass + q.dust_mass,
        gas_mass: p.gas_mass + q.gas_mass,
        is_gas_giant: p.is_gas_giant || q.is_gas_giant,
        is_asteroid_field: p.is_asteroid_field && q.is_asteroid_field,
        moons: p.moons,
        rings: p.rings,
    };
    merged.moons.extend(q.moons);
    merged.rings.extend(q.rings);
    merged
}

/// The lighter body becomes a satellite of the heavier.
///
/// The parent keeps its own mass but moves to the mass-weighted combined
/// orbit; the moon keeps its mass and eccentricity and is re-placed on an
/// orbit inside the parent's Hill sphere. Moons freed by the lighter body
/// transfer to the parent, and the moon list is re-coalesced since the new
/// orbits may overlap.
fn capture_moon(
    p: Protoplanet,
    q: Protoplanet,
    stellar_mass: f64,
    rng: &mut ChaChaRng,
) -> Protoplanet {
    let (axis, eccentricity) = merged_orbit(&p, &q);
    let (mut parent, mut moon) = if p.mass >= q.mass { (p, q) } else { (q, p) };
    parent.a = axis;
    parent.e = eccentricity;

    // Moons do not keep their own satellites
    parent.moons.append(&mut moon.moons);
    parent.moons.push(moon);

    let hill_sphere = parent.hill_sphere_radius(stellar_mass);
    for m in parent.moons.iter_mut() {
        m.a = rng.random_range(0.0..hill_sphere);
    }
    coalesce_moons(&mut parent);
    moons_to_rings(&mut parent);

    parent
}

/// Grind moons orbiting inside twice their Roche limit into rings.
///
/// A moon that close is torn apart by tides rather than keeping a stable
/// orbit. The ring sits at the Roche limit with the moon's full mass and a
/// width of one moon diameter. Surviving moons keep their capture order.
pub fn moons_to_rings(parent: &mut Protoplanet) {
    let moons = std::mem::take(&mut parent.moons);
    for moon in moons {
        let roche_limit = parent.roche_limit(&moon);
        if moon.a <= 2.0 * roche_limit {
            parent.rings.push(Ring {
                a: roche_limit,
                mass: moon.mass,
                width: 2.0 * moon.body_radius(),
            });
        } else {
            parent.moons.push(moon);
        }
    }
}

/// Merge moons whose disturbed orbits now overlap. Moons are unlikely to
/// capture each other in the presence of the parent, so overlapping pairs
/// always merge. The list keeps capture order: a merged pair stays at the
/// earlier member's position.
fn coalesce_moons(parent: &mut Protoplanet) {
    let mut i = 0;
    while i < parent.moons.len() {
        let mut j = i + 1;
        let mut merged_any = false;
        while j < parent.moons.len() {
            if orbits_interact(&parent.moons[i], &parent.moons[j], 0.0) {
                let absorbed = parent.moons.remove(j);
                parent.moons[i] = merge(parent.moons[i].clone(), absorbed);
                merged_any = true;
            } else {
                j += 1;
            }
        }
        if !merged_any {
            i += 1;
        }
    }
}
