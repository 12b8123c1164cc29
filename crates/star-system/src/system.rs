//! Assembled planetary system
//!
//! The final snapshot of a formation run: star properties plus the planet
//! list sorted ascending by semi-major axis. Post-accretion bombardment may
//! add mass and moons to individual planets but never removes or reorders
//! entries.

use serde::{Deserialize, Serialize};
use units::Mass;

use crate::planet::Planet;
use crate::primary_star::PrimaryStar;

/// A complete, mature planetary system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetarySystem {
    /// The primary star
    pub primary: PrimaryStar,
    /// Planets, strictly ascending by semi-major axis
    pub planets: Vec<Planet>,
}

impl PlanetarySystem {
    /// Package a star and its planet list, sorting by semi-major axis.
    pub fn new(primary: PrimaryStar, mut planets: Vec<Planet>) -> Self {
        planets.sort_by(|a, b| {
            a.semi_major_axis
                .to_au()
                .partial_cmp(&b.semi_major_axis.to_au())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { primary, planets }
    }

    /// True when planets are strictly ascending by semi-major axis.
    pub fn is_ordered(&self) -> bool {
        self.planets
            .windows(2)
            .all(|pair| pair[0].semi_major_axis.to_au() < pair[1].semi_major_axis.to_au())
    }

    /// Total planetary mass, moons included.
    pub fn total_planetary_mass(&self) -> Mass {
        self.planets
            .iter()
            .fold(Mass::zero(), |acc, p| acc + p.system_mass())
    }

    /// Number of gas giants among top-level planets.
    pub fn gas_giant_count(&self) -> usize {
        self.planets.iter().filter(|p| p.is_gas_giant).count()
    }
}
