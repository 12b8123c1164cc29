//! Planet representation
//!
//! A `Planet` starts life as a protoplanetary nucleus inside the accretion
//! engine and is frozen into this form once inserted into the system. Moons
//! are planets orbiting planets: a captured body keeps its own mass and
//! eccentricity, with its semi-major axis reinterpreted as the orbit around
//! its parent.

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::ring::Ring;

/// A planet (or moon) produced by the accretion simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Total mass (accreted dust plus captured gas)
    pub mass: Mass,
    /// Mass accreted as dust
    pub dust_mass: Mass,
    /// Mass accreted as gas; nonzero only for bodies that crossed the
    /// critical mass during growth
    pub gas_mass: Mass,
    /// Orbital semi-major axis (around the star, or around the parent
    /// planet for moons)
    pub semi_major_axis: Length,
    /// Orbital eccentricity, in [0, 1)
    pub eccentricity: f64,
    /// Whether the body crossed the critical mass and underwent runaway gas
    /// accretion. Latched: never cleared by later merges.
    pub is_gas_giant: bool,
    /// Whether the body finished accretion too light to compact into a
    /// single planet and remains a planetesimal swarm
    pub is_asteroid_field: bool,
    /// Captured satellites, in capture order
    pub moons: Vec<Planet>,
    /// Tidal debris rings from moons shredded inside their Roche limit
    pub rings: Vec<Ring>,
}

impl Planet {
    /// Create a planet with the given orbit and mass split.
    pub fn new(
        dust_mass: Mass,
        gas_mass: Mass,
        semi_major_axis: Length,
        eccentricity: f64,
        is_gas_giant: bool,
    ) -> Self {
        Self {
            mass: dust_mass + gas_mass,
            dust_mass,
            gas_mass,
            semi_major_axis,
            eccentricity,
            is_gas_giant,
            is_asteroid_field: false,
            moons: Vec::new(),
            rings: Vec::new(),
        }
    }

    /// Distance to the primary at closest approach: a(1 - e).
    pub fn perihelion(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Distance to the primary at furthest approach: a(1 + e).
    pub fn aphelion(&self) -> Length {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Total mass including all moons and rings.
    pub fn system_mass(&self) -> Mass {
        let with_moons = self
            .moons
            .iter()
            .fold(self.mass, |acc, moon| acc + moon.system_mass());
        self.rings
            .iter()
            .fold(with_moons, |acc, ring| acc + ring.mass)
    }
}
