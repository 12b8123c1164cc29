//! Planetary ring debris
//!
//! A moon whose disturbed orbit falls inside twice its Roche limit is torn
//! apart by tides instead of settling; its mass survives as a ring around
//! the parent planet.

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

/// A ring of tidally shredded satellite debris around a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ring {
    /// Orbital radius around the parent planet (the Roche limit of the
    /// shredded moon)
    pub semi_major_axis: Length,
    /// Total debris mass
    pub mass: Mass,
    /// Radial width of the ring
    pub width: Length,
}

impl Ring {
    pub fn new(semi_major_axis: Length, mass: Mass, width: Length) -> Self {
        Self {
            semi_major_axis,
            mass,
            width,
        }
    }
}
