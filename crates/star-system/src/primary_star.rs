//! Primary star properties
//!
//! The accretion model only needs two stellar quantities: mass (which sets
//! the cloud extent and dust density scale) and luminosity (which sets the
//! critical mass for runaway gas accretion).

use serde::{Deserialize, Serialize};
use units::Mass;

/// The star at the center of mass of the dust cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryStar {
    /// Stellar mass
    pub mass: Mass,
    /// Stellar luminosity in solar luminosities (L☉)
    pub luminosity: f64,
}

impl PrimaryStar {
    /// Create a star with an explicit luminosity.
    pub fn new(mass: Mass, luminosity: f64) -> Self {
        Self { mass, luminosity }
    }

    /// Create a star whose luminosity follows the main-sequence
    /// mass-luminosity relation L ≈ M^3.5.
    ///
    /// Valid for roughly 0.4-10 M☉; outside that range the relation is a
    /// rough approximation but keeps the critical-mass scaling sensible.
    pub fn from_mass(mass: Mass) -> Self {
        let luminosity = mass.to_solar_masses().powf(3.5);
        Self { mass, luminosity }
    }
}
