//! Protoplanet working representation
//!
//! A `Protoplanet` is the raw numerical body the engine grows and collides:
//! semi-major axis in AU, mass in solar masses, plain f64 throughout the hot
//! loops. It freezes into a `star_system::Planet` only when the run ends.

use star_system::Planet;
use units::{Length, Mass, AU_TO_CM, EARTH_MASSES_PER_SOLAR_MASS, SOLAR_MASS_G};

/// Seed mass of a planetary nucleus in solar masses (Dole's value).
pub const PROTOPLANET_MASS: f64 = 1.0e-15;

/// Bodies that finish growth below this mass (0.001 M⊕, in solar masses)
/// never compact into a single planet and are flagged as asteroid fields.
pub const ASTEROID_MASS_LIMIT: f64 = 0.001 / EARTH_MASSES_PER_SOLAR_MASS;

/// Mean body density used for radii, in g/cm³ (rocky composition).
pub const BODY_DENSITY: f64 = 5.52;

/// A growing planetary nucleus.
#[derive(Debug, Clone, PartialEq)]
pub struct Protoplanet {
    /// Semi-major axis in AU
    pub a: f64,
    /// Orbital eccentricity
    pub e: f64,
    /// Total mass in solar masses
    pub mass: f64,
    /// Portion of `mass` accreted as dust
    pub dust_mass: f64,
    /// Portion of `mass` accreted as gas
    pub gas_mass: f64,
    /// Latched once mass exceeds the critical mass
    pub is_gas_giant: bool,
    /// Set when growth finished below the asteroid mass limit
    pub is_asteroid_field: bool,
    /// Captured satellites, in capture order
    pub moons: Vec<Protoplanet>,
    /// Tidal debris rings from shredded moons
    pub rings: Vec<Ring>,
}

/// A ring of tidal debris around a growing planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Orbital radius around the parent, in AU
    pub a: f64,
    /// Total mass in solar masses
    pub mass: f64,
    /// Radial width in AU
    pub width: f64,
}

impl Protoplanet {
    /// A fresh nucleus at the trial orbit, carrying only the seed mass.
    pub fn seed(a: f64, e: f64) -> Self {
        Self {
            a,
            e,
            mass: PROTOPLANET_MASS,
            dust_mass: PROTOPLANET_MASS,
            gas_mass: 0.0,
            is_gas_giant: false,
            is_asteroid_field: false,
            moons: Vec::new(),
            rings: Vec::new(),
        }
    }

    /// Dole's reduced mass margin, (m / (1 + m))^(1/4).
    ///
    /// Governs how far beyond its orbit a body's attraction reaches; grows
    /// monotonically with mass, which is the feedback loop that lets heavy
    /// nuclei sweep ever wider zones.
    pub fn reduced_margin(&self) -> f64 {
        (self.mass / (1.0 + self.mass)).powf(0.25)
    }

    /// Inner edge of the zone this body gravitationally dominates, in AU.
    ///
    /// Perihelion shrunk by the reduced margin and widened by the cloud
    /// particle eccentricity. Clamped at the center of mass.
    pub fn inner_effect_limit(&self, cloud_eccentricity: f64) -> f64 {
        let limit =
            self.a * (1.0 - self.e) * (1.0 - self.reduced_margin()) / (1.0 + cloud_eccentricity);
        limit.max(0.0)
    }

    /// Outer edge of the zone this body gravitationally dominates, in AU.
    pub fn outer_effect_limit(&self, cloud_eccentricity: f64) -> f64 {
        self.a * (1.0 + self.e) * (1.0 + self.reduced_margin()) / (1.0 - cloud_eccentricity)
    }

    /// Hill sphere radius in AU: the region where this body's gravity
    /// dominates over the star's. Captured moons orbit inside it.
    pub fn hill_sphere_radius(&self, stellar_mass: f64) -> f64 {
        self.a * (1.0 - self.e) * (self.mass / (3.0 * stellar_mass)).powf(1.0 / 3.0)
    }

    /// Physical radius in AU, from the mass at the mean rocky density.
    pub fn body_radius(&self) -> f64 {
        let mass_g = self.mass * SOLAR_MASS_G;
        let radius_cm =
            (3.0 * mass_g / (4.0 * std::f64::consts::PI * BODY_DENSITY)).powf(1.0 / 3.0);
        radius_cm / AU_TO_CM
    }

    /// Distance below which tidal forces tear `moon` apart instead of
    /// letting it orbit this body, in AU.
    pub fn roche_limit(&self, moon: &Protoplanet) -> f64 {
        moon.body_radius() * (2.0 * self.mass / moon.mass).powf(1.0 / 3.0)
    }

    /// Freeze into the output representation, moons included.
    pub fn to_planet(&self) -> Planet {
        let mut planet = Planet::new(
            Mass::from_solar_masses(self.dust_mass),
            Mass::from_solar_masses(self.gas_mass),
            Length::from_au(self.a),
            self.e,
            self.is_gas_giant,
        );
        planet.is_asteroid_field = self.is_asteroid_field;
        planet.moons = self.moons.iter().map(Protoplanet::to_planet).collect();
        planet.rings = self
            .rings
            .iter()
            .map(|ring| {
                star_system::Ring::new(
                    Length::from_au(ring.a),
                    Mass::from_solar_masses(ring.mass),
                    Length::from_au(ring.width),
                )
            })
            .collect();
        planet
    }
}

/// The mass at which a body starts to accrete gas as well as dust, in solar
/// masses.
///
/// Scales with the critical mass coefficient "B" and falls off with
/// perihelion distance and stellar luminosity: volatile retention improves
/// far from the star, so gas giants form more easily in the outer system.
pub fn critical_mass(a: f64, e: f64, stellar_luminosity: f64, crit_mass_coeff: f64) -> f64 {
    let perihelion = a * (1.0 - e);
    crit_mass_coeff * (perihelion * stellar_luminosity.sqrt()).powf(-0.75)
}
