use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in grams (1.989 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.989e33;

/// Mass of the Earth in grams (5.977 × 10²⁷ g)
pub const EARTH_MASS_G: f64 = 5.977e27;

/// Earth masses per solar mass, derived from the gram values above
pub const EARTH_MASSES_PER_SOLAR_MASS: f64 = SOLAR_MASS_G / EARTH_MASS_G;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit: the accretion model works in units of the
/// primary star's mass, so stellar, planetary, and protoplanetary masses all
/// live on the same scale without conversion in the hot loops.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let star = Mass::from_solar_masses(1.0);
/// let planet = Mass::from_earth_masses(317.8);
///
/// assert!(planet.to_solar_masses() < star.to_solar_masses());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: solar masses

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// One solar mass is approximately 332,776 Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR_MASS)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR_MASS
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    /// Returns the maximum of two masses.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the minimum of two masses.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, other: Mass) -> Mass {
        Mass(self.0 + other.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, other: Mass) -> Mass {
        Mass(self.0 - other.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, scalar: f64) -> Mass {
        Mass(self.0 * scalar)
    }
}

impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, mass: Mass) -> Mass {
        Mass(self * mass.0)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, scalar: f64) -> Mass {
        Mass(self.0 / scalar)
    }
}
