//! Simulation configuration and validation
//!
//! All tuning parameters of the accretion model in one place, with the
//! defaults Dole's paper tested. Configuration is immutable once a
//! simulation starts; validation happens up front so no partial system is
//! ever produced from bad inputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dust density scale at the center of the cloud ("A" in Dole's paper).
/// Dole tested the range 0.00125-0.0015; larger values tend toward binary
/// companions instead of planets.
pub const DEFAULT_DUST_DENSITY_COEFF: f64 = 1.5e-3;

/// Gas-to-dust mass ratio of the cloud ("K"); hydrogen and helium count as
/// gas, everything heavier as dust. Plausible range 50-100.
pub const DEFAULT_K: f64 = 50.0;

/// Eccentricity of the dust particle orbits within the cloud ("W").
pub const DEFAULT_CLOUD_ECCENTRICITY: f64 = 0.2;

/// Critical mass scale for runaway gas accretion ("B"), in solar masses.
/// Plausible range 1.0e-5 to 1.2e-5.
pub const DEFAULT_CRIT_MASS_COEFF: f64 = 1.2e-5;

/// Number of late impactors thrown at the finished system.
pub const DEFAULT_POST_ACCRETION_INTENSITY: u32 = 100;

/// A malformed configuration, detected before any simulation state is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("stellar mass must be positive, got {0}")]
    NonPositiveStellarMass(f64),

    #[error("stellar luminosity must be positive, got {0}")]
    NonPositiveLuminosity(f64),

    #[error("dust density coefficient must be positive, got {0}")]
    NonPositiveDustDensity(f64),

    #[error("gas-to-dust ratio must be positive, got {0}")]
    NonPositiveGasRatio(f64),

    #[error("critical mass coefficient must be positive, got {0}")]
    NonPositiveCritMass(f64),

    #[error("eccentricity must be within [0, 1), got {0}")]
    EccentricityOutOfRange(f64),

    #[error("planet semi-major axis must be positive, got {0}")]
    NonPositivePlanetAxis(f64),

    #[error("planet mass must be positive, got {0}")]
    NonPositivePlanetMass(f64),
}

/// Tuning parameters for one simulation run.
///
/// `stellar_mass` is in solar masses; `stellar_luminosity` (solar
/// luminosities) is derived from the mass-luminosity relation when not set.
/// The `planet_*` overrides only apply to standalone planet generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Mass of the primary star (M☉)
    pub stellar_mass: f64,
    /// Dust density scale "A"
    pub dust_density_coeff: f64,
    /// Gas-to-dust ratio "K"
    pub k: f64,
    /// Eccentricity of cloud particle orbits
    pub cloud_eccentricity: f64,
    /// Critical mass coefficient "B" (M☉)
    pub crit_mass_coeff: f64,
    /// Number of post-accretion impact events
    pub post_accretion_intensity: u32,
    /// Stellar luminosity (L☉); derived from mass when `None`
    pub stellar_luminosity: Option<f64>,
    /// Standalone planet: fixed semi-major axis (AU)
    pub planet_a: Option<f64>,
    /// Standalone planet: fixed eccentricity
    pub planet_e: Option<f64>,
    /// Standalone planet: fixed mass (M⊕)
    pub planet_mass: Option<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            stellar_mass: 1.0,
            dust_density_coeff: DEFAULT_DUST_DENSITY_COEFF,
            k: DEFAULT_K,
            cloud_eccentricity: DEFAULT_CLOUD_ECCENTRICITY,
            crit_mass_coeff: DEFAULT_CRIT_MASS_COEFF,
            post_accretion_intensity: DEFAULT_POST_ACCRETION_INTENSITY,
            stellar_luminosity: None,
            planet_a: None,
            planet_e: None,
            planet_mass: None,
        }
    }
}

impl SimulationConfig {
    /// Default configuration around a star of the given mass.
    pub fn for_stellar_mass(stellar_mass: f64) -> Self {
        Self {
            stellar_mass,
            ..Self::default()
        }
    }

    /// Stellar luminosity: the configured value, or L = M^3.5 from the
    /// main-sequence mass-luminosity relation.
    pub fn luminosity(&self) -> f64 {
        self.stellar_luminosity
            .unwrap_or_else(|| self.stellar_mass.powf(3.5))
    }

    /// Check every parameter before simulation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stellar_mass <= 0.0 {
            return Err(ConfigError::NonPositiveStellarMass(self.stellar_mass));
        }
        if self.dust_density_coeff <= 0.0 {
            return Err(ConfigError::NonPositiveDustDensity(self.dust_density_coeff));
        }
        if self.k <= 0.0 {
            return Err(ConfigError::NonPositiveGasRatio(self.k));
        }
        if self.crit_mass_coeff <= 0.0 {
            return Err(ConfigError::NonPositiveCritMass(self.crit_mass_coeff));
        }
        if !(0.0..1.0).contains(&self.cloud_eccentricity) {
            return Err(ConfigError::EccentricityOutOfRange(self.cloud_eccentricity));
        }
        if let Some(l) = self.stellar_luminosity {
            if l <= 0.0 {
                return Err(ConfigError::NonPositiveLuminosity(l));
            }
        }
        if let Some(a) = self.planet_a {
            if a <= 0.0 {
                return Err(ConfigError::NonPositivePlanetAxis(a));
            }
        }
        if let Some(e) = self.planet_e {
            if !(0.0..1.0).contains(&e) {
                return Err(ConfigError::EccentricityOutOfRange(e));
            }
        }
        if let Some(m) = self.planet_mass {
            if m <= 0.0 {
                return Err(ConfigError::NonPositivePlanetMass(m));
            }
        }
        Ok(())
    }
}
