//! Dust-accretion planetary formation
//!
//! Generates planetary systems by simulating the gravitational sweeping of a
//! protoplanetary dust and gas cloud into discrete planets, following the
//! aggregation model of Dole (1969) with Fogg's gas-giant and moon
//! extensions.
//!
//! The pipeline is strictly sequential: each trial nucleus grows against the
//! cumulative cloud state left by every earlier trial, so there is no
//! parallelism within one run. Independent runs (different seeds) share no
//! state and may execute concurrently.
//!
//! # Example
//!
//! ```ignore
//! use accretion::planetary_system;
//!
//! let system = planetary_system(42, 1.0).unwrap();
//! for planet in &system.planets {
//!     println!(
//!         "{:.3} AU  {:.3} M⊕  gas giant: {}",
//!         planet.semi_major_axis.to_au(),
//!         planet.mass.to_earth_masses(),
//!         planet.is_gas_giant,
//!     );
//! }
//! ```
//!
//! # References
//!
//! - Dole, S. H. (1969) - "Formation of Planetary Systems by Aggregation:
//!   a Computer Simulation", RAND Corporation Paper P-4226
//! - Fogg, M. J. (1985) - "Extra-solar planetary systems: a microcomputer
//!   simulation"

pub mod bombardment;
pub mod cloud;
pub mod coalescence;
pub mod config;
pub mod driver;
pub mod generation;
pub mod growth;
pub mod protoplanet;
pub mod sampling;

pub use config::{ConfigError, SimulationConfig};
pub use generation::{planet, planet_with_config, planetary_system, planetary_system_with_config};

// Re-export output types for convenience
pub use star_system::{Planet, PlanetarySystem, PrimaryStar, Ring};

#[cfg(test)]
mod bombardment_test;
#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod sampling_test;
