//! Output types for accretion-generated planetary systems
//!
//! This crate defines the frozen result of a formation run: the primary
//! star, its ordered planet list, and the nested moon trees. The accretion
//! engine itself lives in the `accretion` crate; everything here is plain
//! data plus derived orbital helpers.

pub mod planet;
pub mod primary_star;
pub mod ring;
pub mod system;

pub use planet::Planet;
pub use primary_star::PrimaryStar;
pub use ring::Ring;
pub use system::PlanetarySystem;

#[cfg(test)]
mod system_test;
