pub mod length;
pub mod mass;


pub use length::{Length, AU_TO_CM, AU_TO_KM};
pub use mass::{Mass, EARTH_MASSES_PER_SOLAR_MASS, EARTH_MASS_G, SOLAR_MASS_G};
