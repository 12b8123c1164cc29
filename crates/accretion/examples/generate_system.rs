//! Generate one planetary system and print it as JSON
//!
//! Usage: cargo run -p accretion --example generate_system [seed] [stellar_mass]
//!
//! Set RUST_LOG=debug to watch the accretion trials.

use accretion::planetary_system;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let stellar_mass: f64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0);

    let system = match planetary_system(seed, stellar_mass) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    eprintln!(
        "seed {}: {} planets around a {:.2} M☉ star ({} gas giants)",
        seed,
        system.planets.len(),
        stellar_mass,
        system.gas_giant_count()
    );
    for (i, planet) in system.planets.iter().enumerate() {
        eprintln!(
            "  Planet {}: {:>9.3} M⊕ at {:.3} AU, e {:.3}, {} moons{}",
            i,
            planet.mass.to_earth_masses(),
            planet.semi_major_axis.to_au(),
            planet.eccentricity,
            planet.moons.len(),
            if planet.is_gas_giant { " (gas giant)" } else { "" }
        );
    }

    match serde_json::to_string_pretty(&system) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("serialization failed: {err}");
            std::process::exit(1);
        }
    }
}
