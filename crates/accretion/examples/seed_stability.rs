//! Test that the same seed produces identical systems
//!
//! Usage: cargo run -p accretion --example seed_stability

use accretion::planetary_system;

fn main() {
    let seed = 42;
    let stellar_mass = 1.0;

    println!("Testing seed stability with seed {seed}");
    println!("Star: {stellar_mass:.1} M☉\n");

    for run in 1..=5 {
        let system = planetary_system(seed, stellar_mass).unwrap();

        println!("Run {}: {} planets", run, system.planets.len());
        for (i, planet) in system.planets.iter().enumerate() {
            println!(
                "  Planet {}: {:.3} M⊕, {:.3} AU, {} moons",
                i,
                planet.mass.to_earth_masses(),
                planet.semi_major_axis.to_au(),
                planet.moons.len()
            );
        }
        println!();
    }

    // Verify stability
    let system1 = planetary_system(seed, stellar_mass).unwrap();
    let system2 = planetary_system(seed, stellar_mass).unwrap();

    if system1.planets.len() != system2.planets.len() {
        eprintln!(
            "❌ FAIL: Planet count differs! {} vs {}",
            system1.planets.len(),
            system2.planets.len()
        );
        std::process::exit(1);
    }

    for (i, (p1, p2)) in system1.planets.iter().zip(&system2.planets).enumerate() {
        if p1 != p2 {
            eprintln!("❌ FAIL: Planet {i} differs between runs");
            std::process::exit(1);
        }
    }

    println!("✅ PASS: identical systems across runs");
}
