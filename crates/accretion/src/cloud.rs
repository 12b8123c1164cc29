//! Dust cloud model
//!
//! The protoplanetary cloud is tracked as an ordered list of radial bands,
//! each an interval `[inner_edge, outer_edge)` in AU with independent dust
//! and gas availability flags. The band list always partitions the cloud's
//! full extent with no gaps or overlaps; sweeping splits bands at the sweep
//! edges and clears flags on the fully covered pieces, and adjacent bands
//! with identical flag pairs are coalesced to keep the list small.
//!
//! Flags only ever transition from present to absent. Dust swept into a
//! planet never returns to the cloud.

use serde::{Deserialize, Serialize};

/// Radial dust density decay constant (alpha in Dole's paper)
pub const ALPHA: f64 = 5.0;

/// The density profile decays with the nth root of the radius
pub const N: f64 = 3.0;

/// Outer edge of the dust cloud in AU.
///
/// Dole scales the cloud extent with the cube root of the stellar mass;
/// 200 AU for a one solar mass star.
pub fn outer_dust_limit(stellar_mass: f64) -> f64 {
    200.0 * stellar_mass.powf(1.0 / 3.0)
}

/// One radial interval of the cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustBand {
    /// Inner edge in AU
    pub inner_edge: f64,
    /// Outer edge in AU
    pub outer_edge: f64,
    /// Whether unswept dust remains in this interval
    pub dust_present: bool,
    /// Whether unswept gas remains in this interval
    pub gas_present: bool,
}

impl DustBand {
    pub fn new(inner_edge: f64, outer_edge: f64, dust_present: bool, gas_present: bool) -> Self {
        Self {
            inner_edge,
            outer_edge,
            dust_present,
            gas_present,
        }
    }
}

/// The remaining dust and gas of a forming system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustCloud {
    bands: Vec<DustBand>,
    stellar_mass: f64,
    dust_density_coeff: f64,
}

impl DustCloud {
    /// A fresh cloud: one band spanning the whole extent, dust and gas both
    /// present.
    pub fn new(stellar_mass: f64, dust_density_coeff: f64) -> Self {
        let band = DustBand::new(0.0, outer_dust_limit(stellar_mass), true, true);
        Self {
            bands: vec![band],
            stellar_mass,
            dust_density_coeff,
        }
    }

    pub fn bands(&self) -> &[DustBand] {
        &self.bands
    }

    /// Full radial extent of the cloud in AU.
    pub fn outer_limit(&self) -> f64 {
        outer_dust_limit(self.stellar_mass)
    }

    /// True when any band overlapping `[inner, outer]` still carries dust.
    pub fn has_dust_between(&self, inner: f64, outer: f64) -> bool {
        self.bands
            .iter()
            .any(|band| band.dust_present && band.outer_edge > inner && band.inner_edge < outer)
    }

    /// True when any dust remains anywhere in the cloud.
    pub fn has_dust(&self) -> bool {
        self.bands.iter().any(|band| band.dust_present)
    }

    /// Local dust density at radius `r` in AU.
    ///
    /// Dole's profile: rho = A * sqrt(M) * exp(-alpha * r^(1/n)). Zero when
    /// the band covering `r` has already been swept clean.
    pub fn dust_density(&self, r: f64) -> f64 {
        let covered = self
            .bands
            .iter()
            .any(|band| band.dust_present && band.inner_edge <= r && r < band.outer_edge);
        if !covered {
            return 0.0;
        }
        self.dust_density_coeff * self.stellar_mass.sqrt() * (-ALPHA * r.powf(1.0 / N)).exp()
    }

    /// Remove dust (and optionally gas) from `[inner, outer]`.
    ///
    /// Bands partially overlapped by the sweep zone are split at the zone
    /// edges so only the covered pieces lose their flags. Sweep ranges
    /// outside the cloud extent clip harmlessly against the existing bands.
    pub fn sweep(&mut self, inner: f64, outer: f64, sweep_gas: bool) {
        let inner = inner.max(0.0);
        if outer <= inner {
            return;
        }

        self.bands = self
            .bands
            .iter()
            .fold(Vec::new(), |mut acc, band| {
                let swept_gas = band.gas_present && !sweep_gas;
                if band.inner_edge < inner && band.outer_edge > outer {
                    // Sweep zone strictly inside the band: split in three
                    acc.push(DustBand::new(
                        band.inner_edge,
                        inner,
                        band.dust_present,
                        band.gas_present,
                    ));
                    acc.push(DustBand::new(inner, outer, false, swept_gas));
                    acc.push(DustBand::new(
                        outer,
                        band.outer_edge,
                        band.dust_present,
                        band.gas_present,
                    ));
                } else if band.inner_edge < outer && band.outer_edge > outer {
                    // Band straddles the outer sweep edge
                    acc.push(DustBand::new(band.inner_edge, outer, false, swept_gas));
                    acc.push(DustBand::new(
                        outer,
                        band.outer_edge,
                        band.dust_present,
                        band.gas_present,
                    ));
                } else if band.inner_edge < inner && band.outer_edge > inner {
                    // Band straddles the inner sweep edge
                    acc.push(DustBand::new(
                        band.inner_edge,
                        inner,
                        band.dust_present,
                        band.gas_present,
                    ));
                    acc.push(DustBand::new(inner, band.outer_edge, false, swept_gas));
                } else if band.inner_edge >= inner && band.outer_edge <= outer {
                    // Fully covered
                    acc.push(DustBand::new(
                        band.inner_edge,
                        band.outer_edge,
                        false,
                        swept_gas,
                    ));
                } else {
                    // Entirely outside the sweep zone
                    acc.push(*band);
                }
                acc
            });

        self.compress();
    }

    /// Merge adjacent bands with identical flag pairs so the band count
    /// stays bounded by the number of distinct swept zones.
    fn compress(&mut self) {
        let mut compressed: Vec<DustBand> = Vec::with_capacity(self.bands.len());
        for band in &self.bands {
            match compressed.last_mut() {
                Some(prev)
                    if prev.dust_present == band.dust_present
                        && prev.gas_present == band.gas_present =>
                {
                    prev.outer_edge = band.outer_edge;
                }
                _ => compressed.push(*band),
            }
        }
        self.bands = compressed;
    }
}
