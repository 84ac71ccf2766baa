//! Table descriptors: which quantity a term table perturbs, and in what unit.

use crate::elp18::ELP18;
use crate::term::PlanetPert;

/// Lunar coordinate perturbed by a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Ecliptic longitude; amplitudes in arcseconds.
    Longitude,
    /// Ecliptic latitude; amplitudes in arcseconds.
    Latitude,
    /// Earth-Moon distance; amplitudes in kilometres.
    Distance,
}

impl Quantity {
    /// Unit of the amplitudes of tables for this quantity.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Longitude | Self::Latitude => "arcsec",
            Self::Distance => "km",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::Distance => "distance",
        }
    }
}

/// A named, immutable term table.
#[derive(Debug, Clone, Copy)]
pub struct PerturbationTable {
    pub name: &'static str,
    pub quantity: Quantity,
    pub terms: &'static [PlanetPert],
}

impl PerturbationTable {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static PlanetPert> {
        self.terms.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, PlanetPert> {
        self.terms.iter()
    }
}

/// ELP18: planetary perturbations (table 2) of the Earth-Moon distance.
pub static ELP18_TABLE: PerturbationTable = PerturbationTable {
    name: "elp18",
    quantity: Quantity::Distance,
    terms: &ELP18,
};

/// All tables bundled with this crate.
pub static ALL_TABLES: [&PerturbationTable; 1] = [&ELP18_TABLE];

/// Look up a bundled table by name (case-insensitive).
pub fn table_by_name(name: &str) -> Option<PerturbationTable> {
    ALL_TABLES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .map(|t| **t)
}
