//! ELP2000-82B fundamental arguments for the planetary perturbation series.
//!
//! The planetary series of ELP2000-82B are evaluated with the mean motions
//! only: every argument here is `a0 + a1 * t` in radians, `t` in Julian
//! centuries of TDB since J2000.0.
//!
//! Source: Chapront-Touzé & Chapront, "ELP 2000-85" / ELP2000-82B file
//! headers (mean longitudes of the Moon, its perigee and node, the
//! Earth-Moon barycentre and its perihelion, and the planets).

use std::f64::consts::PI;

use crate::term::{Argument, MULTIPLIER_COUNT, PLANETARY_TABLE2_COLUMNS};

/// Julian Date of J2000.0 (TDB).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Arcseconds per radian.
pub const RAD_TO_ARCSEC: f64 = 648_000.0 / PI;

/// Julian centuries of TDB since J2000.0.
pub fn jd_tdb_to_centuries(jd_tdb: f64) -> f64 {
    (jd_tdb - J2000_JD) / DAYS_PER_CENTURY
}

/// Angle given as degrees, arcminutes and arcseconds, in radians.
const fn dms(d: f64, m: f64, s: f64) -> f64 {
    (d + m / 60.0 + s / 3600.0) * (PI / 180.0)
}

/// Rate given in arcseconds per century, in radians per century.
const fn arcsec(a: f64) -> f64 {
    a / RAD_TO_ARCSEC
}

// Moon: mean longitude W1, perigee W2, node W3.
const W1: [f64; 2] = [dms(218.0, 18.0, 59.95571), arcsec(1_732_559_343.736_04)];
const W2: [f64; 2] = [dms(83.0, 21.0, 11.67475), arcsec(14_643_420.2632)];
const W3: [f64; 2] = [dms(125.0, 2.0, 40.39816), arcsec(-6_967_919.3622)];

// Earth-Moon barycentre: mean longitude T and perihelion.
const EMB: [f64; 2] = [dms(100.0, 27.0, 59.22059), arcsec(129_597_742.2758)];
const EMB_PERIHELION: [f64; 2] = [dms(102.0, 56.0, 14.42753), arcsec(1_161.2283)];

// Planetary mean longitudes, Mercury..Neptune (index 2 is the EMB).
#[rustfmt::skip]
const PLANETS: [[f64; 2]; 8] = [
    [dms(252.0, 15.0,  3.25986), arcsec(538_101_628.688_98)],
    [dms(181.0, 58.0, 47.28305), arcsec(210_664_136.433_55)],
    EMB,
    [dms(355.0, 25.0, 59.78866), arcsec( 68_905_077.592_84)],
    [dms( 34.0, 21.0,  5.34212), arcsec( 10_925_660.428_61)],
    [dms( 50.0,  4.0, 38.89694), arcsec(  4_399_609.659_32)],
    [dms(314.0,  3.0, 18.01841), arcsec(  1_542_481.193_93)],
    [dms(304.0, 20.0, 55.19575), arcsec(    786_550.320_74)],
];

fn linear(coeffs: [f64; 2], t: f64) -> f64 {
    coeffs[0] + coeffs[1] * t
}

/// Fundamental arguments at one epoch, in radians (not reduced to 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    /// Delaunay arguments `[D, l', l, F]`.
    pub delaunay: [f64; 4],
    /// Planetary mean longitudes `[Me, V, EMB, Ma, J, S, U, N]`.
    pub planets: [f64; 8],
}

impl FundamentalArguments {
    /// Arguments at `t` Julian centuries (TDB) since J2000.0.
    pub fn at(t: f64) -> Self {
        let w1 = linear(W1, t);
        let emb = linear(EMB, t);

        let d = w1 - emb + PI;
        let l_sun = emb - linear(EMB_PERIHELION, t);
        let l_moon = w1 - linear(W2, t);
        let f = w1 - linear(W3, t);

        let mut planets = [0.0; 8];
        for (p, coeffs) in planets.iter_mut().zip(PLANETS) {
            *p = linear(coeffs, t);
        }

        Self {
            delaunay: [d, l_sun, l_moon, f],
            planets,
        }
    }

    /// Value of a single argument.
    pub fn get(&self, arg: Argument) -> f64 {
        match arg {
            Argument::Mercury => self.planets[0],
            Argument::Venus => self.planets[1],
            Argument::EarthMoon => self.planets[2],
            Argument::Mars => self.planets[3],
            Argument::Jupiter => self.planets[4],
            Argument::Saturn => self.planets[5],
            Argument::Uranus => self.planets[6],
            Argument::Elongation => self.delaunay[0],
            Argument::SunAnomaly => self.delaunay[1],
            Argument::MoonAnomaly => self.delaunay[2],
            Argument::Latitude => self.delaunay[3],
        }
    }

    /// Argument referenced by multiplier column `i` of tables 16-21.
    ///
    /// Panics if `i >= MULTIPLIER_COUNT`.
    pub fn column(&self, i: usize) -> f64 {
        self.get(PLANETARY_TABLE2_COLUMNS[i])
    }

    /// All eleven column values in table order.
    pub fn columns(&self) -> [f64; MULTIPLIER_COUNT] {
        PLANETARY_TABLE2_COLUMNS.map(|a| self.get(a))
    }
}
