//! Perturbation term record and the argument layout of its multipliers.

/// Number of argument multipliers carried by every planetary term.
pub const MULTIPLIER_COUNT: usize = 11;

/// Sentinel period (years) of the zero-frequency term.
pub const SECULAR_PERIOD_YEARS: f64 = 99999.999;

/// One harmonic term of an ELP2000-82B planetary perturbation series.
///
/// The term contributes `amplitude * sin(phase + Σ multipliers[i] * arg[i])`
/// where `arg` is laid out as in [`PLANETARY_TABLE2_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPert {
    /// Integer multipliers of the fundamental arguments.
    pub multipliers: [i8; MULTIPLIER_COUNT],
    /// Constant phase, degrees.
    pub phase: f64,
    /// Amplitude in the table's unit (arcsec or km).
    pub amplitude: f64,
    /// Period in years. Informational only.
    pub period: f64,
}

impl PlanetPert {
    pub const fn new(
        multipliers: [i8; MULTIPLIER_COUNT],
        phase: f64,
        amplitude: f64,
        period: f64,
    ) -> Self {
        Self {
            multipliers,
            phase,
            amplitude,
            period,
        }
    }

    /// True for the constant term (all multipliers zero).
    pub fn is_secular(&self) -> bool {
        self.multipliers.iter().all(|&m| m == 0)
    }

    /// Period in years, or `None` for the secular sentinel.
    pub fn period_years(&self) -> Option<f64> {
        if self.period >= SECULAR_PERIOD_YEARS {
            None
        } else {
            Some(self.period)
        }
    }
}

/// Fundamental argument referenced by a multiplier column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// Mean longitude of Mercury.
    Mercury,
    /// Mean longitude of Venus.
    Venus,
    /// Mean longitude of the Earth-Moon barycentre.
    EarthMoon,
    /// Mean longitude of Mars.
    Mars,
    /// Mean longitude of Jupiter.
    Jupiter,
    /// Mean longitude of Saturn.
    Saturn,
    /// Mean longitude of Uranus.
    Uranus,
    /// Mean elongation of the Moon from the Sun (D).
    Elongation,
    /// Mean anomaly of the Sun (l').
    SunAnomaly,
    /// Mean anomaly of the Moon (l).
    MoonAnomaly,
    /// Mean argument of latitude of the Moon (F).
    Latitude,
}

impl Argument {
    /// Short column label as used in the published tables.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mercury => "Me",
            Self::Venus => "V",
            Self::EarthMoon => "EMB",
            Self::Mars => "Ma",
            Self::Jupiter => "J",
            Self::Saturn => "S",
            Self::Uranus => "U",
            Self::Elongation => "D",
            Self::SunAnomaly => "l'",
            Self::MoonAnomaly => "l",
            Self::Latitude => "F",
        }
    }
}

/// Column layout shared by planetary tables 16-21 (ELP16..ELP21).
pub const PLANETARY_TABLE2_COLUMNS: [Argument; MULTIPLIER_COUNT] = [
    Argument::Mercury,
    Argument::Venus,
    Argument::EarthMoon,
    Argument::Mars,
    Argument::Jupiter,
    Argument::Saturn,
    Argument::Uranus,
    Argument::Elongation,
    Argument::SunAnomaly,
    Argument::MoonAnomaly,
    Argument::Latitude,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secular_term_detection() {
        let secular = PlanetPert::new([0; MULTIPLIER_COUNT], 270.0, 0.02702, 99999.999);
        assert!(secular.is_secular());
        assert_eq!(secular.period_years(), None);

        let periodic = PlanetPert::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0], 90.0, 0.01, 0.075);
        assert!(!periodic.is_secular());
        assert_eq!(periodic.period_years(), Some(0.075));
    }

    #[test]
    fn column_symbols_are_unique() {
        for (i, a) in PLANETARY_TABLE2_COLUMNS.iter().enumerate() {
            for b in &PLANETARY_TABLE2_COLUMNS[i + 1..] {
                assert_ne!(a.symbol(), b.symbol());
            }
        }
    }
}
