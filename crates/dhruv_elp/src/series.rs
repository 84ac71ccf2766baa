//! Summation of planetary perturbation series.
//!
//! Each term contributes `A * sin(θ + Σ kᵢ·argᵢ(t))`. Distance tables carry
//! the cosine convention folded into θ (phases near 90°/270°), so a single
//! sine evaluator serves every table.

use std::f64::consts::TAU;

use tracing::debug;

use crate::arguments::FundamentalArguments;
use crate::config::SeriesConfig;
use crate::error::ElpError;
use crate::table::{ELP18_TABLE, PerturbationTable};
use crate::term::PlanetPert;

/// Result of summing one table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSum {
    /// Sum in the table's amplitude unit.
    pub value: f64,
    /// Terms included in the sum.
    pub terms_used: usize,
    /// Terms dropped by truncation.
    pub terms_skipped: usize,
}

/// Phase argument of `term` in radians, reduced to [0, 2π).
pub fn term_argument_rad(term: &PlanetPert, args: &FundamentalArguments) -> f64 {
    let cols = args.columns();
    let mut y = term.phase.to_radians();
    for (&k, &a) in term.multipliers.iter().zip(cols.iter()) {
        if k != 0 {
            y += f64::from(k) * a;
        }
    }
    y.rem_euclid(TAU)
}

/// Contribution of a single term.
pub fn term_value(term: &PlanetPert, args: &FundamentalArguments) -> f64 {
    term.amplitude * term_argument_rad(term, args).sin()
}

/// Sum `terms` with precomputed arguments, dropping `|amplitude| <= threshold`.
pub fn sum_terms(
    terms: &[PlanetPert],
    args: &FundamentalArguments,
    threshold: f64,
) -> SeriesSum {
    let mut value = 0.0;
    let mut terms_used = 0;
    for term in terms {
        if term.amplitude.abs() > threshold {
            value += term_value(term, args);
            terms_used += 1;
        }
    }
    SeriesSum {
        value,
        terms_used,
        terms_skipped: terms.len() - terms_used,
    }
}

/// Evaluate `table` at `t` Julian centuries (TDB) since J2000.0.
pub fn sum_series(
    table: &PerturbationTable,
    t: f64,
    config: &SeriesConfig,
) -> Result<SeriesSum, ElpError> {
    config.validate()?;
    let threshold = config.amplitude_threshold(table.quantity);
    let args = FundamentalArguments::at(t);
    let sum = sum_terms(table.terms, &args, threshold);
    debug!(
        table = table.name,
        t,
        threshold,
        used = sum.terms_used,
        skipped = sum.terms_skipped,
        "summed perturbation series"
    );
    Ok(sum)
}

/// ELP18 distance perturbation in km at `t`, all terms included.
pub fn elp18_distance_km(t: f64) -> f64 {
    let args = FundamentalArguments::at(t);
    sum_terms(ELP18_TABLE.terms, &args, 0.0).value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elp18::ELP18;

    fn amplitude_bound() -> f64 {
        ELP18.iter().map(|p| p.amplitude.abs()).sum()
    }

    #[test]
    fn secular_term_is_constant() {
        // 0.02702 km * sin(270°) at every epoch.
        for &t in &[-2.0, 0.0, 0.24, 3.0] {
            let v = term_value(&ELP18[0], &FundamentalArguments::at(t));
            assert!((v + 0.027_02).abs() < 1e-15, "t={t}: {v}");
        }
    }

    #[test]
    fn argument_is_reduced() {
        let args = FundamentalArguments::at(5.0);
        for term in &ELP18 {
            let y = term_argument_rad(term, &args);
            assert!((0.0..TAU).contains(&y), "argument {y} not in [0, 2π)");
        }
    }

    #[test]
    fn sum_bounded_by_amplitudes() {
        let bound = amplitude_bound();
        for &t in &[-1.0, -0.1, 0.0, 0.24, 1.0] {
            let v = elp18_distance_km(t);
            assert!(v.abs() <= bound, "t={t}: |{v}| > {bound}");
        }
    }

    #[test]
    fn full_precision_uses_every_term() {
        let sum = sum_series(&ELP18_TABLE, 0.24, &SeriesConfig::default()).unwrap();
        assert_eq!(sum.terms_used, ELP18.len());
        assert_eq!(sum.terms_skipped, 0);
        assert_eq!(sum.value, elp18_distance_km(0.24));
    }

    #[test]
    fn truncation_drops_small_terms() {
        // 1e-8 rad * A0 ≈ 0.00385 km keeps the seven largest terms.
        let sum = sum_series(&ELP18_TABLE, 0.24, &SeriesConfig::with_precision(1e-8)).unwrap();
        assert_eq!(sum.terms_used, 7);
        assert_eq!(sum.terms_used + sum.terms_skipped, ELP18.len());
    }

    #[test]
    fn truncation_is_monotonic() {
        let mut last = usize::MAX;
        for p in [0.0, 1e-10, 1e-9, 1e-8, 1e-7, 1e-6] {
            let sum = sum_series(&ELP18_TABLE, 0.0, &SeriesConfig::with_precision(p)).unwrap();
            assert!(sum.terms_used <= last);
            last = sum.terms_used;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn coarse_truncation_sums_to_zero() {
        let sum = sum_series(&ELP18_TABLE, 0.5, &SeriesConfig::with_precision(1e-6)).unwrap();
        assert_eq!(sum.value, 0.0);
        assert_eq!(sum.terms_used, 0);
    }

    #[test]
    fn invalid_config_rejected() {
        let err = sum_series(&ELP18_TABLE, 0.0, &SeriesConfig::with_precision(-1.0));
        assert!(matches!(err, Err(ElpError::InvalidConfig(_))));
    }
}
