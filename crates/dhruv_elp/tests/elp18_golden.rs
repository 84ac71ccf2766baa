//! Golden checks for the ELP18 table and its evaluated sum.

use dhruv_elp::{
    ELP18, ELP18_SIZE, ELP18_TABLE, MULTIPLIER_COUNT, SeriesConfig, elp18_distance_km,
    parse_terms, sum_series, write_table, write_terms,
};

#[test]
fn record_count() {
    assert_eq!(ELP18_SIZE, 114);
    assert_eq!(ELP18.len(), 114);
    assert_eq!(ELP18_TABLE.len(), 114);
}

#[test]
fn every_record_has_eleven_multipliers() {
    for (i, term) in ELP18.iter().enumerate() {
        assert_eq!(term.multipliers.len(), MULTIPLIER_COUNT, "record {i}");
    }
}

#[test]
fn first_record_is_secular() {
    let t = &ELP18[0];
    assert_eq!(t.multipliers, [0; 11]);
    assert_eq!(t.phase, 270.000000);
    assert_eq!(t.amplitude, 0.027020);
    assert_eq!(t.period, 99999.999000);
    assert!(t.is_secular());
    assert_eq!(t.period_years(), None);
}

#[test]
fn second_record() {
    let t = &ELP18[1];
    assert_eq!(t.multipliers, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]);
    assert_eq!(t.phase, 270.000300);
    assert_eq!(t.amplitude, 0.000040);
    assert_eq!(t.period, 0.037000);
}

#[test]
fn largest_periodic_record() {
    // 0.01035 km in l, period 0.075 yr (anomalistic month).
    let t = &ELP18[3];
    assert_eq!(t.multipliers, [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0]);
    assert_eq!(t.phase, 89.997520);
    assert_eq!(t.amplitude, 0.010350);
}

#[test]
fn last_record() {
    let t = ELP18.last().unwrap();
    assert_eq!(t.multipliers, [0, 8, -13, 0, 0, 0, 0, 2, 0, 0, 0]);
    assert_eq!(t.phase, 144.686110);
    assert_eq!(t.amplitude, 0.000030);
    assert_eq!(t.period, 0.040000);
}

#[test]
fn amplitude_abs_sum() {
    let sum: f64 = ELP18.iter().map(|t| t.amplitude.abs()).sum();
    assert!((sum - 0.21608).abs() < 1e-12, "Σ|A| = {sum}");
}

#[test]
fn multipliers_within_observed_range() {
    for term in &ELP18 {
        for &m in &term.multipliers {
            assert!((-13..=8).contains(&m), "multiplier {m} out of range");
        }
    }
}

#[test]
fn only_secular_row_has_sentinel_period() {
    let secular: Vec<usize> = ELP18
        .iter()
        .enumerate()
        .filter(|(_, t)| t.period_years().is_none())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(secular, vec![0]);
}

#[test]
fn text_roundtrip_is_bit_exact() {
    let parsed = parse_terms(&write_terms(&ELP18)).unwrap();
    assert_eq!(parsed.len(), ELP18.len());
    for (a, b) in ELP18.iter().zip(&parsed) {
        assert_eq!(a.multipliers, b.multipliers);
        assert_eq!(a.phase.to_bits(), b.phase.to_bits());
        assert_eq!(a.amplitude.to_bits(), b.amplitude.to_bits());
        assert_eq!(a.period.to_bits(), b.period.to_bits());
    }

    let with_header = parse_terms(&write_table(&ELP18_TABLE)).unwrap();
    assert_eq!(with_header.as_slice(), &ELP18[..]);
}

#[test]
fn concurrent_readers_agree() {
    let expected = elp18_distance_km(0.24);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| elp18_distance_km(0.24)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn evaluated_sum_golden() {
    // Reference values from an independent double-precision evaluation
    // of the same arguments and terms.
    let cases = [
        (0.0, 0.006_638_865_031_870_114),
        (0.24, -0.057_995_020_005_666_684),
        (-1.0, -0.025_866_892_805_073_05),
        (1.0, 0.032_566_319_207_434_56),
    ];
    for (t, expected) in cases {
        let got = elp18_distance_km(t);
        assert!(
            (got - expected).abs() < 1e-9,
            "t={t}: got {got} km, expected {expected} km"
        );
    }
}

#[test]
fn sum_series_matches_convenience() {
    let sum = sum_series(&ELP18_TABLE, -0.5, &SeriesConfig::default()).unwrap();
    assert_eq!(sum.value, elp18_distance_km(-0.5));
    assert_eq!(sum.terms_used, ELP18_SIZE);
}
