//! Plain-text term tables.
//!
//! One term per line: eleven integer multipliers followed by phase
//! (degrees), amplitude and period (years), separated by whitespace.
//! Lines starting with `#` and blank lines are ignored.
//!
//! Floats are written in their shortest round-trip form, so parsing the
//! output of [`write_terms`] reproduces every value bit-for-bit.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::error::ElpError;
use crate::table::PerturbationTable;
use crate::term::{MULTIPLIER_COUNT, PLANETARY_TABLE2_COLUMNS, PlanetPert};

/// Fields per data line.
pub const FIELDS_PER_LINE: usize = MULTIPLIER_COUNT + 3;

/// Render one term as a single line (no trailing newline).
pub fn format_term(term: &PlanetPert) -> String {
    let mut line = String::new();
    for m in term.multipliers {
        let _ = write!(line, "{m:>3} ");
    }
    let _ = write!(line, "{} {} {}", term.phase, term.amplitude, term.period);
    line
}

/// Render terms, one per line.
pub fn write_terms(terms: &[PlanetPert]) -> String {
    let mut out = String::new();
    for term in terms {
        out.push_str(&format_term(term));
        out.push('\n');
    }
    out
}

/// Render a table with a descriptive comment header.
pub fn write_table(table: &PerturbationTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# {} ({}, amplitude in {}), {} terms",
        table.name,
        table.quantity.name(),
        table.quantity.unit(),
        table.len()
    );
    out.push('#');
    for arg in PLANETARY_TABLE2_COLUMNS {
        let _ = write!(out, " {}", arg.symbol());
    }
    out.push_str(" phase amplitude period\n");
    out.push_str(&write_terms(table.terms));
    out
}

/// Parse a text table.
pub fn parse_terms(content: &str) -> Result<Vec<PlanetPert>, ElpError> {
    let mut terms = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        terms.push(parse_line(line, idx + 1)?);
    }
    Ok(terms)
}

/// Read and parse a text table from disk.
pub fn load_terms(path: &Path) -> Result<Vec<PlanetPert>, ElpError> {
    let content = std::fs::read_to_string(path)?;
    let terms = parse_terms(&content)?;
    debug!(path = %path.display(), terms = terms.len(), "loaded term table");
    Ok(terms)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn parse_line(line: &str, line_no: usize) -> Result<PlanetPert, ElpError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(parse_err(
            line_no,
            format!("expected {FIELDS_PER_LINE} fields, got {}", fields.len()),
        ));
    }

    let mut multipliers = [0i8; MULTIPLIER_COUNT];
    for (slot, field) in multipliers.iter_mut().zip(&fields[..MULTIPLIER_COUNT]) {
        *slot = field
            .parse::<i8>()
            .map_err(|e| parse_err(line_no, format!("bad multiplier {field:?}: {e}")))?;
    }

    let phase = parse_f64(fields[MULTIPLIER_COUNT], "phase", line_no)?;
    let amplitude = parse_f64(fields[MULTIPLIER_COUNT + 1], "amplitude", line_no)?;
    let period = parse_f64(fields[MULTIPLIER_COUNT + 2], "period", line_no)?;

    Ok(PlanetPert::new(multipliers, phase, amplitude, period))
}

fn parse_f64(field: &str, what: &str, line_no: usize) -> Result<f64, ElpError> {
    let v = field
        .parse::<f64>()
        .map_err(|e| parse_err(line_no, format!("bad {what} {field:?}: {e}")))?;
    if !v.is_finite() {
        return Err(parse_err(line_no, format!("{what} is not finite")));
    }
    Ok(v)
}

fn parse_err(line: usize, msg: String) -> ElpError {
    ElpError::Parse { line, msg }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ELP18_TABLE;

    #[test]
    fn format_single_term() {
        let term = PlanetPert::new([0, 8, -13, 0, 0, 0, 0, 2, 0, 0, 0], 144.68611, 0.00003, 0.04);
        assert_eq!(
            format_term(&term),
            "  0   8 -13   0   0   0   0   2   0   0   0 144.68611 0.00003 0.04"
        );
    }

    #[test]
    fn table_header_is_skipped() {
        let text = write_table(&ELP18_TABLE);
        assert!(text.starts_with("# elp18 (distance, amplitude in km), 114 terms\n"));
        let terms = parse_terms(&text).unwrap();
        assert_eq!(terms.len(), 114);
    }

    #[test]
    fn blank_and_comment_lines() {
        let text = "\n# comment\n  \n0 0 0 0 0 0 0 0 0 1 0 89.99752 0.01035 0.075\n";
        let terms = parse_terms(text).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].multipliers[9], 1);
        assert_eq!(terms[0].amplitude, 0.01035);
    }

    #[test]
    fn wrong_field_count() {
        let text = "# header\n0 0 0 270 0.02702 99999.999\n";
        let err = parse_terms(text).unwrap_err();
        assert_eq!(
            err,
            ElpError::Parse {
                line: 2,
                msg: "expected 14 fields, got 6".into()
            }
        );
    }

    #[test]
    fn multiplier_out_of_range() {
        let text = "0 0 200 0 0 0 0 0 0 0 0 1.0 1.0 1.0";
        assert!(matches!(
            parse_terms(text),
            Err(ElpError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn bad_float_and_non_finite() {
        let bad = "0 0 0 0 0 0 0 0 0 0 0 abc 1.0 1.0";
        assert!(matches!(parse_terms(bad), Err(ElpError::Parse { .. })));
        let inf = "0 0 0 0 0 0 0 0 0 0 0 1.0 inf 1.0";
        assert!(matches!(parse_terms(inf), Err(ElpError::Parse { .. })));
    }

    #[test]
    fn missing_file() {
        let err = load_terms(Path::new("/nonexistent/elp18.txt")).unwrap_err();
        assert!(matches!(err, ElpError::Io(_)));
    }
}
