//! ELP2000-82B planetary perturbation tables and their series evaluator.
//!
//! This crate provides:
//! - `ELP18`, the 114-term planetary perturbation series of the Earth-Moon
//!   distance, as immutable static data
//! - Table descriptors (perturbed quantity, amplitude unit)
//! - ELP2000-82B fundamental arguments (Delaunay + planetary mean longitudes)
//! - A truncating sine-series evaluator
//! - A plain-text table format with a bit-exact parser

pub mod arguments;
pub mod config;
pub mod elp18;
pub mod error;
pub mod format;
pub mod series;
pub mod table;
pub mod term;

pub use arguments::{FundamentalArguments, J2000_JD, jd_tdb_to_centuries};
pub use config::{A0_KM, SeriesConfig};
pub use elp18::{ELP18, ELP18_SIZE};
pub use error::ElpError;
pub use format::{format_term, load_terms, parse_terms, write_table, write_terms};
pub use series::{
    SeriesSum, elp18_distance_km, sum_series, sum_terms, term_argument_rad, term_value,
};
pub use table::{ALL_TABLES, ELP18_TABLE, PerturbationTable, Quantity, table_by_name};
pub use term::{Argument, MULTIPLIER_COUNT, PLANETARY_TABLE2_COLUMNS, PlanetPert};
