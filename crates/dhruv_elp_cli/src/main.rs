use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dhruv_elp::{
    PLANETARY_TABLE2_COLUMNS, PerturbationTable, SeriesConfig, jd_tdb_to_centuries, load_terms,
    sum_series, table_by_name, write_table,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "elp", about = "ELP2000-82B planetary perturbation tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a bundled table in plain-text form
    Dump {
        /// Table name
        #[arg(long, default_value = "elp18")]
        table: String,
    },
    /// Show one term with labelled multipliers
    Term {
        /// Zero-based term index
        index: usize,
        /// Table name
        #[arg(long, default_value = "elp18")]
        table: String,
    },
    /// Evaluate a table at a Julian Date
    Eval {
        /// Julian Date TDB
        #[arg(long)]
        jd: f64,
        /// Truncation level in radians (0 = all terms, max 0.01)
        #[arg(long, default_value = "0")]
        precision: f64,
        /// Table name
        #[arg(long, default_value = "elp18")]
        table: String,
    },
    /// Compare a plain-text table file against a bundled table
    Verify {
        /// Path to the text table
        file: PathBuf,
        /// Table name
        #[arg(long, default_value = "elp18")]
        table: String,
    },
}

fn require_table(name: &str) -> PerturbationTable {
    match table_by_name(name) {
        Some(t) => t,
        None => {
            eprintln!("Unknown table: {name}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dump { table } => {
            let table = require_table(&table);
            print!("{}", write_table(&table));
        }

        Commands::Term { index, table } => {
            let table = require_table(&table);
            let Some(term) = table.get(index) else {
                eprintln!(
                    "Index {index} out of range for {} ({} terms)",
                    table.name,
                    table.len()
                );
                std::process::exit(1);
            };
            println!("{} term {index}", table.name);
            for (arg, k) in PLANETARY_TABLE2_COLUMNS.iter().zip(term.multipliers) {
                println!("  {:<4} {k:>4}", arg.symbol());
            }
            println!("  phase     {:.6} deg", term.phase);
            println!("  amplitude {:.6} {}", term.amplitude, table.quantity.unit());
            match term.period_years() {
                Some(p) => println!("  period    {p:.6} yr"),
                None => println!("  period    secular"),
            }
        }

        Commands::Eval {
            jd,
            precision,
            table,
        } => {
            let table = require_table(&table);
            let t = jd_tdb_to_centuries(jd);
            debug!(jd, t, "evaluating");
            let config = SeriesConfig::with_precision(precision);
            match sum_series(&table, t, &config) {
                Ok(sum) => {
                    println!(
                        "{} {}: {:.9} {}",
                        table.name,
                        table.quantity.name(),
                        sum.value,
                        table.quantity.unit()
                    );
                    println!(
                        "Terms: {} used, {} skipped",
                        sum.terms_used, sum.terms_skipped
                    );
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Verify { file, table } => {
            let table = require_table(&table);
            let terms = match load_terms(&file) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            info!(file = %file.display(), terms = terms.len(), "comparing against {}", table.name);

            let mut mismatches = 0usize;
            if terms.len() != table.len() {
                println!(
                    "Count mismatch: file has {}, {} has {}",
                    terms.len(),
                    table.name,
                    table.len()
                );
                mismatches += 1;
            }
            for (i, (a, b)) in terms.iter().zip(table.iter()).enumerate() {
                if a != b {
                    println!("Term {i} differs");
                    mismatches += 1;
                }
            }

            if mismatches > 0 {
                println!("{mismatches} mismatch(es)");
                std::process::exit(1);
            }
            println!("OK: {} terms match {}", terms.len(), table.name);
        }
    }
}
