// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Roundel CLI
//!
//! Finds the largest origin-centered circle whose points carry distinct labels.
//!
//! Usage:
//!     roundel scan points.txt
//!     roundel scan - --alphabet ABCDEF < points.txt
//!     roundel random --seed 42 --size 15 --desmos

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roundel_data::{desmos::DesmosFormatter, generator::RandomPointSetGenerator};
use roundel_model::{alphabet::LabelAlphabet, loading::PointSetLoader, point_set::PointSet};
use roundel_scan::{monitor::log::LogMonitor, result::ScanOutcome, scanner::BoundaryScanner};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Largest distinct-label circle around the origin
#[derive(Debug, Parser)]
#[command(name = "roundel")]
#[command(version)]
#[command(about = "Largest origin-centered circle with pairwise distinct labels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Also print the ranked points and circle as Desmos expressions
    #[arg(long, global = true)]
    desmos: bool,

    /// With --desmos, list each label's color after the expressions
    #[arg(long, global = true, requires = "desmos")]
    color_key: bool,

    /// Log every scan step (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a point set file of `x y label` records
    Scan {
        /// Input file, or `-` for standard input
        file: PathBuf,

        /// Fixed label alphabet, e.g. `ABCDEF`; inferred from the input if omitted
        #[arg(short, long)]
        alphabet: Option<String>,
    },

    /// Scan a randomly generated point set
    Random {
        /// Seed for the generator; drawn from the OS if omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Lower coordinate bound
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        low: i64,

        /// Upper coordinate bound; drawn from `[low + 1, 20)` if omitted
        #[arg(long, allow_negative_numbers = true)]
        high: Option<i64>,

        /// Number of points; drawn from `[1, 20)` if omitted
        #[arg(long)]
        size: Option<usize>,

        /// Number of labels, taken from `A` onwards
        #[arg(long, default_value_t = 6)]
        labels: usize,
    },
}

/// Fully resolved parameters of a `random` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RandomParams {
    seed: u64,
    low: i64,
    high: i64,
    size: usize,
    labels: usize,
}

impl RandomParams {
    /// Fills in omitted values from a `ChaCha8Rng` seeded with `seed`.
    fn resolve(
        seed: u64,
        low: i64,
        high: Option<i64>,
        size: Option<usize>,
        labels: usize,
    ) -> Result<Self> {
        ensure!(
            (1..=26).contains(&labels),
            "--labels must be between 1 and 26, got {}",
            labels
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let high = match high {
            Some(high) => high,
            None => {
                let first = low.saturating_add(1);
                rng.random_range(first..=first.max(19))
            }
        };
        let size = size.unwrap_or_else(|| rng.random_range(1..20));

        Ok(Self {
            seed,
            low,
            high,
            size,
            labels,
        })
    }

    fn generate(&self) -> Result<PointSet<i64>> {
        let points = RandomPointSetGenerator::new()
            .low(self.low)
            .high(self.high)
            .size(self.size)
            .alphabet(LabelAlphabet::letters(self.labels))
            .generate_seeded(self.seed)?;
        Ok(points)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load(file: &Path, alphabet: Option<&str>) -> Result<PointSet<i64>> {
    let mut loader = PointSetLoader::<i64>::new();
    if let Some(symbols) = alphabet {
        let alphabet = LabelAlphabet::new(symbols.chars())
            .with_context(|| format!("invalid alphabet '{}'", symbols))?;
        loader = loader.with_alphabet(alphabet);
    }

    if file.as_os_str() == "-" {
        return loader
            .from_reader(io::stdin().lock())
            .context("failed to read point set from standard input");
    }

    loader
        .from_path(file)
        .with_context(|| format!("failed to load point set from {}", file.display()))
}

/// Writes the scan result, and the Desmos view if requested.
fn report<W: Write>(
    out: &mut W,
    points: &PointSet<i64>,
    outcome: &ScanOutcome<i64>,
    desmos: Option<DesmosFormatter>,
) -> io::Result<()> {
    writeln!(
        out,
        "Points: {} (labels: {})",
        points.len(),
        points.alphabet()
    )?;

    match outcome.result().boundary() {
        Some(boundary) => {
            writeln!(
                out,
                "Boundary: {} label {} at rank {}",
                boundary.point(),
                points.alphabet().symbol(boundary.label()),
                boundary.rank()
            )?;
            writeln!(out, "Radius: {:.6}", boundary.radius())?;
        }
        None => writeln!(out, "No valid solution")?,
    }

    if let Some(formatter) = desmos {
        writeln!(out)?;
        write!(out, "{}", formatter.format_result(points, outcome.result()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let points = match &cli.command {
        Commands::Scan { file, alphabet } => load(file, alphabet.as_deref())?,
        Commands::Random {
            seed,
            low,
            high,
            size,
            labels,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            let params = RandomParams::resolve(seed, *low, *high, *size, *labels)?;
            tracing::info!(
                seed = params.seed,
                low = params.low,
                high = params.high,
                size = params.size,
                labels = params.labels,
                "generating random point set"
            );
            params.generate()?
        }
    };

    let mut scanner = BoundaryScanner::preallocated(points.len(), points.num_labels());
    let outcome = scanner.scan(&points, &mut LogMonitor::new());
    tracing::debug!("{}", outcome);

    let stdout = io::stdout();
    let desmos = cli
        .desmos
        .then(|| DesmosFormatter::new().with_labels(cli.color_key));
    report(&mut stdout.lock(), &points, &outcome, desmos).context("failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use roundel_scan::monitor::no_op::NoOperationMonitor;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_with_global_flags() {
        let cli = Cli::try_parse_from(["roundel", "scan", "points.txt", "--desmos", "-v"]).unwrap();
        assert!(cli.desmos);
        assert!(cli.verbose);
        match cli.command {
            Commands::Scan { file, alphabet } => {
                assert_eq!(file, PathBuf::from("points.txt"));
                assert_eq!(alphabet, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_random_with_negative_bounds() {
        let cli = Cli::try_parse_from([
            "roundel", "random", "--seed", "7", "--low", "-5", "--high", "-2", "--labels", "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Random {
                seed,
                low,
                high,
                size,
                labels,
            } => {
                assert_eq!(seed, Some(7));
                assert_eq!(low, -5);
                assert_eq!(high, Some(-2));
                assert_eq!(size, None);
                assert_eq!(labels, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_resolve_draws_missing_values_deterministically() {
        let a = RandomParams::resolve(42, 1, None, None, 6).unwrap();
        let b = RandomParams::resolve(42, 1, None, None, 6).unwrap();
        assert_eq!(a, b);
        assert!((2..20).contains(&a.high));
        assert!((1..20).contains(&a.size));
    }

    #[test]
    fn test_resolve_keeps_given_values() {
        let params = RandomParams::resolve(0, -3, Some(8), Some(12), 4).unwrap();
        assert_eq!(
            params,
            RandomParams {
                seed: 0,
                low: -3,
                high: 8,
                size: 12,
                labels: 4
            }
        );
        assert_eq!(params.generate().unwrap().len(), 12);
    }

    #[test]
    fn test_resolve_handles_large_low() {
        let params = RandomParams::resolve(5, 50, None, Some(1), 6).unwrap();
        assert_eq!(params.high, 51);
    }

    #[test]
    fn test_resolve_rejects_label_counts() {
        assert!(RandomParams::resolve(0, 1, None, None, 0).is_err());
        assert!(RandomParams::resolve(0, 1, None, None, 27).is_err());
    }

    fn run_report(records: &[((i64, i64), char)], desmos: Option<DesmosFormatter>) -> String {
        let points =
            PointSet::from_records(LabelAlphabet::letters(2), records.iter().copied()).unwrap();
        let outcome = BoundaryScanner::new().scan(&points, &mut NoOperationMonitor::new());
        let mut out = Vec::new();
        report(&mut out, &points, &outcome, desmos).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_found() {
        let rendered = run_report(&[((0, 0), 'A'), ((1, 0), 'B'), ((0, 2), 'A')], None);
        assert_eq!(
            rendered,
            "Points: 3 (labels: {A, B})\nBoundary: (1, 0) label B at rank 1\nRadius: 1.000000\n"
        );
    }

    #[test]
    fn test_report_no_solution_with_desmos() {
        let rendered = run_report(&[((1, 2), 'A'), ((2, 1), 'A')], Some(DesmosFormatter::new()));
        assert_eq!(
            rendered,
            "Points: 2 (labels: {A, B})\nNo valid solution\n\n(1, 2)\n(2, 1)\n"
        );
    }

    #[test]
    fn test_report_desmos_with_color_key() {
        let rendered = run_report(
            &[((0, 0), 'A'), ((1, 0), 'B'), ((0, 2), 'A')],
            Some(DesmosFormatter::new().with_labels(true)),
        );
        assert_eq!(
            rendered,
            "Points: 3 (labels: {A, B})\nBoundary: (1, 0) label B at rank 1\nRadius: 1.000000\n\n\
             (0, 0)\n(1, 0)\n(0, 2)\nx^2 + y^2 = 1^2\n\nA: red\nB: blue\n"
        );
    }

    #[test]
    fn test_color_key_requires_desmos() {
        assert!(Cli::try_parse_from(["roundel", "scan", "points.txt", "--color-key"]).is_err());
        let cli =
            Cli::try_parse_from(["roundel", "scan", "points.txt", "--desmos", "--color-key"]).unwrap();
        assert!(cli.desmos && cli.color_key);
    }
}
