//! Polyomino Packing Feasibility Solver
//!
//! Reads a puzzle file containing a catalogue of piece shapes and a list of
//! rectangular regions, then reports per region whether all of its required
//! pieces fit without overlapping, plus an aggregate solvable count.
//! Regions are independent, so they are evaluated in parallel by default.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;

use giftpack::geometry::{all_orientations, Orientation};
use giftpack::solver::{solve_with_budget, Outcome, Verdict};
use giftpack::{parse_puzzle, Puzzle, Region};

/// Decides which regions can fit all of their required pieces.
#[derive(Parser)]
#[command(name = "giftpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the puzzle file (shape catalogue followed by region list).
    input: PathBuf,

    /// Give up on a region after this many search nodes and report it as
    /// unknown instead of searching exhaustively.
    #[arg(long)]
    node_budget: Option<u64>,

    /// Evaluate regions one at a time instead of in parallel.
    #[arg(long)]
    sequential: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let text = match fs::read_to_string(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("failed to read {}: {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let puzzle = match parse_puzzle(&text) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("failed to parse {}: {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "parsed {} shapes and {} regions",
        puzzle.shapes.len(),
        puzzle.regions.len()
    );

    let outcomes = evaluate(&puzzle, cli.node_budget, cli.sequential);
    println!("{}", report(&puzzle.regions, &outcomes));
    ExitCode::SUCCESS
}

/// Canonicalizes every shape once, then solves all regions against the
/// shared orientation table.
fn evaluate(puzzle: &Puzzle, node_budget: Option<u64>, sequential: bool) -> Vec<Outcome> {
    let orientations: Vec<Vec<Orientation>> =
        puzzle.shapes.iter().map(all_orientations).collect();

    let solve = |region: &Region| solve_with_budget(region, &orientations, node_budget);
    if sequential {
        puzzle.regions.iter().map(solve).collect()
    } else {
        puzzle.regions.par_iter().map(solve).collect()
    }
}

/// Formats the per-region verdicts and the final summary line.
fn report(regions: &[Region], outcomes: &[Outcome]) -> String {
    let mut lines = Vec::with_capacity(regions.len() + 1);

    let mut solvable = 0;
    let mut unknown = 0;
    for (index, (region, outcome)) in regions.iter().zip(outcomes).enumerate() {
        let verdict = match outcome.verdict {
            Verdict::Solvable => {
                solvable += 1;
                "solvable"
            }
            Verdict::Unsolvable => "not solvable",
            Verdict::Unknown => {
                unknown += 1;
                "unknown (search budget exhausted)"
            }
        };
        lines.push(format!(
            "region {}: {}x{} {}",
            index + 1,
            region.width,
            region.height,
            verdict
        ));
    }

    let mut summary = format!(
        "{} of {} regions can fit all of their pieces",
        solvable,
        regions.len()
    );
    if unknown > 0 {
        summary.push_str(&format!(" ({} unknown)", unknown));
    }
    lines.push(summary);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
0:
#

1:
##
##

1x1: 1 0
2x2: 0 1
2x2: 1 2
";

    #[test]
    fn test_report_snapshot() {
        let puzzle = parse_puzzle(SAMPLE).unwrap();
        let outcomes = evaluate(&puzzle, None, true);

        insta::assert_snapshot!(report(&puzzle.regions, &outcomes), @r"
        region 1: 1x1 solvable
        region 2: 2x2 solvable
        region 3: 2x2 not solvable
        2 of 3 regions can fit all of their pieces
        ");
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let puzzle = parse_puzzle(SAMPLE).unwrap();
        let parallel = evaluate(&puzzle, None, false);
        let sequential = evaluate(&puzzle, None, true);

        let verdicts = |outcomes: &[Outcome]| -> Vec<Verdict> {
            outcomes.iter().map(|o| o.verdict).collect()
        };
        assert_eq!(verdicts(&parallel), verdicts(&sequential));
    }

    #[test]
    fn test_report_counts_unknown_separately() {
        let puzzle = parse_puzzle(SAMPLE).unwrap();
        let outcomes = evaluate(&puzzle, Some(1), true);
        let report = report(&puzzle.regions, &outcomes);

        assert!(report.contains("unknown"));
        assert!(!report.contains("3 of 3"));
    }
}
