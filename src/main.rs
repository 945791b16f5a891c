use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use novem::{
    generator, grid, loader,
    solver::{
        stats::{render_comparison, ComparisonRow},
        CspSolver, NaiveSolver, SearchConfig, SolveReport,
    },
    Result,
};

/// Solve 9x9 Sudoku puzzles with a CSP engine or a brute-force baseline.
#[derive(Debug, Parser)]
#[command(name = "novem", version, about)]
struct Cli {
    /// Use the naive backtracker instead of the CSP engine.
    #[arg(long)]
    naive: bool,

    /// Run AC-3 inference after each tentative assignment.
    #[arg(long)]
    inference: bool,

    /// Select variables by minimum remaining values.
    #[arg(long)]
    mrv: bool,

    /// Order candidate values least-constraining first.
    #[arg(long)]
    lcv: bool,

    /// Load the board from a file (9 lines of 9 digits, 0 = blank) instead
    /// of generating one.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Share of cells to blank out when generating a puzzle.
    #[arg(long, default_value_t = 0.6)]
    difficulty: f64,

    /// Seed for the puzzle generator; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Run the naive solver and all eight CSP configurations on the same
    /// board and print a comparison table.
    #[arg(long)]
    compare: bool,

    /// Emit reports as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let board = match &cli.file {
        Some(path) => loader::load_board(path)?,
        None => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            eprintln!("generated puzzle (difficulty {}, seed {seed})", cli.difficulty);
            generator::generate_seeded(cli.difficulty, seed)
        }
    };

    if cli.compare {
        return compare(board, cli.json);
    }

    let report = if cli.naive {
        NaiveSolver::new(board)?.solve()
    } else {
        let config = SearchConfig {
            inference: cli.inference,
            mrv: cli.mrv,
            lcv: cli.lcv,
        };
        CspSolver::new(board, config)?.solve()
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", grid::render_board(&report.original));
    match &report.solution {
        Some(solution) => {
            println!("{}", grid::render_board(solution));
            println!("{}", report.summary());
        }
        None => println!("{}", report.summary()),
    }
    Ok(())
}

fn compare(board: grid::Board, json: bool) -> Result<()> {
    let mut rows = Vec::new();

    let naive: SolveReport = NaiveSolver::new(board)?.solve();
    rows.push(ComparisonRow::new("naive", &naive));

    for config in SearchConfig::all() {
        let report = CspSolver::new(board, config)?.solve();
        rows.push(ComparisonRow::new(config.label(), &report));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", grid::render_board(&board));
        print!("{}", render_comparison(&rows));
    }
    Ok(())
}
