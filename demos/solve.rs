//! Command-line driver for the stepwise solver.
//!
//! Seeds a puzzle, then steps until the grid is solved or the deadlock/reset
//! budget is exhausted, printing the grid and the propagation statistics.
//!
//! ```text
//! cargo run --example solve -- --presets 24 --seed 7
//! ```

use clap::Parser;
use nonet::{
    error::Result,
    grid::{render_stats_table, Grid},
};

#[derive(Parser, Debug)]
#[command(about = "Generate and stepwise-solve a Sudoku grid")]
struct Args {
    /// Number of randomly seeded preset cells.
    #[arg(long, default_value_t = 24)]
    presets: usize,

    /// Seed for the random source; omit for a fresh puzzle each run.
    #[arg(long)]
    seed: Option<u64>,

    /// How many deadlock recoveries to attempt before giving up.
    #[arg(long, default_value_t = 64)]
    max_resets: u64,

    /// Dump the final cell states as JSON instead of a rendered board.
    #[arg(long)]
    json: bool,
}

fn render_board(grid: &Grid) -> String {
    let mut out = String::new();
    for (i, cell) in grid.iter().enumerate() {
        let mark = if cell.is_committed() {
            cell.string_value()
        } else if cell.is_empty() {
            "!".to_string()
        } else {
            ".".to_string()
        };
        out.push_str(&mark);
        if (i + 1) % 9 == 0 {
            out.push('\n');
            if (i + 1) % 27 == 0 && i + 1 < 81 {
                out.push_str("------+-------+------\n");
            }
        } else if (i + 1) % 3 == 0 {
            out.push_str(" | ");
        } else {
            out.push(' ');
        }
    }
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut grid = match args.seed {
        Some(seed) => Grid::from_seed(seed),
        None => Grid::new(),
    };

    grid.initialize(args.presets)?;

    let mut resets = 0;
    while !grid.solved() {
        if grid.deadlock() {
            if resets >= args.max_resets {
                break;
            }
            resets += 1;
            grid.reset();
            continue;
        }
        grid.set_next_cell()?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid.snapshot()).expect("serializable"));
    } else {
        println!("{}", render_board(&grid));
        println!("{}", render_stats_table(grid.stats()));
        let outcome = if grid.solved() { "solved" } else { "gave up" };
        println!(
            "{outcome}: {} steps, {} resets, {} deadlocks observed",
            grid.stats().steps,
            grid.stats().resets,
            grid.deadlock_count(),
        );
    }

    Ok(())
}
