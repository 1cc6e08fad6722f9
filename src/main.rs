//! # npuzzle
//!
//! `npuzzle` is a command-line solver for the sliding-tile (N-puzzle)
//! problem. It takes a scrambled n×n board and searches for a sequence of
//! blank moves reaching the ordered goal configuration `0, 1, .., n*n - 1`.
//!
//! Three search strategies are available behind one traversal loop:
//!
//! 1.  **bfs** — breadth-first search; optimal move count, frontier memory
//!     grows exponentially with depth.
//! 2.  **dfs** — depth-first search; light on frontier memory, no optimality
//!     guarantee.
//! 3.  **ast** — A* keyed on Manhattan distance plus path cost; optimal, and
//!     typically expands far fewer nodes than breadth-first.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a board with A*; the report lands in output.txt
//! npuzzle solve ast 1,2,5,3,4,0,6,7,8
//!
//! # Breadth-first, with the intermediate boards printed
//! npuzzle solve bfs 1,2,5,3,4,0,6,7,8 --print-states
//!
//! # Produce a random solvable 4x4 board to feed back into solve
//! npuzzle scramble 4
//!
//! # Generate shell completions
//! npuzzle completions zsh
//! ```
//!
//! On success the solver writes a seven-field report (move path, path cost,
//! nodes expanded, search depth, max search depth, running time, peak memory
//! delta) to the output file and prints a statistics table; when the frontier
//! exhausts without reaching the goal there is no report, only a
//! "No solution found" line. The completion time is printed either way.

use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use npuzzle::puzzle::board::Board;
use npuzzle::puzzle::heuristic::manhattan;
use npuzzle::puzzle::input::parse_board;
use npuzzle::puzzle::moves::Direction;
use npuzzle::puzzle::report::Report;
use npuzzle::puzzle::scramble::random_board;
use npuzzle::puzzle::search::{SearchStats, Solution, Strategy};
use std::path::PathBuf;

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// statistics sampled during the search.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the npuzzle application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "npuzzle", version, about = "A configurable N-puzzle solver")]
struct Cli {
    /// Specifies the subcommand to execute.
    #[clap(subcommand)]
    command: Commands,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a scrambled board with the chosen strategy.
    Solve {
        /// Search strategy: one of "bfs", "dfs" or "ast" (case-insensitive).
        strategy: Strategy,

        /// The initial board as comma-delimited tiles, e.g. "1,2,5,3,4,0,6,7,8".
        /// The board size is the integer square root of the tile count.
        tiles: String,

        /// Where the results report is written on success.
        #[arg(short, long, default_value = "output.txt")]
        output: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate a random solvable board, printed as a comma-delimited tile
    /// list usable as the `solve` input.
    Scramble {
        /// Side length of the board.
        #[arg(default_value_t = 3)]
        size: usize,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across subcommands.
#[derive(Args, Debug, Default)]
struct CommonOptions {
    /// Enable debug output, printing the parsed board and its heuristic value
    /// before the search runs.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Enable verification of the found solution: the move path is replayed
    /// from the input board and must land on the goal.
    #[arg(short, long, default_value_t = true)]
    verify: bool,

    /// Enable printing of search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Print every intermediate board while replaying the solution path.
    #[arg(short, long, default_value_t = false)]
    print_states: bool,
}

/// Main entry point: parses arguments and dispatches to the subcommands.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            strategy,
            tiles,
            output,
            common,
        } => solve_and_report(strategy, &tiles, &output, &common),

        Commands::Scramble { size, common } => {
            let board = random_board(size).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });

            if common.debug {
                println!("{board}");
            }
            println!("{}", board.tiles().iter().join(","));
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }
}

/// Parses the board, runs the chosen strategy, and reports the results:
/// verification replay, the output-file record, the statistics table, and the
/// completion-time line that is printed regardless of the outcome.
fn solve_and_report(strategy: Strategy, tiles: &str, output: &PathBuf, common: &CommonOptions) {
    let start_time = std::time::Instant::now();

    let board = parse_board(tiles).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    if common.debug {
        println!("Initial board:\n{board}");
        println!("Size: {}", board.size());
        println!("Manhattan distance: {}", manhattan(&board));
    }

    println!("Solving with: {strategy}");
    let (solution, stats) = strategy.run(board.clone());

    if let Some(solution) = solution {
        if common.verify {
            verify_solution(&board, &solution);
        }

        let report = Report {
            solution: &solution,
            stats: &stats,
        };
        report
            .write_to(output)
            .unwrap_or_else(|e| panic!("Unable to write file {}: {}", output.display(), e));

        if common.stats {
            print_stats(strategy, &solution, &stats);
        }

        if common.print_states {
            replay_states(&board, &solution.path);
        }
    } else {
        println!("No solution found");
    }

    println!(
        "Program completed in {:.3} second(s)",
        start_time.elapsed().as_secs_f64()
    );
}

/// Replays the move path from the initial board and checks it reaches the
/// goal. Prints the verdict, and panics if the replay fails.
fn verify_solution(initial: &Board, solution: &Solution) {
    let mut board = initial.clone();
    for &direction in &solution.path {
        board = board
            .slide(direction)
            .unwrap_or_else(|| panic!("illegal move {direction} in solution path"));
    }

    let ok = board.is_goal();
    println!("Verified: {ok:?}");
    if !ok {
        panic!("Solution failed verification!");
    }
}

/// Prints every board along the solution path, one move at a time.
fn replay_states(initial: &Board, path: &[Direction]) {
    let mut board = initial.clone();
    println!("{board}");
    for &direction in path {
        if let Some(next) = board.slide(direction) {
            board = next;
            println!("{direction}\n{board}");
        }
    }
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {:<28} {:>18}  |", label, value);
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {:<20} {:>12} ({:>9.0}/sec)  |", label, value, rate);
}

/// Prints a summary of the search statistics.
fn print_stats(strategy: Strategy, solution: &Solution, stats: &SearchStats) {
    let elapsed_secs = stats.running_time.as_secs_f64();

    println!("\n========================[ Search Statistics ]========================");
    stat_line("Strategy", strategy);
    stat_line("Path cost", solution.cost);
    stat_line_with_rate("Nodes expanded", stats.nodes_expanded, elapsed_secs);
    stat_line_with_rate("Nodes generated", stats.nodes_generated, elapsed_secs);
    stat_line("Max search depth", stats.max_search_depth);
    stat_line("Peak frontier size", stats.peak_frontier);
    stat_line("Memory delta (MiB)", format!("{:.2}", stats.max_ram_usage));
    stat_line("Search time (s)", format!("{:.3}", elapsed_secs));
    println!("=====================================================================");
}
