//! Bloxorz Solver
//!
//! Rolls a 1x1x2 block across a grid map until it stands upright on the
//! target cell. Finds the shortest route by breadth-first search and can show
//! it step by step in text or in an interactive 3D viewer.

mod visualization;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use bloxorz::levels::{self, LEVELS};
use bloxorz::solver::{self, SolveOptions, SolveOutcome};
use bloxorz::{persistence, BlockState, Map, Solution};

/// Solves block-rolling puzzles and visualizes the solutions.
#[derive(Parser)]
#[command(name = "bloxorz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search details (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a map and print the move string.
    Solve {
        #[command(flatten)]
        source: MapSource,
        /// Give up after expanding this many states.
        #[arg(long)]
        max_nodes: Option<usize>,
        /// Print the map after every move.
        #[arg(long)]
        trace: bool,
        /// Also write the move string to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that a move string solves a map.
    Verify {
        #[command(flatten)]
        source: MapSource,
        /// Moves as a string of R, L, D and U.
        moves: String,
    },
    /// List the built-in levels.
    Levels,
    /// Solve a map and step through the solution in a 3D viewer.
    Display {
        #[command(flatten)]
        source: MapSource,
    },
}

/// Where to read the map from. Defaults to the first built-in level.
#[derive(Args)]
struct MapSource {
    /// Map file with one row per line.
    #[arg(short, long, conflicts_with = "level")]
    map: Option<PathBuf>,
    /// Index of a built-in level.
    #[arg(short, long)]
    level: Option<usize>,
}

impl MapSource {
    fn load(&self) -> Result<Map, String> {
        match (&self.map, self.level) {
            (Some(path), _) => persistence::load_map(path)
                .map_err(|e| format!("Failed to load {}: {}", path.display(), e)),
            (None, index) => {
                let index = index.unwrap_or(0);
                let level = levels::level(index).ok_or_else(|| {
                    format!("No level {} (there are {})", index, LEVELS.len())
                })?;
                level
                    .map()
                    .map_err(|e| format!("Level {} is broken: {}", level.name, e))
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Some(Command::Solve {
            source,
            max_nodes,
            trace,
            output,
        }) => run_solve(&source, max_nodes, trace, output),
        Some(Command::Verify { source, moves }) => run_verify(&source, &moves),
        Some(Command::Levels) => {
            run_levels();
            Ok(())
        }
        Some(Command::Display { source }) => run_display(&source),
        None => {
            // default: solve every built-in level
            run_all_levels();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

/// Solves one map and prints the result.
fn run_solve(
    source: &MapSource,
    max_nodes: Option<usize>,
    trace: bool,
    output: Option<PathBuf>,
) -> Result<(), String> {
    let map = source.load()?;
    let options = SolveOptions { max_nodes };
    let (outcome, stats) = solver::solve_with_stats(&map, map.start(), map.target(), &options);

    match outcome {
        SolveOutcome::Solved(solution) => {
            if trace {
                println!("{}", format_trace(&map, &solution));
            }
            println!("{}", solution);
            println!(
                "{} moves, {} states explored",
                solution.len(),
                stats.explored
            );
            if let Some(path) = output {
                persistence::save_solution(&path, &solution)
                    .map_err(|e| format!("Failed to save solution: {}", e))?;
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
        SolveOutcome::NotFound => {
            println!("No solution ({} states explored)", stats.explored);
            Ok(())
        }
        SolveOutcome::BudgetExhausted { explored } => Err(format!(
            "Gave up after exploring {} states; raise --max-nodes",
            explored
        )),
    }
}

/// Replays a move string and reports whether it reaches the target.
fn run_verify(source: &MapSource, moves: &str) -> Result<(), String> {
    let map = source.load()?;
    let solution: Solution = moves.parse().map_err(|e| format!("{}", e))?;

    match solver::replay(&map, BlockState::standing(map.start()), &solution.moves) {
        Ok(end) if end.is_standing_on(map.target()) => {
            println!("Valid: {} moves", solution.len());
            Ok(())
        }
        Ok(end) => Err(format!(
            "Moves are legal but end at {:?} {:?}",
            end.anchor, end.orientation
        )),
        Err(e) => Err(format!("Invalid: {}", e)),
    }
}

/// Prints the built-in levels.
fn run_levels() {
    for (index, level) in LEVELS.iter().enumerate() {
        let (width, height) = (level.rows[0].len(), level.rows.len());
        println!(
            "{:>2}  {:<16} {}x{}  reference {} moves",
            index,
            level.name,
            width,
            height,
            level.reference.len()
        );
    }
}

/// Solves every built-in level and prints the move strings.
fn run_all_levels() {
    for level in LEVELS {
        let outcome = level
            .map()
            .map(|map| solver::solve_map(&map, &SolveOptions::default()));
        match outcome {
            Ok(SolveOutcome::Solved(solution)) => println!("{}: {}", level.name, solution),
            Ok(_) => println!("{}: no solution", level.name),
            Err(e) => eprintln!("{}: {}", level.name, e),
        }
    }
}

/// Solves a map and opens the viewer on the solution.
fn run_display(source: &MapSource) -> Result<(), String> {
    let map = source.load()?;
    match solver::solve_map(&map, &SolveOptions::default()) {
        SolveOutcome::Solved(solution) => {
            println!("{}", solution);
            println!("Controls: Left/Right step through moves, R reset");
            visualization::display(map, solution);
            Ok(())
        }
        _ => Err("No solution to display".to_string()),
    }
}

/// Renders the map before the first move and after every move.
fn format_trace(map: &Map, solution: &Solution) -> String {
    let mut state = BlockState::standing(map.start());
    let mut output = format!("start:\n{}\n", map.render(Some(&state)));

    for (index, &direction) in solution.moves.iter().enumerate() {
        state = state.step(direction);
        output.push_str(&format!(
            "\n{} {}:\n{}\n",
            index + 1,
            direction,
            map.render(Some(&state))
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_snapshot() {
        let map = Map::parse(&["B11X"]).unwrap();
        let solution: Solution = "RR".parse().unwrap();

        insta::assert_snapshot!(format_trace(&map, &solution).trim_end(), @r"
        start:
        #11X

        1 R:
        B##X

        2 R:
        B11#
        ");
    }

    #[test]
    fn test_map_source_defaults_to_first_level() {
        let source = MapSource {
            map: None,
            level: None,
        };
        assert_eq!(source.load().unwrap(), LEVELS[0].map().unwrap());
    }

    #[test]
    fn test_map_source_rejects_unknown_level() {
        let source = MapSource {
            map: None,
            level: Some(LEVELS.len()),
        };
        assert!(source.load().is_err());
    }

    #[test]
    fn test_cli_parses_solve_flags() {
        let cli = Cli::try_parse_from(["bloxorz", "solve", "--level", "2", "--max-nodes", "50"])
            .unwrap();
        match cli.command {
            Some(Command::Solve {
                source, max_nodes, ..
            }) => {
                assert_eq!(source.level, Some(2));
                assert_eq!(max_nodes, Some(50));
            }
            _ => panic!("expected solve command"),
        }
    }
}
