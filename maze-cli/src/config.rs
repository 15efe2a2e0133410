//! Command-line arguments and the run configuration derived from them.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use maze_core::Point;
use maze_paths::{Algorithm, ParseAlgorithmError};

/// Solve and generate grid mazes.
#[derive(Parser, Debug)]
#[command(name = "mazer", author, version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins
    /// when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search a maze file with one or more algorithms
    Solve(SolveArgs),
    /// Write a random perfect maze
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Maze text file (`#` wall, `.` free, `S` start, `G` goal)
    pub maze: PathBuf,

    /// Algorithm to run: bfs, dfs, greedy, astar or all. Repeatable
    #[arg(short, long = "algo", value_parser = parse_selector, default_value = "all")]
    pub algos: Vec<Selector>,

    /// Seed for the neighbour shuffle; random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Move the start to ROW,COL before searching
    #[arg(long, value_parser = parse_point, value_name = "ROW,COL")]
    pub start: Option<Point>,

    /// Move the goal to ROW,COL before searching
    #[arg(long, value_parser = parse_point, value_name = "ROW,COL")]
    pub goal: Option<Point>,

    /// Flip the wall at ROW,COL before searching. Repeatable
    #[arg(long, value_parser = parse_point, value_name = "ROW,COL")]
    pub toggle: Vec<Point>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of rows
    #[arg(short, long, default_value_t = 15)]
    pub rows: i32,

    /// Number of columns
    #[arg(short, long, default_value_t = 15)]
    pub cols: i32,

    /// Seed for the carver; random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Destination file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// How search results are printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// The maze with the path drawn as `*`, plus counts
    Text,
    /// `{algorithm, found, steps, grid, visited, path}` objects
    Json,
}

/// A `--algo` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    All,
    One(Algorithm),
}

fn parse_selector(s: &str) -> Result<Selector, ParseAlgorithmError> {
    if s == "all" {
        return Ok(Selector::All);
    }
    s.parse().map(Selector::One)
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = r.trim().parse().map_err(|e| format!("bad row {r:?}: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("bad column {c:?}: {e}"))?;
    Ok(Point::new(row, col))
}

/// Everything a `solve` run needs, with defaults resolved.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub maze: PathBuf,
    pub algorithms: Vec<Algorithm>,
    pub seed: u64,
    pub format: Format,
    pub start: Option<Point>,
    pub goal: Option<Point>,
    pub toggles: Vec<Point>,
}

impl From<SolveArgs> for SolveConfig {
    fn from(args: SolveArgs) -> Self {
        let mut algorithms = Vec::new();
        for sel in args.algos {
            let picked: &[Algorithm] = match &sel {
                Selector::All => &Algorithm::ALL,
                Selector::One(a) => std::slice::from_ref(a),
            };
            for &a in picked {
                if !algorithms.contains(&a) {
                    algorithms.push(a);
                }
            }
        }
        Self {
            maze: args.maze,
            algorithms,
            seed: args.seed.unwrap_or_else(rand::random),
            format: args.format,
            start: args.start,
            goal: args.goal,
            toggles: args.toggle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_config(argv: &[&str]) -> SolveConfig {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Command::Solve(args) => args.into(),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn defaults_run_every_algorithm() {
        let cfg = solve_config(&["mazer", "solve", "m.txt", "--seed", "7"]);
        assert_eq!(cfg.algorithms, Algorithm::ALL.to_vec());
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.format, Format::Text);
        assert!(cfg.toggles.is_empty());
    }

    #[test]
    fn selectors_dedupe_in_order() {
        let cfg = solve_config(&[
            "mazer", "solve", "m.txt", "-a", "astar", "-a", "bfs", "-a", "astar", "--format",
            "json",
        ]);
        assert_eq!(cfg.algorithms, vec![Algorithm::Astar, Algorithm::Bfs]);
        assert_eq!(cfg.format, Format::Json);
    }

    #[test]
    fn unknown_algorithm_is_a_usage_error() {
        assert!(Cli::try_parse_from(["mazer", "solve", "m.txt", "-a", "dijkstra"]).is_err());
    }

    #[test]
    fn endpoint_overrides_and_toggles() {
        let cfg = solve_config(&[
            "mazer", "solve", "m.txt", "--start", "1,2", "--goal", "3, 4", "--toggle", "0,0",
            "--toggle", "2,2",
        ]);
        assert_eq!(cfg.start, Some(Point::new(1, 2)));
        assert_eq!(cfg.goal, Some(Point::new(3, 4)));
        assert_eq!(cfg.toggles, vec![Point::new(0, 0), Point::new(2, 2)]);
    }

    #[test]
    fn bad_points_are_rejected() {
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,1").is_err());
        assert_eq!(parse_point(" 4,5"), Ok(Point::new(4, 5)));
    }

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["mazer", "-v", "generate", "--rows", "9"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Generate(g) => {
                assert_eq!((g.rows, g.cols), (9, 15));
                assert!(g.output.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
