//! mazer: solve and generate grid mazes from the command line.

mod config;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_core::Maze;
use maze_gen::MapGen;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Cli, Command, Format, GenerateArgs, SolveConfig};
use crate::report::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve(args) => solve(&SolveConfig::from(args)),
        Command::Generate(args) => generate(&args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Apply the configured edits to `maze`, in the order toggles, start, goal.
fn apply_edits(maze: &mut Maze, cfg: &SolveConfig) -> Result<()> {
    for &p in &cfg.toggles {
        let now = maze.toggle_wall(p).with_context(|| format!("toggling {p}"))?;
        info!("toggled {p} to {:?}", now);
    }
    if let Some(p) = cfg.start {
        maze.set_start(p).with_context(|| format!("moving start to {p}"))?;
    }
    if let Some(p) = cfg.goal {
        maze.set_goal(p).with_context(|| format!("moving goal to {p}"))?;
    }
    Ok(())
}

fn solve(cfg: &SolveConfig) -> Result<()> {
    let mut maze = Maze::load(&cfg.maze)
        .with_context(|| format!("loading maze {}", cfg.maze.display()))?;
    apply_edits(&mut maze, cfg)?;
    info!(
        "solving {} ({}x{}) with seed {}",
        cfg.maze.display(),
        maze.rows(),
        maze.cols(),
        cfg.seed
    );

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let reports: Vec<Report> = cfg
        .algorithms
        .iter()
        .map(|&algo| Report::new(algo, &maze, algo.run(&maze, &mut rng)))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cfg.format {
        Format::Text => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                out.write_all(report.to_text(&maze).as_bytes())?;
            }
        }
        Format::Json => {
            if let [single] = reports.as_slice() {
                serde_json::to_writer_pretty(&mut out, single)?;
            } else {
                serde_json::to_writer_pretty(&mut out, &reports)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("generating {}x{} maze with seed {seed}", args.rows, args.cols);
    let mut mg = MapGen::new(StdRng::seed_from_u64(seed));
    let maze = mg.backtracker(args.rows, args.cols)?;

    match &args.output {
        Some(path) => maze
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?,
        None => io::stdout().lock().write_all(maze.to_string().as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Point;
    use maze_paths::Algorithm;

    fn config(toggles: Vec<Point>, start: Option<Point>, goal: Option<Point>) -> SolveConfig {
        SolveConfig {
            maze: "unused.txt".into(),
            algorithms: vec![Algorithm::Bfs],
            seed: 0,
            format: Format::Text,
            start,
            goal,
            toggles,
        }
    }

    #[test]
    fn edits_apply_in_order() {
        let mut maze = Maze::parse("S.#\n...\n#.G\n").unwrap();
        let cfg = config(
            vec![Point::new(0, 2), Point::new(1, 1)],
            Some(Point::new(1, 0)),
            Some(Point::new(0, 2)),
        );
        apply_edits(&mut maze, &cfg).unwrap();
        assert_eq!(maze.to_string(), "..G\nS#.\n#..\n");
    }

    #[test]
    fn out_of_bounds_edit_fails() {
        let mut maze = Maze::parse("SG").unwrap();
        let cfg = config(vec![Point::new(4, 4)], None, None);
        let err = apply_edits(&mut maze, &cfg).unwrap_err();
        assert!(format!("{err:#}").contains("out of bounds"));
    }
}
