//! Rendering search results for the terminal or as JSON.

use std::fmt::Write as _;

use maze_core::{Maze, Point};
use maze_paths::{Algorithm, SearchResult};
use serde::Serialize;

/// One algorithm's outcome in the shape front ends consume.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub algorithm: Algorithm,
    pub found: bool,
    pub steps: Option<usize>,
    /// Row-major snapshot of the maze searched.
    pub grid: Vec<String>,
    pub visited: Vec<Point>,
    pub path: Vec<Point>,
}

impl Report {
    pub fn new(algorithm: Algorithm, maze: &Maze, result: SearchResult) -> Self {
        Self {
            algorithm,
            found: result.found,
            steps: result.steps(),
            grid: maze.grid_rows(),
            visited: result.visited_order,
            path: result.path,
        }
    }

    /// Header line plus the maze with the path drawn in.
    pub fn to_text(&self, maze: &Maze) -> String {
        let mut out = String::new();
        match self.steps {
            Some(steps) => {
                let _ = writeln!(
                    out,
                    "{}: goal reached in {steps} steps, {} cells expanded",
                    self.algorithm,
                    self.visited.len()
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{}: no path, {} cells expanded",
                    self.algorithm,
                    self.visited.len()
                );
            }
        }
        out.push_str(&maze.render_path(&self.path));
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
