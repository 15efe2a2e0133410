//! Perfect-maze generation with a randomised depth-first backtracker.
//!
//! The carver works on the odd-coordinate lattice: it starts from a random
//! odd interior cell and repeatedly jumps two cells in a shuffled direction,
//! knocking out the wall in between. Every carved cell ends up connected to
//! every other by exactly one route, so the goal is always reachable.

use std::collections::VecDeque;
use std::fmt;

use maze_core::{Grid, Maze, MazeError, Point, Tile};
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

/// Smallest accepted side length.
pub const MIN_SIZE: i32 = 5;

/// Two-cell jumps used by the carver.
const JUMPS: [Point; 4] = [
    Point::new(-2, 0),
    Point::new(2, 0),
    Point::new(0, -2),
    Point::new(0, 2),
];

/// Maze generator driven by a caller-supplied random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` perfect maze surrounded by walls.
    ///
    /// The start is placed on the free cell nearest the top-left corner and
    /// the goal on the free cell nearest the bottom-right one.
    pub fn backtracker(&mut self, rows: i32, cols: i32) -> Result<Maze, GenError> {
        if rows < MIN_SIZE || cols < MIN_SIZE {
            return Err(GenError::TooSmall { rows, cols });
        }
        let mut grid = Grid::new(rows, cols, Tile::Wall);
        let carved = self.carve(&mut grid);

        let too_small = GenError::TooSmall { rows, cols };
        let start = nearest_free(&grid, Point::new(1, 1)).ok_or(too_small.clone())?;
        grid.set(start, Tile::Start);
        let goal = nearest_free(&grid, Point::new(rows - 2, cols - 2)).ok_or(too_small)?;
        grid.set(goal, Tile::Goal);

        log::debug!("generated {rows}x{cols} maze: {carved} free cells, start {start}, goal {goal}");
        Ok(Maze::try_from(grid)?)
    }

    /// Carve passages into an all-wall grid. Returns the number of cells
    /// carved.
    fn carve(&mut self, grid: &mut Grid) -> usize {
        let (rows, cols) = (grid.rows(), grid.cols());
        let inside = |p: Point| p.row > 0 && p.row < rows - 1 && p.col > 0 && p.col < cols - 1;

        let first = Point::new(
            self.rng.random_range(0..(rows - 1) / 2) * 2 + 1,
            self.rng.random_range(0..(cols - 1) / 2) * 2 + 1,
        );
        grid.set(first, Tile::Free);
        let mut carved = 1;
        let mut stack = vec![first];
        let mut jumps = JUMPS;

        while let Some(&cur) = stack.last() {
            jumps.shuffle(&mut self.rng);
            let next = jumps
                .iter()
                .map(|&d| (cur + d, cur.shift(d.row / 2, d.col / 2)))
                .find(|&(to, _)| inside(to) && grid.at(to) == Some(Tile::Wall));
            match next {
                Some((to, between)) => {
                    grid.set(between, Tile::Free);
                    grid.set(to, Tile::Free);
                    carved += 2;
                    stack.push(to);
                }
                None => {
                    stack.pop();
                }
            }
        }
        carved
    }
}

/// The free cell closest to `from` in breadth-first order over the whole
/// grid, walls included.
fn nearest_free(grid: &Grid, from: Point) -> Option<Point> {
    let bounds = grid.bounds();
    let mut seen = vec![false; bounds.len()];
    let mut queue = VecDeque::from([from]);
    seen[bounds.idx(from)?] = true;
    while let Some(p) = queue.pop_front() {
        if grid.at(p) == Some(Tile::Free) {
            return Some(p);
        }
        for n in p.neighbors_4() {
            let Some(i) = bounds.idx(n) else {
                continue;
            };
            if !seen[i] {
                seen[i] = true;
                queue.push_back(n);
            }
        }
    }
    None
}

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone)]
pub enum GenError {
    /// Either side is below [`MIN_SIZE`].
    TooSmall { rows: i32, cols: i32 },
    /// The generated grid failed maze validation.
    Invalid(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { rows, cols } => write!(
                f,
                "mapgen: {rows}x{cols} is too small (minimum {MIN_SIZE}x{MIN_SIZE})"
            ),
            Self::Invalid(msg) => write!(f, "mapgen: {msg}"),
        }
    }
}

impl std::error::Error for GenError {}

impl From<MazeError> for GenError {
    fn from(e: MazeError) -> Self {
        Self::Invalid(e.to_string())
    }
}
