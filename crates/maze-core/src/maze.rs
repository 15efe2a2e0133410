//! The [`Maze`] type and its text encoding.
//!
//! A maze is written one row per line, one character per cell:
//!
//! | char | meaning |
//! |------|---------|
//! | `#`  | wall    |
//! | `.`  | free    |
//! | `S`  | start   |
//! | `G`  | goal    |
//!
//! Every line must have the width of the first one, and exactly one `S` and
//! one `G` must appear. Lines are taken verbatim: no trimming is applied, so
//! a stray space or `\r` is reported as an invalid character.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::geom::{Point, Range};
use crate::grid::{Grid, Tile};

/// A validated maze: a [`Grid`] with exactly one start and one goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Point,
    goal: Point,
    trailing_newline: bool,
}

impl Maze {
    /// Parse a maze from its text encoding.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let (body, trailing_newline) = match s.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (s, false),
        };
        if body.is_empty() {
            return Err(MazeError::Empty);
        }

        let mut rows: Vec<Vec<Tile>> = Vec::new();
        let mut width: Option<usize> = None;
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        for (r, line) in body.split('\n').enumerate() {
            let mut row = Vec::with_capacity(width.unwrap_or(line.len()));
            for (c, ch) in line.chars().enumerate() {
                let pos = Point::new(r as i32, c as i32);
                let tile = Tile::from_char(ch).ok_or(MazeError::InvalidRune { ch, pos })?;
                match tile {
                    Tile::Start => {
                        if let Some(first) = start {
                            return Err(MazeError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                    }
                    Tile::Goal => {
                        if let Some(first) = goal {
                            return Err(MazeError::DuplicateGoal { first, second: pos });
                        }
                        goal = Some(pos);
                    }
                    Tile::Free | Tile::Wall => {}
                }
                row.push(tile);
            }
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(MazeError::InconsistentSize {
                        row: r as i32,
                        expected: w,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let goal = goal.ok_or(MazeError::MissingGoal)?;
        let grid = Grid::from_rows(rows);
        log::debug!(
            "parsed {}x{} maze, start {start}, goal {goal}",
            grid.rows(),
            grid.cols()
        );
        Ok(Self {
            grid,
            start,
            goal,
            trailing_newline,
        })
    }

    /// Read and parse a maze file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        log::debug!("loading maze from {}", path.display());
        Self::parse(&text)
    }

    /// Write the maze's text encoding to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MazeError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies inside the maze.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.grid.contains(p)
    }

    /// Whether `p` is a wall. Callers bounds-check first; outside the maze
    /// this answers `false`.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.grid.at(p) == Some(Tile::Wall)
    }

    /// Whether a search may step onto `p`: inside the maze and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(Tile::is_passable)
    }

    /// Row-major snapshot of the text encoding, one string per row.
    pub fn grid_rows(&self) -> Vec<String> {
        (0..self.rows())
            .map(|r| self.grid.row(r).iter().map(|t| t.ch()).collect())
            .collect()
    }

    /// The text encoding with every free cell of `path` drawn as `*`.
    ///
    /// Start, goal and walls are never overdrawn.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut rows: Vec<Vec<char>> = self
            .grid_rows()
            .into_iter()
            .map(|row| row.chars().collect())
            .collect();
        for &p in path {
            if self.grid.at(p) == Some(Tile::Free) {
                rows[p.row as usize][p.col as usize] = '*';
            }
        }
        let mut out = rows
            .into_iter()
            .map(String::from_iter)
            .collect::<Vec<_>>()
            .join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Flip a free cell to a wall or a wall to a free cell.
    ///
    /// Start and goal are left unchanged. Returns the tile now at `p`.
    pub fn toggle_wall(&mut self, p: Point) -> Result<Tile, MazeError> {
        let tile = self.grid.at(p).ok_or(MazeError::OutOfBounds(p))?;
        let next = match tile {
            Tile::Free => Tile::Wall,
            Tile::Wall => Tile::Free,
            other => other,
        };
        self.grid.set(p, next);
        Ok(next)
    }

    /// Move the start to `p`. The old start becomes a free cell; a wall at
    /// `p` is replaced.
    pub fn set_start(&mut self, p: Point) -> Result<(), MazeError> {
        let tile = self.grid.at(p).ok_or(MazeError::OutOfBounds(p))?;
        if tile == Tile::Goal {
            return Err(MazeError::Occupied { pos: p, tile });
        }
        self.grid.set(self.start, Tile::Free);
        self.grid.set(p, Tile::Start);
        self.start = p;
        Ok(())
    }

    /// Move the goal to `p`. The old goal becomes a free cell; a wall at `p`
    /// is replaced.
    pub fn set_goal(&mut self, p: Point) -> Result<(), MazeError> {
        let tile = self.grid.at(p).ok_or(MazeError::OutOfBounds(p))?;
        if tile == Tile::Start {
            return Err(MazeError::Occupied { pos: p, tile });
        }
        self.grid.set(self.goal, Tile::Free);
        self.grid.set(p, Tile::Goal);
        self.goal = p;
        Ok(())
    }
}

impl TryFrom<Grid> for Maze {
    type Error = MazeError;

    /// Validate a grid built in memory, e.g. by a generator.
    fn try_from(grid: Grid) -> Result<Self, MazeError> {
        let mut start = None;
        let mut goal = None;
        for (p, t) in grid.iter() {
            match t {
                Tile::Start => match start {
                    Some(first) => return Err(MazeError::DuplicateStart { first, second: p }),
                    None => start = Some(p),
                },
                Tile::Goal => match goal {
                    Some(first) => return Err(MazeError::DuplicateGoal { first, second: p }),
                    None => goal = Some(p),
                },
                _ => {}
            }
        }
        if grid.bounds().is_empty() {
            return Err(MazeError::Empty);
        }
        Ok(Self {
            start: start.ok_or(MazeError::MissingStart)?,
            goal: goal.ok_or(MazeError::MissingGoal)?,
            grid,
            trailing_newline: true,
        })
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, MazeError> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for t in self.grid.row(r) {
                write!(f, "{}", t.ch())?;
            }
        }
        if self.trailing_newline {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MazeError
// ---------------------------------------------------------------------------

/// Errors raised while loading or editing a maze.
#[derive(Debug)]
pub enum MazeError {
    /// The input contained no cells.
    Empty,
    /// A character outside `#.SG` was found.
    InvalidRune { ch: char, pos: Point },
    /// A row's width differs from the first row's.
    InconsistentSize {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// No `S` cell.
    MissingStart,
    /// No `G` cell.
    MissingGoal,
    /// More than one `S` cell.
    DuplicateStart { first: Point, second: Point },
    /// More than one `G` cell.
    DuplicateGoal { first: Point, second: Point },
    /// An edit targeted a cell outside the maze.
    OutOfBounds(Point),
    /// An endpoint was moved onto the other endpoint.
    Occupied { pos: Point, tile: Tile },
    /// Reading or writing a maze file failed.
    Io(io::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze: empty input"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "maze: invalid character {ch:?} at {pos}")
            }
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has width {found}, expected {expected}"
            ),
            Self::MissingStart => f.write_str("maze: no start cell 'S'"),
            Self::MissingGoal => f.write_str("maze: no goal cell 'G'"),
            Self::DuplicateStart { first, second } => {
                write!(f, "maze: start cell at both {first} and {second}")
            }
            Self::DuplicateGoal { first, second } => {
                write!(f, "maze: goal cell at both {first} and {second}")
            }
            Self::OutOfBounds(p) => write!(f, "maze: {p} is out of bounds"),
            Self::Occupied { pos, tile } => {
                write!(f, "maze: {pos} is occupied by {:?}", tile)
            }
            Self::Io(e) => write!(f, "maze: {e}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MazeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
