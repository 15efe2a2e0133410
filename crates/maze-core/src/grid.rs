//! The [`Grid`] type: a rectangular array of [`Tile`]s.
//!
//! Unlike a view over shared storage, a `Grid` owns its cells: a search
//! borrows it immutably and edits go through `&mut`, so a grid can be read
//! from several threads at once.

use crate::geom::{Point, Range, RangeIter};

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// The state of a single maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Free,
    Wall,
    Start,
    Goal,
}

impl Tile {
    /// Every character the text encoding accepts.
    pub const RUNES: &'static str = "#.SG";

    /// Decode a character of the text encoding.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }

    /// Encode as a character of the text encoding.
    #[inline]
    pub const fn ch(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    /// Whether a search may step onto this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A row-major grid of [`Tile`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Tile>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with `tile`.
    pub fn new(rows: i32, cols: i32, tile: Tile) -> Self {
        let bounds = Range::new(rows, cols);
        Self {
            cells: vec![tile; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from already-validated rows of equal length.
    pub(crate) fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let bounds = Range::new(rows.len() as i32, cols as i32);
        let cells: Vec<Tile> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), bounds.len());
        Self { cells, bounds }
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Read the tile at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.idx(p).map(|i| self.cells[i])
    }

    /// Write the tile at `p`. Returns `false` (and does nothing) outside the
    /// grid.
    #[inline]
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        match self.bounds.idx(p) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.cells.fill(tile);
    }

    /// Count the cells equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// The tiles of row `row`, or an empty slice outside the grid.
    pub fn row(&self, row: i32) -> &[Tile] {
        if row < 0 || row >= self.rows() {
            return &[];
        }
        let w = self.cols() as usize;
        let start = row as usize * w;
        &self.cells[start..start + w]
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

/// Iterator over `(Point, Tile)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Tile);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.grid.at(p).map(|t| (p, t))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
