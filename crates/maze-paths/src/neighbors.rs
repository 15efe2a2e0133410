use maze_core::{Maze, Point};
use rand::Rng;
use rand::seq::SliceRandom;

/// Cached neighbour enumeration shared by every search strategy.
///
/// Each call yields the passable 4-directional neighbours of a cell in a
/// freshly shuffled order, so repeated searches over one maze may explore
/// ties differently.
pub struct Neighbors {
    dirs: [Point; 4],
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            dirs: Point::CARDINALS,
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the in-bounds, non-wall cardinal neighbours of `p` in a random
    /// order drawn from `rng`.
    pub fn shuffled<R: Rng + ?Sized>(&mut self, maze: &Maze, p: Point, rng: &mut R) -> &[Point] {
        self.buf.clear();
        self.dirs.shuffle(rng);
        for d in self.dirs {
            let n = p + d;
            if maze.is_passable(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
