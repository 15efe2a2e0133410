use maze_core::Maze;
use rand::Rng;

use crate::frontier::Fifo;
use crate::result::SearchResult;
use crate::traversal::explore;

/// Breadth-first search from the maze's start to its goal.
///
/// Cells are expanded in arrival order, so the returned path is a shortest
/// one. Ties between equally short paths are broken by the neighbour
/// shuffle drawn from `rng`.
pub fn bfs<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> SearchResult {
    explore(maze, rng, Fifo::default(), |_| 0)
}
