use maze_core::Maze;
use rand::Rng;

use crate::distance::manhattan;
use crate::frontier::MinPriority;
use crate::result::SearchResult;
use crate::traversal::explore;

/// Greedy best-first search: always expand the discovered cell closest to
/// the goal by Manhattan distance.
///
/// Cells are never revisited, so the path found need not be shortest.
pub fn greedy<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> SearchResult {
    let goal = maze.goal();
    explore(maze, rng, MinPriority::default(), |p| manhattan(p, goal))
}
