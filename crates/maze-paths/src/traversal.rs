//! The shared expansion loop for strategies that never revisit a cell.

use maze_core::{Maze, Point, Range};
use rand::Rng;

use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::result::{ParentMap, SearchResult};

/// Per-search visited flags, one per cell.
#[derive(Debug, Clone)]
pub(crate) struct Visited {
    bounds: Range,
    seen: Vec<bool>,
}

impl Visited {
    pub(crate) fn new(bounds: Range) -> Self {
        Self {
            bounds,
            seen: vec![false; bounds.len()],
        }
    }

    /// Mark `p`. Returns `true` if it was not marked before; points outside
    /// the range are never marked.
    #[inline]
    pub(crate) fn mark(&mut self, p: Point) -> bool {
        let Some(i) = self.bounds.idx(p) else {
            return false;
        };
        !std::mem::replace(&mut self.seen[i], true)
    }
}

/// Run a search that marks cells visited when they are discovered.
///
/// Breadth-first, depth-first and greedy best-first differ only in the
/// frontier they hand in and the key computed for each discovered cell.
/// Because a cell enters the frontier at most once, the goal test at pop
/// time needs no stale-entry check.
pub(crate) fn explore<F, R>(
    maze: &Maze,
    rng: &mut R,
    mut frontier: F,
    key: impl Fn(Point) -> i32,
) -> SearchResult
where
    F: Frontier,
    R: Rng + ?Sized,
{
    let start = maze.start();
    let goal = maze.goal();
    let mut result = SearchResult::default();
    let mut visited = Visited::new(maze.bounds());
    let mut parents = ParentMap::new(start);
    let mut nbrs = Neighbors::new();

    visited.mark(start);
    frontier.push(start, key(start));

    while let Some(cur) = frontier.pop() {
        if cur == goal {
            result.found = true;
            result.path = parents.path_to(goal);
            return result;
        }
        if cur != start {
            result.visited_order.push(cur);
        }

        for &n in nbrs.shuffled(maze, cur, rng) {
            if visited.mark(n) {
                parents.link(n, cur);
                frontier.push(n, key(n));
            }
        }
        log::trace!("expanded {cur}, frontier {}", frontier.len());
    }

    result
}
