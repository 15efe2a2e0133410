use maze_core::Maze;
use rand::Rng;

use crate::distance::manhattan;
use crate::frontier::{Frontier, MinPriority};
use crate::neighbors::Neighbors;
use crate::result::{ParentMap, SearchResult};
use crate::traversal::Visited;

/// Sentinel cost for cells with no known path from the start.
pub const UNREACHABLE: i32 = i32::MAX;

/// A* search from the maze's start to its goal, with unit step cost and the
/// Manhattan distance as heuristic.
///
/// A cell may sit in the open list several times; it is closed the first
/// time it is popped and later copies are skipped. Its cost and parent are
/// only replaced by a strictly cheaper route, so the returned path is a
/// shortest one.
pub fn astar<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> SearchResult {
    let bounds = maze.bounds();
    let start = maze.start();
    let goal = maze.goal();

    let mut result = SearchResult::default();
    let mut g = vec![UNREACHABLE; bounds.len()];
    let mut closed = Visited::new(bounds);
    let mut parents = ParentMap::new(start);
    let mut open = MinPriority::default();
    let mut nbrs = Neighbors::new();

    let Some(si) = bounds.idx(start) else {
        return result;
    };
    g[si] = 0;
    open.push(start, manhattan(start, goal));

    while let Some(cur) = open.pop() {
        // Skip stale entries.
        if !closed.mark(cur) {
            continue;
        }

        if cur == goal {
            result.found = true;
            result.path = parents.path_to(goal);
            return result;
        }
        if cur != start {
            result.visited_order.push(cur);
        }

        let Some(ci) = bounds.idx(cur) else {
            continue;
        };
        let current_g = g[ci];

        for &np in nbrs.shuffled(maze, cur, rng) {
            let Some(ni) = bounds.idx(np) else {
                continue;
            };
            let tentative_g = current_g + 1;
            if tentative_g >= g[ni] {
                continue;
            }
            g[ni] = tentative_g;
            parents.link(np, cur);
            open.push(np, tentative_g + manhattan(np, goal));
        }
        log::trace!("closed {cur} at g={current_g}, open {}", open.len());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn detours_around_wall() {
        let maze = Maze::parse("S#...\n.#.#.\n...#G").unwrap();
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = astar(&maze, &mut rng);
            assert!(r.found);
            assert_eq!(r.steps(), Some(10));
            assert!(!r.visited_order.contains(&maze.start()));
            assert!(!r.visited_order.contains(&maze.goal()));
        }
    }

    #[test]
    fn straight_line_expands_only_the_line() {
        let maze = Maze::parse("S...G").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let r = astar(&maze, &mut rng);
        let line = vec![Point::new(0, 1), Point::new(0, 2), Point::new(0, 3)];
        assert_eq!(r.path, line);
        assert_eq!(r.visited_order, line);
    }

    #[test]
    fn unreachable_goal_closes_every_reachable_cell() {
        let maze = Maze::parse("S..#.\n...#G").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let r = astar(&maze, &mut rng);
        assert!(!r.found);
        assert!(r.path.is_empty());
        let mut seen = r.visited_order.clone();
        seen.sort();
        assert_eq!(
            seen,
            vec![
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2)
            ]
        );
    }
}
