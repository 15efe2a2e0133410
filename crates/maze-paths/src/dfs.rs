use maze_core::Maze;
use rand::Rng;

use crate::frontier::Lifo;
use crate::result::SearchResult;
use crate::traversal::explore;

/// Depth-first search from the maze's start to its goal.
///
/// Always finds the goal when it is reachable, but the path need not be
/// shortest.
pub fn dfs<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> SearchResult {
    explore(maze, rng, Lifo::default(), |_| 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn follows_one_branch_before_backtracking() {
        // Start sits at a T-junction; the goal is down the left arm.
        let maze = Maze::parse("#####\nG.S..\n#####").unwrap();
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = dfs(&maze, &mut rng);
            assert!(r.found);
            assert_eq!(r.path, vec![Point::new(1, 1)]);
            // Either the left arm is taken at once, or the whole right arm is
            // exhausted first.
            assert!(
                r.visited_order == vec![Point::new(1, 1)]
                    || r.visited_order
                        == vec![Point::new(1, 3), Point::new(1, 4), Point::new(1, 1)]
            );
        }
    }
}
