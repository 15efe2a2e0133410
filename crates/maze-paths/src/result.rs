use std::collections::HashMap;

use maze_core::Point;

/// Outcome of one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Whether the goal was reached.
    pub found: bool,
    /// Expanded cells in expansion order, start and goal excluded.
    pub visited_order: Vec<Point>,
    /// Cells strictly between start and goal, start first. Empty unless
    /// `found`.
    pub path: Vec<Point>,
}

impl SearchResult {
    /// Number of moves from start to goal, or `None` if no path was found.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.found.then(|| self.path.len() + 1)
    }
}

/// Per-search record of how each discovered cell was reached.
///
/// The root maps to `None`; every other entry names the cell it was
/// discovered from.
#[derive(Debug, Clone)]
pub struct ParentMap {
    links: HashMap<Point, Option<Point>>,
}

impl ParentMap {
    /// A map holding only `root`.
    pub fn new(root: Point) -> Self {
        let mut links = HashMap::new();
        links.insert(root, None);
        Self { links }
    }

    /// Record (or replace) the parent of `child`.
    #[inline]
    pub fn link(&mut self, child: Point, parent: Point) {
        self.links.insert(child, Some(parent));
    }

    /// Parent of `p`: `Some(None)` for the root, `None` if undiscovered.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Option<Point>> {
        self.links.get(&p).copied()
    }

    /// Number of discovered cells, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always `false`: the root is present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Walk back from `goal` to the root and return the cells strictly
    /// between them, root side first.
    ///
    /// Returns an empty path if `goal` was never discovered.
    pub fn path_to(&self, goal: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let Some(Some(mut cur)) = self.get(goal) else {
            return path;
        };
        while let Some(Some(parent)) = self.get(cur) {
            path.push(cur);
            cur = parent;
        }
        path.reverse();
        path
    }
}
