//! Algorithm selection by name.

use std::fmt;
use std::str::FromStr;

use maze_core::Maze;
use rand::Rng;

use crate::result::SearchResult;
use crate::{astar, bfs, dfs, greedy};

/// One of the supported search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Greedy,
    Astar,
}

impl Algorithm {
    /// Every strategy, in presentation order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Greedy, Self::Astar];

    /// The selector name: `bfs`, `dfs`, `greedy` or `astar`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Greedy => "greedy",
            Self::Astar => "astar",
        }
    }

    /// Whether the strategy guarantees a shortest path.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::Astar)
    }

    /// Search `maze` with this strategy.
    pub fn run<R: Rng + ?Sized>(self, maze: &Maze, rng: &mut R) -> SearchResult {
        let result = match self {
            Self::Bfs => bfs(maze, rng),
            Self::Dfs => dfs(maze, rng),
            Self::Greedy => greedy(maze, rng),
            Self::Astar => astar(maze, rng),
        };
        log::debug!(
            "{self}: found={} expanded={} path={}",
            result.found,
            result.visited_order.len(),
            result.path.len()
        );
        result
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Search `maze` with the strategy called `name`.
///
/// Unknown names are rejected; there is no fallback strategy.
pub fn run<R: Rng + ?Sized>(
    name: &str,
    maze: &Maze,
    rng: &mut R,
) -> Result<SearchResult, ParseAlgorithmError> {
    let algo: Algorithm = name.parse()?;
    Ok(algo.run(maze, rng))
}

/// An algorithm selector that names no known strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected one of bfs, dfs, greedy, astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
