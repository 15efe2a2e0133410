//! Search strategies over a [`maze_core::Maze`].
//!
//! Four classic traversals find a route from the maze's start to its goal:
//!
//! - **Breadth-first** ([`bfs`]), shortest path
//! - **Depth-first** ([`dfs`])
//! - **Greedy best-first** ([`greedy`]), Manhattan heuristic
//! - **A\*** ([`astar`]), shortest path, Manhattan heuristic
//!
//! Every search borrows the maze immutably and owns its frontier, visited
//! flags and [`ParentMap`] for the duration of the call. Neighbours are
//! expanded in a fresh random order at each step, drawn from the caller's
//! generator: pass a seeded one for reproducible runs.
//!
//! | Strategy | Frontier | Key | Visited marked at |
//! |---|---|---|---|
//! | BFS | [`Fifo`] | none | discovery |
//! | DFS | [`Lifo`] | none | discovery |
//! | Greedy | [`MinPriority`] | `h` | discovery |
//! | A\* | [`MinPriority`] | `g + h` | expansion |

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod greedy;
mod neighbors;
mod result;
mod traversal;

pub use algorithm::{Algorithm, ParseAlgorithmError, run};
pub use astar::{UNREACHABLE, astar};
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use frontier::{Fifo, Frontier, Lifo, MinPriority};
pub use greedy::greedy;
pub use neighbors::Neighbors;
pub use result::{ParentMap, SearchResult};
