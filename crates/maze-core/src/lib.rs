//! **maze-core**: grid maze model with geometry, tiles, and the text-encoded
//! [`Maze`].
//!
//! A maze is parsed from (and written back to) a compact text encoding with
//! one character per cell, validated so that exactly one start and one goal
//! exist. Searches only ever borrow a `Maze` immutably.

pub mod geom;
pub mod grid;
pub mod maze;

pub use geom::{Point, Range};
pub use grid::{Grid, Tile};
pub use maze::{Maze, MazeError};
