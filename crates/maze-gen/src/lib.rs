//! Random maze generation for **maze-core** mazes.

pub mod mapgen;

pub use mapgen::{GenError, MapGen};
