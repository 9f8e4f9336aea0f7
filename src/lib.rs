//! **carved-mazes** generates square mazes by carving random straight walks into a grid,
//! using a union-find structure to track which carved cells connect.

pub mod cells;
pub mod config;
pub mod disjoint_set;
pub mod generators;
pub mod grid;
pub mod grid_iterators;
pub mod maze;
pub mod random;
pub mod units;
mod utils;

pub use crate::config::{MazeConfig, MazeConfigBuilder};
pub use crate::maze::Maze;
