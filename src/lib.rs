//! Grid maze path planning with breadth-first, depth-first, greedy
//! best-first and A* search over one shared exploration loop.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod maze;
pub mod report;
pub mod simulation;
pub mod statistics;

pub use algorithms::Algorithm;
pub use error::{MazeError, Result};
pub use grid::{Cell, Grid, Position};
pub use statistics::{SearchResult, Termination};
