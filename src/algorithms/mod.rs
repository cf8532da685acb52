pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;
pub mod frontier;
pub mod greedy;

pub use a_star::{a_star, a_star_with_heuristic};
pub use bfs::bfs;
pub use common::{manhattan, SearchEngine, SearchLimits, SearchState, Scoring};
pub use dfs::dfs;
pub use greedy::greedy_best_first;

use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::statistics::SearchResult;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    Bfs,
    Dfs,
    #[value(name = "gbfs")]
    Greedy,
    #[value(name = "astar")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Greedy => "GBFS",
            Algorithm::AStar => "A*",
        }
    }

    /// Filesystem-safe name used for exported reports.
    pub fn file_stem(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Greedy => "gbfs",
            Algorithm::AStar => "astar",
        }
    }

    /// Whether the algorithm guarantees a shortest path.
    pub fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::AStar)
    }

    pub fn search(self, grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
        self.search_with_limits(grid, start, goal, SearchLimits::default())
    }

    pub fn search_with_limits(
        self,
        grid: &Grid,
        start: Position,
        goal: Position,
        limits: SearchLimits,
    ) -> Result<SearchResult> {
        match self {
            Algorithm::Bfs => bfs::bfs_with_limits(grid, start, goal, limits),
            Algorithm::Dfs => dfs::dfs_with_limits(grid, start, goal, limits),
            Algorithm::Greedy => greedy::greedy_best_first_with_limits(grid, start, goal, limits),
            Algorithm::AStar => a_star::a_star_with_limits(grid, start, goal, limits),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
