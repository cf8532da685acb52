use crate::algorithms::common::{Scoring, SearchEngine, SearchLimits};
use crate::algorithms::frontier::StackFrontier;
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::statistics::SearchResult;

/// Depth-first search. Dives along the most recently discovered cell and
/// backtracks on dead ends; the path it returns is not necessarily shortest.
///
/// # Arguments
///
/// * `grid` - The maze to search.
/// * `start` - The starting position.
/// * `goal` - The goal position.
///
/// # Returns
///
/// A `SearchResult` with the path (empty if the goal is unreachable) and the
/// order in which cells were expanded, or an error if `start` or `goal` is
/// outside the grid or on a wall.
pub fn dfs(grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
    dfs_with_limits(grid, start, goal, SearchLimits::default())
}

pub fn dfs_with_limits(
    grid: &Grid,
    start: Position,
    goal: Position,
    limits: SearchLimits,
) -> Result<SearchResult> {
    SearchEngine::new(grid, start, goal, StackFrontier::new(), Scoring::Unordered)?
        .with_limits(limits)
        .run()
}
