use crate::algorithms::common::{Scoring, SearchEngine, SearchLimits};
use crate::algorithms::frontier::QueueFrontier;
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::statistics::SearchResult;

/// Breadth-first search. Explores level by level, so the first time the goal
/// is popped its path is a shortest one.
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
pub fn bfs(grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
    bfs_with_limits(grid, start, goal, SearchLimits::default())
}

pub fn bfs_with_limits(
    grid: &Grid,
    start: Position,
    goal: Position,
    limits: SearchLimits,
) -> Result<SearchResult> {
    SearchEngine::new(grid, start, goal, QueueFrontier::new(), Scoring::Unordered)?
        .with_limits(limits)
        .run()
}
