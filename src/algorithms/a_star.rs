use crate::algorithms::common::{Heuristic, Scoring, SearchEngine, SearchLimits};
use crate::algorithms::frontier::PriorityFrontier;
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::statistics::SearchResult;

/// A* search with the Manhattan heuristic. Returns a shortest path whenever
/// one exists.
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
pub fn a_star(grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
    a_star_with_limits(grid, start, goal, SearchLimits::default())
}

pub fn a_star_with_limits(
    grid: &Grid,
    start: Position,
    goal: Position,
    limits: SearchLimits,
) -> Result<SearchResult> {
    SearchEngine::new(grid, start, goal, PriorityFrontier::new(), Scoring::AStar)?
        .with_limits(limits)
        .run()
}

/// A* with a caller-supplied heuristic. Optimality only holds if it never
/// overestimates.
pub fn a_star_with_heuristic(
    grid: &Grid,
    start: Position,
    goal: Position,
    heuristic: Heuristic,
) -> Result<SearchResult> {
    SearchEngine::new(grid, start, goal, PriorityFrontier::new(), Scoring::AStar)?
        .with_heuristic(heuristic)
        .run()
}
