use crate::algorithms::common::{Scoring, SearchEngine, SearchLimits};
use crate::algorithms::frontier::PriorityFrontier;
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::statistics::SearchResult;

/// Greedy best-first search: always expands the cell that looks closest to
/// the goal by Manhattan distance, ignoring the cost already paid.
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
pub fn greedy_best_first(grid: &Grid, start: Position, goal: Position) -> Result<SearchResult> {
    greedy_best_first_with_limits(grid, start, goal, SearchLimits::default())
}

pub fn greedy_best_first_with_limits(
    grid: &Grid,
    start: Position,
    goal: Position,
    limits: SearchLimits,
) -> Result<SearchResult> {
    SearchEngine::new(grid, start, goal, PriorityFrontier::new(), Scoring::Greedy)?
        .with_limits(limits)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_greedy_heads_straight_for_goal() {
        let grid = Grid::new(3, 3, [], p(0, 0), p(2, 2)).unwrap();
        let result = greedy_best_first(&grid, p(0, 0), p(2, 2)).unwrap();

        assert_eq!(result.path_length(), 4);
        assert_eq!(
            result.explored_order,
            vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]
        );
    }

    #[test]
    fn test_greedy_on_fallback_maze() {
        let grid = crate::maze::fallback();
        let result = greedy_best_first(&grid, grid.start(), grid.goal()).unwrap();
        assert_eq!(result.path_length(), 25);
        assert_eq!(result.explored_count(), 29);
    }
}
