use crate::grid::Position;
use std::fmt;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    GoalReached,
    /// Every reachable cell was expanded without meeting the goal.
    FrontierExhausted,
    /// The caller's expansion budget ran out first.
    ExpansionLimit,
}

/// Outcome of a single search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    /// Start to goal inclusive; empty when `found` is false.
    pub path: Vec<Position>,
    /// Cells in the order they were expanded.
    pub explored_order: Vec<Position>,
    pub termination: Termination,
}

impl SearchResult {
    pub fn success(path: Vec<Position>, explored_order: Vec<Position>) -> Self {
        SearchResult {
            found: true,
            path,
            explored_order,
            termination: Termination::GoalReached,
        }
    }

    pub fn failure(explored_order: Vec<Position>, termination: Termination) -> Self {
        SearchResult {
            found: false,
            path: Vec::new(),
            explored_order,
            termination,
        }
    }

    pub fn explored_count(&self) -> usize {
        self.explored_order.len()
    }

    /// Number of steps (edges) along the path, 0 when nothing was found.
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            writeln!(f, "Path found!")?;
            writeln!(f, "Path length: {}", self.path_length())?;
        } else {
            match self.termination {
                Termination::ExpansionLimit => writeln!(f, "Expansion limit reached")?,
                _ => writeln!(f, "No path found")?,
            }
        }
        writeln!(f, "Cells explored: {}", self.explored_count())?;
        Ok(())
    }
}
