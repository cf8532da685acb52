use crate::algorithms::frontier::Frontier;
use crate::error::{MazeError, Result};
use crate::grid::{Grid, Position};
use crate::statistics::{SearchResult, Termination};
use rustc_hash::{FxHashMap, FxHashSet};

/// Estimated remaining cost from a cell to the goal.
pub type Heuristic = fn(Position, Position) -> usize;

/// Manhattan distance. Admissible and consistent on a 4-connected grid with
/// unit step cost.
pub fn manhattan(from: Position, to: Position) -> usize {
    from.row.abs_diff(to.row) + from.col.abs_diff(to.col)
}

/// How a discovered cell is scored before it goes onto the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    /// Order comes from the frontier alone (queue or stack).
    Unordered,
    /// f(n) = h(n)
    Greedy,
    /// f(n) = g(n) + h(n), with g lowered whenever a cheaper route shows up.
    AStar,
}

impl Scoring {
    pub fn score(self, g: usize, h: usize) -> usize {
        match self {
            Scoring::Unordered => 0,
            Scoring::Greedy => h,
            Scoring::AStar => g + h,
        }
    }

    /// Whether an already discovered cell may be re-pushed with a better cost.
    pub fn updates_cost(self) -> bool {
        matches!(self, Scoring::AStar)
    }
}

/// Optional caller-imposed bounds on a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn max_expansions(limit: usize) -> Self {
        SearchLimits {
            max_expansions: Some(limit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Ready,
    Running,
    Succeeded,
    Failed,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Succeeded | SearchState::Failed)
    }
}

/// The traversal loop shared by all four algorithms.
///
/// Cells are marked visited when they are popped, not when they are pushed,
/// so a popped cell that is already visited is a stale entry and is dropped
/// without counting as an expansion.
pub struct SearchEngine<'a, F: Frontier> {
    grid: &'a Grid,
    start: Position,
    goal: Position,
    frontier: F,
    scoring: Scoring,
    heuristic: Heuristic,
    limits: SearchLimits,
    state: SearchState,
    visited: FxHashSet<Position>,
    // Discovered cells and the cost they were reached with.
    costs: FxHashMap<Position, usize>,
    parents: FxHashMap<Position, Position>,
    explored_order: Vec<Position>,
    termination: Option<Termination>,
    path: Vec<Position>,
}

impl<'a, F: Frontier> SearchEngine<'a, F> {
    pub fn new(
        grid: &'a Grid,
        start: Position,
        goal: Position,
        frontier: F,
        scoring: Scoring,
    ) -> Result<Self> {
        grid.check_endpoint("Start", start)?;
        grid.check_endpoint("Goal", goal)?;

        Ok(SearchEngine {
            grid,
            start,
            goal,
            frontier,
            scoring,
            heuristic: manhattan,
            limits: SearchLimits::default(),
            state: SearchState::Ready,
            visited: FxHashSet::default(),
            costs: FxHashMap::default(),
            parents: FxHashMap::default(),
            explored_order: Vec::new(),
            termination: None,
            path: Vec::new(),
        })
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn explored_order(&self) -> &[Position] {
        &self.explored_order
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Advances the search by one frontier pop.
    ///
    /// Calling `step` on a finished search is a no-op that returns the
    /// terminal state again.
    pub fn step(&mut self) -> Result<SearchState> {
        match self.state {
            SearchState::Succeeded | SearchState::Failed => return Ok(self.state),
            SearchState::Ready => {
                self.costs.insert(self.start, 0);
                let priority = self.scoring.score(0, (self.heuristic)(self.start, self.goal));
                self.frontier.push(self.start, priority);
                self.state = SearchState::Running;
            }
            SearchState::Running => {}
        }

        if self
            .limits
            .max_expansions
            .is_some_and(|max| self.explored_order.len() >= max)
        {
            return Ok(self.finish_failed(Termination::ExpansionLimit));
        }

        let Some(current) = self.frontier.pop() else {
            return Ok(self.finish_failed(Termination::FrontierExhausted));
        };

        // Stale entry left behind by a cheaper re-push.
        if !self.visited.insert(current) {
            return Ok(self.state);
        }
        self.explored_order.push(current);

        if current == self.goal {
            self.path = reconstruct_path(
                &self.parents,
                self.start,
                self.goal,
                self.explored_order.len(),
            )?;
            self.termination = Some(Termination::GoalReached);
            self.state = SearchState::Succeeded;
            return Ok(self.state);
        }

        self.expand(current);
        Ok(self.state)
    }

    fn expand(&mut self, current: Position) {
        let next_g = self.costs.get(&current).copied().unwrap_or(0) + 1;

        let mut neighbors = self.grid.neighbors(&current);
        if F::REVERSE_PUSH {
            neighbors.reverse();
        }

        for next in neighbors {
            if self.visited.contains(&next) {
                continue;
            }
            let improves = match self.costs.get(&next) {
                None => true,
                Some(&known) => self.scoring.updates_cost() && next_g < known,
            };
            if !improves {
                continue;
            }

            self.costs.insert(next, next_g);
            self.parents.insert(next, current);
            let priority = self.scoring.score(next_g, (self.heuristic)(next, self.goal));
            self.frontier.push(next, priority);
        }
    }

    fn finish_failed(&mut self, termination: Termination) -> SearchState {
        self.termination = Some(termination);
        self.state = SearchState::Failed;
        self.state
    }

    /// Runs to completion and returns the result.
    pub fn run(mut self) -> Result<SearchResult> {
        let termination = loop {
            self.step()?;
            if let Some(termination) = self.termination {
                break termination;
            }
        };

        log::debug!(
            "search {:?} from {} to {}: {:?} after {} expansions",
            self.scoring,
            self.start,
            self.goal,
            termination,
            self.explored_order.len()
        );
        Ok(self.finish(termination))
    }

    /// The outcome of a finished search, or `None` while it is still `Ready`
    /// or `Running`.
    pub fn into_result(self) -> Option<SearchResult> {
        let termination = self.termination?;
        Some(self.finish(termination))
    }

    fn finish(self, termination: Termination) -> SearchResult {
        match termination {
            Termination::GoalReached => SearchResult::success(self.path, self.explored_order),
            other => SearchResult::failure(self.explored_order, other),
        }
    }
}

/// Walks parent links back from `goal` and returns the path start-first.
///
/// `bound` caps the number of steps; a valid chain is never longer than the
/// number of cells expanded.
pub fn reconstruct_path(
    parents: &FxHashMap<Position, Position>,
    start: Position,
    goal: Position,
    bound: usize,
) -> Result<Vec<Position>> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        if path.len() > bound {
            return Err(MazeError::BrokenParentChain { at: current });
        }
        current = *parents
            .get(&current)
            .ok_or(MazeError::BrokenParentChain { at: current })?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}
