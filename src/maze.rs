use crate::error::{MazeError, Result};
use crate::grid::{Cell, Grid, Position};
use pathfinding::prelude::{bfs, bfs_reach};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

const FALLBACK_ROWS: usize = 10;
const FALLBACK_COLS: usize = 15;

/// Hand-authored 10x15 layout used for reproducible comparisons.
/// Shortest route from the top-left to the bottom-right corner is 23 steps.
const FALLBACK_LAYOUT: [[u8; FALLBACK_COLS]; FALLBACK_ROWS] = [
    [0, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    [0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1],
    [0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0],
    [0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// The fixed fallback maze, start (0, 0) and goal (9, 14).
pub fn fallback() -> Grid {
    let cells = FALLBACK_LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| if v == 0 { Cell::Empty } else { Cell::Wall })
                .collect()
        })
        .collect();
    match Grid::from_cells(cells, Position::new(0, 0), Position::new(FALLBACK_ROWS - 1, FALLBACK_COLS - 1)) {
        Ok(grid) => grid,
        Err(e) => unreachable!("fallback layout is valid: {e}"),
    }
}

/// True if the goal can be reached from the start.
pub fn has_valid_path(grid: &Grid) -> bool {
    let goal = grid.goal();
    bfs(&grid.start(), |p| grid.neighbors(p), |p| *p == goal).is_some()
}

/// Number of open cells reachable from `from`, including itself.
pub fn reachable_count(grid: &Grid, from: Position) -> usize {
    if grid.is_wall(from) {
        return 0;
    }
    bfs_reach(from, |p| grid.neighbors(p)).count()
}

/// Random maze generator with a solvability check.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeGenerator {
    rows: usize,
    cols: usize,
    wall_prob: f64,
    max_attempts: usize,
}

impl MazeGenerator {
    pub fn new(rows: usize, cols: usize, wall_prob: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        if !(0.0..=1.0).contains(&wall_prob) {
            return Err(MazeError::InvalidWallProbability(wall_prob));
        }
        Ok(MazeGenerator {
            rows,
            cols,
            wall_prob,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self> {
        if max_attempts == 0 {
            return Err(MazeError::InvalidAttempts);
        }
        self.max_attempts = max_attempts;
        Ok(self)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn wall_prob(&self) -> f64 {
        self.wall_prob
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn start(&self) -> Position {
        Position::new(0, 0)
    }

    fn goal(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }

    /// Generates with a seeded generator, or from OS entropy without a seed.
    pub fn generate_seeded(&self, seed: Option<u64>) -> Grid {
        let mut rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };
        self.generate(&mut rng)
    }

    /// Samples grids until one is solvable.
    ///
    /// After `max_attempts` failures a 10x15 request falls back to the
    /// built-in maze. Any other size gets a last sample with an L-shaped
    /// corridor (left column, bottom row) carved open, which always connects
    /// the corners.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Grid {
        for attempt in 1..=self.max_attempts {
            let grid = self.sample(rng);
            if has_valid_path(&grid) {
                log::info!(
                    "Maze {}x{} generated after {} attempt(s), {} walls",
                    self.rows,
                    self.cols,
                    attempt,
                    grid.wall_count()
                );
                return grid;
            }
            log::debug!("attempt {} produced an unsolvable maze", attempt);
        }

        if (self.rows, self.cols) == (FALLBACK_ROWS, FALLBACK_COLS) {
            log::warn!(
                "No solvable maze after {} attempts, using the built-in maze",
                self.max_attempts
            );
            return fallback();
        }

        log::warn!(
            "No solvable maze after {} attempts, carving a corridor",
            self.max_attempts
        );
        let mut cells = self.sample_cells(rng);
        for row in cells.iter_mut() {
            row[0] = Cell::Empty;
        }
        if let Some(last) = cells.last_mut() {
            last.fill(Cell::Empty);
        }
        self.build(cells)
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Grid {
        let cells = self.sample_cells(rng);
        self.build(cells)
    }

    fn sample_cells<R: Rng>(&self, rng: &mut R) -> Vec<Vec<Cell>> {
        let (start, goal) = (self.start(), self.goal());
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        let pos = Position::new(row, col);
                        if pos != start && pos != goal && rng.gen_bool(self.wall_prob) {
                            Cell::Wall
                        } else {
                            Cell::Empty
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn build(&self, cells: Vec<Vec<Cell>>) -> Grid {
        // Dimensions were validated in `new` and the corners are never walls.
        match Grid::from_cells(cells, self.start(), self.goal()) {
            Ok(grid) => grid,
            Err(e) => unreachable!("generator produced an invalid grid: {e}"),
        }
    }
}
