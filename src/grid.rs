use crate::error::{MazeError, Result};
use std::fmt;

/// A cell coordinate, row-major with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// Movement offsets in expansion order: right, left, down, up.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Occupancy map with start and goal. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Builds a grid from a set of wall positions.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows, must be non-zero.
    /// * `cols` - Number of columns, must be non-zero.
    /// * `walls` - Positions to block. Duplicates are harmless.
    /// * `start` - The start cell.
    /// * `goal` - The goal cell.
    ///
    /// # Returns
    ///
    /// The grid, or an error if a dimension is zero, a wall lies outside the
    /// grid, or `start`/`goal` is outside the grid or on a wall. Walls on an
    /// endpoint are rejected rather than dropped.
    pub fn new(
        rows: usize,
        cols: usize,
        walls: impl IntoIterator<Item = Position>,
        start: Position,
        goal: Position,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let mut cells = vec![vec![Cell::Empty; cols]; rows];
        for wall in walls {
            if wall.row >= rows || wall.col >= cols {
                return Err(MazeError::OutOfBounds { what: "Wall", pos: wall });
            }
            cells[wall.row][wall.col] = Cell::Wall;
        }
        Self::from_cells(cells, start, goal)
    }

    /// Builds a grid from row-major 0/1 occupancy rows (1 = wall).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], start: Position, goal: Position) -> Result<Self> {
        let cells = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&v| if v == 0 { Cell::Empty } else { Cell::Wall })
                    .collect()
            })
            .collect();
        Self::from_cells(cells, start, goal)
    }

    pub(crate) fn from_cells(cells: Vec<Vec<Cell>>, start: Position, goal: Position) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MazeError::RaggedRows {
                row,
                expected: cols,
                found: r.len(),
            });
        }

        let grid = Grid {
            rows,
            cols,
            cells,
            start,
            goal,
        };
        grid.check_endpoint("Start", start)?;
        grid.check_endpoint("Goal", goal)?;
        Ok(grid)
    }

    /// Verifies that `pos` can be used as a search endpoint on this grid.
    pub fn check_endpoint(&self, what: &'static str, pos: Position) -> Result<()> {
        if !self.contains(pos) {
            return Err(MazeError::OutOfBounds { what, pos });
        }
        if self.is_wall(pos) {
            return Err(MazeError::OnWall { what, pos });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Out-of-bounds positions count as walls.
    pub fn is_wall(&self, pos: Position) -> bool {
        !self.contains(pos) || self.cells[pos.row][pos.col] == Cell::Wall
    }

    /// Open orthogonal neighbors of `pos`, always in [`DIRECTIONS`] order.
    pub fn neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (pos.row as isize, pos.col as isize);

        for (dr, dc) in DIRECTIONS {
            let (nr, nc) = (row + dr, col + dc);
            if self.in_bounds(nr, nc) {
                let next_pos = Position::new(nr as usize, nc as usize);
                if !self.is_wall(next_pos) {
                    neighbors.push(next_pos);
                }
            }
        }
        neighbors
    }

    pub fn wall_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Wall)
            .count()
    }

    pub fn free_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
            .filter(|&p| !self.is_wall(p))
    }

    /// ASCII picture of the grid, optionally overlaying a path with `*`.
    pub fn render(&self, path: Option<&[Position]>) -> String {
        let on_path = |pos: &Position| path.is_some_and(|p| p.contains(pos));
        let mut out = String::new();

        out.push_str("   ");
        for col in 0..self.cols {
            out.push_str(&format!("{:2}", col % 10));
        }
        out.push('\n');

        for row in 0..self.rows {
            out.push_str(&format!("{:2} ", row));
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                let ch = if pos == self.start {
                    'S'
                } else if pos == self.goal {
                    'G'
                } else if self.is_wall(pos) {
                    '#'
                } else if on_path(&pos) {
                    '*'
                } else {
                    '.'
                };
                out.push(' ');
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
