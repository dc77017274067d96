//! Program grid and instruction pointer.
//!
//! A LaserLang program is a rectangular character grid. Coordinates are
//! logical: x grows rightward, y grows *upward*, so row 0 of the stored
//! grid is the top of the source text and logical y = 0 is its bottom
//! line. The cursor wraps modulo the grid dimensions on every step.

use std::fmt;

use array2d::Array2D;

/// One of the four cardinal unit vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Logical (dx, dy) with y-up orientation.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Fixed index used by the mirror routing tables (N, W, S, E).
    pub fn table_index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::West => 1,
            Direction::South => 2,
            Direction::East => 3,
        }
    }
}

/// Immutable rectangular character grid, rows padded with spaces to the
/// widest line at construction.
pub struct Board {
    cells: Array2D<char>,
}

impl Board {
    /// Build a board from source text. Empty input yields a 1x1 blank
    /// grid so the board is always well-formed.
    pub fn build(source: &str) -> Board {
        let mut rows: Vec<Vec<char>> = source
            .split('\n')
            .map(|line| line.chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        // Rows were just padded to a uniform width.
        let cells = Array2D::from_rows(&rows).expect("padded rows have uniform width");
        Board { cells }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells.num_columns()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.num_rows()
    }

    /// Character at logical (x, y); y = 0 is the bottom row.
    pub fn char_at(&self, x: usize, y: usize) -> char {
        let stored_row = self.height() - 1 - y;
        *self.cells.get(stored_row, x).unwrap_or(&' ')
    }
}

impl fmt::Display for Board {
    /// The padded grid, top-to-bottom, as the verbose trace prints it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows_iter() {
            for c in row {
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The instruction pointer: logical position plus heading.
#[derive(Debug, Clone)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Cursor {
    /// Top-left cell in visual layout, heading East.
    pub fn new(board: &Board) -> Self {
        Self { x: 0, y: board.height() - 1, direction: Direction::East }
    }

    /// Advance one cell, each axis wrapping independently.
    pub fn advance(&mut self, width: usize, height: usize) {
        let (dx, dy) = self.direction.delta();
        self.x = wrap(self.x as isize + dx, width);
        self.y = wrap(self.y as isize + dy, height);
    }
}

fn wrap(position: isize, extent: usize) -> usize {
    if position < 0 {
        extent - 1
    } else if position as usize >= extent {
        0
    } else {
        position as usize
    }
}
