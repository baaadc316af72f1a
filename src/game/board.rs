use std::fmt;

use crate::error::ConfigError;

/// Smallest accepted board width/height.
pub const MIN_DIM: usize = 6;
/// Largest accepted board width/height.
pub const MAX_DIM: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// Disc counts for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

/// A rectangular Othello board. Dimensions are fixed at construction; cells
/// are mutated only through placement and capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Check that both dimensions are even integers in `[MIN_DIM, MAX_DIM]`.
pub fn validate_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
    let ok = |d: usize| d % 2 == 0 && (MIN_DIM..=MAX_DIM).contains(&d);
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimensions { width, height })
    }
}

impl Board {
    /// Create a board seeded with the standard four-disc opening: the two
    /// diagonal center cells per side, White on the main diagonal.
    pub fn opening(width: usize, height: usize) -> Result<Self, ConfigError> {
        validate_dimensions(width, height)?;
        let mut board = Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        };
        let mx = width / 2 - 1;
        let my = height / 2 - 1;
        board.set(my, mx, Cell::White);
        board.set(my, mx + 1, Cell::Black);
        board.set(my + 1, mx, Cell::Black);
        board.set(my + 1, mx + 1, Cell::White);
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Signed-coordinate variant of [`contains`](Self::contains), for ray
    /// walks that may step off any edge.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width
    }

    /// Get the cell at `(row, col)`.
    ///
    /// Panics if the coordinate is out of bounds; callers are expected to
    /// check first.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) out of bounds on a {}x{} board",
            self.width,
            self.height
        );
        self.cells[row * self.width + col]
    }

    /// Set the cell at `(row, col)`.
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) out of bounds on a {}x{} board",
            self.width,
            self.height
        );
        self.cells[row * self.width + col] = value;
    }

    /// Count discs for both sides.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in &self.cells {
            match cell {
                Cell::Black => score.black += 1,
                Cell::White => score.white += 1,
                Cell::Empty => {}
            }
        }
        score
    }

    /// Check if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let glyph = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
