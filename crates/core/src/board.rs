//! Board module - manages the game grid
//!
//! The board is a 10x10 grid where each cell is either empty or filled.
//! Uses a flat array for cache locality; boards are `Copy`-cheap to clone, so
//! placement produces new boards instead of mutating the caller's.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..9 (top to bottom)
//!
//! Line clears differ from falling-block games: full rows and full columns are
//! detected independently on the post-placement board and zeroed in place.
//! Nothing shifts.

use arrayvec::ArrayVec;

use crate::pieces::PieceDef;
use crate::types::{Cell, Point, BOARD_CELLS, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// Indices of cleared rows or columns, ascending
pub type LineIndices = ArrayVec<u8, SIZE>;

/// The game board - 10 columns x 10 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; BOARD_CELLS],
}

/// Outcome of a successful placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Board with the piece written, before any clears
    pub placed: Board,
    /// Full rows on `placed`
    pub rows: LineIndices,
    /// Full columns on `placed`
    pub cols: LineIndices,
    /// `placed` with every full row and column zeroed
    pub board: Board,
    pub cells_placed: u8,
}

impl Placement {
    /// Rows plus columns; a cell on both counts towards each
    pub fn lines_cleared(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    ///
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= SIZE as i16 || y < 0 || y >= SIZE as i16 {
            return None;
        }
        Some((y as usize) * SIZE + (x as usize))
    }

    /// Index of a piece cell placed at `origin`
    ///
    /// `offset` saturates, and a saturated coordinate is always off the grid.
    fn cell_index(origin: Point, cell: Point) -> Option<usize> {
        let p = origin.offset(cell);
        Self::index(i16::from(p.x), i16::from(p.y))
    }

    /// Board width and height (always 10)
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x.into(), y.into()).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x.into(), y.into()) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: u8) -> bool {
        let y = y as usize;
        if y >= SIZE {
            return false;
        }
        self.cells[y * SIZE..(y + 1) * SIZE]
            .iter()
            .all(|cell| cell.is_filled())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, x: u8) -> bool {
        let x = x as usize;
        if x >= SIZE {
            return false;
        }
        (0..SIZE).all(|y| self.cells[y * SIZE + x].is_filled())
    }

    /// Full rows and full columns, each ascending
    pub fn full_lines(&self) -> (LineIndices, LineIndices) {
        let rows = (0..BOARD_SIZE).filter(|&y| self.is_row_full(y)).collect();
        let cols = (0..BOARD_SIZE).filter(|&x| self.is_col_full(x)).collect();
        (rows, cols)
    }

    /// Zero the given rows and columns
    pub fn clear_lines(&mut self, rows: &[u8], cols: &[u8]) {
        for &y in rows.iter().filter(|&&y| (y as usize) < SIZE) {
            let start = y as usize * SIZE;
            self.cells[start..start + SIZE].fill(Cell::Empty);
        }
        for &x in cols.iter().filter(|&&x| (x as usize) < SIZE) {
            for y in 0..SIZE {
                self.cells[y * SIZE + x as usize] = Cell::Empty;
            }
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// True iff every piece cell, offset by `origin`, is inside the grid and empty
    pub fn can_place(&self, piece: &PieceDef, origin: Point) -> bool {
        piece.cells().iter().all(|&cell| {
            matches!(
                Self::cell_index(origin, cell).map(|i| self.cells[i]),
                Some(Cell::Empty)
            )
        })
    }

    /// Place a piece and resolve clears
    ///
    /// Returns `None` (and produces no board) when the placement is illegal.
    pub fn apply_placement(&self, piece: &PieceDef, origin: Point) -> Option<Placement> {
        if !self.can_place(piece, origin) {
            return None;
        }

        let mut placed = *self;
        for &cell in piece.cells() {
            // can_place already proved every index is in range.
            if let Some(idx) = Self::cell_index(origin, cell) {
                placed.cells[idx] = Cell::Filled;
            }
        }

        let (rows, cols) = placed.full_lines();
        let mut board = placed;
        board.clear_lines(&rows, &cols);

        Some(Placement {
            placed,
            rows,
            cols,
            board,
            cells_placed: piece.size(),
        })
    }

    /// First legal origin in row-major order
    pub fn first_fit(&self, piece: &PieceDef) -> Option<Point> {
        self.origins().find(|&origin| self.can_place(piece, origin))
    }

    /// True iff the piece has at least one legal origin
    pub fn fits_anywhere(&self, piece: &PieceDef) -> bool {
        self.first_fit(piece).is_some()
    }

    /// True iff any of the pieces fits somewhere
    ///
    /// Exhaustive scan over all 100 origins per piece.
    pub fn can_any_piece_fit<'a, I>(&self, pieces: I) -> bool
    where
        I: IntoIterator<Item = &'a PieceDef>,
    {
        pieces.into_iter().any(|piece| self.fits_anywhere(piece))
    }

    /// Pieces that have at least one legal origin, in input order
    pub fn placeable_pieces<'a>(&self, pieces: &'a [PieceDef]) -> Vec<&'a PieceDef> {
        pieces
            .iter()
            .filter(|piece| self.fits_anywhere(piece))
            .collect()
    }

    /// Every origin on the grid, row-major
    pub fn origins(&self) -> impl Iterator<Item = Point> {
        (0..BOARD_SIZE as i8).flat_map(|y| (0..BOARD_SIZE as i8).map(move |x| Point::new(x, y)))
    }

    /// Write the board as 0/1 rows
    pub fn write_u8_grid(&self, out: &mut [[u8; SIZE]; SIZE]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * SIZE + x].as_u8();
            }
        }
    }

    /// Build a board from 0/1 rows (any non-zero value is filled)
    pub fn from_u8_grid(grid: &[[u8; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                board.cells[y * SIZE + x] = Cell::from_u8(v);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
