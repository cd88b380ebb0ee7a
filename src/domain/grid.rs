use super::{BoardError, CellState, Player};
use rand::Rng;

/// GridModel owns the row-major cell states of one board.
/// Dimensions are fixed at construction; every cell always holds exactly one state.
#[derive(Clone, Debug, PartialEq)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl GridModel {
    /// Create a grid with all cells dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len > 0)
            .ok_or(BoardError::InvalidDimension { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Build a grid from an existing row-major cell vector
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Self, BoardError> {
        let mut grid = Self::new(rows, cols)?;
        grid.replace_cells(cells)?;
        Ok(grid)
    }

    /// Grid dimensions as (rows, cols)
    pub const fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (row, col) to a row-major index, checking bounds
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), BoardError> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Read-only row-major view of every cell
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Swap in a complete next generation. The length must match the grid.
    pub(crate) fn replace_cells(&mut self, cells: Vec<CellState>) -> Result<(), BoardError> {
        if cells.len() != self.cells.len() {
            return Err(BoardError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells = cells;
        Ok(())
    }

    /// Count cells owned by `player` that are alive (marked included)
    pub fn population(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_alive_for(player)).count()
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = CellState::Dead);
    }

    /// Fill the grid randomly: each cell is alive with probability `density`,
    /// owned by either player with equal chance.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);

        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                if rng.random_bool(0.5) {
                    CellState::P1Alive
                } else {
                    CellState::P2Alive
                }
            } else {
                CellState::Dead
            };
        });
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &state)| (idx / cols, idx % cols, state))
    }
}
