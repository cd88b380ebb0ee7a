use super::{BoardError, CellState, GridModel};
use serde::{Deserialize, Serialize};

/// Persisted board state: dimensions, generation, and the row-major cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub generation: u64,
    pub cells: Vec<CellState>,
}

impl GridSnapshot {
    /// Capture a grid at the given generation.
    pub fn capture(grid: &GridModel, generation: u64) -> Self {
        let (rows, cols) = grid.size();
        Self {
            rows,
            cols,
            generation,
            cells: grid.cells().to_vec(),
        }
    }

    /// Rebuild a grid. Fails with `InvalidDimension` if the cell count does
    /// not match `rows * cols`.
    pub fn to_grid(&self) -> Result<GridModel, BoardError> {
        GridModel::from_cells(self.rows, self.cols, self.cells.clone())
    }

    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }
}
