use crate::domain::{CellState, GridModel};
use glam::Vec3;

/// One derived instance: where it sits in the grid and what it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstanceRecord {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

/// CPU-side per-instance data for one instanced draw of the board.
///
/// The texture-index array is rebuilt in full from the grid on every
/// `rebuild`; it is never patched cell by cell.
#[derive(Clone, Debug)]
pub struct InstanceRenderBatch {
    rows: usize,
    cols: usize,
    row_step: Vec3,
    col_step: Vec3,
    translation: Vec3,
    type_indices: Vec<i32>,
}

impl InstanceRenderBatch {
    /// Create an all-dead batch sized for `rows x cols` instances
    pub fn new(rows: usize, cols: usize, row_step: Vec3, col_step: Vec3) -> Self {
        Self {
            rows,
            cols,
            row_step,
            col_step,
            translation: Vec3::ZERO,
            type_indices: vec![CellState::Dead.texture_index(); rows * cols],
        }
    }

    /// Place the board's origin (instance 0) at `translation` in world space
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Model translation of the whole board
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Recompute every instance's texture index from the grid, row-major
    pub fn rebuild(&mut self, grid: &GridModel) -> &[i32] {
        let (rows, cols) = grid.size();
        self.rows = rows;
        self.cols = cols;

        self.type_indices.clear();
        self.type_indices
            .extend(grid.cells().iter().map(|state| state.texture_index()));
        &self.type_indices
    }

    pub fn type_indices(&self) -> &[i32] {
        &self.type_indices
    }

    /// World-space offset between vertically adjacent instances
    pub fn row_step(&self) -> Vec3 {
        self.row_step
    }

    /// World-space offset between horizontally adjacent instances
    pub fn col_step(&self) -> Vec3 {
        self.col_step
    }

    /// Instances laid out per row before the shader advances by `row_step`
    pub fn instances_per_row(&self) -> usize {
        self.cols
    }

    pub fn instance_count(&self) -> usize {
        self.type_indices.len()
    }

    /// Offset of instance `index` from the board origin
    pub fn instance_offset(&self, index: usize) -> Option<Vec3> {
        (index < self.rows * self.cols).then(|| {
            let row = (index / self.cols) as f32;
            let col = (index % self.cols) as f32;
            self.row_step * row + self.col_step * col
        })
    }

    /// World position of instance `index`: model translation plus offset
    pub fn world_position(&self, index: usize) -> Option<Vec3> {
        self.instance_offset(index).map(|offset| self.translation + offset)
    }

    /// Cell whose instance is nearest to a world point, projected on the XZ plane.
    /// Returns None when the point is off the board or the steps are degenerate.
    pub fn locate(&self, world: Vec3) -> Option<(usize, usize)> {
        let point = world - self.translation;
        let (a, b) = (self.col_step, self.row_step);
        let det = a.x * b.z - a.z * b.x;
        if det.abs() < f32::EPSILON {
            return None;
        }

        let col = (point.x * b.z - point.z * b.x) / det;
        let row = (a.x * point.z - a.z * point.x) / det;
        let (row, col) = (row.round(), col.round());

        let in_bounds = row >= 0.0 && col >= 0.0 && (row as usize) < self.rows && (col as usize) < self.cols;
        in_bounds.then(|| (row as usize, col as usize))
    }

    /// Per-instance records derived from the grid
    pub fn records(grid: &GridModel) -> impl Iterator<Item = InstanceRecord> + '_ {
        grid.iter_cells()
            .enumerate()
            .map(|(index, (row, col, state))| InstanceRecord { index, row, col, state })
    }

    /// True if the cached indices describe exactly this grid
    pub fn is_consistent_with(&self, grid: &GridModel) -> bool {
        self.type_indices.len() == grid.len()
            && self
                .type_indices
                .iter()
                .zip(grid.cells())
                .all(|(&idx, state)| idx == state.texture_index())
    }
}
