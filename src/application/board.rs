use super::BoardConfig;
use crate::domain::{
    AutomatonStepper, BoardError, CellState, GridModel, GridSnapshot, Pattern, Player, presets,
};
use crate::rendering::{InstanceFrame, InstanceRenderBatch, InstanceRenderer, ShaderBindings};
use rand::Rng;
use tracing::{debug, info, warn};

/// BoardController owns one board: its grid, the stepper that advances it,
/// and the instance batch handed to the renderer.
///
/// The batch always describes the grid as of the last `rebuild`. Any direct
/// edit marks it stale until the caller rebuilds.
pub struct BoardController {
    grid: GridModel,
    stepper: AutomatonStepper,
    batch: InstanceRenderBatch,
    marks: Vec<(usize, usize, Player)>,
    parallel_threshold: usize,
    random_density: f64,
    stale: bool,
}

impl BoardController {
    /// Build a board from config, place its seeds and build the first batch
    pub fn new(config: &BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;

        let mut grid = GridModel::new(config.rows, config.cols)?;
        for seed in &config.seeds {
            presets::by_name(&seed.pattern)?.place_on(&mut grid, seed.row, seed.col, seed.player)?;
        }

        let mut batch = InstanceRenderBatch::new(config.rows, config.cols, config.row_step, config.col_step)
            .with_translation(config.translation);
        batch.rebuild(&grid);

        info!(
            rows = config.rows,
            cols = config.cols,
            seeds = config.seeds.len(),
            tie = config.tie_policy.name(),
            "board created"
        );

        Ok(Self {
            grid,
            stepper: AutomatonStepper::new(config.tie_policy),
            batch,
            marks: Vec::new(),
            parallel_threshold: config.parallel_threshold,
            random_density: config.random_density,
            stale: false,
        })
    }

    /// Advance one generation, re-apply surviving marks and rebuild the batch
    pub fn advance(&mut self) -> Result<(), BoardError> {
        if self.grid.len() >= self.parallel_threshold {
            self.stepper.advance_parallel(&mut self.grid)?;
        } else {
            self.stepper.advance(&mut self.grid)?;
        }

        self.reapply_marks()?;
        self.rebuild();

        debug!(
            generation = self.stepper.generation(),
            p1 = self.grid.population(Player::One),
            p2 = self.grid.population(Player::Two),
            "advanced board"
        );
        Ok(())
    }

    /// Marks survive a step only while their cell is still alive for the
    /// player who placed them.
    fn reapply_marks(&mut self) -> Result<(), BoardError> {
        let grid = &mut self.grid;
        let mut kept = Vec::with_capacity(self.marks.len());

        for (row, col, player) in self.marks.drain(..) {
            if grid.get(row, col)?.is_alive_for(player) {
                grid.set(row, col, player.marked())?;
                kept.push((row, col, player));
            } else {
                debug!(row, col, "dropping mark on dead cell");
            }
        }

        self.marks = kept;
        Ok(())
    }

    /// Recompute the instance batch from the grid
    pub fn rebuild(&mut self) -> &[i32] {
        self.stale = false;
        self.batch.rebuild(&self.grid)
    }

    /// The cached batch. Never rebuilt here; check `is_stale` after edits.
    pub fn instance_data(&self) -> &InstanceRenderBatch {
        &self.batch
    }

    /// True if the grid changed since the last rebuild
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        self.grid.get(row, col)
    }

    /// Overwrite one cell. A manual edit clears any mark held on that cell.
    pub fn set_cell(&mut self, row: usize, col: usize, state: CellState) -> Result<(), BoardError> {
        self.grid.set(row, col, state)?;
        self.marks.retain(|&(r, c, _)| (r, c) != (row, col));
        self.stale = true;
        Ok(())
    }

    /// Highlight a cell for `player` and keep it highlighted while it lives.
    /// Only a cell already alive for `player` can be marked.
    pub fn mark_cell(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        if !self.grid.get(row, col)?.is_alive_for(player) {
            return Err(BoardError::NotMarkable { row, col });
        }
        self.set_cell(row, col, player.marked())?;
        self.marks.push((row, col, player));
        Ok(())
    }

    /// Drop every mark, returning cells still marked by their player to plain alive
    pub fn clear_marks(&mut self) -> Result<(), BoardError> {
        for (row, col, player) in std::mem::take(&mut self.marks) {
            if self.grid.get(row, col)? == player.marked() {
                self.grid.set(row, col, player.alive())?;
            }
        }
        self.stale = true;
        Ok(())
    }

    pub fn marks(&self) -> &[(usize, usize, Player)] {
        &self.marks
    }

    /// Stamp a pattern for `player`; nothing changes if it does not fit.
    /// Marks under the stamped cells are dropped.
    pub fn place_pattern(&mut self, pattern: &Pattern, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let stamped = pattern.cells_at(&self.grid, row, col)?;
        pattern.place_on(&mut self.grid, row, col, player)?;
        self.marks.retain(|&(r, c, _)| !stamped.contains(&(r, c)));
        self.stale = true;
        Ok(())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.marks.clear();
        self.stepper.set_generation(0);
        self.stale = true;
    }

    /// Refill with random live cells for both players
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.randomize(rng, self.random_density);
        self.marks.clear();
        self.stepper.set_generation(0);
        self.stale = true;
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.grid, self.stepper.generation())
    }

    /// Replace the board with a snapshot of the same dimensions
    pub fn restore(&mut self, snapshot: &GridSnapshot) -> Result<(), BoardError> {
        if (snapshot.rows, snapshot.cols) != self.grid.size() {
            return Err(BoardError::InvalidDimension {
                rows: snapshot.rows,
                cols: snapshot.cols,
            });
        }

        self.grid = snapshot.to_grid()?;
        self.stepper.set_generation(snapshot.generation);
        self.marks.clear();
        self.rebuild();
        info!(generation = snapshot.generation, "board restored");
        Ok(())
    }

    /// Hand the current batch to `renderer` for one instanced draw.
    ///
    /// Fails if no shader set is active or the batch is behind the grid.
    pub fn render<R: InstanceRenderer>(&self, renderer: &mut R, bindings: &ShaderBindings) -> Result<R::Output, BoardError> {
        let shader_set = bindings.require_active()?;
        if self.stale {
            warn!("render requested before rebuild");
            return Err(BoardError::RenderPrecondition(
                "instance data is stale; rebuild before rendering".into(),
            ));
        }

        let frame = InstanceFrame::new(shader_set, &self.batch, bindings.lighting);
        Ok(renderer.draw_instances(&frame))
    }

    pub fn generation(&self) -> u64 {
        self.stepper.generation()
    }

    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    pub fn population(&self, player: Player) -> usize {
        self.grid.population(player)
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }
}
