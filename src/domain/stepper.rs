//! Generation stepping for the two-player board.
//!
//! Every generation is computed from a read-only view of the current cells
//! into a fresh buffer, which then replaces the grid contents in one swap.
//! Neighbourhoods stop at the board edge; there is no wraparound.

use super::{BirthTiePolicy, BoardError, CellState, GridModel, Player, rules::next_state};
use rayon::prelude::*;

/// Count neighbours of (row, col) that are alive for `player`.
/// Edge and corner cells simply have fewer neighbours.
pub fn count_live_neighbors(grid: &GridModel, row: usize, col: usize, player: Player) -> u8 {
    let (rows, cols) = grid.size();
    count_in(grid.cells(), rows, cols, row, col, player)
}

fn count_in(cells: &[CellState], rows: usize, cols: usize, row: usize, col: usize, player: Player) -> u8 {
    let row_range = row.saturating_sub(1)..=(row + 1).min(rows - 1);

    row_range
        .flat_map(|r| {
            let col_range = col.saturating_sub(1)..=(col + 1).min(cols - 1);
            col_range.map(move |c| (r, c))
        })
        .filter(|&(r, c)| r != row || c != col)
        .filter(|&(r, c)| cells[r * cols + c].is_alive_for(player))
        .count() as u8
}

/// Next state of a single cell given the current generation
fn evolve_cell(cells: &[CellState], rows: usize, cols: usize, idx: usize, tie: BirthTiePolicy) -> CellState {
    let (row, col) = (idx / cols, idx % cols);
    let p1 = count_in(cells, rows, cols, row, col, Player::One);
    let p2 = count_in(cells, rows, cols, row, col, Player::Two);
    next_state(cells[idx], p1, p2, tie)
}

/// AutomatonStepper advances a GridModel one generation at a time.
#[derive(Clone, Debug, Default)]
pub struct AutomatonStepper {
    tie: BirthTiePolicy,
    generation: u64,
}

impl AutomatonStepper {
    pub fn new(tie: BirthTiePolicy) -> Self {
        Self { tie, generation: 0 }
    }

    pub fn tie_policy(&self) -> BirthTiePolicy {
        self.tie
    }

    /// Generations advanced so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Restart counting from `generation` (used when restoring a snapshot)
    pub fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    /// Compute the next generation serially
    pub fn advance(&mut self, grid: &mut GridModel) -> Result<(), BoardError> {
        let (rows, cols) = grid.size();
        let tie = self.tie;
        let next = {
            let cells = grid.cells();
            (0..cells.len())
                .map(|idx| evolve_cell(cells, rows, cols, idx, tie))
                .collect()
        };

        grid.replace_cells(next)?;
        self.generation += 1;
        Ok(())
    }

    /// Same result as `advance`, with rows computed in parallel by rayon.
    /// Returns only once the whole generation is in place.
    pub fn advance_parallel(&mut self, grid: &mut GridModel) -> Result<(), BoardError> {
        let (rows, cols) = grid.size();
        let tie = self.tie;
        let next = {
            let cells = grid.cells();
            (0..cells.len())
                .into_par_iter()
                .with_min_len(cols)
                .map(|idx| evolve_cell(cells, rows, cols, idx, tie))
                .collect()
        };

        grid.replace_cells(next)?;
        self.generation += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)], state: CellState) -> GridModel {
        let mut grid = GridModel::new(rows, cols).unwrap();
        for &(r, c) in alive {
            grid.set(r, c, state).unwrap();
        }
        grid
    }

    #[test]
    fn test_counts_without_wraparound() {
        let grid = grid_with(3, 3, &[(0, 0), (0, 1), (1, 0), (2, 2)], CellState::P1Alive);

        assert_eq!(count_live_neighbors(&grid, 0, 0, Player::One), 2);
        assert_eq!(count_live_neighbors(&grid, 1, 1, Player::One), 4);
        assert_eq!(count_live_neighbors(&grid, 2, 0, Player::One), 1);
        assert_eq!(count_live_neighbors(&grid, 1, 1, Player::Two), 0);
    }

    #[test]
    fn test_counts_on_single_cell_grid() {
        let grid = grid_with(1, 1, &[(0, 0)], CellState::P2Alive);
        assert_eq!(count_live_neighbors(&grid, 0, 0, Player::Two), 0);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut stepper = AutomatonStepper::default();
        let mut grid = GridModel::new(12, 9).unwrap();

        for _ in 0..5 {
            stepper.advance(&mut grid).unwrap();
        }

        assert!(grid.cells().iter().all(|&c| c == CellState::Dead));
        assert_eq!(stepper.generation(), 5);
    }

    #[test]
    fn test_isolated_cell_fades_then_dies() {
        let mut stepper = AutomatonStepper::default();
        let mut grid = grid_with(5, 5, &[(2, 2)], CellState::P1Alive);

        stepper.advance(&mut grid).unwrap();
        assert_eq!(grid.get(2, 2).unwrap(), CellState::P1Dying);

        stepper.advance(&mut grid).unwrap();
        assert_eq!(grid.get(2, 2).unwrap(), CellState::Dead);
    }

    #[test]
    fn test_block_still_life() {
        let mut stepper = AutomatonStepper::default();
        let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
        let mut grid = grid_with(10, 10, &block, CellState::P2Alive);
        let initial = grid.clone();

        for _ in 0..10 {
            stepper.advance(&mut grid).unwrap();
            assert_eq!(grid, initial);
        }
    }

    #[test]
    fn test_blinker_evolution() {
        let mut stepper = AutomatonStepper::default();

        // Horizontal blinker at center
        let mut grid = grid_with(10, 10, &[(5, 4), (5, 5), (5, 6)], CellState::P1Alive);

        // After one generation, should be vertical; the arms fade
        stepper.advance(&mut grid).unwrap();
        assert_eq!(grid.get(4, 5).unwrap(), CellState::P1Alive);
        assert_eq!(grid.get(5, 5).unwrap(), CellState::P1Alive);
        assert_eq!(grid.get(6, 5).unwrap(), CellState::P1Alive);
        assert_eq!(grid.get(5, 4).unwrap(), CellState::P1Dying);
        assert_eq!(grid.get(5, 6).unwrap(), CellState::P1Dying);
        assert_eq!(grid.population(Player::One), 3);

        // Fading arms are not reborn while dying, so the horizontal
        // phase does not come back; only the center survives
        stepper.advance(&mut grid).unwrap();
        assert_eq!(grid.get(5, 4).unwrap(), CellState::Dead);
        assert_eq!(grid.get(5, 6).unwrap(), CellState::Dead);
        assert_eq!(grid.get(5, 5).unwrap(), CellState::P1Alive);
        assert_eq!(grid.get(4, 5).unwrap(), CellState::P1Dying);
        assert_eq!(grid.population(Player::One), 1);
    }

    #[test]
    fn test_blinker_alive_set_matches_classic_life() {
        let mut stepper = AutomatonStepper::default();
        let mut grid = grid_with(9, 9, &[(3, 4), (4, 4), (5, 4)], CellState::P2Alive);

        stepper.advance(&mut grid).unwrap();

        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, s)| s.is_alive_for(Player::Two))
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(alive, vec![(4, 3), (4, 4), (4, 5)]);
    }

    #[test]
    fn test_players_do_not_feed_each_other() {
        let mut stepper = AutomatonStepper::default();
        let mut grid = GridModel::new(7, 7).unwrap();
        grid.set(3, 2, CellState::P1Alive).unwrap();
        grid.set(3, 3, CellState::P2Alive).unwrap();
        grid.set(3, 4, CellState::P1Alive).unwrap();

        stepper.advance(&mut grid).unwrap();

        // A mixed row is not a blinker
        assert_eq!(grid.get(3, 3).unwrap(), CellState::P2Dying);
        assert_eq!(grid.get(2, 3).unwrap(), CellState::Dead);
        assert_eq!(grid.get(4, 3).unwrap(), CellState::Dead);
    }

    #[test]
    fn test_tie_policy_applies_to_contested_birth() {
        // (2, 2) sees three P1 cells above and three P2 cells below
        let mut grid = GridModel::new(5, 5).unwrap();
        for c in 1..=3 {
            grid.set(1, c, CellState::P1Alive).unwrap();
            grid.set(3, c, CellState::P2Alive).unwrap();
        }

        let mut neither = grid.clone();
        AutomatonStepper::new(BirthTiePolicy::Neither).advance(&mut neither).unwrap();
        assert_eq!(neither.get(2, 2).unwrap(), CellState::Dead);

        let mut second = grid.clone();
        AutomatonStepper::new(BirthTiePolicy::PlayerTwo).advance(&mut second).unwrap();
        assert_eq!(second.get(2, 2).unwrap(), CellState::P2Alive);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = GridModel::new(40, 50).unwrap();

        // Create a random-ish pattern for both players
        for i in 0..300 {
            let state = if i % 3 == 0 { CellState::P2Alive } else { CellState::P1Alive };
            grid.set((i * 7) % 40, (i * 11) % 50, state).unwrap();
        }

        let mut serial = grid.clone();
        let mut parallel = grid;
        let mut a = AutomatonStepper::default();
        let mut b = AutomatonStepper::default();

        for _ in 0..6 {
            a.advance(&mut serial).unwrap();
            b.advance_parallel(&mut parallel).unwrap();
            assert_eq!(serial, parallel);
        }
        assert_eq!(a.generation(), b.generation());
    }
}
