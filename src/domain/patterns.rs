use super::{BoardError, GridModel, Player};

/// A seed shape that can be stamped onto the board for one player
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of live cells
}

impl Pattern {
    /// Create a new pattern from live cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Place the pattern with its top-left corner at (row, col).
    /// Either every cell fits and is written, or nothing changes.
    pub fn place_on(&self, grid: &mut GridModel, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        for (r, c) in self.cells_at(grid, row, col)? {
            grid.set(r, c, player.alive())?;
        }
        Ok(())
    }

    /// Grid cells covered with the top-left corner at (row, col), all
    /// bounds-checked. Offsets that overflow count as out of range.
    pub fn cells_at(&self, grid: &GridModel, row: usize, col: usize) -> Result<Vec<(usize, usize)>, BoardError> {
        let (rows, cols) = grid.size();

        self.cells
            .iter()
            .map(|&(dr, dc)| -> Result<(usize, usize), BoardError> {
                let (r, c) = row
                    .checked_add(dr)
                    .zip(col.checked_add(dc))
                    .ok_or(BoardError::OutOfRange { row, col, rows, cols })?;
                grid.index_of(r, c)?;
                Ok((r, c))
            })
            .collect()
    }
}

/// Small library of classic shapes
pub mod presets {
    use super::*;

    /// Glider - moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - three in a row
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Period 2 oscillator in classic Life", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Block - still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Beehive - still life
    pub fn beehive() -> Pattern {
        Pattern::new(
            "Beehive",
            "Still life",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 3),
                (2, 1), (2, 2),
            ],
        )
    }

    /// R-pentomino - long-lived methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Single cell
    pub fn dot() -> Pattern {
        Pattern::new("Dot", "Single live cell", vec![(0, 0)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), block(), beehive(), r_pentomino(), dot()]
    }

    /// Look a pattern up by name, ignoring case
    pub fn by_name(name: &str) -> Result<Pattern, BoardError> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| BoardError::UnknownPattern(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState;

    #[test]
    fn test_pattern_extent() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        assert_eq!(presets::blinker().cols, 3);
    }

    #[test]
    fn test_place_for_player() {
        let mut grid = GridModel::new(6, 6).unwrap();
        presets::block().place_on(&mut grid, 2, 3, Player::Two).unwrap();

        assert_eq!(grid.population(Player::Two), 4);
        assert_eq!(grid.get(3, 4).unwrap(), CellState::P2Alive);
    }

    #[test]
    fn test_place_out_of_bounds_is_all_or_nothing() {
        let mut grid = GridModel::new(4, 4).unwrap();
        let result = presets::glider().place_on(&mut grid, 2, 2, Player::One);

        assert!(matches!(result, Err(BoardError::OutOfRange { .. })));
        assert_eq!(grid.population(Player::One), 0);
    }

    #[test]
    fn test_place_near_usize_max_is_out_of_range() {
        let mut grid = GridModel::new(4, 4).unwrap();
        let block = presets::block();

        assert!(matches!(
            block.place_on(&mut grid, usize::MAX, 0, Player::One),
            Err(BoardError::OutOfRange { .. })
        ));
        assert!(matches!(
            block.place_on(&mut grid, 0, usize::MAX, Player::One),
            Err(BoardError::OutOfRange { .. })
        ));
        assert_eq!(grid.population(Player::One), 0);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(presets::by_name("beehive").unwrap().cells.len(), 6);
        assert!(matches!(
            presets::by_name("spaceship"),
            Err(BoardError::UnknownPattern(_))
        ));
    }
}
