use super::{BoardConfig, BoardController};
use crate::domain::{BoardError, Player};
use crate::rendering::ShaderBindings;
use glam::Vec3;
use rand::Rng;
use tracing::info;

/// Session drives a board from the frame loop: play/pause, step rate and
/// the shader bindings the renderer is given.
pub struct Session {
    pub board: BoardController,
    pub bindings: ShaderBindings,
    pub is_running: bool,
    pub updates_per_second: f32,
    pub update_timer: f32,
    pub last_step_time_ms: f32,
}

impl Session {
    /// Build the board and activate the first configured shader set
    pub fn new(config: &BoardConfig) -> Result<Self, BoardError> {
        let board = BoardController::new(config)?;
        let mut bindings = ShaderBindings::new(config.shader_sets.iter().cloned(), config.lighting);
        if let Some(first) = config.shader_sets.first() {
            bindings.activate(first)?;
        }

        Ok(Self {
            board,
            bindings,
            is_running: false,
            update_timer: 0.0,
            updates_per_second: 4.0,
            last_step_time_ms: 0.0,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!(running = self.is_running, "playback toggled");
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 30.0);
        self
    }

    /// Advance exactly one generation, timing it
    pub fn step(&mut self) -> Result<(), BoardError> {
        let start = std::time::Instant::now();
        self.board.advance()?;
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        Ok(())
    }

    /// Update by one frame. Returns true if a generation was advanced.
    pub fn tick(&mut self, delta_time: f32) -> Result<bool, BoardError> {
        if !self.is_running {
            return Ok(false);
        }

        self.update_timer += delta_time;
        if self.update_timer < 1.0 / self.updates_per_second {
            return Ok(false);
        }

        self.update_timer = 0.0;
        self.step()?;
        Ok(true)
    }

    /// Mark the cell under a world point. Clicks off the board, or on a cell
    /// not alive for `player`, are ignored.
    pub fn mark_at(&mut self, point: Vec3, player: Player) -> Result<bool, BoardError> {
        let Some((row, col)) = self.board.instance_data().locate(point) else {
            return Ok(false);
        };
        if !self.board.get_cell(row, col)?.is_alive_for(player) {
            return Ok(false);
        }

        self.board.mark_cell(row, col, player)?;
        self.board.rebuild();
        Ok(true)
    }

    /// Clear the board and pause
    pub fn clear(&mut self) {
        self.board.clear();
        self.board.rebuild();
        self.is_running = false;
    }

    /// Randomize the board and pause
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.randomize(rng);
        self.board.rebuild();
        self.is_running = false;
    }

    /// Remove all marks
    pub fn clear_marks(&mut self) -> Result<(), BoardError> {
        self.board.clear_marks()?;
        self.board.rebuild();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellState, presets};

    fn session() -> Session {
        Session::new(&BoardConfig::empty(6, 6)).unwrap()
    }

    #[test]
    fn test_first_shader_set_is_active() {
        assert_eq!(session().bindings.active(), Some("instanced"));
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut session = session().toggle_running();
        session.updates_per_second = 2.0;

        assert!(!session.tick(0.2).unwrap());
        assert!(session.tick(0.4).unwrap());
        assert_eq!(session.board.generation(), 1);
    }

    #[test]
    fn test_paused_session_does_not_advance() {
        let mut session = session();
        assert!(!session.tick(10.0).unwrap());
        assert_eq!(session.board.generation(), 0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let session = session().adjust_speed(100.0);
        assert_eq!(session.updates_per_second, 30.0);
        assert_eq!(session.adjust_speed(-100.0).updates_per_second, 1.0);
    }

    #[test]
    fn test_mark_at_picks_cell_under_point() {
        let mut session = session();
        session
            .board
            .place_pattern(&presets::block(), 1, 1, Player::Two)
            .unwrap();

        let point = session.board.instance_data().world_position(6 + 2).unwrap();
        assert!(session.mark_at(point, Player::Two).unwrap());
        assert_eq!(session.board.get_cell(1, 2).unwrap(), CellState::P2Marked);
        assert!(!session.board.is_stale());

        assert!(!session.mark_at(Vec3::new(-50.0, 0.0, 0.0), Player::One).unwrap());
    }

    #[test]
    fn test_mark_at_ignores_cells_not_alive_for_player() {
        let mut session = session();
        session
            .board
            .place_pattern(&presets::dot(), 0, 0, Player::One)
            .unwrap();
        session.board.rebuild();

        let own = session.board.instance_data().world_position(0).unwrap();
        let empty = session.board.instance_data().world_position(7).unwrap();
        assert!(!session.mark_at(own, Player::Two).unwrap());
        assert!(!session.mark_at(empty, Player::One).unwrap());
        assert_eq!(session.board.get_cell(0, 0).unwrap(), CellState::P1Alive);
        assert!(session.board.marks().is_empty());
    }

    #[test]
    fn test_mark_at_honours_translation() {
        let mut config = BoardConfig::empty(6, 6);
        config.translation = Vec3::new(100.0, 0.0, 100.0);
        let mut session = Session::new(&config).unwrap();
        session
            .board
            .place_pattern(&presets::dot(), 2, 3, Player::One)
            .unwrap();

        let local = session.board.instance_data().instance_offset(2 * 6 + 3).unwrap();
        assert!(!session.mark_at(local, Player::One).unwrap());
        assert!(session.mark_at(local + config.translation, Player::One).unwrap());
        assert_eq!(session.board.get_cell(2, 3).unwrap(), CellState::P1Marked);
    }
}
