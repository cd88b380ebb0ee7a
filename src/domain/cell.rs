use serde::{Deserialize, Serialize};

/// The two sides sharing a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn alive(self) -> CellState {
        match self {
            Player::One => CellState::P1Alive,
            Player::Two => CellState::P2Alive,
        }
    }

    pub const fn dying(self) -> CellState {
        match self {
            Player::One => CellState::P1Dying,
            Player::Two => CellState::P2Dying,
        }
    }

    pub const fn marked(self) -> CellState {
        match self {
            Player::One => CellState::P1Marked,
            Player::Two => CellState::P2Marked,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Number of distinct texture slots the rendering layer must provide,
/// one per `CellState` variant.
pub const TEXTURE_SLOTS: usize = 7;

/// Visual and logical state of a single board cell.
///
/// Dying is the one-generation fade between Alive and Dead. Marked is an
/// overlay placed by the controller on a live cell; for the automaton it
/// behaves like Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Dead,
    P1Alive,
    P2Alive,
    P1Dying,
    P2Dying,
    P1Marked,
    P2Marked,
}

impl CellState {
    /// Player owning this cell, if any. Dead cells have no owner.
    pub const fn owner(self) -> Option<Player> {
        match self {
            CellState::Dead => None,
            CellState::P1Alive | CellState::P1Dying | CellState::P1Marked => Some(Player::One),
            CellState::P2Alive | CellState::P2Dying | CellState::P2Marked => Some(Player::Two),
        }
    }

    /// True if the cell counts as a live neighbour for `player`.
    pub const fn is_alive_for(self, player: Player) -> bool {
        matches!(
            (self, player),
            (CellState::P1Alive | CellState::P1Marked, Player::One)
                | (CellState::P2Alive | CellState::P2Marked, Player::Two)
        )
    }

    pub const fn is_dying(self) -> bool {
        matches!(self, CellState::P1Dying | CellState::P2Dying)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, CellState::P1Marked | CellState::P2Marked)
    }

    /// Texture-selection index handed to the shader, one per variant.
    ///
    /// Dead, P1 and P2 occupy slots 0..3 in the order the board textures are
    /// loaded; the fade and highlight variants follow.
    pub const fn texture_index(self) -> i32 {
        match self {
            CellState::Dead => 0,
            CellState::P1Alive => 1,
            CellState::P2Alive => 2,
            CellState::P1Dying => 3,
            CellState::P2Dying => 4,
            CellState::P1Marked => 5,
            CellState::P2Marked => 6,
        }
    }

    /// All variants in texture-slot order.
    pub const fn all() -> [CellState; TEXTURE_SLOTS] {
        [
            CellState::Dead,
            CellState::P1Alive,
            CellState::P2Alive,
            CellState::P1Dying,
            CellState::P2Dying,
            CellState::P1Marked,
            CellState::P2Marked,
        ]
    }
}
