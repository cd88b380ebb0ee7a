use super::{CellState, Player};
use serde::{Deserialize, Serialize};

/// Outcome for a dead cell that has exactly three live neighbours of
/// both players at once.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum BirthTiePolicy {
    /// Neither player claims the cell; it stays dead.
    #[default]
    Neither,
    PlayerOne,
    PlayerTwo,
}

impl BirthTiePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            BirthTiePolicy::Neither => "Neither",
            BirthTiePolicy::PlayerOne => "Player one",
            BirthTiePolicy::PlayerTwo => "Player two",
        }
    }

    const fn winner(self) -> Option<Player> {
        match self {
            BirthTiePolicy::Neither => None,
            BirthTiePolicy::PlayerOne => Some(Player::One),
            BirthTiePolicy::PlayerTwo => Some(Player::Two),
        }
    }
}

/// Two-player B3/S23 with a one-generation fade:
/// 1. Dead cell with exactly 3 neighbours of one player and fewer than 3 of
///    the other is born for that player
/// 2. A birth contested by a crowd (3+ of the other player) is blocked;
///    an exact 3/3 tie goes to `tie`
/// 3. Live cell with 2-3 neighbours of its own player survives, otherwise dies
/// 4. Dying cells are dead next generation, whatever their neighbours
///
/// Marked cells evolve like live cells; this function never yields Marked.
pub const fn next_state(current: CellState, p1: u8, p2: u8, tie: BirthTiePolicy) -> CellState {
    match current {
        CellState::Dead => birth(p1, p2, tie),
        CellState::P1Alive | CellState::P1Marked => survive(Player::One, p1),
        CellState::P2Alive | CellState::P2Marked => survive(Player::Two, p2),
        CellState::P1Dying | CellState::P2Dying => CellState::Dead,
    }
}

const fn survive(player: Player, own: u8) -> CellState {
    match own {
        2 | 3 => player.alive(),
        _ => player.dying(),
    }
}

const fn birth(p1: u8, p2: u8, tie: BirthTiePolicy) -> CellState {
    match (p1, p2) {
        (3, 3) => match tie.winner() {
            Some(player) => player.alive(),
            None => CellState::Dead,
        },
        (3, other) if other < 3 => CellState::P1Alive,
        (other, 3) if other < 3 => CellState::P2Alive,
        _ => CellState::Dead,
    }
}
