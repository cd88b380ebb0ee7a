mod cell;
mod error;
mod grid;
mod rules;
mod patterns;
mod snapshot;
pub mod stepper;

pub use cell::{CellState, Player, TEXTURE_SLOTS};
pub use error::BoardError;
pub use grid::GridModel;
pub use rules::{BirthTiePolicy, next_state};
pub use patterns::{Pattern, presets};
pub use snapshot::GridSnapshot;
pub use stepper::{AutomatonStepper, count_live_neighbors};
