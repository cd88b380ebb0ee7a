// Domain layer - cells, grid, automaton rules
pub mod domain;

// Application layer - board controller, config and playback
pub mod application;

// Infrastructure layer - render handoff and viewer input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{AutomatonStepper, BirthTiePolicy, BoardError, CellState, GridModel, GridSnapshot, Player, presets};
pub use application::{BoardConfig, BoardController, Camera, SeedPlacement, Session};
pub use rendering::{DebugTextRenderer, InstanceFrame, InstanceRenderBatch, InstanceRenderer, ScreenRenderer, ShaderBindings};
