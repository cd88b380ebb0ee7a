mod board;
mod camera;
mod config;
mod session;

pub use board::BoardController;
pub use camera::Camera;
pub use config::{BoardConfig, SeedPlacement};
pub use session::Session;
