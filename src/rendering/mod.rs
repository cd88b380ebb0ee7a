//! Render handoff for the board.
//!
//! The core only produces plain data: a flat texture-index array plus the
//! step vectors and row width a vertex shader needs to place each instance.
//! Uploading it and issuing the draw is left to an `InstanceRenderer`.

mod batch;
mod handoff;
mod screen;

pub use batch::{InstanceRecord, InstanceRenderBatch};
pub use handoff::{DebugTextRenderer, InstanceFrame, InstanceRenderer, Lighting, ShaderBindings};
pub use screen::ScreenRenderer;
