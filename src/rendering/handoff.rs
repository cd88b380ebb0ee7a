use super::InstanceRenderBatch;
use crate::domain::{BoardError, TEXTURE_SLOTS};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Phong light levels shared by every instance of the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.7),
            specular: Vec3::splat(0.5),
            shininess: 32.0,
        }
    }
}

impl Lighting {
    pub fn change_ambient(&mut self, change: Vec3) {
        self.ambient = (self.ambient + change).clamp(Vec3::ZERO, Vec3::ONE);
    }

    pub fn change_diffuse(&mut self, change: Vec3) {
        self.diffuse = (self.diffuse + change).clamp(Vec3::ZERO, Vec3::ONE);
    }

    pub fn change_specular(&mut self, change: Vec3) {
        self.specular = (self.specular + change).clamp(Vec3::ZERO, Vec3::ONE);
    }
}

/// Shader-side configuration, resolved once when a shader set is activated
/// and passed explicitly to every render call.
#[derive(Debug, Clone, Default)]
pub struct ShaderBindings {
    known_sets: Vec<String>,
    active: Option<String>,
    pub lighting: Lighting,
}

impl ShaderBindings {
    pub fn new(known_sets: impl IntoIterator<Item = impl Into<String>>, lighting: Lighting) -> Self {
        Self {
            known_sets: known_sets.into_iter().map(Into::into).collect(),
            active: None,
            lighting,
        }
    }

    /// Make `name` the active shader set. Unknown names leave the current
    /// selection untouched.
    pub fn activate(&mut self, name: &str) -> Result<(), BoardError> {
        if !self.known_sets.iter().any(|s| s == name) {
            return Err(BoardError::RenderPrecondition(format!(
                "could not find shader set: {name}"
            )));
        }
        self.active = Some(name.to_owned());
        Ok(())
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn known_sets(&self) -> &[String] {
        &self.known_sets
    }

    /// Error unless a shader set is active
    pub fn require_active(&self) -> Result<&str, BoardError> {
        self.active()
            .ok_or_else(|| BoardError::RenderPrecondition("no shader set has been enabled".into()))
    }
}

/// Everything the rendering layer needs for one instanced draw of the board.
#[derive(Debug, Clone, Copy)]
pub struct InstanceFrame<'a> {
    pub shader_set: &'a str,
    pub sample_types: &'a [i32],
    pub instance_count: usize,
    pub num_per_row: usize,
    pub row_step: Vec3,
    pub col_step: Vec3,
    /// Model translation applied to every instance
    pub translation: Vec3,
    pub texture_slots: usize,
    pub lighting: Lighting,
}

impl<'a> InstanceFrame<'a> {
    pub fn new(shader_set: &'a str, batch: &'a InstanceRenderBatch, lighting: Lighting) -> Self {
        Self {
            shader_set,
            sample_types: batch.type_indices(),
            instance_count: batch.instance_count(),
            num_per_row: batch.instances_per_row(),
            row_step: batch.row_step(),
            col_step: batch.col_step(),
            translation: batch.translation(),
            texture_slots: TEXTURE_SLOTS,
            lighting,
        }
    }

    /// Offset of instance `index`, as the vertex shader derives it
    pub fn offset_of(&self, index: usize) -> Vec3 {
        let per_row = self.num_per_row.max(1);
        self.row_step * (index / per_row) as f32 + self.col_step * (index % per_row) as f32
    }

    /// World position of instance `index` after the model translation
    pub fn world_position(&self, index: usize) -> Vec3 {
        self.translation + self.offset_of(index)
    }
}

/// Consumer of instance frames. Implemented by the graphics adapter; the
/// board core never touches a graphics API itself.
pub trait InstanceRenderer {
    /// The output type produced by this renderer.
    type Output;

    /// Issue one instanced draw for the whole board.
    fn draw_instances(&mut self, frame: &InstanceFrame<'_>) -> Self::Output;
}

/// Text renderer for logs, the CLI and tests.
///
/// Prints one character per instance, one line per board row.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Glyph for a texture index
    pub fn glyph(texture_index: i32) -> char {
        match texture_index {
            0 => '.',
            1 => 'x',
            2 => 'o',
            3 => '+',
            4 => '-',
            5 => 'X',
            6 => 'O',
            _ => '?',
        }
    }
}

impl InstanceRenderer for DebugTextRenderer {
    type Output = String;

    fn draw_instances(&mut self, frame: &InstanceFrame<'_>) -> String {
        let mut out = format!(
            "=== Board (shader={}, instances={}, per_row={}) ===\n",
            frame.shader_set, frame.instance_count, frame.num_per_row
        );

        for row in frame.sample_types.chunks(frame.num_per_row.max(1)) {
            out.extend(row.iter().map(|&idx| Self::glyph(idx)));
            out.push('\n');
        }
        out
    }
}
