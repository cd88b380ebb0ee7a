use super::{InstanceFrame, InstanceRenderer};
use crate::application::Camera;
use crate::domain::TEXTURE_SLOTS;
use ::glam::{Vec2, Vec3};
use macroquad::prelude::*;

/// Draws each instance as a flat quad, standing in for a textured mesh.
/// One colour per texture slot.
pub struct ScreenRenderer {
    pub camera: Camera,
    palette: [Color; TEXTURE_SLOTS],
}

impl ScreenRenderer {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            palette: [
                Color::from_rgba(25, 25, 25, 255),    // dead
                Color::from_rgba(0, 200, 120, 255),   // p1 alive
                Color::from_rgba(70, 130, 230, 255),  // p2 alive
                Color::from_rgba(0, 90, 55, 255),     // p1 dying
                Color::from_rgba(30, 55, 110, 255),   // p2 dying
                Color::from_rgba(180, 255, 200, 255), // p1 marked
                Color::from_rgba(180, 210, 255, 255), // p2 marked
            ],
        }
    }

    fn shade(&self, texture_index: i32, light: Vec3) -> Color {
        let base = usize::try_from(texture_index)
            .ok()
            .and_then(|slot| self.palette.get(slot).copied())
            .unwrap_or(MAGENTA);
        Color::new(base.r * light.x, base.g * light.y, base.b * light.z, base.a)
    }
}

impl InstanceRenderer for ScreenRenderer {
    type Output = ();

    fn draw_instances(&mut self, frame: &InstanceFrame<'_>) {
        let step = frame.row_step.length().min(frame.col_step.length());
        let size = (step * self.camera.zoom * 0.9).max(1.0);
        let light = (frame.lighting.ambient + frame.lighting.diffuse).min(Vec3::ONE);
        let half = Vec2::splat(size / 2.0);

        for (index, &texture_index) in frame.sample_types.iter().enumerate() {
            let corner = self.camera.world_to_screen(frame.world_position(index)) - half;
            if corner.x > screen_width() || corner.y > screen_height() || corner.x + size < 0.0 || corner.y + size < 0.0 {
                continue;
            }
            draw_rectangle(corner.x, corner.y, size, size, self.shade(texture_index, light));
        }
    }
}
