use glam::{Vec2, Vec3};

/// Top-down view of the board's XZ plane: pixels per world unit plus a
/// screen-space pan offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub zoom: f32,
}

impl Camera {
    pub const MIN_ZOOM: f32 = 2.0;
    pub const MAX_ZOOM: f32 = 200.0;
    const DEFAULT_ZOOM: f32 = 16.0;

    pub fn new() -> Self {
        Self {
            offset: Vec2::splat(20.0),
            zoom: Self::DEFAULT_ZOOM,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Pan camera by a screen-space delta
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Project a board-local world position onto the screen
    pub fn world_to_screen(&self, world: Vec3) -> Vec2 {
        Vec2::new(world.x, world.z) * self.zoom + self.offset
    }

    /// Unproject a screen position onto the board plane (y = 0)
    pub fn screen_to_world(&self, screen: Vec2) -> Vec3 {
        let p = (screen - self.offset) / self.zoom;
        Vec3::new(p.x, 0.0, p.y)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
