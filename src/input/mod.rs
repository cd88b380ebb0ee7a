use macroquad::prelude::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_down, is_mouse_button_pressed, mouse_wheel,
};
use glam::Vec2;
use tracing::warn;
use crate::application::{Camera, Session};
use crate::domain::{BoardError, Player};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Tracks middle-button drags between frames
#[derive(Default)]
pub struct PanState {
    last: Option<Vec2>,
}

impl PanState {
    /// Pan with middle mouse button drag
    pub fn update(&mut self, camera: &mut Camera, mouse_pos: Vec2) {
        if !is_mouse_button_down(MouseButton::Middle) {
            self.last = None;
            return;
        }
        if let Some(last) = self.last {
            camera.pan(mouse_pos - last);
        }
        self.last = Some(mouse_pos);
    }
}

/// Left click marks a cell for player one, right click for player two
pub fn handle_mouse_mark(session: &mut Session, camera: &Camera, mouse_pos: Vec2) -> Result<(), BoardError> {
    let player = if is_mouse_button_pressed(MouseButton::Left) {
        Player::One
    } else if is_mouse_button_pressed(MouseButton::Right) {
        Player::Two
    } else {
        return Ok(());
    };

    let point = camera.screen_to_world(mouse_pos);
    session.mark_at(point, player)?;
    Ok(())
}

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session, camera: &mut Camera) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let mut session = actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::N) {
        if let Err(err) = session.step() {
            warn!(%err, "step failed");
        }
    }
    if is_key_pressed(KeyCode::C) {
        session.clear();
    }
    if is_key_pressed(KeyCode::R) {
        session.randomize(&mut rand::rng());
    }
    if is_key_pressed(KeyCode::M) {
        if let Err(err) = session.clear_marks() {
            warn!(%err, "clearing marks failed");
        }
    }

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    session
}
