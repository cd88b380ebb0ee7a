use ::glam::Vec2;
use life_board::{BoardConfig, Camera, Player, ScreenRenderer, Session, input};
use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Board - Instanced Viewer".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Board config from the first CLI argument, or the built-in default
fn load_config() -> BoardConfig {
    let Some(path) = std::env::args().nth(1) else {
        return BoardConfig::default();
    };

    match BoardConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!(%path, %err, "falling back to default board config");
            BoardConfig::default()
        }
    }
}

fn draw_status(session: &Session) {
    let (rows, cols) = session.board.size();
    let lines = [
        format!("Board {rows}x{cols}  generation {}", session.board.generation()),
        format!(
            "P1 {}  P2 {}  marks {}",
            session.board.population(Player::One),
            session.board.population(Player::Two),
            session.board.marks().len()
        ),
        format!(
            "{} @ {:.0}/s  step {:.2} ms",
            if session.is_running { "Running" } else { "Paused" },
            session.updates_per_second,
            session.last_step_time_ms
        ),
        "Space run  N step  C clear  R random  M unmark  H home".to_owned(),
        "LMB mark P1  RMB mark P2  wheel zoom  MMB pan".to_owned(),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, screen_height() - 110.0 + i as f32 * 22.0, 20.0, WHITE);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config();
    let mut session = match Session::new(&config) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "could not build board");
            return;
        }
    };
    info!(shader = ?session.bindings.active(), "viewer started");

    let mut renderer = ScreenRenderer::new(Camera::new());
    let mut pan = input::PanState::default();

    loop {
        let (mx, my) = mouse_position();
        let mouse_pos = Vec2::new(mx, my);

        input::handle_zoom(&mut renderer.camera);
        pan.update(&mut renderer.camera, mouse_pos);
        if let Err(err) = input::handle_mouse_mark(&mut session, &renderer.camera, mouse_pos) {
            warn!(%err, "mark failed");
        }
        session = input::process_keyboard_input(session, &mut renderer.camera);

        if let Err(err) = session.tick(get_frame_time()) {
            error!(%err, "advance failed");
            session.is_running = false;
        }

        clear_background(BLACK);
        if session.board.is_stale() {
            session.board.rebuild();
        }
        if let Err(err) = session.board.render(&mut renderer, &session.bindings) {
            warn!(%err, "frame skipped");
        }
        draw_status(&session);

        next_frame().await;
    }
}

