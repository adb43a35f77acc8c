mod app;

use engine::{MoveIntent, ZOOM_STEP};
use tracing::{error, info};

use crate::app::bootstrap;
use crate::app::session::{GameSession, SpriteCatalog};

const TICK_MS: f32 = 16.0;
const DEMO_TICKS: u32 = 600;
const ROTATE_EVERY_TICKS: u32 = 150;
const TICKS_PER_LEG: u32 = 30;

fn main() {
    bootstrap::init_tracing();
    if let Err(err) = run() {
        error!(error = %err, "startup_failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = bootstrap::resolve_config()?;
    let mut session = GameSession::new(&config, &SpriteCatalog::default())?;
    let zoom_anchor = (
        config.screen_width as f32 * 0.5,
        config.screen_height as f32 * 0.5,
    );

    // Scripted tour standing in for the input layer: walk a square, rotate
    // the world every few seconds, swing and gather along the way.
    for tick in 0..DEMO_TICKS {
        if let Some(intent) = scripted_intent(tick) {
            session.try_move_player(intent);
        }
        if tick % ROTATE_EVERY_TICKS == ROTATE_EVERY_TICKS - 1 {
            session.rotate_world_90();
        }
        if tick == DEMO_TICKS / 2 {
            session.camera_mut().zoom_in(ZOOM_STEP * 3.0, Some(zoom_anchor));
        }
        session.attack_adjacent();
        session.gather_at_player();
        session.update(TICK_MS);
        session.build_draw_list();
    }

    info!(
        player_x = session.player().x(),
        player_y = session.player().y(),
        rotation_count = session.grid().rotation_count(),
        monsters_left = session.monsters().len(),
        gathered = session.gathered_count(),
        draw_items = session.build_draw_list().len(),
        "demo_finished"
    );
    Ok(())
}

fn scripted_intent(tick: u32) -> Option<MoveIntent> {
    match (tick / TICKS_PER_LEG) % 4 {
        0 => Some(MoveIntent::East),
        1 => Some(MoveIntent::South),
        2 => Some(MoveIntent::West),
        _ => Some(MoveIntent::North),
    }
}
