use anyhow::Result;
use clap::Parser;
use log::info;
use macroquad::input::{TouchPhase, simulate_mouse_with_touch, touches};
use macroquad::prelude::*;

use snake_arcade::config::Config;
use snake_arcade::controls::{Controls, SwipeTracker};
use snake_arcade::input::{self, InputEvent};
use snake_arcade::view::{self, HUD_HEIGHT, Layout};
use snake_arcade::{Canvas, GameEngine, Hud, JsonFileStore};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: 400,
        window_height: 500,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        log::error!("{err:#}");
        eprintln!("snake: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::parse();
    snake_arcade::logging::init(config.log_file.as_deref(), config.log_level())?;

    let difficulty = config.difficulty();
    let engine_config = config.engine_config();
    let store = JsonFileStore::new(&config.save_file);
    info!(
        "snake starting: {difficulty}, {0}x{0} board, scores in {1}",
        engine_config.tile_count,
        store.path().display()
    );

    let mut engine = match config.seed {
        Some(seed) => GameEngine::with_seed(engine_config, difficulty, store, Hud::default(), Canvas::new(), seed),
        None => GameEngine::new(engine_config, difficulty, store, Hud::default(), Canvas::new()),
    };

    let layout = Layout::new(engine_config.board_pixel_size);
    let controls = Controls::layout(layout.board_bottom(), layout.board_size, engine_config.is_touch_capable);
    request_new_screen_size(layout.board_size, HUD_HEIGHT + layout.board_size + controls.height());
    if engine_config.is_touch_capable {
        // Buttons read touches directly; simulated clicks would press them twice.
        simulate_mouse_with_touch(false);
    }

    let mut swipe = SwipeTracker::default();
    engine.start_game(get_time());

    loop {
        let now = get_time();
        let mut events = input::poll_keyboard();

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            events.extend(controls.hit(x, y));
        }
        for touch in touches() {
            let (x, y) = (touch.position.x, touch.position.y);
            match touch.phase {
                TouchPhase::Started => match controls.hit(x, y) {
                    Some(event) => events.push(event),
                    None if layout.board_contains(x, y) => swipe.begin(x, y),
                    None => {}
                },
                TouchPhase::Ended => events.extend(swipe.finish(x, y).map(InputEvent::Steer)),
                TouchPhase::Cancelled => swipe.cancel(),
                TouchPhase::Moved | TouchPhase::Stationary => {}
            }
        }

        for event in events {
            if event == InputEvent::Quit {
                info!("quit requested");
                return Ok(());
            }
            engine.handle(event, now);
        }
        engine.update(now);

        clear_background(Color::new(0.93, 0.93, 0.9, 1.0));
        view::draw_hud(engine.display(), engine.difficulty().label());
        view::draw_canvas(engine.surface(), layout);
        view::draw_game_over(engine.display(), layout);
        view::draw_controls(&controls, engine.display());

        next_frame().await;
    }
}
