use std::{env, thread};

use color_eyre::Result;
use grid_snake::{
    config::{Level, Settings},
    engine::Game,
    strategies::{Greedy, Strategy},
};
use log::info;

const TURN_LIMIT: u64 = 500;

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let mut settings = None;
    let mut level = Level::Medium;
    for arg in env::args().skip(1) {
        if let Some(parsed) = Level::parse(&arg) {
            level = parsed;
        } else {
            settings = Some(Settings::load(&arg)?);
        }
    }
    let settings = settings.unwrap_or_else(|| Settings::for_level(level));

    let mut game = Game::new(settings)?;
    game.initialize();

    let mut turn = 0;
    while game.is_in_progress() {
        if turn == TURN_LIMIT {
            info!("still alive after {TURN_LIMIT} turns, stopping here");
            break;
        }

        game.queue(Greedy.get_movement(&game));
        let outcome = game.tick();
        turn += 1;

        println!("turn {turn}: {outcome:?}\n{game}");
        thread::sleep(level.tick_interval());
    }

    println!("final score: {}", game.score());

    Ok(())
}
