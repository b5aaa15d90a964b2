//! Skyhop entry point
//!
//! Headless native driver: plays demo runs with the autopilot and prints the
//! final frame. Usage: `skyhop [config.json] [runs]`

use std::process::ExitCode;

use skyhop::GameConfig;
use skyhop::consts::MAX_FRAME_DT;
use skyhop::platform::{FixedStepClock, Key, map_key};
use skyhop::renderer;
use skyhop::sim::{GameEvent, GameState, TickInput, autopilot, tick};

/// Demo runs to play when none are requested
const DEFAULT_RUNS: u32 = 3;
/// Hard stop so a perfect autopilot cannot spin forever (10 minutes at 60 Hz)
const MAX_TICKS: u64 = 60 * 60 * 10;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Skyhop (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    let runs = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RUNS);

    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut clock = FixedStepClock::new(state.config.tick_dt());
    // Simulated frames; never longer than the clock accepts
    let frame_dt = clock.step().min(MAX_FRAME_DT);
    let mut scores = Vec::new();

    while !state.exit_requested {
        for _ in 0..clock.advance(frame_dt) {
            let mut input = autopilot::decide(&state);
            if scores.len() as u32 >= runs || state.time_ticks >= MAX_TICKS {
                input = TickInput::from_events(map_key(Key::Escape, state.phase));
            }

            for event in tick(&mut state, &input, clock.step()) {
                match event {
                    GameEvent::Crashed { cause } => {
                        log::info!("Crashed into {cause:?} with score {}", state.score);
                        scores.push(state.score);
                    }
                    GameEvent::Scored { score } => log::debug!("Score {score}"),
                    _ => {}
                }
            }
        }
    }

    println!("{}", renderer::render(&state.snapshot(), 40, 30));
    println!("Scores: {scores:?}");
    if let Some(best) = scores.iter().max() {
        println!("Best: {best}");
    }

    ExitCode::SUCCESS
}
