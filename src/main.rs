//! Gravity Climb headless runner
//!
//! Runs one simulation at a fixed 60 Hz step with the autopilot (or an idle
//! player), routes events to the logging audio sink, and persists the best
//! score when the run ends.

use gravity_climb::audio::{AudioManager, LogSink};
use gravity_climb::autopilot::{Autopilot, InputProvider, ScriptedInput};
use gravity_climb::consts::TICK_RATE_HZ;
use gravity_climb::sim::{GameState, RenderFrame, tick};
use gravity_climb::{HighScores, Settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let seed = settings.resolve_seed();
    log::info!("Gravity Climb starting (seed {seed})");

    let mut high_scores = HighScores::load(&settings.stats_path);
    let previous_best = high_scores.highest_score;

    let mut state = GameState::new(seed).with_previous_best(previous_best);
    let mut provider: Box<dyn InputProvider> = if settings.autopilot {
        Box::new(Autopilot::default())
    } else {
        Box::new(ScriptedInput::default())
    };
    let mut audio = AudioManager::new(LogSink);

    while !state.is_over() {
        let mut input = provider.next_input(&state);
        if settings.max_ticks.is_some_and(|cap| state.time_ticks + 1 >= cap) {
            input.quit = true;
        }
        tick(&mut state, &input);
        audio.dispatch(&state.events);

        if state.time_ticks % TICK_RATE_HZ as u64 == 0 {
            let frame = RenderFrame::capture(&state);
            log::debug!(
                "t={}s score={} best={} laser={:.0} platforms={}",
                frame.tick / TICK_RATE_HZ as u64,
                frame.score,
                frame.best_score,
                frame.hazard_distance,
                frame.platforms.len()
            );
        }
    }

    let summary = state.summary();
    if high_scores.record(summary.final_score) {
        log::info!("New high score!");
    }
    high_scores.save(&settings.stats_path);

    println!(
        "final score: {}  high score: {}  ({:?} after {} ticks)",
        summary.final_score, summary.new_high_score, summary.cause, summary.ticks
    );
}
