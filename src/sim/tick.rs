//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use serde::{Deserialize, Serialize};

use super::collision::resolve_platform_collisions;
use super::score::{display_score, score_for_scroll};
use super::state::{GameOverCause, GamePhase, GameState};
use crate::consts::*;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Down-jump while gravity is reversed
    pub crouch_drop: bool,
    pub toggle_gravity: bool,
    pub quit: bool,
}

/// Terminal summary handed back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub final_score: u64,
    /// `max(previous best, final score)`, the value to persist
    pub new_high_score: u64,
    pub cause: Option<GameOverCause>,
    pub ticks: u64,
}

impl RunSummary {
    pub fn is_new_record(&self, previous_best: u64) -> bool {
        self.final_score > previous_best
    }
}

/// Advance the game state by one fixed timestep
///
/// `state.time_ticks` is the host clock: it is bumped once here and is the
/// `now` every cooldown and spawn stamp in this tick sees. Hosts drive time
/// only by calling `tick`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;
    let now = state.time_ticks;

    // Player and platform motion
    state.player.step(input, now, &mut state.events);
    state.field.advance_platforms();

    resolve_platform_collisions(&mut state.player, &state.field.platforms, &mut state.events);

    state.camera.update(&state.player.rect);

    state.field.update_generation(state.player.rect.top(), now);
    state.field.cull(state.camera.max_scroll_y);

    // Laser climbs using the score from the previous tick
    state.hazard.advance(state.score);
    state.score = score_for_scroll(state.camera.max_scroll_y);

    if let Some(cause) = terminal_condition(state, input) {
        state.phase = GamePhase::GameOver;
        state.game_over_cause = Some(cause);
        log::info!(
            "Game over at tick {} ({:?}), score {}",
            now,
            cause,
            display_score(state.score)
        );
    }
}

fn terminal_condition(state: &GameState, input: &TickInput) -> Option<GameOverCause> {
    if input.quit {
        Some(GameOverCause::Quit)
    } else if state.player.rect.bottom() >= -state.camera.max_scroll_y + LEFT_BEHIND_DISTANCE {
        Some(GameOverCause::LeftBehind)
    } else if state.hazard.check_collision(&state.player.rect) {
        Some(GameOverCause::CaughtByHazard)
    } else {
        None
    }
}

impl GameState {
    /// Whole, non-negative score
    pub fn current_score(&self) -> u64 {
        display_score(self.score)
    }

    /// Best score including the current run
    pub fn best_score(&self) -> u64 {
        self.previous_best.max(self.current_score())
    }

    /// Summary for the host (meaningful once the run is over)
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            final_score: self.current_score(),
            new_high_score: self.best_score(),
            cause: self.game_over_cause,
            ticks: self.time_ticks,
        }
    }
}
