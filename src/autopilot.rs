//! Input providers for headless runs
//!
//! The autopilot plays the game: it jumps whenever it stands on something and
//! steers toward the closest platform above it.

use crate::sim::{GameState, Platform, TickInput};

/// Supplies one input snapshot per tick
pub trait InputProvider {
    fn next_input(&mut self, state: &GameState) -> TickInput;
}

/// Replays a fixed input sequence, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<TickInput>) -> Self {
        Self { inputs, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput {
    fn next_input(&mut self, _state: &GameState) -> TickInput {
        let input = self.inputs.get(self.cursor).cloned().unwrap_or_default();
        self.cursor += 1;
        input
    }
}

/// Demo player
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Horizontal slack before steering kicks in
    pub dead_zone: f32,
    /// How far above the player a platform may be to count as a target
    pub reach: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            dead_zone: 10.0,
            reach: 300.0,
        }
    }
}

impl Autopilot {
    /// Closest platform whose top is above the player's feet and within reach
    pub fn target<'a>(&self, state: &'a GameState) -> Option<&'a Platform> {
        let player = &state.player.rect;
        state
            .field
            .platforms
            .iter()
            .filter(|p| p.rect.top() < player.bottom() && player.bottom() - p.rect.top() <= self.reach)
            .min_by(|a, b| {
                let da = (player.bottom() - a.rect.top()).abs();
                let db = (player.bottom() - b.rect.top()).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

impl InputProvider for Autopilot {
    fn next_input(&mut self, state: &GameState) -> TickInput {
        let player = &state.player;
        let mut input = TickInput {
            jump: !player.airborne,
            ..Default::default()
        };

        if let Some(platform) = self.target(state) {
            let player_center = player.rect.x + player.rect.w / 2.0;
            let target_center = platform.rect.x + platform.rect.w / 2.0;
            let dx = target_center - player_center;
            if dx < -self.dead_zone {
                input.left = true;
            } else if dx > self.dead_zone {
                input.right = true;
            }
        }
        input
    }
}
