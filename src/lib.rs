//! Gravity Climb - an endless vertical platformer with reversible gravity
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, platforms, camera, hazard)
//! - `highscores`: Best-score record persistence
//! - `settings`: Host configuration
//! - `audio`: Sound effect mapping for simulation events
//! - `autopilot`: Demo input provider

pub mod audio;
pub mod autopilot;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Viewport / world dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Absolute world floor line
    pub const FLOOR_Y: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 100.0;
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = 50.0;
    pub const MOVE_SPEED: f32 = 5.0;
    pub const JUMP_VELOCITY: f32 = -20.0;
    /// Jump impulse under reversed gravity (weaker than the normal jump)
    pub const REVERSED_JUMP_VELOCITY: f32 = 15.0;
    pub const GRAVITY: f32 = 0.5;
    pub const MAX_FALL_SPEED: f32 = 20.0;
    pub const FRICTION: f32 = 0.9;
    pub const GRAVITY_KICK: f32 = 10.0;
    pub const REVERSE_DROP_DISTANCE: f32 = 30.0;
    pub const GRAVITY_TOGGLE_COOLDOWN_SECS: f32 = 0.5;
    pub const REVERSE_DROP_COOLDOWN_SECS: f32 = 0.25;
    /// Horizontal speed above which a grounded player is drawn running
    pub const RUN_POSE_THRESHOLD: f32 = 0.9;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 30.0;
    pub const MOVING_PLATFORM_SPEED: f32 = 3.0;
    pub const MOVING_PLATFORM_MAX_X: f32 = 450.0;
    /// Horizontal displacement multiplier applied to a rider
    pub const RIDER_FACTOR: f32 = 2.0;

    /// Procedural generation
    pub const PLATFORMS_PER_CHUNK: usize = 10;
    pub const CHUNK_HEIGHT: f32 = 600.0;
    pub const CHUNK_ROW_SPACING: f32 = 100.0;
    pub const CHUNK_ROWS: u32 = 10;
    /// Kind rolls at or below this value (out of 0..=10) produce static platforms
    pub const STATIC_KIND_MAX_ROLL: u32 = 2;

    /// Culling / lose condition offsets from the highest reached scroll line
    pub const CULL_DISTANCE: f32 = 1500.0;
    pub const LEFT_BEHIND_DISTANCE: f32 = 2000.0;

    /// Collision candidate tolerance band
    pub const LANDING_TOLERANCE: f32 = 20.0;

    /// Pursuit laser
    pub const HAZARD_WIDTH: f32 = 800.0;
    pub const HAZARD_HEIGHT: f32 = 240.0;
    pub const HAZARD_SPAWN_OFFSET: f32 = 800.0;
    pub const HAZARD_BASE_SPEED: f32 = 2.0;
    pub const HAZARD_SCORE_DIVISOR: f32 = 800.0;
    /// Vertical grace offset applied to the hazard hitbox
    pub const HAZARD_GRACE: f32 = 100.0;

    /// Scoring
    pub const SCORE_BASELINE: f32 = 850.0;
    pub const SCORE_DIVISOR: f32 = 2.5;
}

/// Number of whole ticks covering `secs` of simulated time
#[inline]
pub fn ticks_for_secs(secs: f32) -> u64 {
    (secs * consts::TICK_RATE_HZ as f32).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldowns_in_ticks() {
        assert_eq!(ticks_for_secs(consts::GRAVITY_TOGGLE_COOLDOWN_SECS), 30);
        assert_eq!(ticks_for_secs(consts::REVERSE_DROP_COOLDOWN_SECS), 15);
    }
}
