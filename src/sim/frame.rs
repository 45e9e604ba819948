//! Read-only snapshot handed to the render sink each tick
//!
//! Geometry is in world space; renderers add `camera_offset` to get screen
//! coordinates. Animation frames are derived from `tick` by the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::PlayerPose;
use super::rect::Rect;
use super::state::{Facing, GamePhase, GameState, PlatformKind};

/// One platform as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub id: u32,
    pub kind: PlatformKind,
    pub rect: Rect,
    pub spawn_tick: u64,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub tick: u64,
    pub phase: GamePhase,
    pub player_rect: Rect,
    pub facing: Facing,
    pub pose: PlayerPose,
    pub gravity_reversed: bool,
    pub platforms: Vec<PlatformView>,
    pub hazard_rect: Rect,
    /// Laser distance below the player (HUD)
    pub hazard_distance: f32,
    pub camera_offset: Vec2,
    /// Parallax driver
    pub max_player_height: f32,
    pub score: u64,
    pub best_score: u64,
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            player_rect: state.player.rect,
            facing: state.player.facing,
            pose: state.player.pose(),
            gravity_reversed: state.player.gravity_reversed,
            platforms: state
                .field
                .platforms
                .iter()
                .map(|p| PlatformView {
                    id: p.id,
                    kind: p.kind,
                    rect: p.rect,
                    spawn_tick: p.spawn_tick,
                })
                .collect(),
            hazard_rect: state.hazard.rect,
            hazard_distance: state.hazard.distance_to_player(&state.player.rect),
            camera_offset: state.camera.offset(),
            max_player_height: state.camera.max_player_height,
            score: state.current_score(),
            best_score: state.best_score(),
        }
    }
}
