//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, timers counted in ticks
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering, audio or storage dependencies

pub mod camera;
pub mod collision;
pub mod field;
pub mod frame;
pub mod hazard;
pub mod player;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Contact, is_floor_candidate, resolve_platform_collisions};
pub use frame::{PlatformView, RenderFrame};
pub use player::{PlayerPose, Pose};
pub use rect::Rect;
pub use score::{display_score, score_for_scroll};
pub use state::{
    Camera, Facing, GameEvent, GameOverCause, GamePhase, GameState, Hazard, Platform,
    PlatformField, PlatformKind, Player,
};
pub use tick::{RunSummary, TickInput, tick};
