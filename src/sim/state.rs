//! Game state and core simulation types
//!
//! All state that must be snapshotted for determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended (terminal)
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Host asked to quit
    Quit,
    /// Player dropped too far below the highest point reached
    LeftBehind,
    /// Pursuit laser caught the player
    CaughtByHazard,
}

/// Horizontal facing of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Discrete events for the audio sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Jump or reverse-drop started
    PlayerJumped,
    /// Contact with a platform or the floor after being airborne
    PlayerLanded,
    /// Gravity orientation flipped
    GravityToggled,
    /// Player started falling while airborne (one-shot per airborne span)
    PlayerFellBump,
}

/// The player body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub gravity_reversed: bool,
    /// True from jump/launch until floor or platform contact
    pub airborne: bool,
    pub facing: Facing,
    /// Whether the falling event already fired for the current airborne span
    pub fall_event_fired: bool,
    /// Tick of the last gravity toggle
    pub last_gravity_toggle: Option<u64>,
    /// Tick of the last reverse-drop
    pub last_reverse_drop: Option<u64>,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
            vel: Vec2::ZERO,
            gravity_reversed: false,
            airborne: false,
            facing: Facing::Right,
            fall_event_fired: false,
            last_gravity_toggle: None,
            last_reverse_drop: None,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }
}

/// Platform behaviour tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    /// Oscillates horizontally between 0 and `MOVING_PLATFORM_MAX_X`
    Moving { direction: i8, speed: f32 },
}

impl PlatformKind {
    pub fn moving() -> Self {
        PlatformKind::Moving {
            direction: 1,
            speed: MOVING_PLATFORM_SPEED,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, PlatformKind::Moving { .. })
    }
}

/// A platform entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub kind: PlatformKind,
    pub rect: Rect,
    /// Tick the platform was created at (animation phase for renderers)
    pub spawn_tick: u64,
}

/// The live platform set plus its generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformField {
    /// Live platforms (iteration order is insertion order)
    pub platforms: Vec<Platform>,
    /// Next y at which a chunk is due (decreases by `CHUNK_HEIGHT` per chunk)
    pub next_chunk_y: f32,
    /// Seeded generation source
    pub rng: Pcg32,
    /// Chunks generated so far this run
    pub chunks_generated: u32,
    next_id: u32,
}

impl PlatformField {
    /// Empty field with a seeded generator
    pub fn new(seed: u64) -> Self {
        Self {
            platforms: Vec::new(),
            next_chunk_y: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            chunks_generated: 0,
            next_id: 1,
        }
    }

    /// Allocate a new platform ID
    pub fn next_platform_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert a platform at an exact position
    pub fn add(&mut self, kind: PlatformKind, x: f32, y: f32, spawn_tick: u64) -> u32 {
        let id = self.next_platform_id();
        self.platforms.push(Platform {
            id,
            kind,
            rect: Rect::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            spawn_tick,
        });
        id
    }
}

/// Scrolling viewport that follows the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub viewport: Rect,
    pub field_width: f32,
    pub field_height: f32,
    /// Running maximum of the viewport bottom
    pub max_scroll_y: f32,
    /// Running maximum of upward displacement above y = 0
    pub max_player_height: f32,
}

impl Camera {
    /// # Panics
    /// If the field is smaller than the viewport.
    pub fn new(field_width: f32, field_height: f32) -> Self {
        assert!(
            field_width >= SCREEN_WIDTH && field_height >= SCREEN_HEIGHT,
            "camera field {field_width}x{field_height} smaller than the viewport"
        );
        Self {
            viewport: Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
            field_width,
            field_height,
            max_scroll_y: 0.0,
            max_player_height: 0.0,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// The pursuit laser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
}

impl Hazard {
    /// Laser whose logical origin is at (x, y); it spawns one offset below it
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y + HAZARD_SPAWN_OFFSET, HAZARD_WIDTH, HAZARD_HEIGHT),
        }
    }
}

impl Default for Hazard {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter (drives every cooldown)
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Set when entering GameOver
    pub game_over_cause: Option<GameOverCause>,
    pub player: Player,
    pub field: PlatformField,
    pub camera: Camera,
    pub hazard: Hazard,
    /// Raw score (may be briefly negative at run start)
    pub score: f32,
    /// Best score recorded before this run started
    pub previous_best: u64,
    /// Events emitted during the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run with the given seed and the starting platforms
    pub fn new(seed: u64) -> Self {
        let mut state = Self::empty(seed);
        state.field.spawn_starting_platforms(0);
        log::info!("New run (seed {seed})");
        state
    }

    /// Create a new run with no platforms at all
    pub fn empty(seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Running,
            game_over_cause: None,
            player: Player::default(),
            field: PlatformField::new(seed),
            camera: Camera::default(),
            hazard: Hazard::default(),
            score: 0.0,
            previous_best: 0,
            events: Vec::new(),
        }
    }

    /// Record the high score read from storage at run start
    pub fn with_previous_best(mut self, best: u64) -> Self {
        self.previous_best = best;
        self
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
