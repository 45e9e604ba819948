//! Platform field: moving-platform behaviour, chunk generation and culling
//!
//! Generation is driven by the player's top edge crossing the next chunk
//! threshold; culling by the camera's highest scroll line.

use rand::Rng;

use super::state::{Platform, PlatformField, PlatformKind};
use crate::consts::*;

impl Platform {
    /// Per-tick behaviour. Static platforms never move.
    pub fn advance(&mut self) {
        match &mut self.kind {
            PlatformKind::Static => {}
            PlatformKind::Moving { direction, speed } => {
                self.rect.x += *direction as f32 * *speed;
                if self.rect.x <= 0.0 {
                    *direction = 1;
                } else if self.rect.x >= MOVING_PLATFORM_MAX_X {
                    *direction = -1;
                }
            }
        }
    }

    /// Horizontal displacement applied to a player standing on this platform
    pub fn rider_shift(&self) -> f32 {
        match self.kind {
            PlatformKind::Static => 0.0,
            PlatformKind::Moving { direction, speed } => direction as f32 * speed * RIDER_FACTOR,
        }
    }
}

impl PlatformField {
    /// Advance every moving platform one tick
    pub fn advance_platforms(&mut self) {
        for platform in &mut self.platforms {
            platform.advance();
        }
    }

    /// Whether the player's top edge has reached the next chunk threshold
    pub fn chunk_due(&self, player_top: f32) -> bool {
        player_top <= self.next_chunk_y + CHUNK_HEIGHT
    }

    /// Generate at most one chunk if due. Returns true if a chunk was added.
    pub fn update_generation(&mut self, player_top: f32, now: u64) -> bool {
        if !self.chunk_due(player_top) {
            return false;
        }
        // Rows are rooted at the threshold before it moves up, so the lower
        // rows of the first chunk land under the cull line straight away
        let origin = self.next_chunk_y;
        self.next_chunk_y -= CHUNK_HEIGHT;
        self.generate_chunk(origin, now);
        self.chunks_generated += 1;
        log::debug!(
            "Chunk at y={origin}: {} platforms live, next threshold {}",
            self.platforms.len(),
            self.next_chunk_y
        );
        true
    }

    /// Add one chunk of platforms rooted at `origin_y`
    pub fn generate_chunk(&mut self, origin_y: f32, now: u64) {
        for _ in 0..PLATFORMS_PER_CHUNK {
            let roll: u32 = self.rng.random_range(0..=10);
            let x: f32 = self.rng.random_range(0.0..SCREEN_WIDTH);
            let row: u32 = self.rng.random_range(0..=CHUNK_ROWS);
            let y = row as f32 * CHUNK_ROW_SPACING + origin_y;

            let kind = if roll <= STATIC_KIND_MAX_ROLL {
                PlatformKind::Static
            } else {
                PlatformKind::moving()
            };
            self.add(kind, x, y, now);
        }
    }

    /// Seed a fresh run with static platforms around the spawn area
    pub fn spawn_starting_platforms(&mut self, now: u64) {
        for _ in 0..PLATFORMS_PER_CHUNK {
            let x: f32 = self.rng.random_range(0.0..SCREEN_WIDTH);
            let row: u32 = self.rng.random_range(0..=CHUNK_ROWS);
            self.add(PlatformKind::Static, x, row as f32 * CHUNK_ROW_SPACING, now);
        }
    }

    /// Remove platforms whose top edge is at or past the cull line.
    /// Returns the number removed.
    pub fn cull(&mut self, max_scroll_y: f32) -> usize {
        let limit = -max_scroll_y + CULL_DISTANCE;
        let before = self.platforms.len();
        self.platforms.retain(|p| p.rect.top() < limit);
        let removed = before - self.platforms.len();
        if removed > 0 {
            log::debug!("Culled {removed} platforms below y={limit}");
        }
        removed
    }

    /// Count of (static, moving) platforms
    pub fn kind_counts(&self) -> (usize, usize) {
        let moving = self.platforms.iter().filter(|p| p.kind.is_moving()).count();
        (self.platforms.len() - moving, moving)
    }
}
