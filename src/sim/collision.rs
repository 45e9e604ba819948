//! Collision detection and response between the player and platforms
//!
//! Only platforms on the "floor side" of the player (relative to the current
//! gravity orientation) are candidates, so a platform the player jumps up
//! through is never treated as a floor.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Platform, Player};
use crate::consts::LANDING_TOLERANCE;

/// Result of resolving the player against the platform set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// ID of the platform the player is standing on
    pub platform_id: u32,
    /// Horizontal rider displacement applied this tick
    pub rider_shift: f32,
}

/// Whether a platform can act as a floor for the player this tick
pub fn is_floor_candidate(player: &Player, platform: &Platform) -> bool {
    if player.gravity_reversed {
        platform.rect.bottom() - LANDING_TOLERANCE <= player.rect.top()
    } else {
        platform.rect.top() + LANDING_TOLERANCE >= player.rect.bottom()
    }
}

/// Resolve the player against platforms.
///
/// The first overlapping candidate in iteration order wins; there is no
/// depth sort.
pub fn resolve_platform_collisions(
    player: &mut Player,
    platforms: &[Platform],
    events: &mut Vec<GameEvent>,
) -> Option<Contact> {
    let hit = platforms
        .iter()
        .find(|p| is_floor_candidate(player, p) && player.rect.overlaps(&p.rect))?;

    player.vel.y = 0.0;
    if player.gravity_reversed {
        player.rect.set_top(hit.rect.bottom());
    } else {
        player.rect.set_bottom(hit.rect.top());
    }
    player.land(events);

    let rider_shift = hit.rider_shift();
    player.rect.x += rider_shift;

    Some(Contact {
        platform_id: hit.id,
        rider_shift,
    })
}
