//! Pursuit laser: climbs faster as the score grows

use glam::Vec2;

use super::rect::Rect;
use super::state::Hazard;
use crate::consts::*;

impl Hazard {
    /// Climb speed (px/tick) for a given score
    pub fn speed_for_score(score: f32) -> f32 {
        HAZARD_BASE_SPEED + score / HAZARD_SCORE_DIVISOR
    }

    /// Move upward by one tick
    pub fn advance(&mut self, score: f32) {
        self.rect.translate(Vec2::new(0.0, -Self::speed_for_score(score)));
    }

    /// Hitbox: the visible rect shifted down by the grace offset
    pub fn hitbox(&self) -> Rect {
        self.rect.offset(Vec2::new(0.0, HAZARD_GRACE))
    }

    pub fn check_collision(&self, player: &Rect) -> bool {
        player.overlaps(&self.hitbox())
    }

    /// Vertical distance from the player's top to the laser's top (positive: laser below)
    pub fn distance_to_player(&self, player: &Rect) -> f32 {
        self.rect.y - player.y
    }
}
