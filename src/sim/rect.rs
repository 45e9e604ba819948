//! Axis-aligned rectangle geometry for the player, platforms and hazard
//!
//! Screen convention: x grows right, y grows down. A rectangle is defined by:
//! - x, y: top-left corner
//! - w, h: extent (never negative)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Create a rectangle.
    ///
    /// # Panics
    /// On negative or non-finite dimensions. Those only come from a caller bug.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        assert!(
            w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0,
            "rect dimensions must be finite and non-negative (got {w}x{h})"
        );
        assert!(
            x.is_finite() && y.is_finite(),
            "rect origin must be finite (got {x},{y})"
        );
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    #[inline]
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    #[inline]
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    #[inline]
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Move in place by a displacement
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Copy moved by a displacement
    #[inline]
    pub fn offset(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Strict overlap test; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
