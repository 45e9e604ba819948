//! Viewport follow and scroll high-water marks

use glam::Vec2;

use super::rect::Rect;
use super::state::Camera;
use crate::consts::*;

impl Camera {
    /// Center the viewport on the target and update the running maxima
    pub fn update(&mut self, target: &Rect) {
        // Horizontal clamp keeps the viewport inside the field
        let x = (-target.x + SCREEN_WIDTH / 2.0)
            .max(-(self.field_width - SCREEN_WIDTH))
            .min(0.0);
        // Vertically only the lower bound applies; upward is open space
        let y = (-target.y + SCREEN_HEIGHT / 2.0).max(-(self.field_height - SCREEN_HEIGHT));

        self.viewport = Rect::new(x, y, SCREEN_WIDTH, SCREEN_HEIGHT);
        self.max_scroll_y = self.max_scroll_y.max(self.viewport.bottom());
        self.max_player_height = self.max_player_height.max(-target.top().min(0.0));
    }

    /// Offset to add to world coordinates to get screen coordinates
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.viewport.x, self.viewport.y)
    }

    /// World rectangle moved into screen space
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.offset(self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_scroll() {
        let mut camera = Camera::default();
        camera.update(&Rect::new(50.0, 50.0, 100.0, 100.0));

        assert_eq!(camera.viewport.x, 0.0);
        assert_eq!(camera.viewport.y, 250.0);
        assert_eq!(camera.max_scroll_y, SCORE_BASELINE);
        assert_eq!(camera.max_player_height, 0.0);
    }

    #[test]
    fn test_lower_clamp() {
        let mut camera = Camera::default();
        camera.update(&Rect::new(50.0, 500.0, 100.0, 100.0));
        assert_eq!(camera.viewport.y, 0.0);
    }

    #[test]
    fn test_horizontal_clamp_in_wide_field() {
        let mut camera = Camera::new(1600.0, SCREEN_HEIGHT);
        camera.update(&Rect::new(1500.0, 0.0, 100.0, 100.0));
        assert_eq!(camera.viewport.x, -800.0);
        camera.update(&Rect::new(100.0, 0.0, 100.0, 100.0));
        assert_eq!(camera.viewport.x, 0.0);
        camera.update(&Rect::new(800.0, 0.0, 100.0, 100.0));
        assert_eq!(camera.viewport.x, -400.0);
    }

    #[test]
    fn test_maxima_are_monotonic() {
        let mut camera = Camera::default();
        camera.update(&Rect::new(0.0, -1000.0, 100.0, 100.0));
        let high_scroll = camera.max_scroll_y;
        assert_eq!(high_scroll, 1900.0);
        assert_eq!(camera.max_player_height, 1000.0);

        camera.update(&Rect::new(0.0, 400.0, 100.0, 100.0));
        assert_eq!(camera.max_scroll_y, high_scroll);
        assert_eq!(camera.max_player_height, 1000.0);
    }

    #[test]
    fn test_apply_moves_into_screen_space() {
        let mut camera = Camera::default();
        camera.update(&Rect::new(0.0, -1000.0, 100.0, 100.0));
        let on_screen = camera.apply(&Rect::new(0.0, -1000.0, 100.0, 100.0));
        assert_eq!(on_screen.y, 300.0);
    }

    #[test]
    fn test_restored_narrow_field_pins_to_origin() {
        let mut snapshot = serde_json::to_value(Camera::default()).expect("serialize");
        snapshot["field_width"] = serde_json::json!(400.0);
        let mut camera: Camera = serde_json::from_value(snapshot).expect("deserialize");

        camera.update(&Rect::new(600.0, 0.0, 100.0, 100.0));
        assert_eq!(camera.viewport.x, 0.0);
    }

    #[test]
    #[should_panic]
    fn test_field_smaller_than_viewport_rejected() {
        let _ = Camera::new(400.0, SCREEN_HEIGHT);
    }
}
