//! Player body integration
//!
//! One call to [`Player::step`] per tick: intents, cooldown-gated actions,
//! gravity, friction, translation, floor clamp and horizontal wrap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Facing, GameEvent, Player};
use super::tick::TickInput;
use crate::consts::*;
use crate::ticks_for_secs;

/// Animation pose derived from the body state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    Idle,
    Run,
    Jump,
    Fall,
}

/// Read-only projection of the player for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub pose: Pose,
    /// Mirror horizontally (facing left)
    pub flip_x: bool,
    /// Mirror vertically (gravity reversed)
    pub flip_y: bool,
}

/// True when `interval` ticks have passed since `last` (or it never fired)
fn cooldown_ready(last: Option<u64>, now: u64, interval: u64) -> bool {
    last.is_none_or(|t| now.saturating_sub(t) >= interval)
}

impl Player {
    /// Advance the body by one tick. `now` is the host's monotonic tick.
    pub fn step(&mut self, input: &TickInput, now: u64, events: &mut Vec<GameEvent>) {
        // Right is evaluated last so it wins when both are held
        if input.left {
            self.facing = Facing::Left;
            self.vel.x = -MOVE_SPEED;
        }
        if input.right {
            self.facing = Facing::Right;
            self.vel.x = MOVE_SPEED;
        }

        if input.jump && !self.airborne {
            self.vel.y = if self.gravity_reversed {
                REVERSED_JUMP_VELOCITY
            } else {
                JUMP_VELOCITY
            };
            self.airborne = true;
            events.push(GameEvent::PlayerJumped);
        }

        if self.gravity_reversed
            && !self.airborne
            && input.crouch_drop
            && cooldown_ready(
                self.last_reverse_drop,
                now,
                ticks_for_secs(REVERSE_DROP_COOLDOWN_SECS),
            )
        {
            self.rect.translate(Vec2::new(0.0, -REVERSE_DROP_DISTANCE));
            self.last_reverse_drop = Some(now);
            self.airborne = true;
            events.push(GameEvent::PlayerJumped);
        }

        if input.toggle_gravity
            && cooldown_ready(
                self.last_gravity_toggle,
                now,
                ticks_for_secs(GRAVITY_TOGGLE_COOLDOWN_SECS),
            )
        {
            self.vel.y = if self.gravity_reversed {
                -GRAVITY_KICK
            } else {
                GRAVITY_KICK
            };
            self.last_gravity_toggle = Some(now);
            self.gravity_reversed = !self.gravity_reversed;
            events.push(GameEvent::GravityToggled);
        }

        let gravity = if self.gravity_reversed { -GRAVITY } else { GRAVITY };
        self.vel.y = (self.vel.y + gravity).clamp(-MAX_FALL_SPEED, MAX_FALL_SPEED);

        self.vel.x *= FRICTION;

        self.rect.translate(self.vel);

        // The floor is absolute, independent of gravity orientation
        if self.rect.bottom() >= FLOOR_Y {
            self.rect.set_bottom(FLOOR_Y);
            self.land(events);
        }

        if self.rect.left() <= 0.0 {
            self.rect.set_right(SCREEN_WIDTH);
        } else if self.rect.right() >= SCREEN_WIDTH {
            self.rect.set_left(0.0);
        }

        if self.vel.y > 0.0 && self.airborne && !self.fall_event_fired {
            self.fall_event_fired = true;
            events.push(GameEvent::PlayerFellBump);
        }
    }

    /// Surface contact: clear airborne state and re-arm the fall event
    pub fn land(&mut self, events: &mut Vec<GameEvent>) {
        if self.airborne {
            events.push(GameEvent::PlayerLanded);
        }
        self.airborne = false;
        self.fall_event_fired = false;
    }

    /// Current animation pose
    pub fn pose(&self) -> PlayerPose {
        // Under reversed gravity, rising on screen means positive velocity
        let rising = if self.gravity_reversed {
            self.vel.y > 0.0
        } else {
            self.vel.y < 0.0
        };
        let pose = if !self.airborne {
            if self.vel.x.abs() > RUN_POSE_THRESHOLD {
                Pose::Run
            } else {
                Pose::Idle
            }
        } else if rising {
            Pose::Jump
        } else {
            Pose::Fall
        };
        PlayerPose {
            pose,
            flip_x: self.facing == Facing::Left,
            flip_y: self.gravity_reversed,
        }
    }

    /// Run-cycle frame (3 frames at 12 fps) for a given tick
    pub fn run_frame(tick: u64) -> usize {
        let ticks_per_frame = (TICK_RATE_HZ / 12) as u64;
        ((tick / ticks_per_frame) % 3) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn step(player: &mut Player, input: &TickInput, now: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        player.step(input, now, &mut events);
        events
    }

    #[test]
    fn test_jump_from_rest() {
        let mut player = Player::default();
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        let events = step(&mut player, &input, 1);

        assert!(player.airborne);
        // Jump impulse plus one tick of gravity
        assert_eq!(player.vel.y, JUMP_VELOCITY + GRAVITY);
        assert_eq!(events, vec![GameEvent::PlayerJumped]);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut player = Player::default();
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        step(&mut player, &input, 1);
        let events = step(&mut player, &input, 2);

        assert!(!events.contains(&GameEvent::PlayerJumped));
        assert_eq!(player.vel.y, JUMP_VELOCITY + 2.0 * GRAVITY);
    }

    #[test]
    fn test_reversed_jump_is_weaker_and_downward() {
        let mut player = Player {
            gravity_reversed: true,
            ..Default::default()
        };
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        step(&mut player, &input, 1);
        assert_eq!(player.vel.y, REVERSED_JUMP_VELOCITY - GRAVITY);
    }

    #[test]
    fn test_right_overrides_left() {
        let mut player = Player::new(300.0, 0.0);
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        step(&mut player, &input, 1);

        assert_eq!(player.facing, Facing::Right);
        assert!((player.vel.x - MOVE_SPEED * FRICTION).abs() < 1e-6);
    }

    #[test]
    fn test_friction_decays_without_intent() {
        let mut player = Player::new(300.0, 0.0);
        player.vel.x = 5.0;
        step(&mut player, &TickInput::default(), 1);
        assert!((player.vel.x - 4.5).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_toggle_kick_and_flip() {
        let mut player = Player::new(300.0, 0.0);
        let input = TickInput {
            toggle_gravity: true,
            ..Default::default()
        };
        let events = step(&mut player, &input, 100);

        assert!(player.gravity_reversed);
        // Kick of +10 then one tick of reversed gravity
        assert_eq!(player.vel.y, GRAVITY_KICK - GRAVITY);
        assert!(events.contains(&GameEvent::GravityToggled));
    }

    #[test]
    fn test_gravity_toggle_cooldown() {
        let mut player = Player::new(300.0, -5000.0);
        let input = TickInput {
            toggle_gravity: true,
            ..Default::default()
        };

        let mut toggle_ticks = Vec::new();
        for now in 1..=120 {
            let events = step(&mut player, &input, now);
            if events.contains(&GameEvent::GravityToggled) {
                toggle_ticks.push(now);
            }
        }

        assert_eq!(toggle_ticks, vec![1, 31, 61, 91]);
    }

    #[test]
    fn test_reverse_drop_cooldown() {
        let mut player = Player::new(300.0, 200.0);
        player.gravity_reversed = true;
        let input = TickInput {
            crouch_drop: true,
            ..Default::default()
        };

        let mut drops = Vec::new();
        for now in 1..=40 {
            // Pretend the body is resting on a ceiling platform each tick
            player.airborne = false;
            player.vel.y = 0.0;
            let before = player.rect.y;
            let events = step(&mut player, &input, now);
            if events.contains(&GameEvent::PlayerJumped) {
                drops.push(now);
                assert!((player.rect.y - (before - REVERSE_DROP_DISTANCE - GRAVITY)).abs() < 1e-4);
            }
        }

        assert_eq!(drops, vec![1, 16, 31]);
    }

    #[test]
    fn test_reverse_drop_requires_reversed_gravity() {
        let mut player = Player::new(300.0, 200.0);
        let input = TickInput {
            crouch_drop: true,
            ..Default::default()
        };
        let events = step(&mut player, &input, 1);
        assert!(events.is_empty());
        assert!(!player.airborne);
    }

    #[test]
    fn test_floor_clamp() {
        let mut player = Player::new(300.0, 495.0);
        player.airborne = true;
        player.vel.y = 10.0;
        let events = step(&mut player, &TickInput::default(), 1);

        assert_eq!(player.rect.bottom(), FLOOR_Y);
        assert!(!player.airborne);
        assert!(events.contains(&GameEvent::PlayerLanded));
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut player = Player::new(-1.0, 0.0);
        step(&mut player, &TickInput::default(), 1);
        assert_eq!(player.rect.right(), SCREEN_WIDTH);
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut player = Player::new(701.0, 0.0);
        assert_eq!(player.rect.right(), 801.0);
        step(&mut player, &TickInput::default(), 1);
        assert_eq!(player.rect.left(), 0.0);
    }

    #[test]
    fn test_fall_event_once_per_airborne_span() {
        let mut player = Player::new(300.0, -2000.0);
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        let idle = TickInput::default();

        let mut fell = 0;
        for now in 1..=100 {
            let input = if now == 1 { &jump } else { &idle };
            let events = step(&mut player, input, now);
            fell += events
                .iter()
                .filter(|e| **e == GameEvent::PlayerFellBump)
                .count();
        }
        assert_eq!(fell, 1);

        let mut events = Vec::new();
        player.land(&mut events);
        assert!(!player.fall_event_fired);
    }

    #[test]
    fn test_pose_projection() {
        let mut player = Player::default();
        assert_eq!(player.pose().pose, Pose::Idle);

        player.vel.x = -3.0;
        player.facing = Facing::Left;
        let pose = player.pose();
        assert_eq!(pose.pose, Pose::Run);
        assert!(pose.flip_x);

        player.airborne = true;
        player.vel.y = -4.0;
        assert_eq!(player.pose().pose, Pose::Jump);

        player.gravity_reversed = true;
        let pose = player.pose();
        assert_eq!(pose.pose, Pose::Fall);
        assert!(pose.flip_y);
    }

    #[test]
    fn test_run_frame_cycles() {
        assert_eq!(Player::run_frame(0), 0);
        assert_eq!(Player::run_frame(5), 1);
        assert_eq!(Player::run_frame(10), 2);
        assert_eq!(Player::run_frame(15), 0);
    }

    proptest! {
        #[test]
        fn prop_vertical_speed_stays_clamped(
            vy in -200.0f32..200.0,
            reversed in any::<bool>(),
            jump in any::<bool>(),
            toggle in any::<bool>(),
        ) {
            let mut player = Player::new(300.0, -10_000.0);
            player.vel.y = vy;
            player.gravity_reversed = reversed;
            let input = TickInput { jump, toggle_gravity: toggle, ..Default::default() };
            let mut events = Vec::new();
            for now in 0..10 {
                player.step(&input, now, &mut events);
                prop_assert!(player.vel.y >= -MAX_FALL_SPEED && player.vel.y <= MAX_FALL_SPEED);
            }
        }

        #[test]
        fn prop_toggles_spaced_by_cooldown(pattern in proptest::collection::vec(any::<bool>(), 1..200)) {
            let mut player = Player::new(300.0, -10_000.0);
            let mut events = Vec::new();
            let mut last: Option<u64> = None;
            for (now, held) in pattern.into_iter().enumerate() {
                let now = now as u64;
                events.clear();
                let input = TickInput { toggle_gravity: held, ..Default::default() };
                player.step(&input, now, &mut events);
                if events.contains(&GameEvent::GravityToggled) {
                    if let Some(prev) = last {
                        prop_assert!(now - prev >= 30);
                    }
                    last = Some(now);
                }
            }
        }
    }
}
