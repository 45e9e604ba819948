//! Audio event routing
//!
//! The simulation only emits [`GameEvent`]s; this module maps them to sound
//! effects and hands them to a host-provided [`AudioSink`] with volume applied.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jump or reverse-drop
    Jump,
    /// Touched a platform or the floor
    Land,
    /// Gravity flipped
    Bump,
    /// Started falling
    Fall,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::PlayerJumped => SoundEffect::Jump,
            GameEvent::PlayerLanded => SoundEffect::Land,
            GameEvent::GravityToggled => SoundEffect::Bump,
            GameEvent::PlayerFellBump => SoundEffect::Fall,
        }
    }
}

/// Sample playback backend
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs what would be played (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("sfx {effect:?} @ {volume:.2}");
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play every event from the last tick
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for &event in events {
            self.sink.play(event.into(), vol);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
