//! Sound cues
//!
//! The simulation only names cues; playing them is up to the host. Playback
//! is fire-and-forget and nothing here feeds back into the game.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits a wall or a paddle
    Bounce,
    /// A point was scored
    Score,
}

impl SoundEffect {
    /// Stable cue identifier for hosts
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Bounce => "bounce",
            SoundEffect::Score => "score",
        }
    }

    /// Default asset shipped with the web build
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::Bounce => "assets/sound1.ogg",
            SoundEffect::Score => "assets/sound2.ogg",
        }
    }
}

/// Something that can play a cue at a given volume
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that writes cues to the log, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("cue {} ({}) at volume {volume:.2}", effect.as_str(), effect.asset_path());
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

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the cue of every event that has one
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(GameEvent::sound) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
