#![allow(dead_code)]

use catnap::audio::{AudioSink, ChannelId, Music, Sound};
use catnap::game::scene::Scene;
use catnap::game::state::GameState;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub const SEED: u64 = 0x00C0_FFEE;

/// One call made against the audio sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Play(Sound),
    Loop(Sound, i32),
    Stop(ChannelId),
    Music(Music),
}

/// An `AudioSink` that remembers every request, handing out increasing channel ids.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
    next_channel: i32,
}

impl RecordingAudio {
    pub fn played(&self, sound: Sound) -> usize {
        self.calls.iter().filter(|call| **call == AudioCall::Play(sound)).count()
    }

    pub fn looped(&self, sound: Sound) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, AudioCall::Loop(s, _) if *s == sound))
            .count()
    }

    pub fn stops(&self) -> Vec<ChannelId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                AudioCall::Stop(channel) => Some(*channel),
                _ => None,
            })
            .collect()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.calls.push(AudioCall::Play(sound));
    }

    fn play_looping(&mut self, sound: Sound, loops: i32) -> Option<ChannelId> {
        self.calls.push(AudioCall::Loop(sound, loops));
        let channel = ChannelId(self.next_channel);
        self.next_channel += 1;
        Some(channel)
    }

    fn stop(&mut self, channel: ChannelId) {
        self.calls.push(AudioCall::Stop(channel));
    }

    fn play_music(&mut self, music: Music) {
        self.calls.push(AudioCall::Music(music));
    }
}

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

pub fn game_state() -> GameState {
    GameState::new(rng())
}

/// A seeded state already in the Playing scene.
pub fn playing_state() -> GameState {
    let mut state = game_state();
    state.scene = Scene::Playing;
    state
}

/// Position that puts a falling 64x64 actor over the player's starting spot
/// without reaching the floor within a frame.
pub fn over_player(state: &GameState) -> Vec2 {
    let player = state.player.current().pos;
    Vec2::new(player.x, player.y - 30.0)
}
