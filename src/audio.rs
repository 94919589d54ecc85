//! This module handles the audio playback for the game.
use std::collections::HashMap;

use anyhow::{anyhow, Result};
use sdl2::{
    mixer::{self, Chunk, InitFlag, LoaderRWops, Music as MixerMusic, AUDIO_S16LSB},
    rwops::RWops,
};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::asset::Asset;

const AUDIO_FREQUENCY: i32 = 44_100;
const AUDIO_CHANNELS: i32 = 8;
const DEFAULT_VOLUME: u8 = 64;
const CHUNK_SIZE: i32 = 1024;

/// One-shot and looping sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Sound {
    /// A snowman hit the player.
    Hurt,
    /// The mouse was caught.
    Heal,
    /// An attack landed on the ghost.
    GhostHit,
    /// Looped while the player runs.
    Footsteps,
    /// The sleeping cat on the win screen.
    Purr,
}

impl Sound {
    pub fn asset(&self) -> Asset {
        match self {
            Sound::Hurt => Asset::HurtSound,
            Sound::Heal => Asset::HealSound,
            Sound::GhostHit => Asset::GhostSound,
            Sound::Footsteps => Asset::FootstepsSound,
            Sound::Purr => Asset::PurrSound,
        }
    }
}

/// Background tracks, looped indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Music {
    Theme,
}

impl Music {
    pub fn asset(&self) -> Asset {
        match self {
            Music::Theme => Asset::ThemeMusic,
        }
    }
}

/// A mixer channel a looping sound was started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub i32);

/// Everything the simulation needs from the audio device.
///
/// All calls are fire-and-forget; the simulation never learns whether a sound
/// actually played.
pub trait AudioSink {
    /// Plays a sound once on any free channel.
    fn play(&mut self, sound: Sound);

    /// Plays a sound `1 + loops` times (`-1` loops forever), returning the channel used.
    fn play_looping(&mut self, sound: Sound, loops: i32) -> Option<ChannelId>;

    /// Halts whatever is playing on `channel`.
    fn stop(&mut self, channel: ChannelId);

    /// Starts a background track, looping indefinitely.
    fn play_music(&mut self, music: Music);
}

/// The SDL2_mixer audio device.
///
/// If audio fails to initialize, it will be disabled and all functions will
/// silently do nothing.
pub struct Audio {
    _mixer_context: Option<mixer::Sdl2MixerContext>,
    sounds: HashMap<Sound, Chunk>,
    music: HashMap<Music, MixerMusic<'static>>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

impl Audio {
    /// Opens the audio device and loads every sound.
    ///
    /// Failures are logged and leave the returned instance disabled.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            _mixer_context: None,
            sounds: HashMap::new(),
            music: HashMap::new(),
            state: AudioState::Disabled,
        }
    }

    fn try_new() -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, 2, CHUNK_SIZE).map_err(|e| anyhow!("Failed to open audio: {}", e))?;
        mixer::allocate_channels(AUDIO_CHANNELS);

        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }
        MixerMusic::set_volume(DEFAULT_VOLUME as i32);

        let mixer_context = mixer::init(InitFlag::OGG).map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

        let sounds: HashMap<Sound, Chunk> = Sound::iter()
            .filter_map(|sound| match Self::load_sound(sound) {
                Ok(chunk) => Some((sound, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to load sound {:?}: {}", sound, e);
                    None
                }
            })
            .collect();

        let music: HashMap<Music, MixerMusic<'static>> = Music::iter()
            .filter_map(|track| match Self::load_music(track) {
                Ok(music) => Some((track, music)),
                Err(e) => {
                    tracing::warn!("Failed to load music {:?}: {}", track, e);
                    None
                }
            })
            .collect();

        if sounds.is_empty() && music.is_empty() {
            return Err(anyhow!("No sounds loaded successfully"));
        }

        tracing::debug!(sounds = sounds.len(), tracks = music.len(), "Audio initialized");

        Ok(Audio {
            _mixer_context: Some(mixer_context),
            sounds,
            music,
            state: AudioState::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    fn load_sound(sound: Sound) -> Result<Chunk> {
        let data = sound
            .asset()
            .get_bytes()
            .map_err(|e| anyhow!("Failed to get bytes for {:?}: {}", sound, e))?;
        let rwops = RWops::from_bytes(&data).map_err(|e| anyhow!("Failed to create RWops for {:?}: {}", sound, e))?;
        rwops.load_wav().map_err(|e| anyhow!("Failed to load wav for {:?}: {}", sound, e))
    }

    fn load_music(track: Music) -> Result<MixerMusic<'static>> {
        let path = track.asset().path();
        MixerMusic::from_file(&path).map_err(|e| anyhow!("Failed to load {}: {}", path.display(), e))
    }

    /// Instantly mutes or unmutes all channels and the music track.
    pub fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, AudioState::Enabled { volume }) => {
                self.state = AudioState::Muted { previous_volume: volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
                MixerMusic::set_volume(0);
            }
            (false, AudioState::Muted { previous_volume }) => {
                self.state = AudioState::Enabled { volume: previous_volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
                MixerMusic::set_volume(previous_volume as i32);
            }
            _ => {}
        }
    }

    pub fn is_muted(&self) -> bool {
        matches!(self.state, AudioState::Muted { .. })
    }

    /// Returns whether the audio system failed to initialize and is non-functional.
    pub fn is_disabled(&self) -> bool {
        matches!(self.state, AudioState::Disabled)
    }
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for Audio {
    fn play(&mut self, sound: Sound) {
        if self.is_disabled() {
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            if let Err(e) = mixer::Channel::all().play(chunk, 0) {
                tracing::trace!(%sound, "Could not play sound: {}", e);
            }
        }
    }

    fn play_looping(&mut self, sound: Sound, loops: i32) -> Option<ChannelId> {
        if self.is_disabled() {
            return None;
        }

        let chunk = self.sounds.get(&sound)?;
        match mixer::Channel::all().play(chunk, loops) {
            Ok(channel) => {
                tracing::trace!(%sound, channel = channel.0, "Started looping sound");
                Some(ChannelId(channel.0))
            }
            Err(e) => {
                tracing::warn!(%sound, "Could not start looping sound: {}", e);
                None
            }
        }
    }

    fn stop(&mut self, channel: ChannelId) {
        if self.is_disabled() {
            return;
        }

        tracing::trace!(channel = channel.0, "Halting channel");
        mixer::Channel(channel.0).halt();
    }

    fn play_music(&mut self, music: Music) {
        if self.is_disabled() {
            return;
        }

        if let Some(track) = self.music.get(&music) {
            match track.play(-1) {
                Ok(()) => tracing::debug!(%music, "Playing music"),
                Err(e) => tracing::warn!(%music, "Could not play music: {}", e),
            }
        }
    }
}
