//! Asset lookup. Assets are read from a directory on disk at startup.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use strum_macros::{Display, EnumIter};

use crate::error::AssetError;

pub const DEFAULT_ASSET_DIR: &str = "assets";

static ASSET_ROOT: OnceLock<PathBuf> = OnceLock::new();

/// Sets the directory assets are loaded from. Only the first call has any effect.
pub fn set_asset_root(root: impl Into<PathBuf>) -> bool {
    ASSET_ROOT.set(root.into()).is_ok()
}

pub fn asset_root() -> &'static Path {
    ASSET_ROOT.get_or_init(|| PathBuf::from(DEFAULT_ASSET_DIR))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Asset {
    IdleSheet,
    RunSheet,
    JumpSheet,
    AttackSheet,
    SleepSheet,
    GhostSheet,
    SnowmanSheet,
    MouseSheet,
    Heart,
    Background,
    Font,
    ThemeMusic,
    HurtSound,
    HealSound,
    GhostSound,
    FootstepsSound,
    PurrSound,
}

impl Asset {
    /// Path of the asset relative to the asset root.
    pub fn relative_path(&self) -> &'static str {
        use Asset::*;
        match self {
            IdleSheet => "cat/idle.png",
            RunSheet => "cat/run.png",
            JumpSheet => "cat/jump.png",
            AttackSheet => "cat/attack.png",
            SleepSheet => "cat/sleep.png",
            GhostSheet => "ghost.png",
            SnowmanSheet => "snowman.png",
            MouseSheet => "mouse.png",
            Heart => "heart.png",
            Background => "background.png",
            Font => "font.ttf",
            ThemeMusic => "music/theme.ogg",
            HurtSound => "sfx/hurt.wav",
            HealSound => "sfx/heal.wav",
            GhostSound => "sfx/ghost.wav",
            FootstepsSound => "sfx/footsteps.wav",
            PurrSound => "sfx/purr.wav",
        }
    }

    pub fn path(&self) -> PathBuf {
        self.path_in(asset_root())
    }

    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }

    pub fn get_bytes(&self) -> Result<Vec<u8>, AssetError> {
        self.read_from(asset_root())
    }

    /// Reads the asset from `root` instead of the configured asset root.
    pub fn read_from(&self, root: &Path) -> Result<Vec<u8>, AssetError> {
        let path = self.path_in(root);
        std::fs::read(&path).map_err(|source| AssetError::Io { path, source })
    }
}
