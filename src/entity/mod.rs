//! Actors: every positioned, sized and optionally animated thing on screen.

pub mod bonus;
pub mod collision;
pub mod direction;
pub mod player;
pub mod pool;

use glam::Vec2;

use crate::entity::collision::Bounds;
use crate::entity::player::PlayerAction;

/// What an actor represents, used to pick its sprite sheet when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player(PlayerAction),
    Sleeper,
    Ghost,
    Snowman,
    Mouse,
}

/// A positioned, sized, animated visual entity.
///
/// The frame index is always strictly less than the frame count; every write
/// goes through [`Actor::set_frame`], which wraps.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub kind: ActorKind,
    pub pos: Vec2,
    /// On-screen size, already multiplied by the scale factor.
    pub size: Vec2,
    frame: usize,
    total_frames: usize,
}

impl Actor {
    pub fn new(kind: ActorKind, pos: Vec2, base_size: Vec2, scale: f32, total_frames: usize) -> Self {
        Self {
            kind,
            pos,
            size: base_size * scale,
            frame: 0,
            total_frames: total_frames.max(1),
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Sets the frame index, wrapping it into `[0, total_frames)`.
    pub fn set_frame(&mut self, index: usize) {
        self.frame = index % self.total_frames;
    }

    pub fn advance_frame(&mut self) {
        self.set_frame(self.frame + 1);
    }

    pub fn is_last_frame(&self) -> bool {
        self.frame == self.total_frames - 1
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }
}
