use glam::UVec2;
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::video::WindowContext;
use tracing::debug;

use crate::asset::Asset;
use crate::entity::Actor;
use crate::error::{GameResult, TextureError};

/// A horizontal strip of equally sized animation frames.
pub struct SpriteSheet {
    texture: Texture,
    frame_size: UVec2,
    frames: usize,
}

impl SpriteSheet {
    /// Loads `asset` and slices it into `frames` columns.
    pub fn load(texture_creator: &TextureCreator<WindowContext>, asset: Asset, frames: usize) -> GameResult<Self> {
        let bytes = asset.get_bytes()?;
        let texture = texture_creator
            .load_texture_bytes(&bytes)
            .map_err(|reason| TextureError::LoadFailed {
                asset: asset.to_string(),
                reason,
            })?;

        let frames = frames.max(1);
        let query = texture.query();
        let frame_width = query.width / frames as u32;
        if frame_width == 0 || query.height == 0 {
            return Err(TextureError::InvalidSheet {
                asset: asset.to_string(),
                reason: format!("{}x{} texture cannot hold {} frames", query.width, query.height, frames),
            }
            .into());
        }

        debug!(%asset, frames, frame_width, frame_height = query.height, "Loaded sprite sheet");
        Ok(Self {
            texture,
            frame_size: UVec2::new(frame_width, query.height),
            frames,
        })
    }

    /// Source rectangle of `frame` within the strip. Out-of-range frames wrap.
    pub fn frame_rect(&self, frame: usize) -> Rect {
        let column = (frame % self.frames) as u32;
        Rect::new(
            (column * self.frame_size.x) as i32,
            0,
            self.frame_size.x,
            self.frame_size.y,
        )
    }

    /// Draws `frame` stretched over `dest`, optionally mirrored horizontally.
    pub fn render_frame<C: RenderTarget>(
        &self,
        canvas: &mut Canvas<C>,
        frame: usize,
        dest: Rect,
        flip_horizontal: bool,
    ) -> Result<(), TextureError> {
        canvas
            .copy_ex(&self.texture, Some(self.frame_rect(frame)), Some(dest), 0.0, None, flip_horizontal, false)
            .map_err(TextureError::RenderFailed)
    }

    /// Draws an actor's current frame at its position and scaled size.
    pub fn render<C: RenderTarget>(&self, canvas: &mut Canvas<C>, actor: &Actor, flip_horizontal: bool) -> Result<(), TextureError> {
        self.render_frame(canvas, actor.frame(), actor_rect(actor), flip_horizontal)
    }
}

/// Destination rectangle for an actor, rounded to whole pixels.
pub fn actor_rect(actor: &Actor) -> Rect {
    Rect::new(
        actor.pos.x.round() as i32,
        actor.pos.y.round() as i32,
        actor.size.x.round().max(1.0) as u32,
        actor.size.y.round().max(1.0) as u32,
    )
}
