//! TTF text rendering with a per-string texture cache.
//!
//! The HUD and scene captions only ever show a handful of distinct strings, so
//! each rendered string is kept as a texture instead of being rasterized again
//! every frame.

use std::collections::HashMap;

use glam::UVec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use tracing::{debug, trace};

use crate::asset::Asset;
use crate::constants::SCREEN_WIDTH;
use crate::error::{GameResult, TextureError};

/// Upper bound on cached strings before the cache is flushed.
const CACHE_LIMIT: usize = 64;

struct CachedText {
    texture: Texture,
    size: UVec2,
}

pub struct TextRenderer {
    font: Font<'static, 'static>,
    texture_creator: &'static TextureCreator<WindowContext>,
    cache: HashMap<(String, Color), CachedText>,
}

impl TextRenderer {
    pub fn new(
        ttf_context: &'static Sdl2TtfContext,
        texture_creator: &'static TextureCreator<WindowContext>,
        point_size: u16,
    ) -> GameResult<Self> {
        let path = Asset::Font.path();
        let font = ttf_context
            .load_font(&path, point_size)
            .map_err(|e| TextureError::FontFailed(format!("{}: {e}", path.display())))?;

        debug!(path = %path.display(), point_size, "Loaded font");
        Ok(Self {
            font,
            texture_creator,
            cache: HashMap::new(),
        })
    }

    fn cached(&mut self, text: &str, color: Color) -> Result<&CachedText, TextureError> {
        let key = (text.to_string(), color);
        if !self.cache.contains_key(&key) {
            if self.cache.len() >= CACHE_LIMIT {
                trace!(entries = self.cache.len(), "Flushing text cache");
                self.cache.clear();
            }

            let surface = self
                .font
                .render(text)
                .blended(color)
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
            let texture = self
                .texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
            let size = UVec2::new(surface.width(), surface.height());
            self.cache.insert(key.clone(), CachedText { texture, size });
        }

        self.cache
            .get(&key)
            .ok_or_else(|| TextureError::RenderFailed(format!("text cache miss for {text:?}")))
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    pub fn draw<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), TextureError> {
        if text.is_empty() {
            return Ok(());
        }
        let cached = self.cached(text, color)?;
        canvas
            .copy(&cached.texture, None, Rect::new(x, y, cached.size.x, cached.size.y))
            .map_err(TextureError::RenderFailed)
    }

    /// Draws `text` horizontally centered on the canvas at height `y`.
    pub fn draw_centered<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        text: &str,
        y: i32,
        color: Color,
    ) -> Result<(), TextureError> {
        if text.is_empty() {
            return Ok(());
        }
        let width = self.cached(text, color)?.size.x;
        let x = ((SCREEN_WIDTH as i32) - width as i32) / 2;
        self.draw(canvas, text, x, y, color)
    }
}
