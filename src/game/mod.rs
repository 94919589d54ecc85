//! This module contains the main game logic and state.

use rand::rngs::SmallRng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::WindowContext;
use strum::EnumCount;
use tracing::{debug, info};

use crate::asset::Asset;
use crate::audio::{Audio, AudioSink, Music};
use crate::constants::{
    ATTACK_FRAMES, CANVAS_SIZE, FONT_SIZE, GHOST_FRAMES, HEART_SIZE, IDLE_FRAMES, JUMP_FRAMES, KILL_THRESHOLD, MOUSE_FRAMES, RUN_FRAMES,
    SLEEP_FRAMES, SNOWMAN_FRAMES,
};
use crate::entity::player::PlayerAction;
use crate::entity::{Actor, ActorKind};
use crate::error::{GameResult, TextureError};
use crate::events::GameCommand;
use crate::formatter;
use crate::input::FrameInput;
use crate::texture::sprite::SpriteSheet;
use crate::texture::text::TextRenderer;

use self::scene::Scene;
use self::state::GameState;

pub mod ledger;
pub mod scene;
pub mod state;

const TEXT_COLOR: Color = Color::RGB(255, 255, 255);
const HUD_MARGIN: i32 = 8;

/// Every sprite sheet, one per actor kind.
struct Sprites {
    /// Indexed by [`PlayerAction`] declaration order.
    player: [SpriteSheet; PlayerAction::COUNT],
    sleeper: SpriteSheet,
    ghost: SpriteSheet,
    snowman: SpriteSheet,
    mouse: SpriteSheet,
    heart: SpriteSheet,
    background: SpriteSheet,
}

impl Sprites {
    fn load(texture_creator: &TextureCreator<WindowContext>) -> GameResult<Self> {
        let load = |asset, frames| SpriteSheet::load(texture_creator, asset, frames);

        Ok(Self {
            player: [
                load(Asset::IdleSheet, IDLE_FRAMES)?,
                load(Asset::RunSheet, RUN_FRAMES)?,
                load(Asset::JumpSheet, JUMP_FRAMES)?,
                load(Asset::AttackSheet, ATTACK_FRAMES)?,
            ],
            sleeper: load(Asset::SleepSheet, SLEEP_FRAMES)?,
            ghost: load(Asset::GhostSheet, GHOST_FRAMES)?,
            snowman: load(Asset::SnowmanSheet, SNOWMAN_FRAMES)?,
            mouse: load(Asset::MouseSheet, MOUSE_FRAMES)?,
            heart: load(Asset::Heart, 1)?,
            background: load(Asset::Background, 1)?,
        })
    }

    fn sheet(&self, kind: ActorKind) -> &SpriteSheet {
        match kind {
            ActorKind::Player(action) => &self.player[action as usize],
            ActorKind::Sleeper => &self.sleeper,
            ActorKind::Ghost => &self.ghost,
            ActorKind::Snowman => &self.snowman,
            ActorKind::Mouse => &self.mouse,
        }
    }

    fn render<C: RenderTarget>(&self, canvas: &mut Canvas<C>, actor: &Actor, flip: bool) -> Result<(), TextureError> {
        self.sheet(actor.kind).render(canvas, actor, flip)
    }
}

/// The `Game` struct is the main entry point for the game.
///
/// It owns the simulation state and the SDL2 resources used to present it,
/// and turns per-frame input into simulation updates and draw calls.
pub struct Game {
    pub state: GameState,
    pub audio: Audio,
    sprites: Sprites,
    text: TextRenderer,
    paused: bool,
}

impl Game {
    pub fn new(
        texture_creator: &'static TextureCreator<WindowContext>,
        ttf_context: &'static Sdl2TtfContext,
        rng: SmallRng,
        muted: bool,
    ) -> GameResult<Game> {
        let sprites = Sprites::load(texture_creator)?;
        let text = TextRenderer::new(ttf_context, texture_creator, FONT_SIZE)?;

        let mut audio = Audio::new();
        audio.set_mute(muted);
        audio.play_music(Music::Theme);

        let state = GameState::new(rng);
        formatter::set_scene(state.scene);
        info!(muted, audio_disabled = audio.is_disabled(), "Game initialized");

        Ok(Game {
            state,
            audio,
            sprites,
            text,
            paused: false,
        })
    }

    /// Applies a shell command. Returns `false` if the game should exit.
    pub fn handle_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Exit => {
                info!("Exit requested. Exiting...");
                return false;
            }
            GameCommand::TogglePause => {
                self.paused = !self.paused;
                info!("{}", if self.paused { "Paused" } else { "Unpaused" });
            }
            GameCommand::ToggleMute => {
                let mute = !self.audio.is_muted();
                self.audio.set_mute(mute);
                info!("{}", if mute { "Muted" } else { "Unmuted" });
            }
        }
        true
    }

    /// Advances the simulation by `dt` seconds unless paused.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) {
        if self.paused {
            return;
        }

        if let Some(scene) = self.state.update(dt, input, &mut self.audio) {
            formatter::set_scene(scene);
            debug!(%scene, "Entered scene");
        }
    }

    pub fn draw<C: RenderTarget>(&mut self, canvas: &mut Canvas<C>) -> GameResult<()> {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        match self.state.scene {
            Scene::Start => self.draw_start(canvas)?,
            Scene::Playing => self.draw_playing(canvas)?,
            Scene::Win => self.draw_win(canvas)?,
            Scene::Death => self.draw_death(canvas)?,
        }

        if self.paused {
            self.text.draw_centered(canvas, "Paused", HUD_MARGIN * 4, TEXT_COLOR)?;
        }
        Ok(())
    }

    fn draw_start<C: RenderTarget>(&mut self, canvas: &mut Canvas<C>) -> GameResult<()> {
        let lines = [
            "Catnap".to_string(),
            String::new(),
            "Arrows or A/D to move, Space to jump".to_string(),
            "X to swat ghosts, catch the mouse to heal".to_string(),
            format!("Swat {KILL_THRESHOLD} ghosts to earn your nap"),
            String::new(),
            "Press Enter to start".to_string(),
        ];
        self.draw_lines(canvas, &lines, 120)
    }

    fn draw_playing<C: RenderTarget>(&mut self, canvas: &mut Canvas<C>) -> GameResult<()> {
        let screen = Rect::new(0, 0, CANVAS_SIZE.x, CANVAS_SIZE.y);
        self.sprites.background.render_frame(canvas, 0, screen, false)?;

        let state = &self.state;
        for snowman in state.snowmen.active() {
            self.sprites.render(canvas, snowman, false)?;
        }
        for ghost in state.ghosts.active() {
            self.sprites.render(canvas, ghost, false)?;
        }
        if state.bonus.is_active() {
            self.sprites.render(canvas, state.bonus.actor(), false)?;
        }
        self.sprites
            .render(canvas, state.player.current(), state.player.facing().flip_horizontal())?;

        for i in 0..state.ledger.hearts() {
            let dest = Rect::new(
                HUD_MARGIN + i as i32 * (HEART_SIZE as i32 + HUD_MARGIN / 2),
                HUD_MARGIN,
                HEART_SIZE,
                HEART_SIZE,
            );
            self.sprites.heart.render_frame(canvas, 0, dest, false)?;
        }

        let counter = format!("Ghosts: {}/{}", state.ledger.kills(), KILL_THRESHOLD);
        let y = HUD_MARGIN * 2 + HEART_SIZE as i32;
        self.text.draw(canvas, &counter, HUD_MARGIN, y, TEXT_COLOR)?;
        Ok(())
    }

    fn draw_win<C: RenderTarget>(&mut self, canvas: &mut Canvas<C>) -> GameResult<()> {
        self.sprites.render(canvas, &self.state.sleeper, false)?;
        let lines = [
            "Congratulations!".to_string(),
            format!("{} ghosts swatted.", self.state.ledger.kills()),
            "Time for a nap.".to_string(),
        ];
        self.draw_lines(canvas, &lines, 220)
    }

    fn draw_death<C: RenderTarget>(&mut self, canvas: &mut Canvas<C>) -> GameResult<()> {
        let lines = [
            "Game Over".to_string(),
            format!("Ghosts swatted: {}", self.state.ledger.kills()),
            String::new(),
            "Press Enter to try again".to_string(),
        ];
        self.draw_lines(canvas, &lines, 160)
    }

    fn draw_lines<C: RenderTarget>(&mut self, canvas: &mut Canvas<C>, lines: &[String], top: i32) -> GameResult<()> {
        let line_height = FONT_SIZE as i32 + HUD_MARGIN;
        for (i, line) in lines.iter().enumerate() {
            self.text.draw_centered(canvas, line, top + i as i32 * line_height, TEXT_COLOR)?;
        }
        Ok(())
    }
}
