use std::time::{Duration, Instant};

use sdl2::event::{Event, WindowEvent};
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::{AudioSubsystem, EventPump, Sdl, VideoSubsystem};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::constants::{CANVAS_SIZE, LOOP_TIME, WINDOW_TITLE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::input::{Bindings, InputTracker, KeyEvent};
use crate::platform;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    bindings: Bindings,
    tracker: InputTracker,
    last_tick: Instant,
    focused: bool,
    _sdl_context: Sdl,
    _video_subsystem: VideoSubsystem,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and loads every asset.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or asset
    /// and texture errors if a sprite sheet or the font cannot be loaded.
    pub fn new(config: &Config) -> GameResult<Self> {
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let ttf_context = sdl2::ttf::init().map_err(|e| GameError::Sdl(e.to_string()))?;

        let window = video_subsystem
            .window(WINDOW_TITLE, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        // Textures and fonts borrow these for as long as the process runs.
        let texture_creator: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));
        let ttf_context: &'static Sdl2TtfContext = Box::leak(Box::new(ttf_context));

        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        let game = Game::new(texture_creator, ttf_context, config.rng(), config.muted)?;

        info!(seed = ?config.seed, assets = %config.assets_dir.display(), "Application initialized");
        Ok(App {
            game,
            canvas,
            event_pump,
            bindings: Bindings::default(),
            tracker: InputTracker::default(),
            last_tick: Instant::now(),
            focused: true,
            _sdl_context: sdl_context,
            _video_subsystem: video_subsystem,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame of the game loop with consistent timing.
    ///
    /// Returns `false` when the game should exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let mut keys = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    info!("Window closed. Exiting...");
                    return false;
                }
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => keys.push(KeyEvent::Down(key)),
                Event::KeyUp { keycode: Some(key), .. } => keys.push(KeyEvent::Up(key)),
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::FocusGained => {
                        self.focused = true;
                        debug!("Window focus gained");
                    }
                    WindowEvent::FocusLost => {
                        self.focused = false;
                        self.tracker.clear();
                        debug!("Window focus lost");
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        let (input, commands) = self.tracker.process(&self.bindings, &keys);
        for command in commands {
            if !self.game.handle_command(command) {
                return false;
            }
        }

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = Instant::now();

        self.game.tick(dt, &input);

        if let Err(e) = self.game.draw(&mut self.canvas) {
            error!("Failed to draw game: {e}");
        }
        self.canvas.present();

        formatter::increment_frame();

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                platform::sleep(time, self.focused);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
