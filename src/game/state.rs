use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::audio::{AudioSink, Sound};
use crate::constants::{
    ANIMATION_PERIOD, BASE_SPRITE_SIZE, FALL_SPEED, GHOST_CAPACITY, GHOST_FRAMES, SLEEPER_POSITION, SLEEP_ANIMATION_PERIOD,
    SLEEP_FRAMES, SNOWMAN_CAPACITY, SNOWMAN_FRAMES, SNOWMAN_INITIAL_ACTIVE, SNOWMAN_SPAWN_PERIOD, SPRITE_SCALE,
};
use crate::entity::bonus::Bonus;
use crate::entity::collision::collides;
use crate::entity::player::Player;
use crate::entity::pool::{ActorPool, PoolConfig};
use crate::entity::{Actor, ActorKind};
use crate::game::ledger::Ledger;
use crate::game::scene::{Scene, SceneEvent};
use crate::input::{Controls, FrameInput};
use crate::timer::Interval;

pub fn ghost_pool_config() -> PoolConfig {
    PoolConfig {
        kind: ActorKind::Ghost,
        capacity: GHOST_CAPACITY,
        initial_active: GHOST_CAPACITY,
        total_frames: GHOST_FRAMES,
        speed: FALL_SPEED,
        animation_period: ANIMATION_PERIOD,
        growth_period: None,
    }
}

pub fn snowman_pool_config() -> PoolConfig {
    PoolConfig {
        kind: ActorKind::Snowman,
        capacity: SNOWMAN_CAPACITY,
        initial_active: SNOWMAN_INITIAL_ACTIVE,
        total_frames: SNOWMAN_FRAMES,
        speed: FALL_SPEED,
        animation_period: ANIMATION_PERIOD,
        growth_period: Some(SNOWMAN_SPAWN_PERIOD),
    }
}

/// The whole logical state of a session.
///
/// Holds every actor, counter and timer, and is mutated only through
/// [`GameState::update`] and [`GameState::reset`]. It never touches SDL2, so it
/// can be driven headless.
pub struct GameState {
    pub scene: Scene,
    pub player: Player,
    pub ghosts: ActorPool,
    pub snowmen: ActorPool,
    pub bonus: Bonus,
    /// The sleeping cat shown on the win screen.
    pub sleeper: Actor,
    pub ledger: Ledger,
    player_animation: Interval,
    sleep_animation: Interval,
    rng: SmallRng,
}

impl GameState {
    pub fn new(mut rng: SmallRng) -> Self {
        Self {
            scene: Scene::default(),
            player: Player::default(),
            ghosts: ActorPool::new(ghost_pool_config(), &mut rng),
            snowmen: ActorPool::new(snowman_pool_config(), &mut rng),
            bonus: Bonus::new(),
            sleeper: Actor::new(ActorKind::Sleeper, SLEEPER_POSITION, BASE_SPRITE_SIZE, SPRITE_SCALE, SLEEP_FRAMES),
            ledger: Ledger::default(),
            player_animation: Interval::new(ANIMATION_PERIOD),
            sleep_animation: Interval::new(SLEEP_ANIMATION_PERIOD),
            rng,
        }
    }

    /// Runs the current scene for one frame.
    ///
    /// Returns the new scene if a transition happened this frame.
    pub fn update(&mut self, dt: f32, input: &FrameInput, audio: &mut dyn AudioSink) -> Option<Scene> {
        let event = match self.scene {
            Scene::Start => input.was_pressed(Controls::CONFIRM).then_some(SceneEvent::Confirm),
            Scene::Playing => self.update_playing(dt, input, audio),
            Scene::Win => {
                self.update_win(dt, audio);
                None
            }
            Scene::Death => input.was_pressed(Controls::CONFIRM).then_some(SceneEvent::Confirm),
        }?;

        let previous = self.scene;
        let next = previous.next(event);
        if next == previous {
            return None;
        }

        if previous == Scene::Playing {
            self.player.silence(audio);
        }
        if previous == Scene::Death {
            self.reset(audio);
        }

        info!(from = %previous, to = %next, kills = self.ledger.kills(), health = self.ledger.health(), "Scene transition");
        self.scene = next;
        Some(next)
    }

    fn update_playing(&mut self, dt: f32, input: &FrameInput, audio: &mut dyn AudioSink) -> Option<SceneEvent> {
        self.player_animation.tick(dt);
        let animate = self.player_animation.is_ready();
        self.player.update(dt, input, animate, audio);

        self.ghosts.update(dt, &mut self.rng);
        self.snowmen.update(dt, &mut self.rng);
        self.bonus.update(dt);

        self.resolve_collisions(audio);

        if self.ledger.is_depleted() {
            Some(SceneEvent::HealthDepleted)
        } else if self.ledger.has_won() {
            Some(SceneEvent::KillThresholdReached)
        } else {
            None
        }
    }

    /// Applies every player collision for this frame: snowmen hurt, attacks hit
    /// the ghost and catch the mouse.
    fn resolve_collisions(&mut self, audio: &mut dyn AudioSink) {
        let player = self.player.bounds();

        for index in 0..self.snowmen.active_count() {
            if collides(&self.snowmen.active()[index].bounds(), &player) {
                self.ledger.damage();
                audio.play(Sound::Hurt);
                self.snowmen.respawn(index, &mut self.rng);
                debug!(health = self.ledger.health(), "Hit by a snowman");
            }
        }

        if !self.player.is_attacking() {
            return;
        }

        for index in 0..self.ghosts.active_count() {
            if collides(&player, &self.ghosts.active()[index].bounds()) {
                self.ledger.record_kill();
                audio.play(Sound::GhostHit);
                self.ghosts.respawn(index, &mut self.rng);
                debug!(kills = self.ledger.kills(), "Ghost hit");
            }
        }

        if self.bonus.is_active() && collides(&player, &self.bonus.bounds()) {
            self.bonus.collect();
            self.ledger.heal();
            audio.play(Sound::Heal);
            debug!(health = self.ledger.health(), "Bonus collected");
        }
    }

    fn update_win(&mut self, dt: f32, audio: &mut dyn AudioSink) {
        self.sleep_animation.tick(dt);
        if self.sleep_animation.is_ready() {
            self.sleeper.advance_frame();
        }

        // Retriggered every frame instead of looping once.
        audio.play(Sound::Purr);
    }

    /// Restores the start-of-session state in place: ledger, player, hazards,
    /// bonus, timers and scene.
    pub fn reset(&mut self, audio: &mut dyn AudioSink) {
        self.ledger.reset();
        self.player.reset(audio);
        self.ghosts.reset(&mut self.rng);
        self.snowmen.reset(&mut self.rng);
        self.bonus.reset();
        self.sleeper.set_frame(0);
        self.sleeper.pos = SLEEPER_POSITION;
        self.player_animation.reset();
        self.sleep_animation.reset();
        self.scene = Scene::Start;
        debug!("Game state reset");
    }
}
