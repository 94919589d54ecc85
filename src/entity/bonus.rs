use glam::Vec2;
use tracing::debug;

use crate::constants::{
    ANIMATION_PERIOD, BASE_SPRITE_SIZE, BONUS_RESPAWN_PERIOD, BONUS_SPEED, FLOOR, MOUSE_FRAMES, SCREEN_WIDTH, SPRITE_SCALE,
};
use crate::entity::collision::Bounds;
use crate::entity::{Actor, ActorKind};
use crate::timer::Interval;

/// The mouse: drifts along the floor and restores one health point when caught.
///
/// While active it wraps from the right edge back to the left. Once caught it
/// stays hidden until its respawn period elapses, then re-enters from the left.
#[derive(Debug, Clone)]
pub struct Bonus {
    actor: Actor,
    active: bool,
    animation: Interval,
    respawn: Interval,
}

impl Default for Bonus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bonus {
    pub fn new() -> Self {
        let actor = Actor::new(ActorKind::Mouse, Vec2::ZERO, BASE_SPRITE_SIZE, SPRITE_SCALE, MOUSE_FRAMES);
        let mut bonus = Self {
            actor,
            active: true,
            animation: Interval::new(ANIMATION_PERIOD),
            respawn: Interval::new(BONUS_RESPAWN_PERIOD),
        };
        bonus.enter();
        bonus
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn bounds(&self) -> Bounds {
        self.actor.bounds()
    }

    /// Places the mouse just off the left edge, on the floor.
    fn enter(&mut self) {
        self.actor.pos = Vec2::new(-self.actor.size.x, FLOOR);
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            self.respawn.tick(dt);
            if self.respawn.is_ready() {
                self.active = true;
                self.enter();
                debug!("Bonus returned");
            }
            return;
        }

        self.animation.tick(dt);
        if self.animation.is_ready() {
            self.actor.advance_frame();
        }

        self.actor.pos.x += BONUS_SPEED * dt;
        if self.actor.pos.x >= SCREEN_WIDTH {
            self.enter();
        }
    }

    /// Hides the mouse and starts its respawn countdown.
    pub fn collect(&mut self) {
        self.active = false;
        self.respawn.reset();
    }

    pub fn reset(&mut self) {
        self.active = true;
        self.animation.reset();
        self.respawn.reset();
        self.actor.set_frame(0);
        self.enter();
    }
}
