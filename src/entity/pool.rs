//! Falling actors: the ghost and the snowmen.
//!
//! Both kinds share one shape. A pool holds a fixed number of slots, of which
//! only the first `active` are moved, drawn and collided. Falling actors are
//! never removed; they respawn above the screen at a random x.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{max_x, BASE_SPRITE_SIZE, FLOOR, RESPAWN_Y, SPRITE_SCALE};
use crate::entity::{Actor, ActorKind};
use crate::timer::Interval;

/// Static description of a pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub kind: ActorKind,
    pub capacity: usize,
    pub initial_active: usize,
    pub total_frames: usize,
    /// Fall speed in pixels per second.
    pub speed: f32,
    pub animation_period: Duration,
    /// One more slot becomes active every period, until the pool is full.
    pub growth_period: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ActorPool {
    config: PoolConfig,
    slots: SmallVec<[Actor; 5]>,
    active: usize,
    animation: Interval,
    growth: Option<Interval>,
}

/// Places `actor` just above the screen at a random x.
pub fn respawn<R: Rng>(actor: &mut Actor, rng: &mut R) {
    let limit = max_x(actor.size.x) as i32;
    actor.pos = Vec2::new(rng.random_range(0..=limit) as f32, RESPAWN_Y);
}

impl ActorPool {
    pub fn new<R: Rng>(config: PoolConfig, rng: &mut R) -> Self {
        let slots = (0..config.capacity)
            .map(|_| {
                let mut actor = Actor::new(config.kind, Vec2::ZERO, BASE_SPRITE_SIZE, SPRITE_SCALE, config.total_frames);
                respawn(&mut actor, rng);
                actor
            })
            .collect();

        Self {
            active: config.initial_active.min(config.capacity),
            animation: Interval::new(config.animation_period),
            growth: config.growth_period.map(Interval::new),
            config,
            slots,
        }
    }

    pub fn kind(&self) -> ActorKind {
        self.config.kind
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &[Actor] {
        &self.slots[..self.active]
    }

    pub fn active_mut(&mut self) -> &mut [Actor] {
        &mut self.slots[..self.active]
    }

    /// Every slot, including dormant ones.
    pub fn slots(&self) -> &[Actor] {
        &self.slots
    }

    /// Activates one more slot, if any are left.
    pub fn grow(&mut self) {
        if self.active < self.slots.len() {
            self.active += 1;
            debug!(kind = ?self.config.kind, active = self.active, "Pool grew");
        }
    }

    /// Respawns the active actor at `index`.
    pub fn respawn<R: Rng>(&mut self, index: usize, rng: &mut R) {
        if let Some(actor) = self.active_mut().get_mut(index) {
            respawn(actor, rng);
        }
    }

    /// Advances timers, grows the pool, and moves every active actor down.
    ///
    /// Actors at or below the floor respawn at the top.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        if let Some(growth) = self.growth.as_mut() {
            growth.tick(dt);
            if growth.is_ready() {
                self.grow();
            }
        }

        self.animation.tick(dt);
        let animate = self.animation.is_ready();
        let speed = self.config.speed;

        for actor in self.active_mut() {
            if animate {
                actor.advance_frame();
            }

            actor.pos.y += speed * dt;
            if actor.pos.y >= FLOOR {
                respawn(actor, rng);
            }
        }
    }

    /// Restores the initial active count and timers and respawns every slot.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.active = self.config.initial_active.min(self.slots.len());
        self.animation.reset();
        if let Some(growth) = self.growth.as_mut() {
            growth.reset();
        }
        for actor in self.slots.iter_mut() {
            actor.set_frame(0);
            respawn(actor, rng);
        }
    }
}
