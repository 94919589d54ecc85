//! The player character and its animation state machine.
//!
//! The cat has four actions, each with its own animated actor. Several actions
//! can be active at once (an attack started mid-jump, running while jumping),
//! but only the highest-priority one is displayed and advanced each frame; the
//! others keep their frame until they become the displayed action again.

use bitflags::bitflags;
use glam::Vec2;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};
use tracing::trace;

use crate::audio::{AudioSink, ChannelId, Sound};
use crate::constants::{
    max_x, AIRBORNE_FRAMES, ATTACK_FRAMES, BASE_SPRITE_SIZE, FLOOR, GRAVITY, IDLE_FRAMES, JUMP_FRAMES, JUMP_VELOCITY,
    PLAYER_SPEED, PLAYER_START, RUN_FRAMES, SPRITE_SCALE,
};
use crate::entity::collision::Bounds;
use crate::entity::direction::Facing;
use crate::entity::{Actor, ActorKind};
use crate::input::{Controls, FrameInput};

/// A player action. Declaration order is display priority, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCountMacro, Display)]
pub enum PlayerAction {
    Idle,
    Run,
    Jump,
    Attack,
}

bitflags! {
    /// The set of actions currently in progress. Idle is the empty set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ActionFlags: u8 {
        const RUN = 1 << 0;
        const JUMP = 1 << 1;
        const ATTACK = 1 << 2;
    }
}

impl PlayerAction {
    pub fn frame_count(self) -> usize {
        match self {
            PlayerAction::Idle => IDLE_FRAMES,
            PlayerAction::Run => RUN_FRAMES,
            PlayerAction::Jump => JUMP_FRAMES,
            PlayerAction::Attack => ATTACK_FRAMES,
        }
    }

    pub fn flag(self) -> ActionFlags {
        match self {
            PlayerAction::Idle => ActionFlags::empty(),
            PlayerAction::Run => ActionFlags::RUN,
            PlayerAction::Jump => ActionFlags::JUMP,
            PlayerAction::Attack => ActionFlags::ATTACK,
        }
    }

    /// Picks the highest-priority action present in `flags`, falling back to Idle.
    pub fn resolve(flags: ActionFlags) -> PlayerAction {
        PlayerAction::iter()
            .rev()
            .find(|action| flags.contains(action.flag()))
            .unwrap_or(PlayerAction::Idle)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    actors: [Actor; PlayerAction::COUNT],
    flags: ActionFlags,
    /// Vertical velocity of the jump, in pixels per second (negative is up).
    velocity: f32,
    facing: Facing,
    footsteps: Option<ChannelId>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START)
    }
}

impl Player {
    pub fn new(start: Vec2) -> Self {
        let actor = |action: PlayerAction| {
            Actor::new(
                ActorKind::Player(action),
                start,
                BASE_SPRITE_SIZE,
                SPRITE_SCALE,
                action.frame_count(),
            )
        };

        Self {
            actors: [
                actor(PlayerAction::Idle),
                actor(PlayerAction::Run),
                actor(PlayerAction::Jump),
                actor(PlayerAction::Attack),
            ],
            flags: ActionFlags::empty(),
            velocity: 0.0,
            facing: Facing::default(),
            footsteps: None,
        }
    }

    /// The action currently displayed and advanced.
    pub fn action(&self) -> PlayerAction {
        PlayerAction::resolve(self.flags)
    }

    pub fn flags(&self) -> ActionFlags {
        self.flags
    }

    pub fn is_running(&self) -> bool {
        self.flags.contains(ActionFlags::RUN)
    }

    pub fn is_jumping(&self) -> bool {
        self.flags.contains(ActionFlags::JUMP)
    }

    pub fn is_attacking(&self) -> bool {
        self.flags.contains(ActionFlags::ATTACK)
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn footsteps(&self) -> Option<ChannelId> {
        self.footsteps
    }

    pub fn actor(&self, action: PlayerAction) -> &Actor {
        &self.actors[action.index()]
    }

    pub fn actor_mut(&mut self, action: PlayerAction) -> &mut Actor {
        &mut self.actors[action.index()]
    }

    /// The actor for the displayed action.
    pub fn current(&self) -> &Actor {
        self.actor(self.action())
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Collision box of the displayed action.
    pub fn bounds(&self) -> Bounds {
        self.current().bounds()
    }

    /// Runs one Playing frame of the state machine.
    ///
    /// `animate` is the result of polling the player's animation interval this frame.
    pub fn update(&mut self, dt: f32, input: &FrameInput, animate: bool, audio: &mut dyn AudioSink) {
        self.apply_movement(dt, input);

        if input.was_pressed(Controls::JUMP) && !self.is_jumping() {
            self.flags.insert(ActionFlags::JUMP);
            self.actor_mut(PlayerAction::Jump).set_frame(0);
            self.velocity = JUMP_VELOCITY;
            trace!("Jump started");
        }

        if input.was_pressed(Controls::ATTACK) && !self.is_attacking() {
            self.flags.insert(ActionFlags::ATTACK);
            self.actor_mut(PlayerAction::Attack).set_frame(0);
            trace!("Attack started");
        }

        let moving = input.is_moving();
        if moving && !self.is_running() {
            self.start_running(audio);
        } else if !moving && self.is_running() {
            self.stop_running(audio);
        }

        match self.action() {
            PlayerAction::Attack => {
                let attack = self.actor_mut(PlayerAction::Attack);
                if animate {
                    attack.advance_frame();
                }
                if attack.is_last_frame() {
                    self.flags.remove(ActionFlags::ATTACK);
                }
            }
            PlayerAction::Jump => {
                if animate {
                    self.actor_mut(PlayerAction::Jump).advance_frame();
                }
                self.update_jump(dt, moving, audio);
            }
            action @ (PlayerAction::Run | PlayerAction::Idle) => {
                if animate {
                    self.actor_mut(action).advance_frame();
                }
            }
        }
    }

    /// Moves every action actor horizontally in lockstep and updates the facing.
    fn apply_movement(&mut self, dt: f32, input: &FrameInput) {
        let mut x = self.actor(PlayerAction::Idle).pos.x;

        for (control, facing) in [(Controls::LEFT, Facing::Left), (Controls::RIGHT, Facing::Right)] {
            if input.is_held(control) {
                self.facing = facing;
                x += facing.sign() * PLAYER_SPEED * dt;
            }
        }

        let x = x.clamp(0.0, max_x(self.actor(PlayerAction::Idle).size.x));
        for actor in self.actors.iter_mut() {
            actor.pos.x = x;
        }
    }

    /// Integrates the jump arc while the animation is in its airborne frames,
    /// and lands as soon as the animation has left them.
    ///
    /// Landing snaps the cat onto the floor, since the arc may end a fraction
    /// of a pixel short of it at small time steps.
    fn update_jump(&mut self, dt: f32, moving: bool, audio: &mut dyn AudioSink) {
        let frame = self.actor(PlayerAction::Jump).frame();

        if AIRBORNE_FRAMES.contains(&frame) {
            let velocity = self.velocity + GRAVITY * dt;
            let jump = self.actor_mut(PlayerAction::Jump);
            jump.pos.y += velocity * dt;

            let grounded = jump.pos.y >= FLOOR;
            if grounded {
                jump.pos.y = FLOOR;
            }
            self.velocity = if grounded { 0.0 } else { velocity };
        } else if frame > *AIRBORNE_FRAMES.end() {
            self.actor_mut(PlayerAction::Jump).pos.y = FLOOR;
            self.velocity = 0.0;
            self.flags.remove(ActionFlags::JUMP);
            trace!(moving, "Landed");

            if moving {
                self.start_running(audio);
            } else if self.is_running() {
                self.stop_running(audio);
            }
        }
    }

    fn start_running(&mut self, audio: &mut dyn AudioSink) {
        self.flags.insert(ActionFlags::RUN);
        self.actor_mut(PlayerAction::Run).set_frame(0);
        if self.footsteps.is_none() {
            self.footsteps = audio.play_looping(Sound::Footsteps, -1);
        }
    }

    fn stop_running(&mut self, audio: &mut dyn AudioSink) {
        self.flags.remove(ActionFlags::RUN);
        self.silence(audio);
    }

    /// Stops the footsteps loop if it is playing.
    pub fn silence(&mut self, audio: &mut dyn AudioSink) {
        if let Some(channel) = self.footsteps.take() {
            audio.stop(channel);
        }
    }

    /// Returns the player to its starting state without reallocating its actors.
    pub fn reset(&mut self, audio: &mut dyn AudioSink) {
        self.silence(audio);
        self.flags = ActionFlags::empty();
        self.velocity = 0.0;
        self.facing = Facing::default();
        for actor in self.actors.iter_mut() {
            actor.pos = PLAYER_START;
            actor.set_frame(0);
        }
    }
}
