//! Keyboard bindings and per-frame input snapshots.

use std::collections::{HashMap, HashSet};

use bitflags::bitflags;
use sdl2::keyboard::Keycode;

use crate::events::GameCommand;

bitflags! {
    /// Logical controls the simulation reacts to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Controls: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP = 1 << 2;
        const ATTACK = 1 << 3;
        const CONFIRM = 1 << 4;
    }
}

/// What the simulation sees of the keyboard for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Controls whose keys are currently held down.
    pub held: Controls,
    /// Controls whose key went down this frame (edges, not repeats).
    pub pressed: Controls,
}

impl FrameInput {
    pub fn held(controls: Controls) -> Self {
        Self {
            held: controls,
            pressed: Controls::empty(),
        }
    }

    pub fn pressed(controls: Controls) -> Self {
        Self {
            held: controls,
            pressed: controls,
        }
    }

    pub fn is_held(&self, control: Controls) -> bool {
        self.held.intersects(control)
    }

    pub fn was_pressed(&self, control: Controls) -> bool {
        self.pressed.intersects(control)
    }

    /// Whether either horizontal movement control is held.
    pub fn is_moving(&self) -> bool {
        self.held.intersects(Controls::LEFT | Controls::RIGHT)
    }
}

/// A key transition with repeats already filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Keycode),
    Up(Keycode),
}

#[derive(Debug, Clone)]
pub struct Bindings {
    controls: HashMap<Keycode, Controls>,
    commands: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let controls = HashMap::from([
            (Keycode::Left, Controls::LEFT),
            (Keycode::A, Controls::LEFT),
            (Keycode::Right, Controls::RIGHT),
            (Keycode::D, Controls::RIGHT),
            (Keycode::Space, Controls::JUMP),
            (Keycode::Up, Controls::JUMP),
            (Keycode::W, Controls::JUMP),
            (Keycode::X, Controls::ATTACK),
            (Keycode::J, Controls::ATTACK),
            (Keycode::LCtrl, Controls::ATTACK),
            (Keycode::Return, Controls::CONFIRM),
            (Keycode::KpEnter, Controls::CONFIRM),
        ]);

        let commands = HashMap::from([
            (Keycode::Escape, GameCommand::Exit),
            (Keycode::Q, GameCommand::Exit),
            (Keycode::P, GameCommand::TogglePause),
            (Keycode::M, GameCommand::ToggleMute),
        ]);

        Self { controls, commands }
    }
}

impl Bindings {
    pub fn control(&self, key: Keycode) -> Option<Controls> {
        self.controls.get(&key).copied()
    }

    pub fn command(&self, key: Keycode) -> Option<GameCommand> {
        self.commands.get(&key).copied()
    }
}

/// Tracks which bound keys are down across frames.
///
/// Held state is kept per key, so releasing `A` while `Left` is still down
/// keeps the LEFT control held.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held_keys: HashSet<Keycode>,
}

impl InputTracker {
    /// Folds this frame's key events into the held set and builds the frame snapshot.
    ///
    /// Commands bound to a key are returned separately, in the order they arrived.
    pub fn process(&mut self, bindings: &Bindings, events: &[KeyEvent]) -> (FrameInput, Vec<GameCommand>) {
        let mut pressed = Controls::empty();
        let mut commands = Vec::new();

        for event in events {
            match *event {
                KeyEvent::Down(key) => {
                    if let Some(command) = bindings.command(key) {
                        commands.push(command);
                    }
                    if let Some(control) = bindings.control(key) {
                        pressed |= control;
                        self.held_keys.insert(key);
                    }
                }
                KeyEvent::Up(key) => {
                    self.held_keys.remove(&key);
                }
            }
        }

        let held = self
            .held_keys
            .iter()
            .filter_map(|key| bindings.control(*key))
            .fold(Controls::empty(), |acc, control| acc | control);

        // A key pressed and released within one frame still counts as pressed.
        (FrameInput { held, pressed }, commands)
    }

    /// Forgets every held key, e.g. after the window loses focus.
    pub fn clear(&mut self) {
        self.held_keys.clear();
    }
}
