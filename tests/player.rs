mod common;

use catnap::audio::Sound;
use catnap::constants::{ANIMATION_PERIOD, FLOOR, GRAVITY, JUMP_FRAMES, JUMP_VELOCITY, PLAYER_START};
use catnap::entity::direction::Facing;
use catnap::entity::player::{ActionFlags, Player, PlayerAction};
use catnap::input::{Controls, FrameInput};
use catnap::timer::Interval;
use common::{AudioCall, RecordingAudio};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

const DT: f32 = 0.05;

fn idle() -> FrameInput {
    FrameInput::default()
}

#[test]
fn test_holding_right_clamps_to_screen_edge() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(1.0, &FrameInput::held(Controls::RIGHT), false, &mut audio);

    // 100 + 480 would be 580, past the 640 - 64 edge.
    for action in PlayerAction::iter() {
        assert_eq!(player.actor(action).pos.x, 576.0);
    }
    assert_eq!(player.facing(), Facing::Right);
    assert_that(&player.is_running()).is_true();
}

#[test]
fn test_holding_left_clamps_to_zero() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(1.0, &FrameInput::held(Controls::LEFT), false, &mut audio);

    assert_eq!(player.current().pos.x, 0.0);
    assert_eq!(player.facing(), Facing::Left);
}

#[test]
fn test_actors_move_in_lockstep() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(0.1, &FrameInput::held(Controls::RIGHT), false, &mut audio);

    let xs: Vec<f32> = player.actors().iter().map(|actor| actor.pos.x).collect();
    assert_that(&xs.iter().all(|x| *x == xs[0])).is_true();
    assert_that(&xs[0]).is_greater_than(PLAYER_START.x);
}

#[test]
fn test_jump_rises_and_lands() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(DT, &FrameInput::pressed(Controls::JUMP), false, &mut audio);
    assert_that(&player.is_jumping()).is_true();
    assert_eq!(player.action(), PlayerAction::Jump);
    assert_eq!(player.actor(PlayerAction::Jump).frame(), 0);
    assert_eq!(player.velocity(), JUMP_VELOCITY);

    let mut highest = FLOOR;
    let mut landed_at = None;
    for tick in 0..40 {
        player.update(DT, &idle(), true, &mut audio);
        highest = highest.min(player.actor(PlayerAction::Jump).pos.y);
        if !player.is_jumping() {
            landed_at = Some(tick);
            break;
        }
    }

    assert_that(&landed_at).is_some();
    assert_that(&highest).is_less_than(FLOOR);
    assert_eq!(player.velocity(), 0.0);
    assert_eq!(player.actor(PlayerAction::Jump).pos.y, FLOOR);
    assert_that(&player.actor(PlayerAction::Jump).frame()).is_greater_than(10);
    assert_eq!(player.action(), PlayerAction::Idle);
}

#[test]
fn test_jump_lands_within_one_cycle_at_60hz() {
    let dt = 1.0 / 60.0;
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();
    let mut animation = Interval::new(ANIMATION_PERIOD);

    let mut tick = |player: &mut Player, input: FrameInput| {
        animation.tick(dt);
        let animate = animation.is_ready();
        player.update(dt, &input, animate, &mut audio);
    };

    tick(&mut player, FrameInput::pressed(Controls::JUMP));
    assert_that(&player.is_jumping()).is_true();

    // At most four ticks per 50ms frame at 60 Hz.
    let budget = JUMP_FRAMES * 4;
    let mut landed_at = None;
    let mut last_frame = 0;
    for i in 0..budget {
        tick(&mut player, idle());
        if !player.is_jumping() {
            landed_at = Some(i);
            break;
        }
        // The jump animation never wraps back to its takeoff frames.
        let frame = player.actor(PlayerAction::Jump).frame();
        assert_that(&frame).is_greater_than_or_equal_to(last_frame);
        last_frame = frame;
    }

    assert_that(&landed_at).is_some();
    assert_eq!(player.actor(PlayerAction::Jump).frame(), 11);
    assert_eq!(player.actor(PlayerAction::Jump).pos.y, FLOOR);
    assert_eq!(player.velocity(), 0.0);

    // A fresh jump is accepted straight away.
    tick(&mut player, FrameInput::pressed(Controls::JUMP));
    assert_that(&player.is_jumping()).is_true();
    assert_eq!(player.velocity(), JUMP_VELOCITY);
}

#[test]
fn test_airborne_step_integrates_velocity_then_position() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    // Frames 1 and 2 are the crouch; the third animated tick reaches the first airborne frame.
    player.update(DT, &FrameInput::pressed(Controls::JUMP), true, &mut audio);
    player.update(DT, &idle(), true, &mut audio);
    assert_eq!(player.actor(PlayerAction::Jump).pos.y, FLOOR);
    assert_eq!(player.velocity(), JUMP_VELOCITY);

    player.update(DT, &idle(), true, &mut audio);
    let v1 = JUMP_VELOCITY + GRAVITY * DT;
    let y1 = FLOOR + v1 * DT;
    assert_eq!(player.actor(PlayerAction::Jump).frame(), 3);
    assert_eq!(player.velocity(), v1);
    assert_eq!(player.actor(PlayerAction::Jump).pos.y, y1);
    assert_that(&(y1 - 409.39).abs()).is_less_than(0.01);

    player.update(DT, &idle(), true, &mut audio);
    let v2 = v1 + GRAVITY * DT;
    assert_eq!(player.velocity(), v2);
    assert_eq!(player.actor(PlayerAction::Jump).pos.y, y1 + v2 * DT);
}

#[test]
fn test_mid_air_attack_swings_from_the_floor() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    for _ in 0..5 {
        player.update(DT, &FrameInput::pressed(Controls::JUMP), true, &mut audio);
    }
    assert_that(&player.actor(PlayerAction::Jump).pos.y).is_less_than(FLOOR);

    player.update(DT, &FrameInput::pressed(Controls::ATTACK), true, &mut audio);

    // Only the jump actor moves vertically, so the swing is drawn and collided on the floor.
    assert_eq!(player.current().pos.y, FLOOR);
    assert_eq!(player.bounds().pos.y, FLOOR);
}

#[test]
fn test_held_jump_does_not_retrigger() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(DT, &FrameInput::pressed(Controls::JUMP), true, &mut audio);
    player.update(DT, &FrameInput::held(Controls::JUMP), true, &mut audio);

    assert_eq!(player.actor(PlayerAction::Jump).frame(), 2);
}

#[test]
fn test_attack_runs_once_then_clears() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(DT, &FrameInput::pressed(Controls::ATTACK), true, &mut audio);
    assert_that(&player.is_attacking()).is_true();

    // Seven more animated frames bring the nine-frame attack to its last frame.
    for _ in 0..6 {
        player.update(DT, &idle(), true, &mut audio);
        assert_that(&player.is_attacking()).is_true();
    }
    player.update(DT, &idle(), true, &mut audio);

    assert_that(&player.is_attacking()).is_false();
    assert_eq!(player.action(), PlayerAction::Idle);
}

#[test]
fn test_attack_mid_jump_freezes_jump() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(DT, &FrameInput::pressed(Controls::JUMP), true, &mut audio);
    player.update(DT, &FrameInput::pressed(Controls::ATTACK), true, &mut audio);
    assert_eq!(player.flags(), ActionFlags::JUMP | ActionFlags::ATTACK);
    assert_eq!(player.action(), PlayerAction::Attack);

    let jump_frame = player.actor(PlayerAction::Jump).frame();
    let jump_y = player.actor(PlayerAction::Jump).pos.y;
    while player.is_attacking() {
        player.update(DT, &idle(), true, &mut audio);
        assert_eq!(player.actor(PlayerAction::Jump).frame(), jump_frame);
        assert_eq!(player.actor(PlayerAction::Jump).pos.y, jump_y);
    }

    assert_eq!(player.action(), PlayerAction::Jump);
    player.update(DT, &idle(), true, &mut audio);
    assert_eq!(player.actor(PlayerAction::Jump).frame(), jump_frame + 1);
}

#[test]
fn test_frames_hold_without_animation_tick() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    for _ in 0..5 {
        player.update(DT, &idle(), false, &mut audio);
    }
    assert_eq!(player.actor(PlayerAction::Idle).frame(), 0);

    player.update(DT, &idle(), true, &mut audio);
    assert_eq!(player.actor(PlayerAction::Idle).frame(), 1);
}

#[test]
fn test_footsteps_loop_while_running() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(DT, &FrameInput::held(Controls::RIGHT), true, &mut audio);
    player.update(DT, &FrameInput::held(Controls::RIGHT), true, &mut audio);
    assert_eq!(audio.calls, vec![AudioCall::Loop(Sound::Footsteps, -1)]);
    assert_that(&player.footsteps()).is_some();

    player.update(DT, &idle(), true, &mut audio);
    assert_that(&player.is_running()).is_false();
    assert_that(&player.footsteps()).is_none();
    assert_eq!(audio.stops().len(), 1);
}

#[test]
fn test_reset_restores_start() {
    let mut player = Player::default();
    let mut audio = RecordingAudio::default();

    player.update(0.2, &FrameInput::pressed(Controls::LEFT | Controls::JUMP), true, &mut audio);
    player.reset(&mut audio);

    assert_eq!(player, Player::default());
    assert_eq!(audio.stops().len(), 1);
}
