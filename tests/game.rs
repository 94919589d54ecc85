mod common;

use catnap::audio::Sound;
use catnap::constants::{max_x, KILL_THRESHOLD, RESPAWN_Y, STARTING_HEALTH};
use catnap::game::scene::{Scene, SceneEvent};
use catnap::input::{Controls, FrameInput};
use common::{over_player, playing_state, RecordingAudio};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

const DT: f32 = 1.0 / 60.0;
/// Longer than the animation period, so the player animates on every frame.
const ANIMATED_DT: f32 = 0.06;

#[test]
fn test_scene_transitions() {
    assert_eq!(Scene::Start.next(SceneEvent::Confirm), Scene::Playing);
    assert_eq!(Scene::Playing.next(SceneEvent::HealthDepleted), Scene::Death);
    assert_eq!(Scene::Playing.next(SceneEvent::KillThresholdReached), Scene::Win);
    assert_eq!(Scene::Death.next(SceneEvent::Confirm), Scene::Start);
}

#[test]
fn test_unrelated_events_keep_scene() {
    assert_eq!(Scene::Start.next(SceneEvent::HealthDepleted), Scene::Start);
    assert_eq!(Scene::Playing.next(SceneEvent::Confirm), Scene::Playing);
    assert_eq!(Scene::Death.next(SceneEvent::KillThresholdReached), Scene::Death);
    for event in [SceneEvent::Confirm, SceneEvent::HealthDepleted, SceneEvent::KillThresholdReached] {
        assert_eq!(Scene::Win.next(event), Scene::Win);
    }
}

#[test]
fn test_start_waits_for_confirm() {
    let mut state = common::game_state();
    let mut audio = RecordingAudio::default();

    assert_eq!(state.update(DT, &FrameInput::held(Controls::CONFIRM), &mut audio), None);
    assert_eq!(state.update(DT, &FrameInput::pressed(Controls::RIGHT), &mut audio), None);
    assert_eq!(state.scene, Scene::Start);

    assert_eq!(
        state.update(DT, &FrameInput::pressed(Controls::CONFIRM), &mut audio),
        Some(Scene::Playing)
    );
    assert_eq!(state.scene, Scene::Playing);
}

#[test]
fn test_snowman_hit_costs_one_health() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();
    let target = over_player(&state);
    state.snowmen.active_mut()[0].pos = target;

    let transition = state.update(DT, &FrameInput::default(), &mut audio);

    assert_eq!(transition, None);
    assert_eq!(state.ledger.health(), STARTING_HEALTH - 1);
    assert_eq!(audio.played(Sound::Hurt), 1);

    let snowman = &state.snowmen.active()[0];
    assert_eq!(snowman.pos.y, RESPAWN_Y);
    assert_that(&snowman.pos.x).is_greater_than_or_equal_to(0.0);
    assert_that(&snowman.pos.x).is_less_than_or_equal_to(max_x(snowman.size.x));
}

#[test]
fn test_ghost_ignored_without_attack() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();
    let target = over_player(&state);
    state.ghosts.active_mut()[0].pos = target;

    state.update(DT, &FrameInput::default(), &mut audio);

    assert_eq!(state.ledger.kills(), 0);
    assert_eq!(audio.played(Sound::GhostHit), 0);
}

#[test]
fn test_attack_catches_mouse_and_heals() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();
    let player = state.player.current().pos;
    state.bonus.actor_mut().pos = player;

    let transition = state.update(DT, &FrameInput::pressed(Controls::ATTACK), &mut audio);

    assert_eq!(transition, None);
    assert_eq!(state.ledger.health(), STARTING_HEALTH + 1);
    assert_eq!(audio.played(Sound::Heal), 1);
    assert_that(&state.bonus.is_active()).is_false();

    // A hidden mouse cannot be caught again.
    state.update(DT, &FrameInput::pressed(Controls::ATTACK), &mut audio);
    assert_eq!(state.ledger.health(), STARTING_HEALTH + 1);
    assert_eq!(audio.played(Sound::Heal), 1);
}

#[test]
fn test_mouse_ignored_without_attack() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();
    let player = state.player.current().pos;
    state.bonus.actor_mut().pos = player;

    state.update(DT, &FrameInput::default(), &mut audio);

    assert_eq!(state.ledger.health(), STARTING_HEALTH);
    assert_eq!(audio.played(Sound::Heal), 0);
    assert_that(&state.bonus.is_active()).is_true();
}

#[test]
fn test_win_reported_exactly_once() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();
    let target = over_player(&state);
    let mut transitions = Vec::new();

    for _ in 0..60 {
        state.ghosts.active_mut()[0].pos = target;
        if let Some(scene) = state.update(ANIMATED_DT, &FrameInput::pressed(Controls::ATTACK), &mut audio) {
            transitions.push(scene);
        }
    }

    assert_eq!(transitions, vec![Scene::Win]);
    assert_eq!(state.scene, Scene::Win);
    assert_eq!(state.ledger.kills(), KILL_THRESHOLD);
    assert_eq!(audio.played(Sound::GhostHit), KILL_THRESHOLD as usize);
}

#[test]
fn test_win_scene_purrs_every_frame() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();
    state.scene = Scene::Win;

    for _ in 0..5 {
        assert_eq!(state.update(DT, &FrameInput::pressed(Controls::CONFIRM), &mut audio), None);
    }

    assert_eq!(audio.played(Sound::Purr), 5);
    assert_eq!(state.scene, Scene::Win);
}

#[test]
fn test_death_takes_precedence_over_win() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();
    for _ in 1..STARTING_HEALTH {
        state.ledger.damage();
    }
    for _ in 1..KILL_THRESHOLD {
        state.ledger.record_kill();
    }

    let target = over_player(&state);
    state.snowmen.active_mut()[0].pos = target;
    state.ghosts.active_mut()[0].pos = target;

    let transition = state.update(DT, &FrameInput::pressed(Controls::ATTACK), &mut audio);

    assert_eq!(state.ledger.health(), 0);
    assert_eq!(state.ledger.kills(), KILL_THRESHOLD);
    assert_eq!(transition, Some(Scene::Death));
}

#[test]
fn test_leaving_playing_stops_footsteps() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();
    state.update(DT, &FrameInput::held(Controls::RIGHT), &mut audio);
    assert_that(&state.player.footsteps()).is_some();

    for _ in 1..STARTING_HEALTH {
        state.ledger.damage();
    }
    let target = over_player(&state);
    state.snowmen.active_mut()[0].pos = target;

    assert_eq!(state.update(DT, &FrameInput::held(Controls::RIGHT), &mut audio), Some(Scene::Death));
    assert_that(&state.player.footsteps()).is_none();
    assert_eq!(audio.stops().len(), 1);
}

#[test]
fn test_confirm_on_death_resets_session() {
    let mut state = playing_state();
    let mut audio = RecordingAudio::default();

    for _ in 0..120 {
        state.update(ANIMATED_DT, &FrameInput::held(Controls::RIGHT), &mut audio);
    }
    state.ledger.record_kill();
    state.bonus.collect();
    state.scene = Scene::Death;

    assert_eq!(
        state.update(DT, &FrameInput::pressed(Controls::CONFIRM), &mut audio),
        Some(Scene::Start)
    );

    let fresh = common::game_state();
    assert_eq!(state.ledger, fresh.ledger);
    assert_eq!(state.player, fresh.player);
    assert_eq!(state.snowmen.active_count(), fresh.snowmen.active_count());
    assert_that(&state.bonus.is_active()).is_true();
    assert_eq!(state.bonus.actor().pos, fresh.bonus.actor().pos);
    assert_eq!(state.scene, Scene::Start);
}

#[test]
fn test_every_scene_is_reachable() {
    let reachable: Vec<Scene> = Scene::iter()
        .flat_map(|scene| {
            [SceneEvent::Confirm, SceneEvent::HealthDepleted, SceneEvent::KillThresholdReached]
                .map(|event| scene.next(event))
        })
        .collect();

    for scene in Scene::iter() {
        assert_that(&reachable.contains(&scene)).is_true();
    }
}
