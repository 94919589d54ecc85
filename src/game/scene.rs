use strum_macros::{Display, EnumIter};

/// The top-level mode; exactly one scene body runs per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Scene {
    /// Instructions, waiting for the confirm key.
    #[default]
    Start,
    Playing,
    /// Enough ghosts were hit. Terminal for the session.
    Win,
    /// Health ran out, waiting for the confirm key to start over.
    Death,
}

/// Something that may move the game to another scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    Confirm,
    HealthDepleted,
    KillThresholdReached,
}

impl Scene {
    /// The scene reached from `self` on `event`. Events that do not apply leave the scene unchanged.
    pub fn next(self, event: SceneEvent) -> Scene {
        match (self, event) {
            (Scene::Start, SceneEvent::Confirm) => Scene::Playing,
            (Scene::Playing, SceneEvent::HealthDepleted) => Scene::Death,
            (Scene::Playing, SceneEvent::KillThresholdReached) => Scene::Win,
            (Scene::Death, SceneEvent::Confirm) => Scene::Start,
            (scene, _) => scene,
        }
    }
}
