/// Requests handled outside the simulation, by the game shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    TogglePause,
    ToggleMute,
}
