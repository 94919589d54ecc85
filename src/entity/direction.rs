/// Which way the player sprite faces. Purely cosmetic.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Sprite sheets face right, so only left-facing sprites are mirrored.
    pub fn flip_horizontal(&self) -> bool {
        matches!(self, Facing::Left)
    }

    /// Signed unit step along the x axis.
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}
