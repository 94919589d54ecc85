use glam::Vec2;

use crate::constants::COLLISION_INSET;

/// An axis-aligned rectangle in screen space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Pushes the top edge down by `inset` and shrinks the height by the same amount.
    ///
    /// The bottom edge stays put unless the inset exceeds the height, in which
    /// case the box collapses to zero height.
    pub fn inset_top(self, inset: f32) -> Self {
        Self {
            pos: Vec2::new(self.pos.x, self.pos.y + inset),
            size: Vec2::new(self.size.x, (self.size.y - inset).max(0.0)),
        }
    }

    /// Strict AABB overlap; touching edges do not count.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Checks whether `striker` hits `target`.
///
/// Only the target's box is trimmed by [`COLLISION_INSET`] from the top, so a
/// sprite grazing the topmost band of the target does not register. Swapping
/// the operands can therefore change the result.
pub fn collides(striker: &Bounds, target: &Bounds) -> bool {
    striker.intersects(&target.inset_top(COLLISION_INSET))
}
