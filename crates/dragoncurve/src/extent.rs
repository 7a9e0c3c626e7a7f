//! Minimal enclosing rectangle of a path walk.

use crate::walk::{PathWalker, Pos};

/// Inclusive bounds over every cell a walk visits.
///
/// Initialized to the origin, so `min_x <= 0 <= max_x` and
/// `min_y <= 0 <= max_y` hold for every walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest visited X.
    pub min_x: i64,
    /// Smallest visited Y.
    pub min_y: i64,
    /// Largest visited X.
    pub max_x: i64,
    /// Largest visited Y.
    pub max_y: i64,
}

impl Bounds {
    /// Bounds containing only the origin.
    pub const ORIGIN: Self = Self {
        min_x: 0,
        min_y: 0,
        max_x: 0,
        max_y: 0,
    };

    /// Consume a full walk and return the bounds of every emitted cell,
    /// including the implicit start at the origin.
    pub fn of_walk(walker: PathWalker<'_>) -> Self {
        let mut bounds = Self::ORIGIN;
        for step in walker {
            bounds.include(step.from);
            if let Some(mid) = step.midpoint {
                bounds.include(mid);
            }
            bounds.include(step.to);
        }
        bounds
    }

    /// Grow the bounds to contain `pos`.
    fn include(&mut self, pos: Pos) {
        self.min_x = self.min_x.min(pos.x);
        self.min_y = self.min_y.min(pos.y);
        self.max_x = self.max_x.max(pos.x);
        self.max_y = self.max_y.max(pos.y);
    }

    /// Horizontal extent in cells.
    pub fn span_x(&self) -> i64 {
        self.max_x - self.min_x
    }

    /// Vertical extent in cells.
    pub fn span_y(&self) -> i64 {
        self.max_y - self.min_y
    }
}
