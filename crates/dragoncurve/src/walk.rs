//! Path walking: replaying a turn sequence as a stream of grid positions.
//!
//! Both render passes (extent computation and rasterization) consume the same
//! [`PathWalker`], so movement and turn semantics have a single source of
//! truth and the painted path always matches its own bounding box.

use crate::turns::Turn;

/// A heading on the grid. Y grows downward, as in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// Negative X.
    Left = 0,
    /// Negative Y.
    Up = 1,
    /// Positive X.
    Right = 2,
    /// Positive Y.
    Down = 3,
}

impl Direction {
    /// Heading from its cyclic index (`Left, Up, Right, Down`).
    fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::Left,
            1 => Self::Up,
            2 => Self::Right,
            _ => Self::Down,
        }
    }

    /// The heading after applying `turn`: a left turn advances one step in
    /// the cyclic order (+1 mod 4), a right turn is the inverse (+3 mod 4).
    pub fn turned(self, turn: Turn) -> Self {
        let index = self as u8;
        match turn {
            Turn::Left => Self::from_index(index + 1),
            Turn::Right => Self::from_index(index + 3),
        }
    }

    /// Unit movement delta for this heading.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        }
    }
}

/// An integer grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate (downward positive).
    pub y: i64,
}

impl Pos {
    /// The origin, where every walk starts.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// This position displaced by `(dx, dy)`.
    fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Stride between consecutive landing positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepSize {
    /// One cell per step: dense mode, every grid unit is visited.
    Single,
    /// Two cells per step, with the intermediate cell reported separately:
    /// the classic rendering with single-cell joints between segments.
    Double,
}

impl StepSize {
    /// The step size matching a dense-mode flag.
    pub fn for_dense(dense: bool) -> Self {
        if dense { Self::Single } else { Self::Double }
    }

    /// Stride in cells.
    pub fn cells(self) -> i64 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

/// One movement of the walk.
///
/// Step `index` departs from `from`, traverses `midpoint` when the stride is
/// [`StepSize::Double`], and lands on `to`. A walk over `T` turns emits
/// exactly `T + 1` steps; the landing of step `i` is the departure of step
/// `i + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathStep {
    /// Zero-based step index; also the turn index applied after the move.
    pub index: usize,
    /// Position before the move.
    pub from: Pos,
    /// Intermediate unit cell, present only for double strides.
    pub midpoint: Option<Pos>,
    /// Position after the move.
    pub to: Pos,
}

/// Iterator replaying a turn sequence from the origin with initial heading
/// [`Direction::Up`].
///
/// The stream is deterministic: two walkers over the same turns and step size
/// yield identical steps. After the final move no turn is applied.
#[derive(Clone, Debug)]
pub struct PathWalker<'a> {
    /// The turn sequence being replayed.
    turns: &'a [Turn],
    /// Stride between landings.
    step: StepSize,
    /// Current position.
    pos: Pos,
    /// Current heading.
    heading: Direction,
    /// Next step index; runs from 0 to `turns.len()` inclusive.
    index: usize,
}

impl<'a> PathWalker<'a> {
    /// Create a walker over `turns` with the given stride.
    pub fn new(turns: &'a [Turn], step: StepSize) -> Self {
        Self {
            turns,
            step,
            pos: Pos::ORIGIN,
            heading: Direction::Up,
            index: 0,
        }
    }

    /// Total number of steps the walk emits (one more than the turn count).
    pub fn step_count(&self) -> usize {
        self.turns.len() + 1
    }
}

impl Iterator for PathWalker<'_> {
    type Item = PathStep;

    fn next(&mut self) -> Option<PathStep> {
        if self.index > self.turns.len() {
            return None;
        }

        let from = self.pos;
        let (dx, dy) = self.heading.delta();
        let midpoint = match self.step {
            StepSize::Single => None,
            StepSize::Double => Some(from.offset(dx, dy)),
        };
        let to = from.offset(dx * self.step.cells(), dy * self.step.cells());

        let index = self.index;
        if let Some(turn) = self.turns.get(index) {
            self.heading = self.heading.turned(*turn);
        }
        self.pos = to;
        self.index += 1;

        Some(PathStep {
            index,
            from,
            midpoint,
            to,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.step_count() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathWalker<'_> {}
