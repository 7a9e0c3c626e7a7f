//! Turn sequences for the Heighway dragon curve.
//!
//! The curve is fully determined by an ordered list of left/right turns,
//! produced by the standard fold-and-reflect doubling construction.

use std::ops::Deref;

use crate::error::{self, Error, MAX_ITERATIONS};

/// A single 90° rotation decision along the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Rotate the heading counterclockwise.
    Left,
    /// Rotate the heading clockwise.
    Right,
}

impl Turn {
    /// The logical complement of this turn.
    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The ordered turn sequence defining a dragon curve of a given iteration
/// count. Length is exactly `2^N - 1` (empty for `N == 0`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSequence(Vec<Turn>);

impl TurnSequence {
    /// Generate the turn sequence for `iterations` folds.
    ///
    /// Starting from the empty sequence, each fold appends one `Right`
    /// followed by the reversed complement of the sequence that existed
    /// before the fold:
    ///
    /// `seq(k) = seq(k-1) + [Right] + reverse(flip(seq(k-1)))`
    ///
    /// Total for `iterations <= MAX_ITERATIONS`; larger requests fail with
    /// [`Error::IterationsTooLarge`] before any allocation.
    pub fn generate(iterations: u32) -> error::Result<Self> {
        if iterations > MAX_ITERATIONS {
            return Err(Error::IterationsTooLarge(iterations));
        }

        let total = (1usize << iterations) - 1;
        let mut turns: Vec<Turn> = Vec::with_capacity(total);
        for _ in 0..iterations {
            let prefix = turns.len();
            turns.push(Turn::Right);
            for i in (0..prefix).rev() {
                let turn = turns[i];
                turns.push(turn.flipped());
            }
        }

        debug_assert_eq!(turns.len(), total, "doubling construction length");
        Ok(Self(turns))
    }

    /// The turns as a slice.
    pub fn as_slice(&self) -> &[Turn] {
        &self.0
    }
}

impl Deref for TurnSequence {
    type Target = [Turn];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
