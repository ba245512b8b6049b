//! Deal direction around the table

use serde::{Deserialize, Serialize};

use crate::AnchorPosition;

/// Order in which seats follow the viewer around the ring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Bottom, then left side, top, right side
    #[default]
    Clockwise,
    /// Bottom, then right side, top, left side
    CounterClockwise,
}

impl Direction {
    /// Orient a stock (clockwise) anchor for this direction
    pub fn orient(&self, anchor: AnchorPosition) -> AnchorPosition {
        match self {
            Direction::Clockwise => anchor,
            Direction::CounterClockwise => anchor.mirrored(),
        }
    }

    /// The opposite direction
    pub fn reversed(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}
