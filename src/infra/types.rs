use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Walking distance (diagonal-exclusive).
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Diagonal-inclusive distance: a diagonal step counts as one.
    pub fn chebyshev_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Orthogonal neighbours in east, south, west, north order.
    pub fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.x + 1, self.y), // East
            Position::new(self.x, self.y + 1), // South
            Position::new(self.x - 1, self.y), // West
            Position::new(self.x, self.y - 1), // North
        ]
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.distance(other) == 1
    }

    /// One unit step from `self` towards `other` along the x axis.
    pub fn step_x_towards(&self, other: &Position) -> Position {
        Position::new(self.x + (other.x - self.x).signum(), self.y)
    }

    /// One unit step from `self` towards `other` along the y axis.
    pub fn step_y_towards(&self, other: &Position) -> Position {
        Position::new(self.x, self.y + (other.y - self.y).signum())
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

/// Terrain tags of a single cell as reported by the arena.
///
/// `invalid` cells carry no other tag. Any cell inside the board is `normal`,
/// and may additionally be `spawn` and/or `obstacle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocTypes {
    pub normal: bool,
    pub spawn: bool,
    pub obstacle: bool,
    pub invalid: bool,
}

impl LocTypes {
    pub fn invalid() -> Self {
        Self {
            invalid: true,
            ..Self::default()
        }
    }

    pub fn normal() -> Self {
        Self {
            normal: true,
            ..Self::default()
        }
    }

    pub fn spawn() -> Self {
        Self {
            normal: true,
            spawn: true,
            ..Self::default()
        }
    }

    pub fn obstacle() -> Self {
        Self {
            normal: true,
            obstacle: true,
            ..Self::default()
        }
    }
}
