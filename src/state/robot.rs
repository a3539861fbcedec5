use std::fmt;

use serde::{Deserialize, Serialize};

use crate::infra::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobotId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "player {}", self.0)
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "robot {}", self.0)
    }
}

/// Read-only view of a robot on the board, as supplied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub robot_id: RobotId,
    pub location: Position,
    pub player_id: PlayerId,
    pub hp: u32,
}

impl Robot {
    pub fn new(robot_id: RobotId, location: Position, player_id: PlayerId, hp: u32) -> Self {
        Self {
            robot_id,
            location,
            player_id,
            hp,
        }
    }
}
