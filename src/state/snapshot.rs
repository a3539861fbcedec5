use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::infra::{Arena, Position};
use crate::state::{PlayerId, Robot, RobotId};

#[derive(Debug)]
pub enum SnapshotError {
    Parse(serde_json::Error),
    DuplicateLocation { location: Position },
    InvalidLocation { robot_id: RobotId, location: Position },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SnapshotError::Parse(err) => write!(formatter, "malformed snapshot: {}", err),
            SnapshotError::DuplicateLocation { location } => {
                write!(formatter, "more than one robot at {}", location)
            }
            SnapshotError::InvalidLocation { robot_id, location } => {
                write!(formatter, "{} stands on invalid cell {}", robot_id, location)
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SnapshotError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Parse(err)
    }
}

#[derive(Deserialize)]
struct RobotRecord {
    location: Position,
    player_id: PlayerId,
    hp: u32,
}

#[derive(Deserialize)]
struct SnapshotRecord {
    turn: u32,
    robots: BTreeMap<u32, RobotRecord>,
}

/// Immutable view of one turn, as supplied by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub turn: u32,
    robots: BTreeMap<RobotId, Robot>,
}

impl Snapshot {
    pub fn new(turn: u32, robots: impl IntoIterator<Item = Robot>) -> Self {
        Self {
            turn,
            robots: robots.into_iter().map(|bot| (bot.robot_id, bot)).collect(),
        }
    }

    /// Ingest the engine's JSON form. Missing or mistyped fields fail here
    /// rather than inside the policy.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let record: SnapshotRecord = serde_json::from_str(json)?;
        let snapshot = Self::new(
            record.turn,
            record.robots.into_iter().map(|(id, bot)| {
                Robot::new(RobotId(id), bot.location, bot.player_id, bot.hp)
            }),
        );

        let mut seen = HashSet::new();
        for bot in snapshot.robots() {
            if !seen.insert(bot.location) {
                return Err(SnapshotError::DuplicateLocation {
                    location: bot.location,
                });
            }
        }

        debug!(
            "Ingested snapshot for turn {} with {} robots",
            snapshot.turn,
            snapshot.len()
        );
        Ok(snapshot)
    }

    /// Reject robots standing on cells the arena does not know.
    pub fn validate(&self, arena: &dyn Arena) -> Result<(), SnapshotError> {
        match self
            .robots()
            .find(|bot| arena.loc_types(&bot.location).invalid)
        {
            Some(bot) => Err(SnapshotError::InvalidLocation {
                robot_id: bot.robot_id,
                location: bot.location,
            }),
            None => Ok(()),
        }
    }

    /// All robots, in robot-id order.
    pub fn robots(&self) -> impl Iterator<Item = &Robot> {
        self.robots.values()
    }

    pub fn get(&self, robot_id: RobotId) -> Option<&Robot> {
        self.robots.get(&robot_id)
    }

    pub fn robot_at(&self, pos: &Position) -> Option<&Robot> {
        self.robots().find(|bot| bot.location == *pos)
    }

    pub fn robots_of(&self, player: PlayerId) -> impl Iterator<Item = &Robot> {
        self.robots().filter(move |bot| bot.player_id == player)
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }
}
