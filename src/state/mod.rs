mod map;
mod robot;
mod snapshot;

pub use map::{ArenaError, Map, Tile};
pub use robot::{PlayerId, Robot, RobotId};
pub use snapshot::{Snapshot, SnapshotError};
