use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use rand::RngCore;
use tracing::{debug, warn};

use crate::infra::{Action, Arena, GameObserver, Settings};
use crate::planners::heuristic::policy::BlackBetty;
use crate::state::{PlayerId, RobotId, Snapshot, SnapshotError};

#[derive(Debug)]
pub enum GameError {
    UnknownRobot(RobotId),
    Snapshot(SnapshotError),
}

impl fmt::Display for GameError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::UnknownRobot(id) => write!(formatter, "{} is not on the board", id),
            GameError::Snapshot(err) => write!(formatter, "{}", err),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Snapshot(err) => Some(err),
            GameError::UnknownRobot(_) => None,
        }
    }
}

impl From<SnapshotError> for GameError {
    fn from(err: SnapshotError) -> Self {
        GameError::Snapshot(err)
    }
}

/// Drives one controller per robot, the way the engine would: a controller
/// lives from the first turn its robot is seen until the robot disappears.
pub struct Game {
    arena: Box<dyn Arena>,
    settings: Settings,
    observer: Box<dyn GameObserver>,
    controllers: BTreeMap<RobotId, BlackBetty>,
}

impl Game {
    pub fn new(
        arena: impl Arena + 'static,
        settings: Settings,
        observer: impl GameObserver + 'static,
    ) -> Self {
        Self {
            arena: Box::new(arena),
            settings,
            observer: Box::new(observer),
            controllers: BTreeMap::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Actions for every robot owned by `player`, in robot-id order.
    pub fn decide(
        &mut self,
        snapshot: &Snapshot,
        player: PlayerId,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<(RobotId, Action)>, GameError> {
        snapshot.validate(self.arena.as_ref())?;
        self.sync_controllers(snapshot);
        self.observer.on_turn_start(snapshot, player);

        let ids: Vec<RobotId> = snapshot.robots_of(player).map(|bot| bot.robot_id).collect();
        if ids.is_empty() {
            warn!("{} has no robots on turn {}", player, snapshot.turn);
        }

        let mut actions = Vec::with_capacity(ids.len());
        for id in ids {
            actions.push((id, self.decide_one(snapshot, id, rng)?));
        }

        self.observer.on_turn_finished(snapshot, &actions);
        Ok(actions)
    }

    /// Action for a single robot.
    pub fn decide_for(
        &mut self,
        snapshot: &Snapshot,
        robot_id: RobotId,
        rng: &mut dyn RngCore,
    ) -> Result<Action, GameError> {
        snapshot.validate(self.arena.as_ref())?;
        self.sync_controllers(snapshot);
        self.decide_one(snapshot, robot_id, rng)
    }

    fn decide_one(
        &mut self,
        snapshot: &Snapshot,
        robot_id: RobotId,
        rng: &mut dyn RngCore,
    ) -> Result<Action, GameError> {
        let robot = *snapshot
            .get(robot_id)
            .ok_or(GameError::UnknownRobot(robot_id))?;
        let controller = self
            .controllers
            .get(&robot_id)
            .ok_or(GameError::UnknownRobot(robot_id))?;

        let (goal, action) =
            controller.decide(snapshot, self.arena.as_ref(), &self.settings, rng);
        self.observer.on_goal_selected(&robot, &goal);
        self.observer.on_action_selected(&robot, action);
        Ok(action)
    }

    /// Refresh controllers of robots still on the board, create ones for new
    /// robots and drop the ones whose robots are gone.
    fn sync_controllers(&mut self, snapshot: &Snapshot) {
        self.controllers
            .retain(|id, _| snapshot.get(*id).is_some());
        for bot in snapshot.robots() {
            match self.controllers.get_mut(&bot.robot_id) {
                Some(controller) => controller.refresh(*bot),
                None => {
                    debug!("New controller for {} at {}", bot.robot_id, bot.location);
                    self.controllers.insert(bot.robot_id, BlackBetty::new(*bot));
                }
            }
        }
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }
}
