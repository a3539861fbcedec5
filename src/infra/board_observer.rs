use std::io::{self, Write};

use crate::infra::{Action, DefaultObserver, GameObserver};
use crate::planners::heuristic::Goal;
use crate::state::{Map, PlayerId, Robot, RobotId, Snapshot};

/// Logs like [`DefaultObserver`] and also draws the board to stderr at the
/// start of every turn.
pub struct BoardObserver {
    map: Map,
    inner: DefaultObserver,
}

impl BoardObserver {
    pub fn new(map: Map) -> Self {
        Self {
            map,
            inner: DefaultObserver,
        }
    }
}

impl GameObserver for BoardObserver {
    fn on_turn_start(&mut self, snapshot: &Snapshot, player: PlayerId) {
        self.inner.on_turn_start(snapshot, player);
        let board = self.map.draw_ascii(snapshot, player);
        let _ = writeln!(io::stderr(), "{}", board);
    }

    fn on_goal_selected(&mut self, robot: &Robot, goal: &Goal) {
        self.inner.on_goal_selected(robot, goal);
    }

    fn on_action_selected(&mut self, robot: &Robot, action: Action) {
        self.inner.on_action_selected(robot, action);
    }

    fn on_turn_finished(&mut self, snapshot: &Snapshot, actions: &[(RobotId, Action)]) {
        self.inner.on_turn_finished(snapshot, actions);
    }
}
