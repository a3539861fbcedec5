use tracing::{debug, info};

use crate::infra::{Action, GameObserver};
use crate::planners::heuristic::Goal;
use crate::state::{PlayerId, Robot, RobotId, Snapshot};

pub struct DefaultObserver;

impl GameObserver for DefaultObserver {
    fn on_turn_start(&mut self, snapshot: &Snapshot, player: PlayerId) {
        let mine = snapshot.robots_of(player).count();
        info!(
            "turn: {}, {}: {} robots, opponents: {} robots",
            snapshot.turn,
            player,
            mine,
            snapshot.len() - mine
        );
    }

    fn on_goal_selected(&mut self, robot: &Robot, goal: &Goal) {
        debug!(
            "{} at {} (hp {}): goal {}",
            robot.robot_id,
            robot.location,
            robot.hp,
            goal.to_display_string()
        );
    }

    fn on_action_selected(&mut self, robot: &Robot, action: Action) {
        info!("{} at {}: {:?}", robot.robot_id, robot.location, action);
    }

    fn on_turn_finished(&mut self, snapshot: &Snapshot, actions: &[(RobotId, Action)]) {
        info!("turn {} decided {} actions", snapshot.turn, actions.len());
    }
}
