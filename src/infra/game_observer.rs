use crate::infra::Action;
use crate::planners::heuristic::Goal;
use crate::state::{PlayerId, Robot, RobotId, Snapshot};

/// Trait for observing decisions as the driver makes them
pub trait GameObserver {
    /// Called before any robot of `player` decides
    fn on_turn_start(&mut self, snapshot: &Snapshot, player: PlayerId);

    /// Called when a robot's strategy settles on a goal
    fn on_goal_selected(&mut self, robot: &Robot, goal: &Goal);

    /// Called when a robot's action is final
    fn on_action_selected(&mut self, robot: &Robot, action: Action);

    /// Called once every robot of the player has an action
    fn on_turn_finished(&mut self, snapshot: &Snapshot, actions: &[(RobotId, Action)]) {
        let _ = (snapshot, actions);
    }
}
