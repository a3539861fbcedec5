use rand::RngCore;

use crate::planners::heuristic::goals::{Goal, aim};
use crate::planners::heuristic::planner_state::PlannerState;
use crate::planners::heuristic::strategies::planner::SelectGoal;

pub struct StrikeTargetStrategy;

impl SelectGoal for StrikeTargetStrategy {
    fn name(&self) -> &'static str {
        "StrikeTargetStrategy"
    }

    fn try_select(&self, state: &PlannerState, _rng: &mut dyn RngCore) -> Option<Goal> {
        let targets = state.targets();
        aim(state, &targets).map(|bot| Goal::Strike(*bot))
    }
}
