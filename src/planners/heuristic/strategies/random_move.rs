use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::infra::Position;
use crate::planners::heuristic::goals::Goal;
use crate::planners::heuristic::planner_state::PlannerState;
use crate::planners::heuristic::strategies::planner::SelectGoal;

/// Wander to a random neighbouring cell that is off the spawn area.
pub struct RandomMoveStrategy;

impl SelectGoal for RandomMoveStrategy {
    fn name(&self) -> &'static str {
        "RandomMoveStrategy"
    }

    fn try_select(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Goal> {
        let choices: Vec<Position> = state
            .paths()
            .into_iter()
            .filter(|pos| !state.is_spawn(pos))
            .collect();

        let choice = choices.choose(rng)?;
        debug!("RandomMoveStrategy: picked {} out of {:?}", choice, choices);
        Some(Goal::Go(*choice))
    }
}
