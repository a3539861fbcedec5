use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::infra::Action;
use crate::planners::heuristic::goals::goal::ExecuteGoal;
use crate::planners::heuristic::goals::panic::panic;
use crate::planners::heuristic::planner_state::PlannerState;

/// Step somewhere no enemy can reach next turn.
pub struct RunGoal;

impl ExecuteGoal for RunGoal {
    fn execute(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Action> {
        Some(run(state, rng))
    }
}

pub fn run(state: &PlannerState, rng: &mut dyn RngCore) -> Action {
    match state.escapes().choose(rng) {
        Some(pos) => {
            debug!("Run: escaping to {}", pos);
            Action::Move(*pos)
        }
        None => {
            debug!("Run: no safe cell, panicking");
            panic(state, rng)
        }
    }
}
