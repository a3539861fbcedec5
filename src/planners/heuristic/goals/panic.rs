use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::infra::Action;
use crate::planners::heuristic::goals::goal::ExecuteGoal;
use crate::planners::heuristic::goals::{aim, hit};
use crate::planners::heuristic::planner_state::PlannerState;

/// Last resort: move anywhere, else hit whatever is next to us, else guard.
pub struct PanicGoal;

impl ExecuteGoal for PanicGoal {
    fn execute(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Action> {
        Some(panic(state, rng))
    }
}

pub fn panic(state: &PlannerState, rng: &mut dyn RngCore) -> Action {
    if let Some(pos) = state.paths().choose(rng) {
        debug!("Panic: moving to {}", pos);
        return Action::Move(*pos);
    }

    if let Some(target) = aim(state, &state.targets()) {
        debug!("Panic: boxed in, hitting {}", target.location);
        return hit(target);
    }

    debug!("Panic: nothing to do, guarding");
    Action::Guard
}
