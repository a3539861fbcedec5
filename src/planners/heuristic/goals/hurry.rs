use rand::RngCore;
use tracing::debug;

use crate::infra::Action;
use crate::planners::heuristic::goals::goal::ExecuteGoal;
use crate::planners::heuristic::goals::panic::panic;
use crate::planners::heuristic::goals::{aim, hit};
use crate::planners::heuristic::planner_state::PlannerState;

/// Get off the spawn area.
pub struct HurryGoal;

impl ExecuteGoal for HurryGoal {
    fn execute(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Action> {
        Some(hurry(state, rng))
    }
}

pub fn hurry(state: &PlannerState, rng: &mut dyn RngCore) -> Action {
    if let Some(pos) = state.paths().into_iter().find(|pos| !state.is_spawn(pos)) {
        debug!("Hurry: leaving spawn via {}", pos);
        return Action::Move(pos);
    }

    if let Some(target) = aim(state, &state.targets()) {
        debug!("Hurry: stuck on spawn, hitting {}", target.location);
        return hit(target);
    }

    panic(state, rng)
}
