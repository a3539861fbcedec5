use rand::RngCore;
use tracing::debug;

use crate::planners::heuristic::goals::Goal;
use crate::planners::heuristic::planner_state::PlannerState;
use crate::planners::heuristic::strategies::planner::SelectGoal;

/// On spawn turns, robots left on spawn cells are in danger.
pub struct EscapeSpawnStrategy;

impl SelectGoal for EscapeSpawnStrategy {
    fn name(&self) -> &'static str {
        "EscapeSpawnStrategy"
    }

    fn try_select(&self, state: &PlannerState, _rng: &mut dyn RngCore) -> Option<Goal> {
        let turn = state.snapshot.turn;
        if !state.settings.is_critical_turn(turn) || !state.is_spawn(&state.me.location) {
            return None;
        }

        debug!("EscapeSpawnStrategy: on spawn at critical turn {}", turn);
        Some(Goal::Hurry)
    }
}
