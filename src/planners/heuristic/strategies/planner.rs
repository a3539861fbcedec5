use rand::RngCore;
use tracing::debug;

use crate::infra::Action;
use crate::planners::heuristic::goals::Goal;
use crate::planners::heuristic::planner_state::PlannerState;
use crate::planners::heuristic::strategies::*;

pub trait SelectGoal {
    fn name(&self) -> &'static str;

    /// Propose a goal for this turn, or `None` to let the next strategy try.
    fn try_select(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Goal>;
}

/// Strategies in priority order. The first one whose goal produces an action
/// wins; when none does, the robot guards.
pub struct StrategyPlanner {
    strategies: Vec<Box<dyn SelectGoal>>,
}

impl StrategyPlanner {
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(escape_spawn::EscapeSpawnStrategy),
                Box::new(strike_target::StrikeTargetStrategy),
                Box::new(ambush_enemy::AmbushEnemyStrategy),
                Box::new(random_move::RandomMoveStrategy),
            ],
        }
    }

    #[tracing::instrument(
        level = "debug",
        skip(self, state, rng),
        fields(robot = state.me.robot_id.0, turn = state.snapshot.turn)
    )]
    pub fn decide(&self, state: &PlannerState, rng: &mut dyn RngCore) -> (Goal, Action) {
        for strategy in &self.strategies {
            let Some(goal) = strategy.try_select(state, rng) else {
                continue;
            };

            debug!("{} selected {}", strategy.name(), goal.to_display_string());
            if let Some(action) = goal.execute(state, rng) {
                return (goal, action);
            }
            debug!("{} yielded no action, trying next strategy", goal.to_display_string());
        }

        debug!("No strategy applies, guarding");
        (Goal::Guard, Action::Guard)
    }
}

impl Default for StrategyPlanner {
    fn default() -> Self {
        Self::new()
    }
}
