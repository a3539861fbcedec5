use rand::RngCore;

use crate::infra::{Action, Position};
use crate::planners::heuristic::goals::go::GoGoal;
use crate::planners::heuristic::goals::hurry::HurryGoal;
use crate::planners::heuristic::goals::panic::PanicGoal;
use crate::planners::heuristic::goals::run::RunGoal;
use crate::planners::heuristic::goals::strike::StrikeGoal;
use crate::planners::heuristic::planner_state::PlannerState;
use crate::state::Robot;

/// Trait for executing goals
pub trait ExecuteGoal {
    fn execute(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Action>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Goal {
    /// Leave the spawn area before new robots appear.
    Hurry,
    Strike(Robot),
    /// Attack a cell an enemy is expected to step into.
    Ambush(Position),
    Run,
    Panic,
    Go(Position),
    Guard,
}

impl Goal {
    #[tracing::instrument(level = "debug", skip(state, rng))]
    pub fn execute(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Action> {
        match self {
            Goal::Hurry => HurryGoal.execute(state, rng),
            Goal::Strike(bot) => StrikeGoal(*bot).execute(state, rng),
            Goal::Ambush(pos) => Some(Action::Attack(*pos)),
            Goal::Run => RunGoal.execute(state, rng),
            Goal::Panic => PanicGoal.execute(state, rng),
            Goal::Go(pos) => GoGoal(*pos).execute(state, rng),
            Goal::Guard => Some(Action::Guard),
        }
    }

    /// Format goal as a display string for UI and logging
    pub fn to_display_string(&self) -> String {
        match self {
            Goal::Hurry => "Hurry".to_string(),
            Goal::Strike(bot) => format!("Strike({})", bot.location),
            Goal::Ambush(pos) => format!("Ambush({})", pos),
            Goal::Run => "Run".to_string(),
            Goal::Panic => "Panic".to_string(),
            Goal::Go(pos) => format!("Go({})", pos),
            Goal::Guard => "Guard".to_string(),
        }
    }
}
