use crate::infra::Action;
use crate::planners::heuristic::planner_state::PlannerState;
use crate::state::Robot;

// Goal modules
pub mod goal;

pub mod go;
pub mod hurry;
pub mod panic;
pub mod run;
pub mod strike;

// Re-export commonly used types
pub use goal::{ExecuteGoal, Goal};

// ============================================================================
// Shared helpers
// ============================================================================

/// The adjacent robot with the lowest hp. On a tie the first one wins.
pub fn aim<'a>(state: &PlannerState, robots: &[&'a Robot]) -> Option<&'a Robot> {
    let mut target: Option<&'a Robot> = None;
    for &bot in robots {
        if state.is_adjacent(bot) && target.is_none_or(|best| bot.hp < best.hp) {
            target = Some(bot);
        }
    }
    target
}

pub fn hit(bot: &Robot) -> Action {
    Action::Attack(bot.location)
}
