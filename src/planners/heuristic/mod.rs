mod game;
mod goals;
mod pathfinding;
mod planner_state;
mod policy;
mod strategies;

pub use game::{Game, GameError};
pub use goals::Goal;
pub use planner_state::PlannerState;
pub use policy::BlackBetty;
pub use strategies::{SelectGoal, StrategyPlanner};
