// Strategy modules
pub mod planner;

pub mod ambush_enemy;
pub mod escape_spawn;
pub mod random_move;
pub mod strike_target;

// Re-export commonly used types
pub use planner::{SelectGoal, StrategyPlanner};
