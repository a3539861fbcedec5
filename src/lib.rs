pub mod config;
pub mod infra;
pub mod planners;
pub mod state;

// Re-export commonly used types for convenience
pub use infra::{Action, Arena, Position, Settings};
pub use planners::heuristic::{BlackBetty, Game};
pub use state::{Map, Snapshot};
