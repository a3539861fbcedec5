mod action;
mod arena;
mod board_observer;
mod default_observer;
mod game_observer;
mod settings;
mod types;

pub use action::Action;
pub use arena::Arena;
pub use board_observer::BoardObserver;
pub use default_observer::DefaultObserver;
pub use game_observer::GameObserver;
pub use settings::Settings;
pub use types::{LocTypes, Position};
