use rand::RngCore;
use tracing::debug;

use crate::infra::{Action, Position};
use crate::planners::heuristic::goals::goal::ExecuteGoal;
use crate::planners::heuristic::planner_state::PlannerState;

/// Move into a cell unless someone else could claim it first.
pub struct GoGoal(pub Position);

impl ExecuteGoal for GoGoal {
    fn execute(&self, state: &PlannerState, _rng: &mut dyn RngCore) -> Option<Action> {
        go(state, &self.0)
    }
}

pub fn go(state: &PlannerState, pos: &Position) -> Option<Action> {
    for bot in state.involved(pos) {
        if state.is_enemy(bot) {
            debug!("Go: {} is contested by enemy at {}", pos, bot.location);
            return None;
        }
        if !state.has_priority_over(bot) {
            debug!("Go: ally at {} has priority for {}", bot.location, pos);
            return None;
        }
    }
    Some(Action::Move(*pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planners::heuristic::planner_state::fixtures::*;

    #[test]
    fn test_go_into_free_cell() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[enemy(1, 6, 6, 50)]);
        let state = fixture.state();
        let pos = Position::new(3, 2);
        assert_eq!(go(&state, &pos), Some(Action::Move(pos)));
    }

    #[test]
    fn test_go_refuses_enemy_contested_cell() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[enemy(1, 3, 1, 50)]);
        let state = fixture.state();
        assert_eq!(go(&state, &Position::new(3, 2)), None);
        // Occupied by the enemy itself
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[enemy(1, 3, 2, 50)]);
        assert_eq!(go(&fixture.state(), &Position::new(3, 2)), None);
    }

    #[test]
    fn test_go_yields_to_ally_with_priority() {
        // Ally at larger x wins the tie-break
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[ally(1, 4, 2, 50)]);
        let state = fixture.state();
        assert_eq!(go(&state, &Position::new(3, 2)), None);

        // Ally at smaller x yields to us
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[ally(1, 2, 2, 50)]);
        let state = fixture.state();
        let pos = Position::new(3, 2);
        assert_eq!(go(&state, &pos), Some(Action::Move(pos)));
    }
}
