use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::infra::Position;
use crate::planners::heuristic::goals::Goal;
use crate::planners::heuristic::planner_state::PlannerState;
use crate::planners::heuristic::strategies::planner::SelectGoal;

/// Attack the cell between us and a nearby enemy, expecting it to step in.
pub struct AmbushEnemyStrategy;

impl AmbushEnemyStrategy {
    /// Cells nearby enemies are likely to walk into, skipping cells held by
    /// an ally.
    pub fn predictions(state: &PlannerState) -> Vec<Position> {
        let allies = state.allies();
        state
            .enemies()
            .into_iter()
            .filter(|bot| state.is_in_walking_range(&bot.location, 2))
            .filter_map(|bot| state.next(&bot.location))
            .filter(|pos| !allies.iter().any(|ally| ally.location == *pos))
            .collect()
    }
}

impl SelectGoal for AmbushEnemyStrategy {
    fn name(&self) -> &'static str {
        "AmbushEnemyStrategy"
    }

    #[tracing::instrument(
        level = "debug",
        skip(self, state, rng),
        fields(strategy = "AmbushEnemyStrategy")
    )]
    fn try_select(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Goal> {
        let predictions = Self::predictions(state);
        debug!("Predicted enemy steps: {:?}", predictions);
        predictions.choose(rng).map(|pos| Goal::Ambush(*pos))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::planners::heuristic::planner_state::fixtures::*;

    #[test]
    fn test_predicts_cell_between_us_and_enemy() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[enemy(1, 3, 5, 50), enemy(2, 0, 0, 50)]);
        let state = fixture.state();
        assert_eq!(
            AmbushEnemyStrategy::predictions(&state),
            vec![Position::new(3, 4)]
        );

        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            AmbushEnemyStrategy.try_select(&state, &mut rng),
            Some(Goal::Ambush(Position::new(3, 4)))
        );
    }

    #[test]
    fn test_skips_cells_held_by_allies() {
        let fixture = Fixture::new(
            OPEN,
            0,
            (3, 3, 50),
            &[enemy(1, 3, 5, 50), ally(2, 3, 4, 50), enemy(3, 4, 4, 50)],
        );
        let state = fixture.state();
        // (3, 4) is ours; the diagonal enemy at (4, 4) is predicted at (4, 3)
        assert_eq!(
            AmbushEnemyStrategy::predictions(&state),
            vec![Position::new(4, 3)]
        );
    }

    #[test]
    fn test_no_enemies_in_range() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[enemy(1, 6, 6, 50)]);
        let state = fixture.state();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(AmbushEnemyStrategy.try_select(&state, &mut rng).is_none());
    }
}
