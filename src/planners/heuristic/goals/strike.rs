use rand::RngCore;
use tracing::debug;

use crate::infra::Action;
use crate::planners::heuristic::goals::goal::ExecuteGoal;
use crate::planners::heuristic::goals::hit;
use crate::planners::heuristic::goals::run::run;
use crate::planners::heuristic::planner_state::PlannerState;
use crate::state::Robot;

pub struct StrikeGoal(pub Robot);

impl ExecuteGoal for StrikeGoal {
    fn execute(&self, state: &PlannerState, rng: &mut dyn RngCore) -> Option<Action> {
        Some(strike(state, &self.0, rng))
    }
}

/// Deal with an adjacent enemy in the cheapest way available.
pub fn strike(state: &PlannerState, bot: &Robot, rng: &mut dyn RngCore) -> Action {
    let max_damage = state.settings.max_attack_damage();

    // A bot that dies to one more hit is likely to blow itself up
    if bot.hp < max_damage {
        debug!("Strike: {} is nearly dead (hp {}), running", bot.location, bot.hp);
        return run(state, rng);
    }

    let incoming = state.targets().len() as u32 * max_damage;
    if state.me.hp <= incoming {
        debug!(
            "Strike: hp {} cannot survive {} incoming damage, exploding",
            state.me.hp, incoming
        );
        return Action::Suicide;
    }

    debug!("Strike: hitting {}", bot.location);
    hit(bot)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::planners::heuristic::planner_state::fixtures::*;

    #[test]
    fn test_strike_hits_healthy_enemy() {
        let target = enemy(1, 4, 3, 5);
        let fixture = Fixture::new(OPEN, 0, (3, 3, 10), &[target]).with_attack_range(3, 5);
        let state = fixture.state();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(strike(&state, &target, &mut rng), Action::Attack(target.location));
    }

    #[test]
    fn test_strike_suicides_when_outnumbered() {
        let target = enemy(1, 4, 3, 6);
        let fixture = Fixture::new(OPEN, 0, (3, 3, 4), &[target, enemy(2, 2, 3, 8)])
            .with_attack_range(3, 5);
        let state = fixture.state();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(strike(&state, &target, &mut rng), Action::Suicide);
    }

    #[test]
    fn test_strike_suicide_threshold_is_inclusive() {
        let target = enemy(1, 4, 3, 10);
        let fixture = Fixture::new(OPEN, 0, (3, 3, 10), &[target]);
        let state = fixture.state();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(strike(&state, &target, &mut rng), Action::Suicide);
    }

    #[test]
    fn test_strike_never_attacks_weak_bot() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 10), &[enemy(1, 4, 3, 1)]).with_attack_range(3, 5);
        let state = fixture.state();
        let mut rng = StdRng::seed_from_u64(11);
        for hp in 0..5 {
            let target = enemy(1, 4, 3, hp);
            for _ in 0..10 {
                let action = strike(&state, &target, &mut rng);
                assert!(
                    !matches!(action, Action::Attack(_) | Action::Suicide),
                    "hp {} produced {:?}",
                    hp,
                    action
                );
            }
        }
    }
}
