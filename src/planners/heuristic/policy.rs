use rand::RngCore;

use crate::infra::{Action, Arena, Settings};
use crate::planners::heuristic::goals::Goal;
use crate::planners::heuristic::planner_state::PlannerState;
use crate::planners::heuristic::strategies::StrategyPlanner;
use crate::state::{Robot, Snapshot};

/// The Black Betty controller bound to one robot.
///
/// The engine refreshes the robot's identity each turn through
/// [`BlackBetty::refresh`]; nothing else carries over between turns.
pub struct BlackBetty {
    me: Robot,
    planner: StrategyPlanner,
}

impl BlackBetty {
    pub fn new(me: Robot) -> Self {
        Self {
            me,
            planner: StrategyPlanner::new(),
        }
    }

    pub fn me(&self) -> &Robot {
        &self.me
    }

    pub fn refresh(&mut self, me: Robot) {
        self.me = me;
    }

    /// Choose this turn's action. Always produces one.
    pub fn act(
        &self,
        snapshot: &Snapshot,
        arena: &dyn Arena,
        settings: &Settings,
        rng: &mut dyn RngCore,
    ) -> Action {
        self.decide(snapshot, arena, settings, rng).1
    }

    /// Like [`BlackBetty::act`], also reporting the goal behind the action.
    pub fn decide(
        &self,
        snapshot: &Snapshot,
        arena: &dyn Arena,
        settings: &Settings,
        rng: &mut dyn RngCore,
    ) -> (Goal, Action) {
        let state = PlannerState::new(self.me, snapshot, arena, settings);
        self.planner.decide(&state, rng)
    }
}
