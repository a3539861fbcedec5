//! Greedy one-step pathing for the heuristic planner.
//!
//! This is not a search: it looks at most at the two cells that reduce the
//! distance to the destination and never backtracks.

use crate::infra::Position;
use crate::planners::heuristic::planner_state::PlannerState;

impl PlannerState<'_> {
    /// Next cell on the way to `destination`, or `None` if we are already
    /// there or both candidate steps are blocked.
    pub fn next(&self, destination: &Position) -> Option<Position> {
        let here = self.me.location;
        if here == *destination {
            return None;
        }

        let dx = destination.x - here.x;
        let dy = destination.y - here.y;
        let step_x = here.step_x_towards(destination);
        let step_y = here.step_y_towards(destination);

        let candidates = if dx == 0 {
            [Some(step_y), None]
        } else if dy == 0 {
            [Some(step_x), None]
        } else if dx.abs() < dy.abs() {
            [Some(step_y), Some(step_x)]
        } else {
            [Some(step_x), Some(step_y)]
        };

        candidates
            .into_iter()
            .flatten()
            .find(|pos| self.is_ok(pos))
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::Position;
    use crate::planners::heuristic::planner_state::fixtures::*;

    #[test]
    fn test_next_at_destination_is_none() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[]);
        let state = fixture.state();
        assert_eq!(state.next(&Position::new(3, 3)), None);
    }

    #[test]
    fn test_next_straight_line() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[]);
        let state = fixture.state();
        assert_eq!(state.next(&Position::new(3, 0)), Some(Position::new(3, 2)));
        assert_eq!(state.next(&Position::new(6, 3)), Some(Position::new(4, 3)));
        assert_eq!(state.next(&Position::new(0, 3)), Some(Position::new(2, 3)));
    }

    #[test]
    fn test_next_straight_line_blocked() {
        let board = "\
.....
..#..
.....
";
        let fixture = Fixture::new(board, 0, (2, 2, 50), &[]);
        let state = fixture.state();
        // Straight up is a wall and there is no sideways alternative
        assert_eq!(state.next(&Position::new(2, 0)), None);
    }

    #[test]
    fn test_next_prefers_larger_delta() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[]);
        let state = fixture.state();
        assert_eq!(state.next(&Position::new(4, 6)), Some(Position::new(3, 4)));
        assert_eq!(state.next(&Position::new(0, 2)), Some(Position::new(2, 3)));
        // Equal deltas move along x first
        assert_eq!(state.next(&Position::new(5, 5)), Some(Position::new(4, 3)));
    }

    #[test]
    fn test_next_falls_back_to_other_axis() {
        let board = "\
.....
.....
..#..
.....
";
        let fixture = Fixture::new(board, 0, (2, 1, 50), &[]);
        let state = fixture.state();
        // dy is larger but (2, 2) is a wall, so go along x instead
        assert_eq!(state.next(&Position::new(3, 3)), Some(Position::new(3, 1)));
    }

    #[test]
    fn test_next_never_returns_blocked_cell() {
        let board = "\
#####
#...#
#.#.#
#...#
#####
";
        let fixture = Fixture::new(board, 0, (1, 1, 50), &[]);
        let state = fixture.state();
        for x in -2..7 {
            for y in -2..7 {
                if let Some(pos) = state.next(&Position::new(x, y)) {
                    assert!(state.is_ok(&pos), "{:?} is not walkable", pos);
                }
            }
        }
    }
}
