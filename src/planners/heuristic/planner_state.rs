use crate::infra::{Arena, Position, Settings};
use crate::state::{Robot, Snapshot};

/// One robot's view of one turn: who it is, what the board looks like, and
/// the rules in force. All queries are pure.
#[derive(Clone, Copy)]
pub struct PlannerState<'a> {
    pub me: Robot,
    pub snapshot: &'a Snapshot,
    pub arena: &'a dyn Arena,
    pub settings: &'a Settings,
}

impl<'a> PlannerState<'a> {
    pub fn new(
        me: Robot,
        snapshot: &'a Snapshot,
        arena: &'a dyn Arena,
        settings: &'a Settings,
    ) -> Self {
        Self {
            me,
            snapshot,
            arena,
            settings,
        }
    }

    // ========================================================================
    // Classification
    // ========================================================================

    pub fn is_invalid(&self, pos: &Position) -> bool {
        self.arena.loc_types(pos).invalid
    }

    pub fn is_normal(&self, pos: &Position) -> bool {
        self.arena.loc_types(pos).normal
    }

    pub fn is_spawn(&self, pos: &Position) -> bool {
        self.arena.loc_types(pos).spawn
    }

    pub fn is_obstacle(&self, pos: &Position) -> bool {
        self.arena.loc_types(pos).obstacle
    }

    /// On the board and not blocked.
    pub fn is_ok(&self, pos: &Position) -> bool {
        !self.is_invalid(pos) && !self.is_obstacle(pos)
    }

    pub fn is_in_range(&self, pos: &Position, dist: i32) -> bool {
        self.arena.dist(&self.me.location, pos) <= dist
    }

    pub fn is_in_walking_range(&self, pos: &Position, dist: i32) -> bool {
        self.arena.wdist(&self.me.location, pos) <= dist
    }

    /// Within one step, diagonals included.
    pub fn is_close(&self, bot: &Robot) -> bool {
        self.is_in_range(&bot.location, 1)
    }

    /// Within one step, diagonals excluded.
    pub fn is_adjacent(&self, bot: &Robot) -> bool {
        self.is_in_walking_range(&bot.location, 1)
    }

    pub fn is_ally(&self, bot: &Robot) -> bool {
        bot.player_id == self.me.player_id
    }

    pub fn is_enemy(&self, bot: &Robot) -> bool {
        bot.player_id != self.me.player_id
    }

    // ========================================================================
    // Collections
    // ========================================================================

    pub fn robots(&self) -> Vec<&'a Robot> {
        self.snapshot.robots().collect()
    }

    pub fn enemies(&self) -> Vec<&'a Robot> {
        self.filtered(|bot| self.is_enemy(bot))
    }

    pub fn allies(&self) -> Vec<&'a Robot> {
        self.filtered(|bot| self.is_ally(bot))
    }

    /// Robots in the 8-neighbourhood.
    pub fn sight(&self) -> Vec<&'a Robot> {
        self.filtered(|bot| self.is_close(bot))
    }

    /// Robots in the 4-neighbourhood.
    pub fn neighbours(&self) -> Vec<&'a Robot> {
        self.filtered(|bot| self.is_adjacent(bot))
    }

    /// Enemies we can hit right now.
    pub fn targets(&self) -> Vec<&'a Robot> {
        self.filtered(|bot| self.is_adjacent(bot) && self.is_enemy(bot))
    }

    fn filtered(&self, keep: impl Fn(&Robot) -> bool) -> Vec<&'a Robot> {
        self.snapshot.robots().filter(|bot| keep(*bot)).collect()
    }

    // ========================================================================
    // Movement
    // ========================================================================

    pub fn cross(&self) -> [Position; 4] {
        self.me.location.neighbors()
    }

    pub fn paths(&self) -> Vec<Position> {
        self.cross()
            .into_iter()
            .filter(|pos| self.is_ok(pos))
            .collect()
    }

    pub fn escapes(&self) -> Vec<Position> {
        self.paths()
            .into_iter()
            .filter(|pos| self.is_safe(pos))
            .collect()
    }

    /// No enemy could hit `pos` next turn.
    pub fn is_safe(&self, pos: &Position) -> bool {
        self.snapshot
            .robots()
            .filter(|bot| self.is_enemy(bot))
            .all(|bot| self.arena.wdist(pos, &bot.location) >= 2)
    }

    /// Robots other than us that could also step into `pos`.
    pub fn involved(&self, pos: &Position) -> Vec<&'a Robot> {
        self.filtered(|bot| {
            bot.location != self.me.location && self.arena.wdist(pos, &bot.location) < 2
        })
    }

    /// Collision tie-break: larger x wins, then larger y.
    pub fn has_priority_over(&self, bot: &Robot) -> bool {
        let (mine, theirs) = (self.me.location, bot.location);
        mine.x > theirs.x || (mine.x == theirs.x && mine.y > theirs.y)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::state::{Map, PlayerId, RobotId};

    pub const ME: RobotId = RobotId(0);
    pub const US: PlayerId = PlayerId(0);
    pub const THEM: PlayerId = PlayerId(1);

    /// A board plus the robots on it; `me` is always robot 0.
    pub struct Fixture {
        pub map: Map,
        pub snapshot: Snapshot,
        pub settings: Settings,
    }

    impl Fixture {
        pub fn new(board: &str, turn: u32, me: (i32, i32, u32), others: &[Robot]) -> Self {
            let mut robots = vec![Robot::new(ME, Position::new(me.0, me.1), US, me.2)];
            robots.extend_from_slice(others);
            Self {
                map: Map::parse(board).unwrap(),
                snapshot: Snapshot::new(turn, robots),
                settings: Settings::default(),
            }
        }

        pub fn with_attack_range(mut self, min: u32, max: u32) -> Self {
            self.settings.attack_range = (min, max);
            self
        }

        pub fn state(&self) -> PlannerState<'_> {
            let me = *self.snapshot.get(ME).unwrap();
            PlannerState::new(me, &self.snapshot, &self.map, &self.settings)
        }
    }

    pub fn enemy(id: u32, x: i32, y: i32, hp: u32) -> Robot {
        Robot::new(RobotId(id), Position::new(x, y), THEM, hp)
    }

    pub fn ally(id: u32, x: i32, y: i32, hp: u32) -> Robot {
        Robot::new(RobotId(id), Position::new(x, y), US, hp)
    }

    pub const OPEN: &str = "\
.......
.......
.......
.......
.......
.......
.......
";
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_is_ok_matches_classification() {
        let fixture = Fixture::new("#s.\n...\n", 0, (1, 1, 50), &[]);
        let state = fixture.state();
        for x in -1..4 {
            for y in -1..3 {
                let pos = Position::new(x, y);
                assert_eq!(
                    state.is_ok(&pos),
                    !state.is_invalid(&pos) && !state.is_obstacle(&pos)
                );
            }
        }
        assert!(state.is_spawn(&Position::new(1, 0)));
        assert!(state.is_normal(&Position::new(2, 0)));
    }

    #[test]
    fn test_ally_and_enemy_are_exclusive() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[enemy(1, 0, 0, 5), ally(2, 6, 6, 5)]);
        let state = fixture.state();
        for bot in state.robots() {
            assert_ne!(state.is_ally(bot), state.is_enemy(bot));
        }
        assert_eq!(state.enemies().len(), 1);
        // Allies include ourselves
        assert_eq!(state.allies().len(), 2);
    }

    #[test]
    fn test_sight_includes_diagonals_neighbours_do_not() {
        let fixture = Fixture::new(
            OPEN,
            0,
            (3, 3, 50),
            &[enemy(1, 4, 4, 5), enemy(2, 3, 2, 5), ally(3, 2, 3, 5), enemy(4, 5, 3, 5)],
        );
        let state = fixture.state();

        let sight: Vec<u32> = state.sight().iter().map(|b| b.robot_id.0).collect();
        assert_eq!(sight, vec![0, 1, 2, 3]);

        let neighbours: Vec<u32> = state.neighbours().iter().map(|b| b.robot_id.0).collect();
        assert_eq!(neighbours, vec![0, 2, 3]);

        let targets: Vec<u32> = state.targets().iter().map(|b| b.robot_id.0).collect();
        assert_eq!(targets, vec![2]);
    }

    #[test]
    fn test_paths_skip_obstacles_and_board_edge() {
        let fixture = Fixture::new(".#.\n...\n", 0, (0, 0, 50), &[]);
        let state = fixture.state();
        assert_eq!(state.paths(), vec![Position::new(0, 1)]);
    }

    #[test]
    fn test_escapes_are_safe_paths() {
        let fixture = Fixture::new(OPEN, 0, (3, 3, 50), &[enemy(1, 5, 3, 20)]);
        let state = fixture.state();
        let escapes = state.escapes();
        let paths = state.paths();

        assert!(escapes.iter().all(|pos| paths.contains(pos)));
        for pos in &escapes {
            for bot in state.enemies() {
                assert!(pos.distance(&bot.location) >= 2);
            }
        }
        // East is next to the enemy
        assert!(!escapes.contains(&Position::new(4, 3)));
        assert_eq!(escapes.len(), 3);
    }

    #[test]
    fn test_involved_excludes_self() {
        let fixture = Fixture::new(
            OPEN,
            0,
            (3, 3, 50),
            &[ally(1, 5, 3, 5), enemy(2, 4, 5, 5), enemy(3, 6, 6, 5)],
        );
        let state = fixture.state();
        let involved: Vec<u32> = state
            .involved(&Position::new(4, 3))
            .iter()
            .map(|b| b.robot_id.0)
            .collect();
        assert_eq!(involved, vec![1]);

        let involved: Vec<u32> = state
            .involved(&Position::new(4, 4))
            .iter()
            .map(|b| b.robot_id.0)
            .collect();
        assert_eq!(involved, vec![2]);
    }

    #[test]
    fn test_priority_orders_by_x_then_y() {
        let fixture = Fixture::new(
            OPEN,
            0,
            (3, 3, 50),
            &[ally(1, 2, 6, 5), ally(2, 3, 2, 5), ally(3, 3, 4, 5), ally(4, 4, 0, 5)],
        );
        let state = fixture.state();
        let bots = state.snapshot;
        let priority = |id: u32| state.has_priority_over(bots.get(crate::state::RobotId(id)).unwrap());
        assert!(priority(1));
        assert!(priority(2));
        assert!(!priority(3));
        assert!(!priority(4));
    }
}
