/// Global game rules the policy reads from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub board_size: i32,
    /// Damage of a single attack as (min, max).
    pub attack_range: (u32, u32),
    pub suicide_damage: u32,
    pub robot_hp: u32,
    pub spawn_every: u32,
    /// Every turn that is a multiple of this is treated as a spawn turn
    /// by the policy, which then leaves spawn cells.
    pub critical_turn_period: u32,
}

impl Settings {
    pub fn max_attack_damage(&self) -> u32 {
        self.attack_range.1
    }

    pub fn is_critical_turn(&self, turn: u32) -> bool {
        self.critical_turn_period != 0 && turn % self.critical_turn_period == 0
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: 19,
            attack_range: (8, 10),
            suicide_damage: 15,
            robot_hp: 50,
            spawn_every: 10,
            critical_turn_period: 5,
        }
    }
}
