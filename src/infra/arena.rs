use crate::infra::{LocTypes, Position};

/// Location classification and distance oracles supplied by the engine.
///
/// The distance metrics default to the grid metrics on [`Position`]; an
/// engine with different rules overrides them.
pub trait Arena {
    fn loc_types(&self, pos: &Position) -> LocTypes;

    /// Diagonal-inclusive distance.
    fn dist(&self, a: &Position, b: &Position) -> i32 {
        a.chebyshev_distance(b)
    }

    /// Walking distance (diagonal-exclusive).
    fn wdist(&self, a: &Position, b: &Position) -> i32 {
        a.distance(b)
    }
}
