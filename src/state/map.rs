use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::infra::{Arena, LocTypes, Position};
use crate::state::{PlayerId, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Normal,
    Spawn,
    Obstacle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    Empty,
    UnknownGlyph { glyph: char, line: usize, column: usize },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArenaError::Empty => write!(formatter, "map contains no cells"),
            ArenaError::UnknownGlyph {
                glyph,
                line,
                column,
            } => write!(
                formatter,
                "unknown map glyph {:?} at line {}, column {}",
                glyph, line, column
            ),
        }
    }
}

impl Error for ArenaError {}

/// Grid arena. Cells outside the board, or not present in the tile set, are
/// invalid.
#[derive(Clone, Debug)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    tiles: HashMap<Position, Tile>,
}

impl Map {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: HashMap::new(),
        }
    }

    /// Parse an ASCII board: `.` normal, `s` spawn, `#` obstacle, and ` ` or
    /// `x` for cells that are not part of the board. Line `y`, column `x`.
    pub fn parse(text: &str) -> Result<Self, ArenaError> {
        let mut tiles = HashMap::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            height = y as i32 + 1;
            for (x, glyph) in line.chars().enumerate() {
                let tile = match glyph {
                    '.' => Tile::Normal,
                    's' | 'S' => Tile::Spawn,
                    '#' => Tile::Obstacle,
                    ' ' | 'x' => continue,
                    _ => {
                        return Err(ArenaError::UnknownGlyph {
                            glyph,
                            line: y + 1,
                            column: x + 1,
                        });
                    }
                };
                width = width.max(x as i32 + 1);
                tiles.insert(Position::new(x as i32, y as i32), tile);
            }
        }

        if tiles.is_empty() {
            return Err(ArenaError::Empty);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Circular arena on a `size` x `size` board. Everything outside the
    /// circle is obstacle; walkable cells touching an obstacle are spawn.
    pub fn standard(size: i32) -> Self {
        let mut map = Map::new(size, size);
        let center = size / 2;
        let limit = center * center - center;

        for x in 0..size {
            for y in 0..size {
                let (dx, dy) = (x - center, y - center);
                let tile = if dx * dx + dy * dy > limit {
                    Tile::Obstacle
                } else {
                    Tile::Normal
                };
                map.insert(Position::new(x, y), tile);
            }
        }

        let ring: Vec<Position> = map
            .iter()
            .filter(|(pos, tile)| {
                **tile == Tile::Normal
                    && pos
                        .neighbors()
                        .iter()
                        .any(|n| !matches!(map.get(n), Some(Tile::Normal) | Some(Tile::Spawn)))
            })
            .map(|(pos, _)| *pos)
            .collect();
        for pos in ring {
            map.insert(pos, Tile::Spawn);
        }

        map
    }

    pub fn get(&self, pos: &Position) -> Option<&Tile> {
        self.tiles.get(pos)
    }

    pub fn insert(&mut self, pos: Position, tile: Tile) -> Option<Tile> {
        self.tiles.insert(pos, tile)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Tile)> {
        self.tiles.iter()
    }

    /// Render the board with robots on it: `A` for robots of `player`, `E`
    /// for everyone else.
    pub fn draw_ascii(&self, snapshot: &Snapshot, player: PlayerId) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position::new(x, y);
                let glyph = match snapshot.robot_at(&pos) {
                    Some(bot) if bot.player_id == player => 'A',
                    Some(_) => 'E',
                    None => match self.get(&pos) {
                        Some(Tile::Normal) => '.',
                        Some(Tile::Spawn) => 's',
                        Some(Tile::Obstacle) => '#',
                        None => ' ',
                    },
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl Arena for Map {
    fn loc_types(&self, pos: &Position) -> LocTypes {
        match self.get(pos) {
            Some(Tile::Normal) => LocTypes::normal(),
            Some(Tile::Spawn) => LocTypes::spawn(),
            Some(Tile::Obstacle) => LocTypes::obstacle(),
            None => LocTypes::invalid(),
        }
    }
}
