use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i32,
            c: c as i32,
        }
    }

    pub fn dist(self, other: Pos) -> usize {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as usize
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// The order in which every strategy except IDA* tries directions.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "U"),
            Dir::Down => write!(f, "D"),
            Dir::Left => write!(f, "L"),
            Dir::Right => write!(f, "R"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapCell {
    Empty,
    Wall,
    Box,
    Target,
    Player,
    PlayerOnTarget,
    BoxOnTarget,
}

impl MapCell {
    pub fn from_char(c: char) -> Option<MapCell> {
        match c {
            ' ' => Some(MapCell::Empty),
            '#' => Some(MapCell::Wall),
            '$' => Some(MapCell::Box),
            '.' => Some(MapCell::Target),
            '@' => Some(MapCell::Player),
            '+' => Some(MapCell::PlayerOnTarget),
            '*' => Some(MapCell::BoxOnTarget),
            _ => None,
        }
    }

    pub fn is_target(self) -> bool {
        match self {
            MapCell::Target | MapCell::PlayerOnTarget | MapCell::BoxOnTarget => true,
            _ => false,
        }
    }

    pub fn has_box(self) -> bool {
        self == MapCell::Box || self == MapCell::BoxOnTarget
    }

    pub fn has_player(self) -> bool {
        self == MapCell::Player || self == MapCell::PlayerOnTarget
    }

    /// Floor the player can step on or a box can be pushed to.
    pub fn is_free(self) -> bool {
        self == MapCell::Empty || self == MapCell::Target
    }

    /// What remains of the cell once its contents leave.
    pub fn floor(self) -> MapCell {
        if self.is_target() {
            MapCell::Target
        } else {
            MapCell::Empty
        }
    }

    pub fn with_player(self) -> MapCell {
        if self.is_target() {
            MapCell::PlayerOnTarget
        } else {
            MapCell::Player
        }
    }

    pub fn with_box(self) -> MapCell {
        if self.is_target() {
            MapCell::BoxOnTarget
        } else {
            MapCell::Box
        }
    }
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            MapCell::Empty => ' ',
            MapCell::Wall => '#',
            MapCell::Box => '$',
            MapCell::Target => '.',
            MapCell::Player => '@',
            MapCell::PlayerOnTarget => '+',
            MapCell::BoxOnTarget => '*',
        };
        write!(f, "{}", c)
    }
}
