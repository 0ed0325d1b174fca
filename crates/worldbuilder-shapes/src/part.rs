//! Which symmetric subset of a shape to materialize.
//!
//! Axis conventions: East = +X, West = -X, South = +Z, North = -Z,
//! Top = +Y, Bottom = -Y.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Top,
    Bottom,
}

impl Vertical {
    fn of(sign: i32) -> Self {
        if sign >= 0 {
            Vertical::Top
        } else {
            Vertical::Bottom
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NorthSouth {
    North,
    South,
}

impl NorthSouth {
    fn of(sign: i32) -> Self {
        if sign >= 0 {
            NorthSouth::South
        } else {
            NorthSouth::North
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EastWest {
    East,
    West,
}

impl EastWest {
    fn of(sign: i32) -> Self {
        if sign >= 0 {
            EastWest::East
        } else {
            EastWest::West
        }
    }
}

/// A full vertical half of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    North,
    South,
    East,
    West,
}

/// Sign combinations (x, y, z) of the eight octants, in write order.
pub const OCTANT_SIGNS: [(i32, i32, i32); 8] = [
    (1, 1, 1),
    (-1, 1, 1),
    (1, 1, -1),
    (-1, 1, -1),
    (1, -1, 1),
    (-1, -1, 1),
    (1, -1, -1),
    (-1, -1, -1),
];

/// Sign combinations (x, z) of the four horizontal quadrants, in write order.
pub const QUADRANT_SIGNS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Parsed part token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartSelector {
    /// `F`
    #[default]
    Full,
    /// `T`, `B`
    Hemisphere(Vertical),
    /// `N`, `S`, `E`, `W`
    Side(Side),
    /// `TN`, `TS`, `BN`, `BS`
    Quarter(Vertical, NorthSouth),
    /// `NE`, `NW`, `SE`, `SW`
    Column(NorthSouth, EastWest),
    /// `TNE` .. `BSW`
    Octant(Vertical, NorthSouth, EastWest),
    /// Any unrecognized token. Selects no cells.
    Nothing,
}

impl PartSelector {
    /// Parse a part token, case-insensitively. Unknown tokens give `Nothing`.
    pub fn parse(token: &str) -> Self {
        let upper = token.trim().to_ascii_uppercase();
        let letters: Vec<char> = upper.chars().collect();

        let vertical = |c: char| match c {
            'T' => Some(Vertical::Top),
            'B' => Some(Vertical::Bottom),
            _ => None,
        };
        let north_south = |c: char| match c {
            'N' => Some(NorthSouth::North),
            'S' => Some(NorthSouth::South),
            _ => None,
        };
        let east_west = |c: char| match c {
            'E' => Some(EastWest::East),
            'W' => Some(EastWest::West),
            _ => None,
        };

        let parsed = match letters.as_slice() {
            ['F'] => Some(PartSelector::Full),
            ['N'] => Some(PartSelector::Side(Side::North)),
            ['S'] => Some(PartSelector::Side(Side::South)),
            ['E'] => Some(PartSelector::Side(Side::East)),
            ['W'] => Some(PartSelector::Side(Side::West)),
            [v] => vertical(*v).map(PartSelector::Hemisphere),
            [a, b] => match (vertical(*a), north_south(*b)) {
                (Some(v), Some(ns)) => Some(PartSelector::Quarter(v, ns)),
                _ => match (north_south(*a), east_west(*b)) {
                    (Some(ns), Some(ew)) => Some(PartSelector::Column(ns, ew)),
                    _ => None,
                },
            },
            [v, ns, ew] => match (vertical(*v), north_south(*ns), east_west(*ew)) {
                (Some(v), Some(ns), Some(ew)) => Some(PartSelector::Octant(v, ns, ew)),
                _ => None,
            },
            _ => None,
        };

        parsed.unwrap_or_else(|| {
            log::debug!("Unrecognized part token '{token}', nothing will be selected");
            PartSelector::Nothing
        })
    }

    /// Whether the octant with the given axis signs is part of the selection.
    pub fn selects_octant(self, sx: i32, sy: i32, sz: i32) -> bool {
        let (v, ns, ew) = (Vertical::of(sy), NorthSouth::of(sz), EastWest::of(sx));
        match self {
            PartSelector::Full => true,
            PartSelector::Hemisphere(want) => want == v,
            PartSelector::Side(side) => side_matches(side, ns, ew),
            PartSelector::Quarter(want_v, want_ns) => want_v == v && want_ns == ns,
            PartSelector::Octant(want_v, want_ns, want_ew) => {
                want_v == v && want_ns == ns && want_ew == ew
            }
            PartSelector::Column(..) | PartSelector::Nothing => false,
        }
    }

    /// Whether the horizontal quadrant with the given signs is part of the
    /// selection. Only `F`, sides and columns apply to extruded shapes.
    pub fn selects_column(self, sx: i32, sz: i32) -> bool {
        let (ns, ew) = (NorthSouth::of(sz), EastWest::of(sx));
        match self {
            PartSelector::Full => true,
            PartSelector::Side(side) => side_matches(side, ns, ew),
            PartSelector::Column(want_ns, want_ew) => want_ns == ns && want_ew == ew,
            PartSelector::Hemisphere(_)
            | PartSelector::Quarter(..)
            | PartSelector::Octant(..)
            | PartSelector::Nothing => false,
        }
    }
}

fn side_matches(side: Side, ns: NorthSouth, ew: EastWest) -> bool {
    match side {
        Side::North => ns == NorthSouth::North,
        Side::South => ns == NorthSouth::South,
        Side::East => ew == EastWest::East,
        Side::West => ew == EastWest::West,
    }
}

impl fmt::Display for PartSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = |v: Vertical| match v {
            Vertical::Top => "T",
            Vertical::Bottom => "B",
        };
        let ns = |ns: NorthSouth| match ns {
            NorthSouth::North => "N",
            NorthSouth::South => "S",
        };
        let ew = |ew: EastWest| match ew {
            EastWest::East => "E",
            EastWest::West => "W",
        };
        match *self {
            PartSelector::Full => write!(f, "F"),
            PartSelector::Hemisphere(a) => write!(f, "{}", v(a)),
            PartSelector::Side(Side::North) => write!(f, "N"),
            PartSelector::Side(Side::South) => write!(f, "S"),
            PartSelector::Side(Side::East) => write!(f, "E"),
            PartSelector::Side(Side::West) => write!(f, "W"),
            PartSelector::Quarter(a, b) => write!(f, "{}{}", v(a), ns(b)),
            PartSelector::Column(a, b) => write!(f, "{}{}", ns(a), ew(b)),
            PartSelector::Octant(a, b, c) => write!(f, "{}{}{}", v(a), ns(b), ew(c)),
            PartSelector::Nothing => write!(f, "-"),
        }
    }
}
