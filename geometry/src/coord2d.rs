//! Coordinate work in two dimensions.
//!
//! The grid is laid out like a page of text: `x` grows to the east
//! and `y` grows to the south.

use std::cmp;
use std::default::Default;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod map;
pub mod path;
pub mod pathfinder;

/// A compass direction of movement in two dimensions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
];

impl Direction {
    /// Enumerates all directions of movement, always in the
    /// same order: east, west, south, north.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }

    /// Single letter abbreviation, e.g. `N`.
    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A location in 2D space.
///
/// Essentially a 2-tuple of x and y position,
/// but with a lot of provided methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Returns a point at (0, 0)
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }

    /// Iterate over all adjacent points, in the order of [Direction::all].
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        Direction::all().map(move |d| self.step(d))
    }

    /// Check if a point is adjacent.
    pub fn is_adjacent(&self, point: &Point) -> bool {
        self.manhattan_distance(*point) == 1
    }

    /// Manhattan distance between two points is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// What direction leads from this point to the other?
    ///
    /// If they are not adjacent, return `None`.
    pub fn direction(self, other: Point) -> Option<Direction> {
        Direction::all().find(|d| self.step(*d) == other)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Points sort in "reading order", top to bottom then left to right.
impl cmp::Ord for Point {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl cmp::PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            x: coordinates.0,
            y: coordinates.1,
        }
    }
}

impl From<(usize, usize)> for Point {
    fn from(coordinates: (usize, usize)) -> Self {
        Self {
            x: coordinates.0 as Position,
            y: coordinates.1 as Position,
        }
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\s*\(?\s*(?P<x>-?\d+)\s*,\s*(?P<y>-?\d+)\s*\)?\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}
