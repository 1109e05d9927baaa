//! Path data structures
//!
//! A path is a sequence of steps in a 2D geometry.

use std::convert::TryFrom;
use std::ops::Deref;

use thiserror::Error;

use super::{Direction, Point};

/// Error returned for invalid paths
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A new step added to this path was not adjecent to the
    /// previous step.
    #[error("{0} is not adjacent to the end of the path {1}")]
    NotAdjacentSequence(Point, Point),

    /// A path needs at least the point it starts from.
    #[error("A path must contain at least one point")]
    Empty,
}

type PathResult<T> = Result<T, PathError>;

/// A sequence of steps in a 2D geometry.
///
/// Always holds at least one point, the origin.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl TryFrom<Vec<Point>> for Path {
    type Error = PathError;

    fn try_from(points: Vec<Point>) -> PathResult<Self> {
        let mut points = points.into_iter();
        let mut path = Path::new(points.next().ok_or(PathError::Empty)?);
        for point in points {
            path = path.step_to(point)?;
        }
        Ok(path)
    }
}

impl Path {
    /// Construct a new path which starts from this point.
    pub fn new(origin: Point) -> Self {
        Path {
            steps: vec![origin],
        }
    }

    /// Walk from the origin in each of the directions given.
    pub fn follow<I>(origin: Point, directions: I) -> Self
    where
        I: IntoIterator<Item = Direction>,
    {
        let mut path = Path::new(origin);
        for direction in directions {
            path.push(direction);
        }
        path
    }

    /// Return a new path after taking a step in a particular direction.
    pub fn step(&self, direction: Direction) -> Self {
        let mut path = self.clone();
        path.push(direction);
        path
    }

    fn push(&mut self, direction: Direction) {
        let next = self.destination().step(direction);
        self.steps.push(next);
    }

    /// Return a new path after stepping to a particular point.
    pub fn step_to(&self, point: Point) -> PathResult<Self> {
        if !point.is_adjacent(&self.destination()) {
            return Err(PathError::NotAdjacentSequence(point, self.destination()));
        }

        let mut steps = self.steps.clone();
        steps.push(point);
        Ok(Path { steps })
    }

    /// Iterate over the points in this path.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.steps.iter()
    }

    /// The direction of each step along this path.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps
            .windows(2)
            .filter_map(|pair| pair[0].direction(pair[1]))
    }

    /// Where this path started
    pub fn origin(&self) -> Point {
        self.steps[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> Point {
        self.steps[self.steps.len() - 1]
    }

    /// How long this path is.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.steps.len() < 2
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
