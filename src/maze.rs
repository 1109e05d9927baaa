use std::collections::BTreeSet;

use geometry::coord2d::map::Map;
use geometry::coord2d::Point;

use crate::{QuestError, Result};

/// A rectangular maze: its width, height and walls.
///
/// The maze never changes during a quest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: BTreeSet<Point>,
}

impl Maze {
    pub fn new(width: usize, height: usize) -> Self {
        Maze {
            width,
            height,
            walls: BTreeSet::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Put up a wall. Walls can only go inside the maze.
    pub fn add_wall(&mut self, position: Point) -> Result<()> {
        if !self.within_bounds(position) {
            return Err(QuestError::OutOfBounds(position));
        }
        self.walls.insert(position);
        Ok(())
    }

    pub fn is_wall(&self, position: Point) -> bool {
        self.walls.contains(&position)
    }

    pub fn within_bounds(&self, position: Point) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    /// Every position inside the maze without a wall, in reading order.
    pub fn open_positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Point::from((x, y))))
            .filter(move |position| !self.is_wall(*position))
    }

    /// Is this position somewhere a quest can start or a medal can lie?
    pub(crate) fn check(&self, position: Point) -> Result<()> {
        if !self.within_bounds(position) {
            Err(QuestError::OutOfBounds(position))
        } else if self.is_wall(position) {
            Err(QuestError::Blocked(position))
        } else {
            Ok(())
        }
    }
}

impl Map for Maze {
    fn is_traversable(&self, location: Point) -> bool {
        self.within_bounds(location) && !self.is_wall(location)
    }
}
