use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::convert::TryFrom;
use std::iter::FromIterator;
use std::str::FromStr;

use geometry::coord2d::map::Map;
use geometry::coord2d::path::Path;
use geometry::coord2d::{Direction, Point};
use searcher::Problem;

use crate::maze::Maze;
use crate::{QuestError, Result};

/// Carrots consumed by a single move in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostTable {
    pub north: u32,
    pub south: u32,
    pub east: u32,
    pub west: u32,
}

impl Default for CostTable {
    fn default() -> Self {
        CostTable {
            north: 14,
            south: 2,
            east: 15,
            west: 1,
        }
    }
}

impl CostTable {
    /// Every move costs the same.
    pub fn uniform(cost: u32) -> Self {
        CostTable {
            north: cost,
            south: cost,
            east: cost,
            west: cost,
        }
    }

    pub fn cost(&self, direction: Direction) -> u32 {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// The cost of the cheapest move in any direction.
    pub fn cheapest(&self) -> u32 {
        Direction::all()
            .map(|d| self.cost(d))
            .min()
            .unwrap_or_default()
    }
}

/// The medals still waiting to be collected.
///
/// Kept in reading order, so two sets of the same medals are always
/// equal and hash the same no matter how they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Medals(BTreeSet<Point>);

impl Medals {
    /// These medals, less any lying at `position`.
    pub fn collect(&self, position: Point) -> Medals {
        if self.0.contains(&position) {
            let mut remaining = self.0.clone();
            remaining.remove(&position);
            Medals(remaining)
        } else {
            self.clone()
        }
    }

    pub fn contains(&self, position: Point) -> bool {
        self.0.contains(&position)
    }

    /// The first remaining medal, in reading order.
    pub fn first(&self) -> Option<Point> {
        self.0.iter().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Point> for Medals {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Medals(iter.into_iter().collect())
    }
}

/// Where the mascot is, and what is left to collect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestState {
    pub position: Point,
    pub medals: Medals,
}

impl QuestState {
    pub fn is_complete(&self) -> bool {
        self.medals.is_empty()
    }
}

/// Collect every medal in the maze.
///
/// Each expansion is counted, so a quest reports how much work
/// the searches run on it have done.
#[derive(Debug)]
pub struct Quest {
    maze: Maze,
    start: Point,
    medals: Medals,
    costs: CostTable,
    expanded: usize,
    distances: RefCell<HashMap<(Point, Point), Option<usize>>>,
}

impl Quest {
    /// Set up a quest. The start and every medal must be open
    /// positions inside the maze.
    pub fn new<I>(maze: Maze, start: Point, medals: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        maze.check(start)?;
        let medals: Medals = medals.into_iter().collect();
        for medal in medals.iter() {
            maze.check(medal)?;
        }

        Ok(Quest {
            maze,
            start,
            medals,
            costs: CostTable::default(),
            expanded: 0,
            distances: RefCell::new(HashMap::new()),
        })
    }

    /// Use a different table of move costs.
    pub fn with_costs(mut self, costs: CostTable) -> Self {
        self.costs = costs;
        self
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn medals(&self) -> &Medals {
        &self.medals
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    /// Fewest steps through the maze between two positions, if there is a way.
    pub fn maze_distance(&self, from: Point, to: Point) -> Option<usize> {
        if let Some(distance) = self.distances.borrow().get(&(from, to)) {
            return *distance;
        }

        let distance = self.maze.steps(from, to);
        self.distances.borrow_mut().insert((from, to), distance);
        distance
    }

    /// Replay a route from the start, returning every position visited.
    pub fn trace(&self, actions: &[Direction]) -> Result<Path> {
        let mut path = Path::new(self.start);
        for (step, direction) in actions.iter().enumerate() {
            let from = path.destination();
            if !self.maze.is_traversable(from.step(*direction)) {
                return Err(QuestError::IllegalMove {
                    step,
                    direction: *direction,
                    from,
                });
            }
            path = path.step(*direction);
        }
        Ok(path)
    }

    /// Medals left over after following a route from the start.
    pub fn remaining(&self, actions: &[Direction]) -> Result<Medals> {
        let path = self.trace(actions)?;
        Ok(path
            .iter()
            .fold(self.medals.clone(), |medals, position| {
                medals.collect(*position)
            }))
    }
}

impl Problem for Quest {
    type State = QuestState;
    type Action = Direction;
    type Cost = u32;

    /// A medal lying under the starting position counts as collected.
    fn start_state(&self) -> QuestState {
        QuestState {
            position: self.start,
            medals: self.medals.collect(self.start),
        }
    }

    fn is_goal(&self, state: &QuestState) -> bool {
        state.is_complete()
    }

    fn expand(&mut self, state: &QuestState) -> Vec<(QuestState, Direction, u32)> {
        self.expanded += 1;

        let mut successors = Vec::with_capacity(4);
        for direction in Direction::all() {
            let position = state.position.step(direction);
            if self.maze.is_traversable(position) {
                let next = QuestState {
                    position,
                    medals: state.medals.collect(position),
                };
                successors.push((next, direction, self.costs.cost(direction)));
            }
        }
        successors
    }

    fn path_cost(&self, actions: &[Direction]) -> u32 {
        actions.iter().map(|d| self.costs.cost(*d)).sum()
    }

    fn nodes_expanded(&self) -> usize {
        self.expanded
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Tile {
    Open,
    Wall,
    Medal,
    Start,
}

impl TryFrom<char> for Tile {
    type Error = QuestError;

    fn try_from(value: char) -> Result<Self> {
        match value {
            '.' | ' ' => Ok(Tile::Open),
            'W' | 'w' => Ok(Tile::Wall),
            'M' | 'm' => Ok(Tile::Medal),
            'S' | 's' => Ok(Tile::Start),
            c => Err(QuestError::Layout(c)),
        }
    }
}

/// Reads a quest from a text layout, one line per row of the maze.
///
/// `W` is a wall, `M` a medal, `S` the start. Both `.` and a space are
/// open positions, so a row of spaces is still a row. Indentation shared
/// by every non-blank row is ignored, as are empty lines before the first
/// row and after the last. The first row sets the width of the maze.
/// Move costs are the default table.
impl FromStr for Quest {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines: Vec<&str> = s.lines().collect();
        while lines.first().map_or(false, |line| line.is_empty()) {
            lines.remove(0);
        }
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }

        let indent = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.len() - line.trim_start_matches(' ').len())
            .min()
            .unwrap_or(0);
        let rows: Vec<&str> = lines
            .iter()
            .map(|line| line.get(indent..).unwrap_or(""))
            .collect();

        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);

        let mut maze = Maze::new(width, rows.len());
        let mut start = None;
        let mut medals = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let position: Point = (x, y).into();
                match Tile::try_from(c)? {
                    Tile::Open => {}
                    Tile::Wall => maze.add_wall(position)?,
                    Tile::Medal => medals.push(position),
                    Tile::Start => start = Some(position),
                }
            }
        }

        let start = start.ok_or(QuestError::MissingStart)?;
        Quest::new(maze, start, medals)
    }
}


#[cfg(test)]
mod test {
    use super::helpers::*;
    use super::*;

    #[test]
    fn layout() {
        let quest = quest(
            "
            S.W
            .WM
            M..",
        );

        assert_eq!(quest.maze().width(), 3);
        assert_eq!(quest.maze().height(), 3);
        assert_eq!(quest.start(), Point::new(0, 0));
        assert_eq!(
            quest.medals().iter().collect::<Vec<_>>(),
            vec![Point::new(2, 1), Point::new(0, 2)]
        );
        assert!(quest.maze().is_wall(Point::new(2, 0)));
        assert!(quest.maze().is_wall(Point::new(1, 1)));
    }

    #[test]
    fn bad_layouts() {
        assert!(matches!(
            "S.#".parse::<Quest>(),
            Err(QuestError::Layout('#'))
        ));
        assert!(matches!(
            "..M".parse::<Quest>(),
            Err(QuestError::MissingStart)
        ));
        assert!(matches!(
            "S.\n..M".parse::<Quest>(),
            Err(QuestError::OutOfBounds(p)) if p == Point::new(2, 1)
        ));
    }

    #[test]
    fn spaces_are_open() {
        let layout = quest("WWW\n  S\nM..");
        assert_eq!(layout.maze().width(), 3);
        assert_eq!(layout.start(), Point::new(2, 1));
        assert_eq!(layout.medals().first(), Some(Point::new(0, 2)));

        let layout = quest("S..\n   \n..M");
        assert_eq!(layout.maze().height(), 3);
        assert_eq!(layout.medals().first(), Some(Point::new(2, 2)));

        let layout = quest(
            "
            S.W

            ..M",
        );
        assert_eq!(layout.maze().height(), 3);
        assert_eq!(layout.start(), Point::new(0, 0));
        assert_eq!(layout.medals().first(), Some(Point::new(2, 2)));
        assert!(layout.maze().is_wall(Point::new(2, 0)));
    }

    #[test]
    fn validation() {
        let mut maze = Maze::new(2, 2);
        maze.add_wall(Point::new(1, 1)).unwrap();

        assert!(matches!(
            Quest::new(maze.clone(), Point::new(1, 1), vec![]),
            Err(QuestError::Blocked(_))
        ));
        assert!(matches!(
            Quest::new(maze.clone(), Point::new(0, 0), vec![Point::new(5, 0)]),
            Err(QuestError::OutOfBounds(_))
        ));
        assert!(Quest::new(maze, Point::new(0, 0), vec![Point::new(1, 0)]).is_ok());
    }

    #[test]
    fn medals_are_canonical() {
        let a: Medals = vec![Point::new(3, 1), Point::new(0, 0), Point::new(2, 0)]
            .into_iter()
            .collect();
        let b: Medals = vec![Point::new(2, 0), Point::new(3, 1), Point::new(0, 0)]
            .into_iter()
            .collect();
        assert_eq!(a, b);
        assert_eq!(a.first(), Some(Point::new(0, 0)));

        let collected = a.collect(Point::new(2, 0));
        assert_eq!(collected.len(), 2);
        assert!(!collected.contains(Point::new(2, 0)));
        assert_eq!(a.len(), 3);
        assert_eq!(a.collect(Point::new(9, 9)), a);
    }

    #[test]
    fn expand() {
        let mut quest = quest(
            "
            .W.
            MS.
            ...",
        );

        let start = quest.start_state();
        let successors = quest.expand(&start);
        let moves: Vec<(Direction, u32)> = successors.iter().map(|(_, d, c)| (*d, *c)).collect();
        assert_eq!(
            moves,
            vec![
                (Direction::East, 15),
                (Direction::West, 1),
                (Direction::South, 2)
            ]
        );

        let (west, _, _) = &successors[1];
        assert_eq!(west.position, Point::new(0, 1));
        assert!(quest.is_goal(west));
        assert!(!quest.is_goal(&successors[0].0));
        assert_eq!(quest.nodes_expanded(), 1);

        // Expanding again gives the same answer, and is counted again.
        assert_eq!(quest.expand(&start), successors);
        assert_eq!(quest.nodes_expanded(), 2);
    }

    #[test]
    fn medal_at_start() {
        let mut maze = Maze::new(3, 1);
        maze.add_wall(Point::new(2, 0)).unwrap();
        let quest = Quest::new(maze, Point::new(0, 0), vec![Point::new(0, 0)]).unwrap();
        assert!(quest.is_goal(&quest.start_state()));
    }

    #[test]
    fn trace() {
        let quest = quest(
            "
            S.M
            .W.",
        );

        let route = [Direction::East, Direction::East, Direction::South];
        let path = quest.trace(&route).unwrap();
        assert_eq!(path.destination(), Point::new(2, 1));
        assert_eq!(quest.path_cost(&route), 32);
        assert!(quest.remaining(&route).unwrap().is_empty());
        assert_eq!(quest.remaining(&route[..1]).unwrap().len(), 1);

        assert!(matches!(
            quest.trace(&[Direction::South, Direction::East]),
            Err(QuestError::IllegalMove {
                step: 1,
                direction: Direction::East,
                ..
            })
        ));
        assert!(matches!(
            quest.trace(&[Direction::North]),
            Err(QuestError::IllegalMove { step: 0, .. })
        ));
    }

    #[test]
    fn maze_distance_is_memoised() {
        let quest = quest(
            "
            S.W.
            ..W.
            ....",
        );

        assert_eq!(quest.maze_distance(Point::new(0, 0), Point::new(3, 0)), Some(7));
        assert_eq!(quest.maze_distance(Point::new(0, 0), Point::new(3, 0)), Some(7));
        assert_eq!(quest.distances.borrow().len(), 1);
    }
}
