//! Pathfinding in two dimensions using breadth first search
use searcher::{bfs, Problem};

pub use super::map::Map;
pub use super::path::Path;
use super::{Direction, Point};

/// Walking between two points on a map, one unit step at a time.
#[derive(Debug)]
struct PathProblem<'m, M> {
    map: &'m M,
    origin: Point,
    destination: Point,
    expanded: usize,
}

impl<'m, M> PathProblem<'m, M> {
    fn new(map: &'m M, origin: Point, destination: Point) -> Self {
        Self {
            map,
            origin,
            destination,
            expanded: 0,
        }
    }
}

impl<'m, M> Problem for PathProblem<'m, M>
where
    M: Map,
{
    type State = Point;
    type Action = Direction;
    type Cost = usize;

    fn start_state(&self) -> Point {
        self.origin
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.destination
    }

    fn expand(&mut self, state: &Point) -> Vec<(Point, Direction, usize)> {
        self.expanded += 1;
        Direction::all()
            .map(|direction| (state.step(direction), direction))
            .filter(|(next, _)| self.map.is_traversable(*next))
            .map(|(next, direction)| (next, direction, 1))
            .collect()
    }

    fn path_cost(&self, actions: &[Direction]) -> usize {
        actions.len()
    }

    fn nodes_expanded(&self) -> usize {
        self.expanded
    }
}

/// Implements pathfinding for a map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder.
    pub(crate) fn new(map: &'m M) -> Self {
        Self { map }
    }

    /// Find a shortest path between the origin and destination given.
    ///
    /// When no path exists and the search is exhausted, return None.
    pub fn find_path(&self, origin: Point, destination: Point) -> Option<Path> {
        if !self.map.is_traversable(origin) {
            return None;
        }
        let mut problem = PathProblem::new(self.map, origin, destination);

        bfs(&mut problem).map(|directions| Path::follow(origin, directions))
    }
}

#[cfg(test)]
mod test {

    use super::super::map::helpers::*;

    use super::*;

    #[test]
    fn simple() {
        let map: SimpleMap = vec![(0, 0).into()].into();

        assert_eq!(
            map.path((0, 0).into(), (0, 0).into()),
            Some(Path::new((0, 0).into()))
        );
        assert_eq!(map.path((1, 0).into(), (0, 0).into()), None);
    }

    #[test]
    fn shortest() {
        let map: SimpleMap = "
        #######
        #.....#
        #.###.#
        #.#...#
        #.#.###
        #.....#
        #######"
            .trim()
            .parse()
            .unwrap();

        let path = map.path((1, 1).into(), (3, 3).into()).unwrap();
        assert_eq!(path.distance(), 8);
        assert_eq!(path.origin(), Point::new(1, 1));
        assert_eq!(path.destination(), Point::new(3, 3));
        assert!(path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1])));
        assert!(path.iter().all(|point| map.is_traversable(*point)));

        assert_eq!(map.steps((1, 1).into(), (1, 5).into()), Some(4));
    }

    #[test]
    fn unreachable() {
        let map: SimpleMap = "
        ..#..
        ..#.."
            .trim()
            .parse()
            .unwrap();

        assert_eq!(map.path((0, 0).into(), (4, 1).into()), None);
        assert_eq!(map.steps((0, 0).into(), (1, 1).into()), Some(2));
    }

    #[test]
    fn openmap() {
        let map: OpenMap = "
        .....
        .###.
        .#...
        .#.#.
        ....."
            .trim()
            .parse()
            .unwrap();

        let path = map.path((2, 2).into(), (0, 0).into()).unwrap();
        // Around either side of the walls is eight steps, east is tried first.
        assert_eq!(path.distance(), 8);
        let directions: String = path.directions().map(|d| d.letter()).collect();
        assert_eq!(directions, "EENNWWWW");
    }
}
