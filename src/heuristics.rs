//! Estimates of the carrots still needed to finish a quest.
//!
//! Every heuristic here is admissible under any [CostTable], and
//! returns zero once all the medals are collected.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use geometry::coord2d::Point;
use searcher::{Heuristic, Max};

use crate::quest::{CostTable, Quest, QuestState};
use crate::{QuestError, Result};

/// A quest heuristic, as stored in the registry.
pub type QuestHeuristic = fn(&QuestState, &Quest) -> u32;

lazy_static! {
    static ref HEURISTICS: BTreeMap<&'static str, QuestHeuristic> = {
        let mut h: BTreeMap<&'static str, QuestHeuristic> = BTreeMap::new();
        h.insert("null", null);
        h.insert("single", single);
        h.insert("farthest", farthest);
        h.insert("maze", maze);
        h.insert("combined", combined);
        h
    };
}

/// Find a heuristic by name.
pub fn lookup(name: &str) -> Result<QuestHeuristic> {
    HEURISTICS
        .get(name.trim())
        .copied()
        .ok_or_else(|| QuestError::UnknownHeuristic(name.to_string()))
}

/// Names of every registered heuristic, in alphabetical order.
pub fn names() -> impl Iterator<Item = &'static str> {
    HEURISTICS.keys().copied()
}

/// Cheapest possible walk between two points, ignoring walls.
///
/// Getting `dx` columns east takes at least `dx` east moves, whatever
/// else happens along the way, and likewise for the other directions.
pub fn directional_bound(costs: &CostTable, from: Point, to: Point) -> u32 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let horizontal = if dx > 0 {
        (dx as u32).saturating_mul(costs.east)
    } else {
        (-dx as u32).saturating_mul(costs.west)
    };
    let vertical = if dy > 0 {
        (dy as u32).saturating_mul(costs.south)
    } else {
        (-dy as u32).saturating_mul(costs.north)
    };

    horizontal.saturating_add(vertical)
}

/// No information at all: A* becomes uniform cost search.
pub fn null(_state: &QuestState, _quest: &Quest) -> u32 {
    0
}

/// Bound on the cost to reach the first remaining medal.
pub fn single(state: &QuestState, quest: &Quest) -> u32 {
    state
        .medals
        .first()
        .map(|medal| directional_bound(quest.costs(), state.position, medal))
        .unwrap_or(0)
}

/// Bound on the cost to reach the most expensive remaining medal.
pub fn farthest(state: &QuestState, quest: &Quest) -> u32 {
    state
        .medals
        .iter()
        .map(|medal| directional_bound(quest.costs(), state.position, medal))
        .max()
        .unwrap_or(0)
}

/// Steps through the maze to the most distant remaining medal,
/// each at the price of the cheapest move.
///
/// A medal the maze walls off contributes nothing.
pub fn maze(state: &QuestState, quest: &Quest) -> u32 {
    let cheapest = quest.costs().cheapest();
    state
        .medals
        .iter()
        .filter_map(|medal| quest.maze_distance(state.position, medal))
        .map(|steps| steps as u32 * cheapest)
        .max()
        .unwrap_or(0)
}

/// The better of [farthest] and [maze].
pub fn combined(state: &QuestState, quest: &Quest) -> u32 {
    Max(farthest as QuestHeuristic, maze as QuestHeuristic).estimate(state, quest)
}

#[cfg(test)]
mod test {
    use searcher::{ucs, Problem};

    use super::*;
    use crate::quest::helpers::{quest, uniform};
    use crate::quest::Medals;

    fn state(x: i32, y: i32, medals: &[(i32, i32)]) -> QuestState {
        QuestState {
            position: Point::new(x, y),
            medals: medals.iter().map(|&m| Point::from(m)).collect::<Medals>(),
        }
    }

    #[test]
    fn registry() {
        assert_eq!(
            names().collect::<Vec<_>>(),
            vec!["combined", "farthest", "maze", "null", "single"]
        );
        for name in names() {
            assert!(lookup(name).is_ok());
        }
        assert!(matches!(
            lookup("manhattan"),
            Err(QuestError::UnknownHeuristic(name)) if name == "manhattan"
        ));
    }

    #[test]
    fn directional() {
        let costs = CostTable::default();
        let origin = Point::new(2, 2);

        assert_eq!(directional_bound(&costs, origin, Point::new(4, 2)), 30);
        assert_eq!(directional_bound(&costs, origin, Point::new(0, 2)), 2);
        assert_eq!(directional_bound(&costs, origin, Point::new(2, 5)), 6);
        assert_eq!(directional_bound(&costs, origin, Point::new(2, 0)), 28);
        assert_eq!(directional_bound(&costs, origin, Point::new(3, 1)), 29);
        assert_eq!(directional_bound(&costs, origin, origin), 0);

        let dear = CostTable::uniform(u32::MAX / 2);
        assert_eq!(
            directional_bound(&dear, origin, Point::new(5, 5)),
            u32::MAX
        );
        assert_eq!(
            directional_bound(&dear, origin, Point::new(3, 2)),
            u32::MAX / 2
        );

        let uniform = CostTable::uniform(3);
        assert_eq!(
            directional_bound(&uniform, origin, Point::new(0, 5)),
            3 * origin.manhattan_distance(Point::new(0, 5)) as u32
        );
    }

    #[test]
    fn estimates() {
        let quest = uniform(
            "
            S..W.
            ...W.
            .....",
            1,
        );

        let here = state(0, 0, &[(4, 0), (1, 2)]);
        assert_eq!(null(&here, &quest), 0);
        assert_eq!(single(&here, &quest), 4);
        assert_eq!(farthest(&here, &quest), 4);
        // Around the wall is eight steps.
        assert_eq!(maze(&here, &quest), 8);
        assert_eq!(combined(&here, &quest), 8);
    }

    #[test]
    fn zero_at_goal() {
        let quest = quest(
            "
            S.M
            M..",
        );
        let done = state(1, 1, &[]);
        for name in names() {
            let heuristic = lookup(name).unwrap();
            assert_eq!(heuristic(&done, &quest), 0, "{} is not zero at goal", name);
        }
    }

    #[test]
    fn walled_off_medal() {
        let quest = quest(
            "
            S.WM
            ..W.",
        );
        let start = quest.start_state();
        assert_eq!(maze(&start, &quest), 0);
        assert_eq!(farthest(&start, &quest), 45);
    }

    /// Every heuristic is a lower bound on the true remaining cost,
    /// checked from every open position against uniform cost search.
    #[test]
    fn admissible() {
        let layout = "
            ..M.W
            .W.S.
            M..W.
            ..M..";

        for position in quest(layout).maze().open_positions().collect::<Vec<_>>() {
            let base = quest(layout);
            let medals: Vec<Point> = base.medals().iter().collect();
            let maze = base.maze().clone();

            let mut here = Quest::new(maze, position, medals).unwrap();
            let start = here.start_state();
            let estimates: Vec<(&str, u32)> = names()
                .map(|name| (name, lookup(name).unwrap()(&start, &here)))
                .collect();

            let solution = ucs(&mut here).unwrap();
            let optimal = here.path_cost(&solution);

            for (name, estimate) in estimates {
                assert!(
                    estimate <= optimal,
                    "{} overestimates from {}: {} > {}",
                    name,
                    position,
                    estimate,
                    optimal
                );
            }
        }
    }
}
