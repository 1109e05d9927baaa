use std::fmt;
use std::time::{Duration, Instant};

use itertools::Itertools;
use tracing::info;

use geometry::coord2d::Direction;
use searcher::{Problem, SearchOptions, Strategy};

use crate::heuristics;
use crate::quest::Quest;
use crate::Result;

/// What happened when a strategy was sent on a quest.
#[derive(Debug, Clone)]
pub struct Report {
    pub strategy: Strategy,
    pub heuristic: String,

    /// The route taken, or `None` if the quest failed.
    pub solution: Option<Vec<Direction>>,

    /// Carrots consumed along the route.
    pub cost: Option<u32>,

    /// Expansions made by this search alone.
    pub expanded: usize,
    pub elapsed: Duration,
}

impl Report {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn path_length(&self) -> Option<usize> {
        self.solution.as_ref().map(|s| s.len())
    }

    /// The route as compass letters, e.g. `E E S`.
    pub fn route(&self) -> Option<String> {
        self.solution.as_ref().map(|s| s.iter().join(" "))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.path_length(), self.cost) {
            (Some(length), Some(cost)) => {
                writeln!(f, "Path length: {}", length)?;
                writeln!(f, "Path cost: {}", cost)?;
            }
            _ => writeln!(f, "The quest failed!")?,
        }
        writeln!(f, "Number of nodes expanded: {}", self.expanded)?;
        write!(f, "Processing time: {:.4} (sec)", self.elapsed.as_secs_f64())
    }
}

/// Send a search strategy on the quest, guided by the named heuristic.
///
/// Uninformed strategies ignore the heuristic, but the name must
/// still be registered.
pub fn solve(quest: &mut Quest, strategy: Strategy, heuristic: &str) -> Result<Report> {
    solve_with_options(quest, strategy, heuristic, SearchOptions::default())
}

pub fn solve_with_options(
    quest: &mut Quest,
    strategy: Strategy,
    heuristic: &str,
    options: SearchOptions,
) -> Result<Report> {
    let h = heuristics::lookup(heuristic)?;
    info!(%strategy, heuristic, medals = quest.medals().len(), "starting quest");

    let before = quest.nodes_expanded();
    let started = Instant::now();
    let solution = strategy.run(quest, h, options)?;
    let elapsed = started.elapsed();

    let cost = solution.as_ref().map(|s| quest.path_cost(s));
    Ok(Report {
        strategy,
        heuristic: heuristic.trim().to_string(),
        solution,
        cost,
        expanded: quest.nodes_expanded() - before,
        elapsed,
    })
}
