use std::fmt;
use std::str::FromStr;

use super::{astar, basic, ucs, SearchOptions};
use crate::errors::{Result, SearchError};
use crate::heuristic::Heuristic;
use crate::traits::Problem;

const STRATEGIES: [Strategy; 4] = [
    Strategy::DepthFirst,
    Strategy::BreadthFirst,
    Strategy::UniformCost,
    Strategy::AStar,
];

/// Selects one of the search algorithms by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl Strategy {
    /// Every strategy, uninformed ones first.
    pub fn all() -> impl Iterator<Item = Self> {
        STRATEGIES.iter().cloned()
    }

    /// Short name, as accepted by [FromStr].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::AStar => "astar",
        }
    }

    /// Does this strategy make use of a heuristic?
    pub fn is_informed(&self) -> bool {
        matches!(self, Strategy::AStar)
    }

    /// Run the selected search with the given options.
    ///
    /// The heuristic is ignored by the uninformed strategies.
    pub fn run<P, H>(
        &self,
        problem: &mut P,
        heuristic: H,
        options: SearchOptions,
    ) -> Result<Option<Vec<P::Action>>>
    where
        P: Problem,
        H: Heuristic<P>,
    {
        match self {
            Strategy::DepthFirst => basic::dfs::build(problem).with_options(options).run(),
            Strategy::BreadthFirst => basic::bfs::build(problem).with_options(options).run(),
            Strategy::UniformCost => ucs::build(problem).with_options(options).run(),
            Strategy::AStar => astar::build(problem, heuristic)
                .with_options(options)
                .run(),
        }
    }

    /// Run the selected search to completion.
    pub fn solve<P, H>(&self, problem: &mut P, heuristic: H) -> Option<Vec<P::Action>>
    where
        P: Problem,
        H: Heuristic<P>,
    {
        match self {
            Strategy::DepthFirst => basic::dfs(problem),
            Strategy::BreadthFirst => basic::bfs(problem),
            Strategy::UniformCost => ucs::ucs(problem),
            Strategy::AStar => astar::astar(problem, heuristic),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Strategy::all()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| SearchError::UnknownStrategy(s.to_string()))
    }
}
