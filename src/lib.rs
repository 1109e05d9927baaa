#![deny(clippy::all)]

//! Collect every medal in a maze, spending as few carrots as possible.
//!
//! A [Quest] is a [searcher::Problem]: any of the search strategies
//! can guide the mascot through the [Maze], and [solve] reports how
//! well it did.

use thiserror::Error;

use geometry::coord2d::{Direction, Point};
use searcher::SearchError;

pub mod heuristics;
mod maze;
mod quest;
mod solver;

pub use maze::Maze;
pub use quest::{CostTable, Medals, Quest, QuestState};
pub use solver::{solve, solve_with_options, Report};

#[derive(Debug, Error)]
pub enum QuestError {
    #[error("{0} is outside the maze")]
    OutOfBounds(Point),

    #[error("{0} is a wall")]
    Blocked(Point),

    #[error("Step {step} moves {direction} from {from} into a wall or off the maze")]
    IllegalMove {
        step: usize,
        direction: Direction,
        from: Point,
    },

    #[error("No heuristic named {0}")]
    UnknownHeuristic(String),

    #[error("Unexpected character in maze layout: {0:?}")]
    Layout(char),

    #[error("Maze layout has no starting position")]
    MissingStart,

    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, QuestError>;
