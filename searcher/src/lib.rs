//! Generalized graph search algorithms over state spaces.
//!
//! To use these search algorithms, implement the trait [Problem],
//! which describes where a search starts, how states are expanded,
//! and which states are goals. Each search returns the sequence of
//! actions which leads from the start to a goal, or `None` when no
//! goal can be reached.
//!
//! ```
//! # use searcher::Problem;
//! struct Countdown(usize);
//!
//! impl Problem for Countdown {
//!     type State = u32;
//!     type Action = &'static str;
//!     type Cost = u32;
//!
//!     fn start_state(&self) -> u32 { 10 }
//!     fn is_goal(&self, state: &u32) -> bool { *state == 0 }
//!     fn expand(&mut self, state: &u32) -> Vec<(u32, &'static str, u32)> {
//!         self.0 += 1;
//!         let mut next = Vec::new();
//!         if *state >= 3 { next.push((state - 3, "minus three", 1)); }
//!         if *state >= 1 { next.push((state - 1, "minus one", 1)); }
//!         next
//!     }
//!     fn path_cost(&self, actions: &[&'static str]) -> u32 { actions.len() as u32 }
//!     fn nodes_expanded(&self) -> usize { self.0 }
//! }
//!
//! let mut problem = Countdown(0);
//! let solution = searcher::bfs(&mut problem).unwrap();
//! assert_eq!(solution.len(), 4);
//! ```

pub mod algorithm;
mod errors;
pub mod frontier;
pub mod heuristic;
mod node;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use heuristic::{Heuristic, Max, NullHeuristic};
pub use node::{Ancestors, Node, NodeRef};
pub use traits::Cost;
pub use traits::Problem;

pub use algorithm::astar::{self, astar};
pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::ucs::{self, ucs};
pub use algorithm::SearchOptions;
pub use algorithm::Strategy;
