use std::fmt::Debug;
use std::hash::Hash;

use num::Zero;

/// Numeric type used to accumulate path costs.
///
/// Anything which is totally ordered, copyable and has an additive
/// zero will do. Step costs are assumed to be non-negative.
pub trait Cost: Debug + Copy + Ord + Zero {}

impl<T> Cost for T where T: Debug + Copy + Ord + Zero {}

/// Provides the interface a search algorithm needs to explore
/// a state space.
///
/// States are compared by value: two states are the same state
/// when they are equal, and they must hash consistently with that
/// equality since the search keeps a set of explored states.
pub trait Problem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone;
    type Cost: Cost;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Is this state a goal?
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Every legal single step out of `state`, as
    /// `(next_state, action, step_cost)`.
    ///
    /// The order is up to the implementation, but it must be the
    /// same every time the same state is expanded, or searches
    /// stop being reproducible. Each call counts as one expansion.
    fn expand(&mut self, state: &Self::State) -> Vec<(Self::State, Self::Action, Self::Cost)>;

    /// Total cost of following a sequence of actions from the start.
    fn path_cost(&self, actions: &[Self::Action]) -> Self::Cost;

    /// How many times `expand` has been called on this problem.
    fn nodes_expanded(&self) -> usize;
}
