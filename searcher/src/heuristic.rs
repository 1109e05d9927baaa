//! Heuristics estimate the remaining cost from a state to a goal.
//!
//! A* only returns optimal solutions when its heuristic is
//! admissible: it must never overestimate the true remaining cost,
//! must never be negative, and must be zero at goal states.
//! None of this is checked at runtime outside of debug builds.

use std::cmp;

use num::Zero;

use crate::traits::Problem;

/// An estimate of the cost remaining from a state to the nearest goal.
pub trait Heuristic<P>
where
    P: Problem,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// Always estimates zero. A* with this heuristic is uniform cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: Problem,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::zero()
    }
}

/// The larger of two estimates.
///
/// The maximum of two admissible heuristics is admissible, and at
/// least as informed as either one alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max<A, B>(pub A, pub B);

impl<P, A, B> Heuristic<P> for Max<A, B>
where
    P: Problem,
    A: Heuristic<P>,
    B: Heuristic<P>,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        cmp::max(
            self.0.estimate(state, problem),
            self.1.estimate(state, problem),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::helpers::Graph;

    fn labelled(state: &char, _problem: &Graph) -> u32 {
        match state {
            'A' => 3,
            'B' => 1,
            _ => 0,
        }
    }

    fn flat(_state: &char, _problem: &Graph) -> u32 {
        2
    }

    #[test]
    fn functions_are_heuristics() {
        let graph = Graph::new('A');
        assert_eq!(labelled.estimate(&'A', &graph), 3);
        assert_eq!(NullHeuristic.estimate(&'A', &graph), 0);
    }

    #[test]
    fn max() {
        let graph = Graph::new('A');
        let h = Max(labelled, flat);
        assert_eq!(h.estimate(&'A', &graph), 3);
        assert_eq!(h.estimate(&'B', &graph), 2);
        assert_eq!(Max(NullHeuristic, NullHeuristic).estimate(&'B', &graph), 0u32);
    }
}
