//! Uniform cost search

use std::default::Default;

use crate::algorithm::{SearchAlgorithm, SearchQueue};
use crate::frontier::PriorityQueue;
use crate::node::NodeRef;
use crate::traits::Problem;

/// A priority queue to always search the next cheapest path
/// by cost from the start.
#[derive(Debug)]
pub struct CostQueue<P>
where
    P: Problem,
{
    queue: PriorityQueue<NodeRef<P>, P::Cost>,
}

impl<P> Default for CostQueue<P>
where
    P: Problem,
{
    fn default() -> Self {
        CostQueue {
            queue: PriorityQueue::new(),
        }
    }
}

impl<P> SearchQueue<P> for CostQueue<P>
where
    P: Problem,
{
    fn push(&mut self, node: NodeRef<P>, _problem: &P) {
        let priority = node.cost();
        self.queue.push(node, priority);
    }

    fn pop(&mut self) -> Option<NodeRef<P>> {
        self.queue.pop()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Search algorithm which expands nodes in order of path cost.
pub type UniformCostSearcher<'p, P> = SearchAlgorithm<'p, P, CostQueue<P>>;

/// Build a uniform cost searcher
pub fn build<P>(problem: &mut P) -> UniformCostSearcher<'_, P>
where
    P: Problem,
{
    SearchAlgorithm::new(problem, CostQueue::default())
}

/// Perform a uniform cost search.
///
/// Uniform cost search behaves like a breadth first search, but always
/// continues from the cheapest path found so far, even when paths end up
/// with varying lengths. With non-negative step costs the first goal it
/// reaches is a cheapest one. Equal cost paths are taken in the order
/// they were generated.
pub fn ucs<P>(problem: &mut P) -> Option<Vec<P::Action>>
where
    P: Problem,
{
    build(problem).exhaust()
}
