use std::fmt;

use num::Zero;

use super::SearchAlgorithm;
use crate::algorithm::SearchQueue;
use crate::frontier::PriorityQueue;
use crate::heuristic::Heuristic;
use crate::node::NodeRef;
use crate::traits::Problem;

/// Orders nodes by their cost so far plus the heuristic's
/// estimate of the cost remaining.
pub struct AStarQueue<P, H>
where
    P: Problem,
{
    queue: PriorityQueue<NodeRef<P>, P::Cost>,
    heuristic: H,
}

impl<P, H> AStarQueue<P, H>
where
    P: Problem,
    H: Heuristic<P>,
{
    pub fn new(heuristic: H) -> Self {
        AStarQueue {
            queue: PriorityQueue::new(),
            heuristic,
        }
    }
}

impl<P, H> fmt::Debug for AStarQueue<P, H>
where
    P: Problem,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AStarQueue")
            .field("len", &self.queue.len())
            .finish()
    }
}

impl<P, H> SearchQueue<P> for AStarQueue<P, H>
where
    P: Problem,
    H: Heuristic<P>,
{
    fn push(&mut self, node: NodeRef<P>, problem: &P) {
        let estimate = self.heuristic.estimate(node.state(), problem);
        debug_assert!(
            estimate >= P::Cost::zero(),
            "heuristic is negative at {:?}",
            node.state()
        );
        debug_assert!(
            estimate.is_zero() || !problem.is_goal(node.state()),
            "heuristic is not zero at goal {:?}",
            node.state()
        );

        let priority = node.cost() + estimate;
        self.queue.push(node, priority);
    }

    fn pop(&mut self) -> Option<NodeRef<P>> {
        self.queue.pop()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type AStarSearcher<'p, P, H> = SearchAlgorithm<'p, P, AStarQueue<P, H>>;

pub fn build<P, H>(problem: &mut P, heuristic: H) -> AStarSearcher<'_, P, H>
where
    P: Problem,
    H: Heuristic<P>,
{
    SearchAlgorithm::new(problem, AStarQueue::new(heuristic))
}

/// A* search: uniform cost search guided by a heuristic.
///
/// The solution is a cheapest one as long as the heuristic is
/// admissible. With [NullHeuristic](crate::NullHeuristic) this expands
/// exactly the same nodes, in the same order, as [ucs](crate::ucs()).
pub fn astar<P, H>(problem: &mut P, heuristic: H) -> Option<Vec<P::Action>>
where
    P: Problem,
    H: Heuristic<P>,
{
    build(problem, heuristic).exhaust()
}
