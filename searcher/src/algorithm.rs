//! Provides the building blocks for search algorithms

use std::collections::HashSet;
use std::default::Default;
use std::rc::Rc;

use tracing::debug;

use crate::errors::{Result, SearchError};
use crate::node::{Node, NodeRef};
use crate::traits::Problem;

pub mod astar;
pub mod basic;
mod statistics;
mod strategy;
pub mod ucs;

use statistics::SearchStatistics;
pub use strategy::Strategy;

/// Trait used to implement the frontier of a search: the nodes
/// which have been generated but not yet checked.
///
/// The order in which nodes come back out is what makes each
/// algorithm behave the way it does.
pub trait SearchQueue<P>
where
    P: Problem,
{
    /// Add a node. The problem is available to queues which need it
    /// to rank nodes.
    fn push(&mut self, node: NodeRef<P>, problem: &P);

    fn pop(&mut self) -> Option<NodeRef<P>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Options which tune how a search runs, without changing what it finds.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Log progress every this many nodes.
    pub verbose: Option<usize>,

    /// Give up with an error after checking this many nodes.
    pub limit: Option<usize>,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// Graph search over a [Problem], using a generic queue (Q)
/// to provide a single foundation for every search algorithm.
///
/// Goals are recognised when a node leaves the queue, not when it
/// enters it. Several nodes for the same state may wait in the queue
/// at once; only the first one out is expanded, and the rest are
/// dropped when they surface. For cost-ordered queues this is what
/// makes the first goal found the cheapest one.
#[derive(Debug)]
pub struct SearchAlgorithm<'p, P, Q>
where
    P: Problem,
    Q: SearchQueue<P>,
{
    problem: &'p mut P,
    queue: Q,
    explored: HashSet<P::State>,
    counter: Option<StepLimit>,
    statistics: SearchStatistics,
}

impl<'p, P, Q> SearchAlgorithm<'p, P, Q>
where
    P: Problem,
    Q: SearchQueue<P>,
{
    pub(crate) fn new(problem: &'p mut P, mut queue: Q) -> Self {
        let root = Rc::new(Node::root(problem.start_state()));
        queue.push(root, problem);

        SearchAlgorithm {
            problem,
            queue,
            explored: HashSet::new(),
            counter: None,
            statistics: SearchStatistics::default(),
        }
    }

    /// Apply search options.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.counter = options.limit.map(StepLimit::new);
        self.statistics = SearchStatistics::new(options.verbose);
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many nodes have been checked,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.counter = Some(StepLimit::new(limit))
    }

    /// Run the search to completion.
    ///
    /// Returns the actions leading to the first goal found, `None` when
    /// every reachable state was explored without finding a goal, or an
    /// error if the step limit ran out first.
    pub fn run(mut self) -> Result<Option<Vec<P::Action>>> {
        while let Some(node) = self.queue.pop() {
            if let Some(counter) = self.counter.as_mut() {
                if let Err(error) = counter.increment() {
                    self.statistics.finish("step limit");
                    return Err(error);
                }
            }
            self.statistics.popped(self.queue.len());

            if self.problem.is_goal(node.state()) {
                debug!(depth = node.depth(), cost = ?node.cost(), "found goal");
                self.statistics.finish("solved");
                return Ok(Some(node.solution()));
            }

            if self.explored.insert(node.state().clone()) {
                self.expand(&node);
            }
        }

        self.statistics.finish("exhausted");
        Ok(None)
    }

    /// Run the search to completion, ignoring any step limit.
    pub fn exhaust(mut self) -> Option<Vec<P::Action>> {
        self.counter = None;
        // Without a step limit the search can come up empty, but never fail.
        self.run().unwrap_or(None)
    }

    fn expand(&mut self, node: &NodeRef<P>) {
        let successors = self.problem.expand(node.state());
        self.statistics.expanded(successors.len());

        for (state, action, step) in successors {
            let child = Node::child(node, state, action, node.cost() + step);
            self.queue.push(Rc::new(child), &*self.problem);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::helpers::{logging, Graph};

    #[test]
    fn step_limit() {
        logging();
        let mut graph = Graph::new('A')
            .link('A', 'B', 1)
            .link('B', 'C', 1)
            .link('C', 'D', 1)
            .goal('D');

        let mut search = basic::bfs::build(&mut graph);
        search.set_limit(2);
        assert!(matches!(
            search.run(),
            Err(SearchError::StepLimitExhausted(2))
        ));

        let options = SearchOptions {
            limit: Some(2),
            ..SearchOptions::default()
        };
        let search = basic::bfs::build(&mut graph).with_options(options);
        assert_eq!(search.exhaust(), Some(vec!['B', 'C', 'D']));
    }

    #[test]
    fn generous_limit() {
        let mut graph = Graph::new('A').link('A', 'B', 1).goal('B');
        let options = SearchOptions {
            limit: Some(2),
            verbose: Some(1),
        };

        let result = basic::dfs::build(&mut graph).with_options(options).run();
        assert_eq!(result.unwrap(), Some(vec!['B']));
    }

    #[test]
    fn stale_duplicates_are_skipped() {
        // 'C' is queued twice, once from each of 'A' and 'B', but
        // only expanded once.
        let mut graph = Graph::new('S')
            .edge('S', 'A', 1)
            .edge('S', 'B', 1)
            .edge('A', 'C', 1)
            .edge('B', 'C', 1)
            .edge('C', 'D', 1);

        let search = basic::bfs::build(&mut graph);
        assert_eq!(search.exhaust(), None);
        assert_eq!(graph.nodes_expanded(), 5);
    }
}
