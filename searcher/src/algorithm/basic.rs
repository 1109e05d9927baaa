pub use bfs::bfs;
pub use dfs::dfs;

pub mod bfs {
    use std::default::Default;

    use crate::algorithm::{SearchAlgorithm, SearchQueue};
    use crate::frontier::Queue;
    use crate::node::NodeRef;
    use crate::traits::Problem;

    #[derive(Debug)]
    pub struct BreadthQueue<P>
    where
        P: Problem,
    {
        queue: Queue<NodeRef<P>>,
    }

    impl<P> SearchQueue<P> for BreadthQueue<P>
    where
        P: Problem,
    {
        fn push(&mut self, node: NodeRef<P>, _problem: &P) {
            self.queue.push(node);
        }

        fn pop(&mut self) -> Option<NodeRef<P>> {
            self.queue.pop()
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<P> Default for BreadthQueue<P>
    where
        P: Problem,
    {
        fn default() -> Self {
            BreadthQueue {
                queue: Queue::new(),
            }
        }
    }

    pub type BreadthFirstSearcher<'p, P> = SearchAlgorithm<'p, P, BreadthQueue<P>>;

    pub fn build<P>(problem: &mut P) -> BreadthFirstSearcher<'_, P>
    where
        P: Problem,
    {
        SearchAlgorithm::new(problem, BreadthQueue::default())
    }

    /// Breadth-first search, which finds the solution with the fewest
    /// actions. Children are visited in the order [Problem::expand]
    /// returns them.
    pub fn bfs<P>(problem: &mut P) -> Option<Vec<P::Action>>
    where
        P: Problem,
    {
        build(problem).exhaust()
    }
}

pub mod dfs {
    use std::default::Default;

    use crate::algorithm::{SearchAlgorithm, SearchQueue};
    use crate::frontier::Stack;
    use crate::node::NodeRef;
    use crate::traits::Problem;

    #[derive(Debug)]
    pub struct DepthQueue<P>
    where
        P: Problem,
    {
        queue: Stack<NodeRef<P>>,
    }

    impl<P> Default for DepthQueue<P>
    where
        P: Problem,
    {
        fn default() -> Self {
            DepthQueue {
                queue: Stack::new(),
            }
        }
    }

    impl<P> SearchQueue<P> for DepthQueue<P>
    where
        P: Problem,
    {
        fn push(&mut self, node: NodeRef<P>, _problem: &P) {
            self.queue.push(node);
        }

        fn pop(&mut self) -> Option<NodeRef<P>> {
            self.queue.pop()
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    pub type DepthFirstSearcher<'p, P> = SearchAlgorithm<'p, P, DepthQueue<P>>;

    pub fn build<P>(problem: &mut P) -> DepthFirstSearcher<'_, P>
    where
        P: Problem,
    {
        SearchAlgorithm::new(problem, DepthQueue::default())
    }

    /// Depth-first search. The last child returned by [Problem::expand]
    /// is the first one explored.
    pub fn dfs<P>(problem: &mut P) -> Option<Vec<P::Action>>
    where
        P: Problem,
    {
        build(problem).exhaust()
    }
}
